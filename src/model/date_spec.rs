//! Date specifications and life events.
//!
//! A `DateSpec` is how every temporal field in a profile (account
//! liquidation dates, cash-flow start/end dates, debt dates) is expressed: as
//! an absolute month, an age of the profile owner, or a reference to a named
//! life event. This is a tagged variant rather than three optional fields on
//! one struct, the same shape the teacher crate gives its own `EventTrigger`
//! enum — "at most one of these is active" is a sum type, not a handful of
//! `Option` fields a caller could set inconsistently.

use serde::{Deserialize, Serialize};

use super::ids::EventId;
use crate::month::Month;

/// How a point in time is specified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DateSpec {
    /// A concrete, already-resolved month.
    Absolute { month: Month },

    /// An age of the profile owner, in years (fractional ages are accepted
    /// and truncated: `floor(years * 12)` months). Must lie in `[0, 120]`.
    Age { years: f64 },

    /// A reference to a named life event; resolves by following that
    /// event's own date, recursively.
    LifeEvent { event_id: EventId },
}

/// A named temporal anchor with its own `DateSpec`, used to give multiple
/// financial items a common, editable reference date ("retirement",
/// "sabbatical") without each one re-entering an absolute month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: EventId,
    pub name: String,
    pub date: Option<DateSpec>,
}
