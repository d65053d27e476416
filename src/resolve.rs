//! Date-spec resolver.
//!
//! Resolves an optional `DateSpec` to a concrete `Month`, following
//! `LifeEvent` references iteratively with an explicit visited set instead of
//! recursion, so a reference cycle returns `None` in bounded time instead of
//! overflowing the stack. This is the same shape as the teacher crate's own
//! rule that unbounded references must never hang or crash the engine — here
//! applied to date resolution instead of event triggers.

use rustc_hash::FxHashSet;

use crate::model::date_spec::{DateSpec, LifeEvent};
use crate::model::ids::EventId;
use crate::month::Month;

const MIN_AGE_YEARS: f64 = 0.0;
const MAX_AGE_YEARS: f64 = 120.0;

/// Resolve a `DateSpec` to a concrete `Month`.
///
/// Returns `None` in exactly four cases: `spec` is absent, an `Age` falls
/// outside `[0, 120]`, a `LifeEvent` references a missing id or an event
/// whose own date is absent, or a resolution path visits the same event id
/// twice.
#[must_use]
pub fn resolve_date(
    spec: Option<&DateSpec>,
    birth_month: Month,
    life_events: &[LifeEvent],
) -> Option<Month> {
    let mut current = spec?;
    let mut visited: FxHashSet<EventId> = FxHashSet::default();

    loop {
        match current {
            DateSpec::Absolute { month } => return Some(*month),
            DateSpec::Age { years } => {
                let years = *years;
                if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&years) {
                    return None;
                }
                return Some(birth_month.add_months((years * 12.0).floor() as i32));
            }
            DateSpec::LifeEvent { event_id } => {
                if !visited.insert(event_id.clone()) {
                    return None;
                }
                let event = life_events.iter().find(|e| &e.id == event_id)?;
                current = event.date.as_ref()?;
            }
        }
    }
}
