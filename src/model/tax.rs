//! Tax option definitions.
//!
//! Kept as separate `FlatRate` / `Brackets` variants rather than a struct
//! with two nullable fields, so "exactly one of rate or brackets" is a
//! compile-time guarantee rather than a runtime check — the same choice the
//! teacher crate makes for `AccountFlavor` and `EventTrigger`.

use serde::{Deserialize, Serialize};

use super::ids::TaxOptionId;

/// Which cash-flow or account concern a tax option applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxKind {
    Income,
    Wealth,
    CapitalGains,
}

/// A single marginal bracket. `threshold` is a *lower* bound: `rate_pct`
/// applies to the portion of the taxable amount in `[threshold, next)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub threshold: f64,
    pub rate_pct: f64,
}

/// The rate schedule of a tax option: a flat percentage, or a sequence of
/// marginal brackets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TaxSchedule {
    FlatRate { rate_pct: f64 },
    Brackets { brackets: Vec<TaxBracket> },
}

/// A named rule that maps a gross amount to a tax amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxOption {
    pub id: TaxOptionId,
    pub name: String,
    pub kind: TaxKind,
    pub is_default: bool,
    pub exemption_threshold: Option<f64>,
    pub schedule: TaxSchedule,
}
