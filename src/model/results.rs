//! Projection results: monthly snapshots and their annual aggregation.

use serde::{Deserialize, Serialize};

use super::ids::DebtId;
use crate::month::Month;

/// One month's snapshot of the balance sheet and cash statement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    pub month: Month,
    pub age_years: u8,
    pub liquid: f64,
    pub fixed_total: f64,
    pub total_debt: f64,
    pub net_worth: f64,
    pub income: f64,
    pub expenses: f64,
    pub debt_interest_paid: f64,
    pub debt_principal_paid: f64,
}

/// One calendar year's aggregation of its monthly snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub year: i32,
    pub age_years: u8,
    pub starting_liquid: f64,
    pub ending_liquid: f64,
    pub starting_fixed_total: f64,
    pub ending_fixed_total: f64,
    pub starting_total_debt: f64,
    pub ending_total_debt: f64,
    pub starting_net_worth: f64,
    pub ending_net_worth: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_debt_interest_paid: f64,
    pub total_debt_principal_paid: f64,
}

/// A non-fatal note about silent degradation inside the engine (an
/// unresolvable date, an unknown or kind-mismatched tax id). Purely
/// informational: nothing in this list affects the numeric result.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    UnresolvableDate { context: String },
    UnknownTaxId { tax_id: String },
    TaxIdKindMismatch { tax_id: String },
}

/// The complete output of `calculate_projections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub monthly: Vec<MonthlyProjection>,
    pub annual: Vec<AnnualSummary>,
    pub calculation_time_ms: f64,
    #[serde(skip)]
    pub debt_warnings: Vec<super::debt::DebtWarning>,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

impl ProjectionResult {
    /// Net worth at the final projected month (age 100), or `None` if the
    /// result has no months (should not happen for any valid profile).
    #[must_use]
    pub fn final_net_worth(&self) -> Option<f64> {
        self.monthly.last().map(|m| m.net_worth)
    }

    /// The annual summary for a specific calendar year, if the projection
    /// spans it.
    #[must_use]
    pub fn annual_summary_for_year(&self, year: i32) -> Option<&AnnualSummary> {
        self.annual.iter().find(|a| a.year == year)
    }
}
