//! The profile: a user's full financial picture for one projection.

use serde::{Deserialize, Serialize};

use super::accounts::Account;
use super::cash_flow::CashFlow;
use super::date_spec::LifeEvent;
use super::debt::Debt;
use super::tax::TaxOption;
use crate::month::Month;

/// A tax jurisdiction: the named set of tax options available to a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxCountry {
    pub country_code: String,
    pub country_name: String,
    pub income_taxes: Vec<TaxOption>,
    pub wealth_taxes: Vec<TaxOption>,
    pub capital_gains_taxes: Vec<TaxOption>,
}

/// A user's complete financial profile, immutable over a single
/// `calculate_projections` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub birth_month: Month,
    pub liquid_rate_pct: f64,
    pub inflation_rate_pct: f64,
    pub tax_country: Option<TaxCountry>,
    pub accounts: Vec<Account>,
    pub cash_flows: Vec<CashFlow>,
    pub debts: Vec<Debt>,
    pub life_events: Vec<LifeEvent>,
}
