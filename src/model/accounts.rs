//! Account definitions.
//!
//! Two account variants, not an inheritance chain: liquid assets are pooled
//! into a single running balance at engine start (individual identity is
//! lost for simulation purposes), while fixed assets are tracked
//! individually since each appreciates/depreciates at its own rate and
//! liquidates on its own schedule.

use serde::{Deserialize, Serialize};

use super::date_spec::DateSpec;
use super::ids::AccountId;
use crate::error::{ProfileError, Result};

/// A liquid account (cash, checking, brokerage cash) pooled with every other
/// liquid asset into one running balance at engine start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidAsset {
    pub id: AccountId,
    pub name: String,
    pub amount: f64,
    pub wealth_tax_id: Option<String>,
    pub capital_gains_tax_id: Option<String>,
}

impl LiquidAsset {
    /// Construct a liquid asset, rejecting a negative amount or empty name
    /// before the profile ever reaches the engine.
    pub fn new(id: AccountId, name: impl Into<String>, amount: f64) -> Result<Self> {
        let name = name.into();
        if amount < 0.0 {
            return Err(ProfileError::NegativeAmount { account_id: id });
        }
        if name.is_empty() {
            return Err(ProfileError::EmptyName { account_id: id });
        }
        Ok(Self {
            id,
            name,
            amount,
            wealth_tax_id: None,
            capital_gains_tax_id: None,
        })
    }
}

/// A fixed asset (real estate, a vehicle, a private business stake) tracked
/// individually: it appreciates or depreciates monthly at its own rate and is
/// liquidated into the liquid pool on or after its resolved date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedAsset {
    pub id: AccountId,
    pub name: String,
    pub amount: f64,
    /// Annual appreciation/depreciation rate, in percent (can be negative).
    pub annual_rate: f64,
    pub liquidation_date: Option<DateSpec>,
    pub wealth_tax_id: Option<String>,
    pub capital_gains_tax_id: Option<String>,
}

impl FixedAsset {
    /// Construct a fixed asset, rejecting a negative amount or empty name
    /// before the profile ever reaches the engine.
    pub fn new(id: AccountId, name: impl Into<String>, amount: f64, annual_rate: f64) -> Result<Self> {
        let name = name.into();
        if amount < 0.0 {
            return Err(ProfileError::NegativeAmount { account_id: id });
        }
        if name.is_empty() {
            return Err(ProfileError::EmptyName { account_id: id });
        }
        Ok(Self {
            id,
            name,
            amount,
            annual_rate,
            liquidation_date: None,
            wealth_tax_id: None,
            capital_gains_tax_id: None,
        })
    }
}

/// The polymorphic capital set of a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Account {
    LiquidAsset(LiquidAsset),
    FixedAsset(FixedAsset),
}

impl Account {
    #[must_use]
    pub fn id(&self) -> &AccountId {
        match self {
            Account::LiquidAsset(a) => &a.id,
            Account::FixedAsset(a) => &a.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liquid_asset_rejects_negative_amount() {
        let err = LiquidAsset::new(AccountId::from("a1"), "Checking", -1.0).unwrap_err();
        assert_eq!(err, ProfileError::NegativeAmount { account_id: AccountId::from("a1") });
    }

    #[test]
    fn liquid_asset_rejects_empty_name() {
        let err = LiquidAsset::new(AccountId::from("a1"), "", 100.0).unwrap_err();
        assert_eq!(err, ProfileError::EmptyName { account_id: AccountId::from("a1") });
    }

    #[test]
    fn fixed_asset_accepts_negative_rate() {
        // A negative annual_rate is valid (depreciation), only the amount and name are validated.
        let asset = FixedAsset::new(AccountId::from("car"), "Car", 20_000.0, -15.0).unwrap();
        assert_eq!(asset.annual_rate, -15.0);
    }
}
