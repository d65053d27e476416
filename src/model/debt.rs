//! Debt definitions.
//!
//! A single debt record with an enum for repayment strategy, validated at
//! construction to carry exactly one strategy payload — cheaper and clearer
//! than one struct per strategy, the same call the teacher crate makes for
//! `AccountFlavor`.

use serde::{Deserialize, Serialize};

use super::date_spec::DateSpec;
use super::ids::DebtId;
use crate::error::{ProfileError, Result};

/// The three repayment variants a debt can use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum RepaymentStrategy {
    /// Fixed monthly principal payment; the total payment declines as the
    /// balance (and therefore the interest portion) falls.
    Linear { monthly_principal_payment: f64 },

    /// Fixed total monthly payment; the principal portion grows as the
    /// interest portion falls.
    Annuity { monthly_payment: f64 },

    /// No principal paid until an end-of-term balloon payment brings the
    /// balance to `final_balance`.
    InterestOnly { final_balance: f64 },
}

/// A debt's immutable specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    pub name: String,
    pub amount: f64,
    pub annual_rate: f64,
    pub start_date: Option<DateSpec>,
    pub repayment_start_date: Option<DateSpec>,
    pub end_date: Option<DateSpec>,
    pub strategy: RepaymentStrategy,
}

impl Debt {
    /// Construct a debt, rejecting a non-positive amount before the profile
    /// reaches the engine. The "exactly one strategy field" rule is enforced
    /// by `RepaymentStrategy` being an enum rather than optional fields, so
    /// there is nothing left to validate for it here.
    pub fn new(id: DebtId, name: impl Into<String>, amount: f64, annual_rate: f64, strategy: RepaymentStrategy) -> Result<Self> {
        if amount <= 0.0 {
            return Err(ProfileError::DebtNonPositiveAmount { debt_id: id });
        }
        Ok(Self {
            id,
            name: name.into(),
            amount,
            annual_rate,
            start_date: None,
            repayment_start_date: None,
            end_date: None,
            strategy,
        })
    }
}

/// A non-fatal advisory about a debt's configuration, returned alongside a
/// projection rather than rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum DebtWarning {
    NegativeRate { debt_id: DebtId },
    NonPositivePayment { debt_id: DebtId },
    AnnuityNeverAmortizes { debt_id: DebtId },
    InterestOnlyNeverPaidOff { debt_id: DebtId },
    FinalBalanceOutOfRange { debt_id: DebtId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_amount() {
        let err = Debt::new(
            DebtId::from("d1"),
            "Loan",
            0.0,
            5.0,
            RepaymentStrategy::Linear { monthly_principal_payment: 100.0 },
        )
        .unwrap_err();
        assert_eq!(err, ProfileError::DebtNonPositiveAmount { debt_id: DebtId::from("d1") });
    }

    #[test]
    fn accepts_positive_amount() {
        let debt = Debt::new(
            DebtId::from("d1"),
            "Loan",
            1_000.0,
            5.0,
            RepaymentStrategy::Linear { monthly_principal_payment: 100.0 },
        )
        .unwrap();
        assert_eq!(debt.amount, 1_000.0);
    }
}
