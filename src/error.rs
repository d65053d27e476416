//! Construction errors.
//!
//! These are the hard failures surfaced *before* the engine runs — an
//! invalid profile is rejected at the boundary rather than fed into the
//! simulation loop, which never fails once it starts (see `simulation`).

use crate::model::ids::{AccountId, CashFlowId, DebtId};

pub type Result<T> = std::result::Result<T, ProfileError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    NegativeAmount { account_id: AccountId },
    EmptyName { account_id: AccountId },
    OneTimeCashFlowMissingStartDate { cash_flow_id: CashFlowId },
    DebtNonPositiveAmount { debt_id: DebtId },
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::NegativeAmount { account_id } => {
                write!(f, "account {:?} has a negative amount", account_id)
            }
            ProfileError::EmptyName { account_id } => {
                write!(f, "account {:?} has an empty name", account_id)
            }
            ProfileError::OneTimeCashFlowMissingStartDate { cash_flow_id } => write!(
                f,
                "one-time cash flow {:?} is missing a start date",
                cash_flow_id
            ),
            ProfileError::DebtNonPositiveAmount { debt_id } => {
                write!(f, "debt {:?} has a non-positive amount", debt_id)
            }
        }
    }
}

impl std::error::Error for ProfileError {}
