//! Debt payment arithmetic.
//!
//! Pure functions over a debt's strategy and current balance — no mutable
//! state lives here, the engine (`simulation`) owns the running balance and
//! calls into this module once per month, the same separation the teacher
//! crate draws between its stateless `taxes` module and the stateful
//! simulation loop that calls it.

use crate::model::debt::{Debt, DebtWarning, RepaymentStrategy};

/// The outcome of computing one month's payment on a debt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payment {
    pub principal: f64,
    pub interest: f64,
    pub total: f64,
}

/// Monthly interest on `balance` at `annual_rate_pct`. Never negative; never
/// compounded within a month.
#[must_use]
pub fn monthly_interest(balance: f64, annual_rate_pct: f64) -> f64 {
    (balance * (annual_rate_pct / 100.0) / 12.0).max(0.0)
}

/// Compute one month's payment on `debt` given its current balance.
///
/// `months_remaining` is `Some(1)` on the final month of the debt's term
/// (triggering a balloon payment for interest-only debts), `Some(n > 1)` for
/// an ordinary mid-term month with a known remaining term, and `None` when
/// there is no resolved end date.
#[must_use]
pub fn compute_debt_payment(debt: &Debt, current_balance: f64, months_remaining: Option<u32>) -> Payment {
    let interest = monthly_interest(current_balance, debt.annual_rate);

    match &debt.strategy {
        RepaymentStrategy::Linear { monthly_principal_payment } => {
            let principal = monthly_principal_payment.min(current_balance).max(0.0);
            Payment { principal, interest, total: principal + interest }
        }
        RepaymentStrategy::Annuity { monthly_payment } => {
            let principal = (monthly_payment - interest).clamp(0.0, current_balance);
            Payment { principal, interest, total: *monthly_payment }
        }
        RepaymentStrategy::InterestOnly { final_balance } => {
            if months_remaining.is_some_and(|n| n <= 1) {
                let principal = (current_balance - final_balance).max(0.0);
                Payment { principal, interest, total: principal + interest }
            } else {
                Payment { principal: 0.0, interest, total: interest }
            }
        }
    }
}

/// Advance `balance` by calling the payment function `months_passed` times,
/// used to catch a past-dated debt up to the projection's first month before
/// the monthly loop begins. Interest-only debts leave the balance unchanged
/// during catch-up (no principal is ever paid before the term ends).
#[must_use]
pub fn catch_up_balance(debt: &Debt, months_passed: u32) -> f64 {
    if matches!(debt.strategy, RepaymentStrategy::InterestOnly { .. }) {
        return debt.amount;
    }

    let mut balance = debt.amount;
    for _ in 0..months_passed {
        if balance <= 0.0 {
            break;
        }
        let payment = compute_debt_payment(debt, balance, None);
        balance = (balance - payment.principal).max(0.0);
    }
    balance
}

/// Validate a debt's configuration, returning non-fatal advisory warnings.
/// Negative rates, non-positive payments, annuity payments that never
/// amortize, unbounded interest-only debts that never pay off, and
/// out-of-range final balances are all reported here rather than rejected.
#[must_use]
pub fn validate_debt(debt: &Debt) -> Vec<DebtWarning> {
    let mut warnings = Vec::new();

    if debt.annual_rate < 0.0 {
        warnings.push(DebtWarning::NegativeRate { debt_id: debt.id.clone() });
    }

    match &debt.strategy {
        RepaymentStrategy::Linear { monthly_principal_payment } => {
            if *monthly_principal_payment <= 0.0 {
                warnings.push(DebtWarning::NonPositivePayment { debt_id: debt.id.clone() });
            }
        }
        RepaymentStrategy::Annuity { monthly_payment } => {
            if *monthly_payment <= 0.0 {
                warnings.push(DebtWarning::NonPositivePayment { debt_id: debt.id.clone() });
            } else {
                let initial_interest = monthly_interest(debt.amount, debt.annual_rate);
                if *monthly_payment <= initial_interest {
                    warnings.push(DebtWarning::AnnuityNeverAmortizes { debt_id: debt.id.clone() });
                }
            }
        }
        RepaymentStrategy::InterestOnly { final_balance } => {
            if *final_balance < 0.0 || *final_balance > debt.amount {
                warnings.push(DebtWarning::FinalBalanceOutOfRange { debt_id: debt.id.clone() });
            }
            if debt.end_date.is_none() && *final_balance < debt.amount {
                warnings.push(DebtWarning::InterestOnlyNeverPaidOff { debt_id: debt.id.clone() });
            }
        }
    }

    warnings
}
