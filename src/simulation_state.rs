//! Mutable engine working state.
//!
//! The engine resolves every date field once at initialization and tracks a
//! small amount of mutable per-entity state across the monthly loop (a fixed
//! asset's running balance, a debt's running balance and whether it has
//! already hit its terminal payment). This mirrors the split the teacher
//! crate draws between its immutable `SimulationConfig` and its mutable
//! `SimulationState` that the monthly loop actually advances.

use crate::debt::catch_up_balance;
use crate::model::accounts::Account;
use crate::model::debt::Debt;
use crate::model::ids::{AccountId, DebtId};
use crate::month::Month;
use crate::resolve::resolve_date;
use crate::model::date_spec::LifeEvent;

/// A fixed asset's mutable per-month state.
#[derive(Debug, Clone)]
pub struct FixedAssetState {
    pub id: AccountId,
    pub balance: f64,
    pub annual_rate: f64,
    pub liquidation_month: Option<Month>,
}

/// A debt's mutable per-month state.
#[derive(Debug, Clone)]
pub struct DebtState {
    pub id: DebtId,
    pub current_balance: f64,
    pub start_month: Option<Month>,
    pub effective_repayment_start: Option<Month>,
    pub end_month: Option<Month>,
    /// Set once the terminal (or balloon) payment has been applied; no
    /// further payments are computed afterward and the balance stays fixed.
    pub settled: bool,
}

impl DebtState {
    /// Whether the debt exists at month `m` (`start <= m <= end`, open-ended
    /// when a bound is absent).
    #[must_use]
    pub fn exists_at(&self, m: Month) -> bool {
        let after_start = self.start_month.map_or(true, |s| s <= m);
        let before_end = self.end_month.map_or(true, |e| m <= e);
        after_start && before_end
    }

    /// Whether the debt is in repayment at month `m`.
    #[must_use]
    pub fn in_repayment_at(&self, m: Month) -> bool {
        self.exists_at(m) && self.effective_repayment_start.map_or(true, |r| m >= r)
    }
}

/// Resolved state built once at the start of a projection: every date field
/// pre-resolved, the pooled liquid balance, per-fixed-asset and per-debt
/// running state.
pub struct EngineState {
    pub liquid: f64,
    pub fixed_assets: Vec<FixedAssetState>,
    pub debts: Vec<DebtState>,
}

impl EngineState {
    /// Build the initial engine state from a profile's accounts and debts,
    /// resolving every date and catching up any past-dated debt.
    pub fn initialize(
        accounts: &[Account],
        debts: &[Debt],
        birth_month: Month,
        life_events: &[LifeEvent],
        projection_start: Month,
    ) -> Self {
        let mut liquid = 0.0;
        let mut fixed_assets = Vec::new();

        for account in accounts {
            match account {
                Account::LiquidAsset(a) => liquid += a.amount,
                Account::FixedAsset(a) => {
                    let liquidation_month = resolve_date(a.liquidation_date.as_ref(), birth_month, life_events);
                    fixed_assets.push(FixedAssetState {
                        id: a.id.clone(),
                        balance: a.amount,
                        annual_rate: a.annual_rate,
                        liquidation_month,
                    });
                }
            }
        }

        let mut debt_states = Vec::with_capacity(debts.len());
        for debt in debts {
            let start_month = resolve_date(debt.start_date.as_ref(), birth_month, life_events);
            let repayment_start = resolve_date(debt.repayment_start_date.as_ref(), birth_month, life_events);
            let end_month = resolve_date(debt.end_date.as_ref(), birth_month, life_events);
            let effective_repayment_start = repayment_start.or(start_month);

            let catch_up_from = effective_repayment_start.or(start_month);
            let current_balance = match catch_up_from {
                Some(from) if from < projection_start => {
                    let months_passed = from.months_until(projection_start).max(0) as u32;
                    catch_up_balance(debt, months_passed)
                }
                _ => debt.amount,
            };

            debt_states.push(DebtState {
                id: debt.id.clone(),
                current_balance,
                start_month,
                effective_repayment_start,
                end_month,
                settled: current_balance <= 0.0,
            });
        }

        EngineState { liquid, fixed_assets, debts: debt_states }
    }

    #[must_use]
    pub fn fixed_total(&self) -> f64 {
        self.fixed_assets.iter().map(|f| f.balance).sum()
    }

    #[must_use]
    pub fn total_debt(&self) -> f64 {
        self.debts.iter().map(|d| d.current_balance).sum()
    }
}
