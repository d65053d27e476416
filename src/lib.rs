//! Long-horizon personal-finance projection engine
//!
//! This crate projects a single user's balance sheet and cash statement
//! month by month, from the present to age 100, given:
//! - Liquid and fixed assets, each with its own growth and liquidation rules
//! - Recurring and one-time cash flows, with inflation indexing
//! - Debts under linear, annuity, or interest-only repayment
//! - A tax jurisdiction of flat-rate or progressive-bracket options
//! - Life events that other dates can reference by name
//!
//! # Example
//!
//! ```ignore
//! use horizon_core::{calculate_projections, Profile};
//! use horizon_core::month::{FixedClock, Month};
//!
//! let profile: Profile = /* ... */;
//! let clock = FixedClock(Month::new(2025, 0));
//! let result = calculate_projections(&profile, &clock);
//! println!("net worth at 100: {:?}", result.final_net_worth());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod debt;
pub mod error;
pub mod month;
pub mod resolve;
pub mod simulation;
pub mod simulation_state;
pub mod taxes;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{ProfileError, Result};
pub use model::{
    Account, AccountId, AnnualSummary, CashFlow, CashFlowId, CashFlowType, DateSpec, Debt,
    DebtId, DebtWarning, Diagnostic, EventId, FixedAsset, Frequency, LifeEvent, LiquidAsset,
    MonthlyProjection, Profile, ProjectionResult, RepaymentStrategy, TaxBracket, TaxCountry,
    TaxKind, TaxOption, TaxOptionId, TaxSchedule,
};
pub use month::{Clock, FixedClock, Month};
pub use resolve::resolve_date;
pub use simulation::calculate_projections;
pub use taxes::tax_on;
