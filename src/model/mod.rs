pub mod accounts;
pub mod cash_flow;
pub mod date_spec;
pub mod debt;
pub mod ids;
pub mod profile;
pub mod results;
pub mod tax;

pub use accounts::{Account, FixedAsset, LiquidAsset};
pub use cash_flow::{CashFlow, CashFlowType, Frequency};
pub use date_spec::{DateSpec, LifeEvent};
pub use debt::{Debt, DebtWarning, RepaymentStrategy};
pub use ids::{AccountId, CashFlowId, DebtId, EventId, TaxOptionId};
pub use profile::{Profile, TaxCountry};
pub use results::{AnnualSummary, Diagnostic, MonthlyProjection, ProjectionResult};
pub use tax::{TaxBracket, TaxKind, TaxOption, TaxSchedule};
