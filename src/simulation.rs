//! The projection engine: the monthly stepping loop.
//!
//! `calculate_projections` pre-resolves every date field, seeds the initial
//! balances (including debt catch-up), then steps one month at a time in a
//! fixed order — liquid growth, fixed-asset growth/liquidation, debt
//! service, cash flows — emitting a snapshot per month. This is the same
//! "resolve everything once, then run a tight sequential loop over
//! pre-sized output" shape as the teacher crate's own `simulate_with_scratch`,
//! just without Monte Carlo iteration: this engine has exactly one
//! deterministic path through exactly one profile.

use crate::debt::compute_debt_payment;
use crate::model::cash_flow::CashFlow;
use crate::model::debt::DebtWarning;
use crate::model::profile::Profile;
use crate::model::results::{AnnualSummary, Diagnostic, MonthlyProjection, ProjectionResult};
use crate::month::{Clock, Month};
use crate::resolve::resolve_date;
use crate::simulation_state::EngineState;
use crate::taxes::{self, TaxIdResolution};

const HORIZON_MONTHS: i32 = 1200; // age 100 in months

/// Run the full month-by-month projection for `profile`, from `clock.now()`
/// up to (exclusive) the month the profile owner turns 100.
///
/// `calculate_projections` never fails: a profile that reaches this function
/// is already construction-valid (see `error::ProfileError`), and every
/// remaining failure mode (unresolvable dates, unknown tax ids, unaffordable
/// debt payments) degrades silently per the engine's error-handling design,
/// recorded in the returned `diagnostics` and `debt_warnings` rather than
/// aborting the run.
#[must_use]
pub fn calculate_projections(profile: &Profile, clock: &dyn Clock) -> ProjectionResult {
    let start_instant = std::time::Instant::now();

    let projection_start = clock.now();
    let end_month_exclusive = profile.birth_month.add_months(HORIZON_MONTHS);
    let n_months = projection_start.months_until(end_month_exclusive).max(0) as usize;

    let mut diagnostics = Vec::new();
    let debt_warnings: Vec<DebtWarning> = profile.debts.iter().flat_map(crate::debt::validate_debt).collect();

    let mut state = EngineState::initialize(
        &profile.accounts,
        &profile.debts,
        profile.birth_month,
        &profile.life_events,
        projection_start,
    );
    let initial_liquid = state.liquid;
    let initial_fixed_total = state.fixed_total();
    let initial_total_debt = state.total_debt();

    // Pre-resolve cash flow and liquidation date windows once; avoids
    // re-resolving a DateSpec (and re-walking life-event references) inside
    // the hot per-month loop.
    let resolved_cash_flows: Vec<ResolvedCashFlow> = profile
        .cash_flows
        .iter()
        .map(|cf| resolve_cash_flow(cf, profile, &mut diagnostics))
        .collect();

    let mut monthly = Vec::with_capacity(n_months);

    for i in 0..n_months {
        let m = projection_start.add_months(i as i32);
        let years_elapsed = i / 12;

        // 1. Liquid growth. Interest applies to negative balances too,
        // intentionally: a negative liquid balance grows more negative,
        // mirroring penalty-interest semantics observed in the source this
        // engine was distilled from.
        state.liquid += state.liquid * (profile.liquid_rate_pct / 100.0) / 12.0;

        // 2. Fixed-asset growth and liquidation.
        for asset in &mut state.fixed_assets {
            if asset.balance != 0.0 {
                asset.balance *= 1.0 + asset.annual_rate / 1200.0;
            }
            if let Some(liquidation_month) = asset.liquidation_month {
                if m >= liquidation_month && asset.balance > 0.0 {
                    state.liquid += asset.balance;
                    asset.balance = 0.0;
                }
            }
        }

        // 3. Debt service, in definition (profile) order.
        let mut debt_interest_paid = 0.0;
        let mut debt_principal_paid = 0.0;
        for (debt_spec, debt_state) in profile.debts.iter().zip(state.debts.iter_mut()) {
            if debt_state.settled || debt_state.current_balance <= 0.0 {
                continue;
            }

            let at_or_past_end = debt_state.end_month.is_some_and(|e| m >= e);
            let should_service = at_or_past_end || debt_state.in_repayment_at(m);
            if !should_service {
                continue;
            }

            let months_remaining = if at_or_past_end { Some(1) } else { None };
            let payment = compute_debt_payment(debt_spec, debt_state.current_balance, months_remaining);

            if state.liquid >= payment.total {
                state.liquid -= payment.total;
                let floor = match debt_spec.strategy {
                    crate::model::debt::RepaymentStrategy::InterestOnly { final_balance } => final_balance,
                    _ => 0.0,
                };
                debt_state.current_balance = (debt_state.current_balance - payment.principal).max(floor);
                debt_interest_paid += payment.interest;
                debt_principal_paid += payment.principal;
                if at_or_past_end {
                    debt_state.settled = true;
                }
            }
            // Insufficient liquid: skip silently, no arrears accrual. If this
            // was a terminal trigger, it is retried next month since
            // `settled` stays false and `m >= end_month` remains true.
        }

        // 4. Cash flows.
        let mut income = 0.0;
        let mut expenses = 0.0;
        for resolved in &resolved_cash_flows {
            let Some(amount) = resolved.amount_for_month(m, i, years_elapsed, profile.inflation_rate_pct) else {
                continue;
            };
            match resolved.flow_type {
                crate::model::cash_flow::CashFlowType::Income => income += amount,
                crate::model::cash_flow::CashFlowType::Expense => expenses += amount,
            }
        }

        // 5. Net flow.
        state.liquid += income - expenses;

        // 6. Snapshot.
        let age_years = profile.birth_month.months_until(m).div_euclid(12).max(0) as u8;
        let fixed_total = state.fixed_total();
        let total_debt = state.total_debt();
        monthly.push(MonthlyProjection {
            month: m,
            age_years,
            liquid: state.liquid,
            fixed_total,
            total_debt,
            net_worth: state.liquid + fixed_total - total_debt,
            income,
            expenses,
            debt_interest_paid,
            debt_principal_paid,
        });
    }

    let annual = aggregate_annual(&monthly, initial_liquid, initial_fixed_total, initial_total_debt);

    ProjectionResult {
        monthly,
        annual,
        calculation_time_ms: start_instant.elapsed().as_secs_f64() * 1000.0,
        debt_warnings,
        diagnostics,
    }
}

struct ResolvedCashFlow {
    flow_type: crate::model::cash_flow::CashFlowType,
    frequency: crate::model::cash_flow::Frequency,
    amount: f64,
    start_month: Option<Month>,
    /// `true` when `start_date` was specified but failed to resolve (a
    /// broken life-event reference, a cyclic one, an out-of-range age).
    /// Unlike an absent `start_date` (which leaves the flow unconstrained
    /// from the start), this silently deactivates a recurring flow rather
    /// than treating it as always active.
    start_unresolvable: bool,
    end_month: Option<Month>,
    follows_inflation: bool,
    is_one_time: bool,
}

impl ResolvedCashFlow {
    /// The amount this flow contributes at month `m`, or `None` if it does
    /// not apply this month. `i` is the zero-based month index since
    /// projection start, used for inflation indexing.
    fn amount_for_month(&self, m: Month, _i: usize, years_elapsed: usize, inflation_rate_pct: f64) -> Option<f64> {
        if self.is_one_time {
            if Some(m) != self.start_month {
                return None;
            }
            return Some(self.amount);
        }

        if self.start_unresolvable {
            return None;
        }

        let after_start = self.start_month.map_or(true, |s| m >= s);
        let before_end = self.end_month.map_or(true, |e| m < e);
        if !(after_start && before_end) {
            return None;
        }

        let mut amount = self.frequency.to_monthly(self.amount);
        if self.follows_inflation && inflation_rate_pct != 0.0 {
            amount *= (1.0 + inflation_rate_pct / 100.0).powi(years_elapsed as i32);
        }
        Some(amount)
    }
}

fn resolve_cash_flow(cf: &CashFlow, profile: &Profile, diagnostics: &mut Vec<Diagnostic>) -> ResolvedCashFlow {
    let start_month = resolve_date(cf.start_date.as_ref(), profile.birth_month, &profile.life_events);
    let end_month = resolve_date(cf.end_date.as_ref(), profile.birth_month, &profile.life_events);
    let start_unresolvable = cf.start_date.is_some() && start_month.is_none();

    if start_unresolvable {
        diagnostics.push(Diagnostic::UnresolvableDate { context: format!("cash flow {:?} start date", cf.id) });
    }

    // Income tax wiring: resolved here (and recorded as a diagnostic on
    // mismatch) so the surface a future revision needs to withhold tax at
    // this step already exists; the MVP engine never subtracts the result.
    if let (Some(tax_id), Some(country)) = (cf.income_tax_id.as_deref(), profile.tax_country.as_ref()) {
        match taxes::resolve_tax_id(Some(tax_id), crate::model::tax::TaxKind::Income, &country.income_taxes) {
            TaxIdResolution::UnknownId(id) => diagnostics.push(Diagnostic::UnknownTaxId { tax_id: id }),
            TaxIdResolution::KindMismatch(id) => diagnostics.push(Diagnostic::TaxIdKindMismatch { tax_id: id }),
            TaxIdResolution::NoTax | TaxIdResolution::Option(_) => {}
        }
    }

    ResolvedCashFlow {
        flow_type: cf.flow_type,
        frequency: cf.frequency,
        amount: cf.amount,
        start_month,
        start_unresolvable,
        end_month,
        follows_inflation: cf.follows_inflation,
        is_one_time: cf.is_one_time,
    }
}

/// Group monthly snapshots by calendar year. The first year's starting
/// balances are the pre-loop initial state; every later year's starting
/// balances are the previous year's ending balances, so annual summary
/// `i+1`'s starting values always equal annual summary `i`'s ending values.
/// Annual sums are additions of monthly flows; `age` is the age at the
/// first month of the year.
fn aggregate_annual(
    monthly: &[MonthlyProjection],
    initial_liquid: f64,
    initial_fixed_total: f64,
    initial_total_debt: f64,
) -> Vec<AnnualSummary> {
    let mut annual: Vec<AnnualSummary> = Vec::new();
    let mut carry_liquid = initial_liquid;
    let mut carry_fixed_total = initial_fixed_total;
    let mut carry_total_debt = initial_total_debt;

    for snapshot in monthly {
        let year = snapshot.month.year();
        match annual.last_mut() {
            Some(last) if last.year == year => {
                last.ending_liquid = snapshot.liquid;
                last.ending_fixed_total = snapshot.fixed_total;
                last.ending_total_debt = snapshot.total_debt;
                last.ending_net_worth = snapshot.net_worth;
                last.total_income += snapshot.income;
                last.total_expenses += snapshot.expenses;
                last.total_debt_interest_paid += snapshot.debt_interest_paid;
                last.total_debt_principal_paid += snapshot.debt_principal_paid;
            }
            _ => {
                if let Some(last) = annual.last() {
                    carry_liquid = last.ending_liquid;
                    carry_fixed_total = last.ending_fixed_total;
                    carry_total_debt = last.ending_total_debt;
                }
                annual.push(AnnualSummary {
                    year,
                    age_years: snapshot.age_years,
                    starting_liquid: carry_liquid,
                    ending_liquid: snapshot.liquid,
                    starting_fixed_total: carry_fixed_total,
                    ending_fixed_total: snapshot.fixed_total,
                    starting_total_debt: carry_total_debt,
                    ending_total_debt: snapshot.total_debt,
                    starting_net_worth: carry_liquid + carry_fixed_total - carry_total_debt,
                    ending_net_worth: snapshot.net_worth,
                    total_income: snapshot.income,
                    total_expenses: snapshot.expenses,
                    total_debt_interest_paid: snapshot.debt_interest_paid,
                    total_debt_principal_paid: snapshot.debt_principal_paid,
                });
            }
        }
    }

    annual
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::accounts::{Account, LiquidAsset};
    use crate::model::ids::AccountId;
    use crate::month::FixedClock;

    fn empty_profile(birth: Month) -> Profile {
        Profile {
            birth_month: birth,
            liquid_rate_pct: 0.0,
            inflation_rate_pct: 0.0,
            tax_country: None,
            accounts: Vec::new(),
            cash_flows: Vec::new(),
            debts: Vec::new(),
            life_events: Vec::new(),
        }
    }

    #[test]
    fn flat_growth_matches_reference_scenario() {
        let mut profile = empty_profile(Month::new(1995, 0));
        profile.liquid_rate_pct = 5.0;
        profile.accounts.push(Account::LiquidAsset(
            LiquidAsset::new(AccountId::from("a1"), "Cash", 100_000.0).unwrap(),
        ));
        let clock = FixedClock(Month::new(2025, 0));
        let result = calculate_projections(&profile, &clock);

        assert!((result.monthly[11].liquid - 105_116.19).abs() < 0.5);
        assert!((result.monthly[119].liquid - 164_700.95).abs() < 1.0);
    }

    #[test]
    fn net_worth_invariant_holds_every_month() {
        let mut profile = empty_profile(Month::new(1995, 0));
        profile.liquid_rate_pct = 3.0;
        profile.accounts.push(Account::LiquidAsset(
            LiquidAsset::new(AccountId::from("a1"), "Cash", 10_000.0).unwrap(),
        ));
        let clock = FixedClock(Month::new(2025, 0));
        let result = calculate_projections(&profile, &clock);
        for snap in &result.monthly {
            let expected = snap.liquid + snap.fixed_total - snap.total_debt;
            assert!((snap.net_worth - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn annual_chaining_matches_monthly_boundaries() {
        let mut profile = empty_profile(Month::new(1995, 0));
        profile.liquid_rate_pct = 4.0;
        profile.accounts.push(Account::LiquidAsset(
            LiquidAsset::new(AccountId::from("a1"), "Cash", 50_000.0).unwrap(),
        ));
        let clock = FixedClock(Month::new(2025, 0));
        let result = calculate_projections(&profile, &clock);
        for pair in result.annual.windows(2) {
            assert!((pair[0].ending_liquid - pair[1].starting_liquid).abs() < 1e-6);
            assert!((pair[0].ending_net_worth - pair[1].starting_net_worth).abs() < 1e-6);
        }
    }

    #[test]
    fn horizon_ends_at_age_100() {
        let profile = empty_profile(Month::new(1995, 0));
        let clock = FixedClock(Month::new(2025, 0));
        let result = calculate_projections(&profile, &clock);
        let last = result.monthly.last().unwrap();
        assert_eq!(last.month, Month::new(1995, 0).add_months(HORIZON_MONTHS - 1));
        assert_eq!(last.age_years, 99);
    }
}
