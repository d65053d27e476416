//! Exercises the performance budget: 25 cash flows and 10 debts under 300ms.

use criterion::{criterion_group, criterion_main, Criterion};

use horizon_core::model::{
    Account, CashFlow, CashFlowType, Debt, Frequency, LiquidAsset, Profile, RepaymentStrategy,
};
use horizon_core::model::ids::{AccountId, CashFlowId, DebtId};
use horizon_core::month::{FixedClock, Month};
use horizon_core::calculate_projections;

fn heavy_profile() -> Profile {
    let mut accounts = vec![Account::LiquidAsset(
        LiquidAsset::new(AccountId::from("cash"), "Cash", 250_000.0).unwrap(),
    )];
    for i in 0..5 {
        accounts.push(Account::LiquidAsset(
            LiquidAsset::new(AccountId(format!("liquid-{i}")), "Extra", 1_000.0).unwrap(),
        ));
    }

    let mut cash_flows = Vec::new();
    for i in 0..25 {
        let id = CashFlowId(format!("flow-{i}"));
        let flow_type = if i % 3 == 0 { CashFlowType::Expense } else { CashFlowType::Income };
        cash_flows.push(CashFlow::new(id, format!("Flow {i}"), 500.0 + i as f64, flow_type, Frequency::Monthly).unwrap());
    }

    let mut debts = Vec::new();
    for i in 0..10 {
        let id = DebtId(format!("debt-{i}"));
        debts.push(
            Debt::new(
                id,
                format!("Debt {i}"),
                20_000.0 + i as f64 * 1_000.0,
                5.0,
                RepaymentStrategy::Annuity { monthly_payment: 400.0 },
            )
            .unwrap(),
        );
    }

    Profile {
        birth_month: Month::new(1990, 0),
        liquid_rate_pct: 4.0,
        inflation_rate_pct: 2.5,
        tax_country: None,
        accounts,
        cash_flows,
        debts,
        life_events: Vec::new(),
    }
}

fn bench_full_horizon(c: &mut Criterion) {
    let profile = heavy_profile();
    let clock = FixedClock(Month::new(2025, 0));
    c.bench_function("calculate_projections_25_flows_10_debts", |b| {
        b.iter(|| calculate_projections(&profile, &clock));
    });
}

criterion_group!(benches, bench_full_horizon);
criterion_main!(benches);
