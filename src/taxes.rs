//! Tax calculator.
//!
//! Flat-rate and progressive-bracket tax on a single amount, with optional
//! inflation-indexed exemption thresholds and bracket thresholds. The
//! bracket-walking loop follows the same shape as the teacher crate's
//! `calculate_federal_tax`: walk brackets in order, tax only the slice of the
//! amount that falls within each one, and let the last bracket run to
//! infinity.

use crate::model::tax::{TaxBracket, TaxOption, TaxSchedule};

/// Inflation adjustment inputs for indexing exemption thresholds and bracket
/// thresholds. `months_since_ref` is the number of months from the
/// jurisdiction's reference point to the month tax is being computed for.
#[derive(Debug, Clone, Copy)]
pub struct InflationAdjustment {
    pub inflation_rate_pct: f64,
    pub months_since_ref: i32,
}

impl InflationAdjustment {
    fn factor(self) -> f64 {
        (1.0 + self.inflation_rate_pct / 100.0).powf(f64::from(self.months_since_ref) / 12.0)
    }
}

/// Compute tax owed on `amount` under `option`, optionally inflation-adjusting
/// the option's exemption threshold and bracket thresholds.
#[must_use]
pub fn tax_on(amount: f64, option: &TaxOption, inflation_adjustment: Option<InflationAdjustment>) -> f64 {
    if amount <= 0.0 {
        return 0.0;
    }

    let factor = inflation_adjustment.map(InflationAdjustment::factor).unwrap_or(1.0);

    let taxable = match option.exemption_threshold {
        Some(exemption) => (amount - exemption * factor).max(0.0),
        None => amount,
    };

    if taxable <= 0.0 {
        return 0.0;
    }

    match &option.schedule {
        TaxSchedule::FlatRate { rate_pct } => taxable * rate_pct / 100.0,
        TaxSchedule::Brackets { brackets } => progressive_tax(taxable, brackets, factor),
    }
}

/// Sum marginal tax across brackets, each inflation-adjusted by the same
/// factor and sorted ascending by threshold before being walked.
fn progressive_tax(taxable: f64, brackets: &[TaxBracket], factor: f64) -> f64 {
    if brackets.is_empty() {
        return 0.0;
    }

    let mut adjusted: Vec<TaxBracket> = brackets
        .iter()
        .map(|b| TaxBracket {
            threshold: b.threshold * factor,
            rate_pct: b.rate_pct,
        })
        .collect();
    adjusted.sort_by(|a, b| a.threshold.partial_cmp(&b.threshold).unwrap());

    let mut tax = 0.0;
    for (i, bracket) in adjusted.iter().enumerate() {
        if taxable <= bracket.threshold {
            break;
        }
        let next_threshold = adjusted.get(i + 1).map(|b| b.threshold).unwrap_or(f64::INFINITY);
        let slice = (taxable.min(next_threshold) - bracket.threshold).max(0.0);
        tax += slice * bracket.rate_pct / 100.0;
    }
    tax
}

/// Annualize a monthly amount before applying progressive brackets, then
/// divide the resulting annual tax by 12 — so progression sees the correct
/// annual base instead of taxing each month's slice independently.
#[must_use]
pub fn monthly_income_tax(
    monthly_amount: f64,
    option: &TaxOption,
    inflation_adjustment: Option<InflationAdjustment>,
) -> f64 {
    tax_on(monthly_amount * 12.0, option, inflation_adjustment) / 12.0
}

/// Resolution of a tax-id string against a jurisdiction's option list.
///
/// `"default"` means "use the kind's default option"; `"none"` and
/// `"after-tax"` both mean "no tax"; `None` means "no tax configured";
/// anything else is looked up by id. A lookup miss, or a kind mismatch
/// between the looked-up option and the expected `kind`, degrades silently
/// to "no tax" rather than failing — the caller can inspect the returned
/// `TaxIdResolution` to see whether a diagnostic should be raised.
pub enum TaxIdResolution<'a> {
    NoTax,
    Option(&'a TaxOption),
    UnknownId(String),
    KindMismatch(String),
}

#[must_use]
pub fn resolve_tax_id<'a>(
    tax_id: Option<&str>,
    expected_kind: crate::model::tax::TaxKind,
    options: &'a [TaxOption],
) -> TaxIdResolution<'a> {
    let Some(id) = tax_id else {
        return TaxIdResolution::NoTax;
    };

    match id {
        "none" | "after-tax" => TaxIdResolution::NoTax,
        "default" => options
            .iter()
            .find(|o| o.kind == expected_kind && o.is_default)
            .map_or(TaxIdResolution::NoTax, TaxIdResolution::Option),
        other => match options.iter().find(|o| o.id.0 == other) {
            None => TaxIdResolution::UnknownId(other.to_string()),
            Some(option) if option.kind == expected_kind => TaxIdResolution::Option(option),
            Some(_) => TaxIdResolution::KindMismatch(other.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::TaxOptionId;
    use crate::model::tax::TaxKind;

    fn flat(rate_pct: f64) -> TaxOption {
        TaxOption {
            id: TaxOptionId::from("flat"),
            name: "Flat".into(),
            kind: TaxKind::Income,
            is_default: true,
            exemption_threshold: None,
            schedule: TaxSchedule::FlatRate { rate_pct },
        }
    }

    fn brackets() -> TaxOption {
        TaxOption {
            id: TaxOptionId::from("progressive"),
            name: "Progressive".into(),
            kind: TaxKind::Income,
            is_default: true,
            exemption_threshold: None,
            schedule: TaxSchedule::Brackets {
                brackets: vec![
                    TaxBracket { threshold: 0.0, rate_pct: 10.0 },
                    TaxBracket { threshold: 10_000.0, rate_pct: 20.0 },
                    TaxBracket { threshold: 40_000.0, rate_pct: 30.0 },
                ],
            },
        }
    }

    #[test]
    fn non_positive_amount_is_zero_tax() {
        let option = flat(20.0);
        assert_eq!(tax_on(0.0, &option, None), 0.0);
        assert_eq!(tax_on(-500.0, &option, None), 0.0);
    }

    #[test]
    fn flat_linearity() {
        let option = flat(17.0);
        let a = tax_on(3_000.0, &option, None);
        let ka = tax_on(3_000.0 * 4.0, &option, None);
        assert!((ka - a * 4.0).abs() < 1e-9);
    }

    #[test]
    fn progressive_bracket_math() {
        let option = brackets();
        // 50,000: 10,000*10% + 30,000*20% + 10,000*30% = 1000+6000+3000=10000
        let tax = tax_on(50_000.0, &option, None);
        assert!((tax - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn progressive_monotonicity() {
        let option = brackets();
        let mut last = 0.0;
        for amount in [0.0, 5_000.0, 10_000.0, 25_000.0, 40_000.0, 100_000.0] {
            let tax = tax_on(amount, &option, None);
            assert!(tax >= last - 1e-9);
            last = tax;
        }
    }

    #[test]
    fn exemption_threshold_clips_at_zero() {
        let mut option = flat(10.0);
        option.exemption_threshold = Some(5_000.0);
        assert_eq!(tax_on(3_000.0, &option, None), 0.0);
        assert!((tax_on(8_000.0, &option, None) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn inflation_adjusts_exemption_and_brackets() {
        let mut option = brackets();
        option.exemption_threshold = Some(1_000.0);
        let adj = InflationAdjustment {
            inflation_rate_pct: 10.0,
            months_since_ref: 12,
        };
        // factor = 1.1; exemption -> 1100; brackets shift to 0, 11000, 44000
        let tax = tax_on(10_000.0, &option, Some(adj));
        // taxable after exemption = 10000 - 1100 = 8900, all in first bracket at 10%
        assert!((tax - 890.0).abs() < 1e-6);
    }

    #[test]
    fn monthly_income_tax_annualizes_then_divides() {
        let option = brackets();
        let monthly = 50_000.0 / 12.0;
        let tax = monthly_income_tax(monthly, &option, None);
        assert!((tax - 10_000.0 / 12.0).abs() < 1e-6);
    }

    #[test]
    fn tax_id_resolution_rules() {
        let opts = vec![brackets()];
        assert!(matches!(
            resolve_tax_id(None, TaxKind::Income, &opts),
            TaxIdResolution::NoTax
        ));
        assert!(matches!(
            resolve_tax_id(Some("none"), TaxKind::Income, &opts),
            TaxIdResolution::NoTax
        ));
        assert!(matches!(
            resolve_tax_id(Some("after-tax"), TaxKind::Income, &opts),
            TaxIdResolution::NoTax
        ));
        assert!(matches!(
            resolve_tax_id(Some("default"), TaxKind::Income, &opts),
            TaxIdResolution::Option(_)
        ));
        assert!(matches!(
            resolve_tax_id(Some("missing"), TaxKind::Income, &opts),
            TaxIdResolution::UnknownId(_)
        ));
        assert!(matches!(
            resolve_tax_id(Some("progressive"), TaxKind::Wealth, &opts),
            TaxIdResolution::KindMismatch(_)
        ));
    }
}
