//! Investor metrics

use super::{assert_close, plg_only, ym};
use crate::config::{ForecastBuilder, ForecastConfig};
use crate::forecast::build_forecast;
use crate::model::{HeadcountRow, PlgConfig, RevenueConfig, UNBOUNDED, is_unbounded};

fn plg(churn_rate: f64, expansion_rate: f64) -> RevenueConfig {
    plg_only(PlgConfig {
        monthly_trials: 100.0,
        trial_conversion_rate: 10.0,
        avg_acv: 1_200.0,
        churn_rate,
        expansion_rate,
    })
}

fn forecast(revenue: RevenueConfig, months: usize) -> ForecastConfig {
    ForecastConfig::new(ym("2025-01"), months).with_revenue(revenue)
}

#[test]
fn test_default_twelve_month_summary() {
    let result = build_forecast(&ForecastConfig::new(ym("2025-01"), 12));
    let s = result.summary;
    assert!(s.annual_nrr > 0.0);
    assert!(s.annual_grr > 0.0 && s.annual_grr <= 100.0);
    assert!(s.net_new_arr > 0.0);
    assert!(s.total_customers > 0.0);
    assert_eq!(s.projected_mrr, result.months[11].total_mrr);
    assert_eq!(s.projected_arr, result.months[11].total_arr);
    assert_eq!(
        s.net_new_arr,
        result.months[11].total_arr - result.months[0].total_arr
    );
    assert_eq!(s.cac, 5_000.0);
}

#[test]
fn test_retention_uses_full_series_when_short() {
    let result = build_forecast(&forecast(plg(10.0, 5.0), 6));
    // five transitions between month 0 and month 5
    assert_close(result.summary.annual_grr, 0.9_f64.powi(5) * 100.0, 1e-9);
    // 10 newcomers a month carry 50 of uplift, on a 1_050 starting base
    let starting = result.months[0].total_mrr;
    assert_close(starting, 1_050.0, 1e-9);
    assert_close(
        result.summary.annual_nrr,
        (starting * 0.9_f64.powi(5) + 5.0 * 50.0) / starting * 100.0,
        1e-9,
    );
}

#[test]
fn test_retention_trailing_twelve_months() {
    let result = build_forecast(&forecast(plg(10.0, 0.0), 24));
    assert_close(result.summary.annual_grr, 0.9_f64.powi(12) * 100.0, 1e-9);
    assert_close(result.summary.annual_nrr, result.summary.annual_grr, 1e-9);
}

#[test]
fn test_retention_single_month() {
    let result = build_forecast(&forecast(plg(10.0, 5.0), 1));
    assert_close(result.summary.annual_nrr, 100.0, 1e-9);
    assert_close(result.summary.annual_grr, 100.0, 1e-9);
}

#[test]
fn test_nrr_above_hundred_when_expansion_beats_churn() {
    let result = build_forecast(&forecast(plg(1.0, 3.0), 12));
    assert!(result.summary.annual_nrr > 100.0);
    assert!(result.summary.annual_grr < 100.0);
}

#[test]
fn test_retention_without_starting_mrr_is_zero() {
    let mut config = forecast(RevenueConfig::zero(), 6);
    config.assumptions.churn_rate = 5.0;
    let s = build_forecast(&config).summary;
    assert_eq!((s.annual_nrr, s.annual_grr), (0.0, 0.0));
}

#[test]
fn test_zero_revenue_metrics_are_neutral() {
    let config = ForecastBuilder::new()
        .start(2025, 1)
        .months(12)
        .no_revenue()
        .cash_on_hand(50_000.0)
        .hire(HeadcountRow::new("Founder", 4_000.0, ym("2025-01")))
        .build();
    let s = build_forecast(&config).summary;

    assert_eq!(s.projected_arr, 0.0);
    assert_eq!(s.net_new_arr, 0.0);
    assert_eq!(s.annual_nrr, 0.0);
    assert_eq!(s.annual_grr, 0.0);
    assert_eq!(s.ltv_cac_ratio, 0.0);
    assert!(is_unbounded(s.cac_payback_months));
    assert!(is_unbounded(s.burn_multiple));
    assert_close(s.rule_of_40, -100.0, 1e-9);
    for value in [
        s.annual_nrr,
        s.cac_payback_months,
        s.ltv_cac_ratio,
        s.burn_multiple,
        s.rule_of_40,
        s.runway_months,
    ] {
        assert!(value.is_finite());
    }
}

#[test]
fn test_cac_payback() {
    // each new customer enters at 100/month
    let result = build_forecast(&forecast(plg(4.0, 0.0), 12));
    assert_close(result.summary.cac_payback_months, 50.0, 1e-9);

    let mut config = forecast(plg(4.0, 0.0), 12);
    config.assumptions.cac = 0.0;
    assert_eq!(build_forecast(&config).summary.cac_payback_months, 0.0);
}

#[test]
fn test_ltv_cac_ratio() {
    // 100/month per customer over 4% churn is 2_500 of lifetime value
    let result = build_forecast(&forecast(plg(4.0, 0.0), 12));
    assert_close(result.summary.ltv_cac_ratio, 0.5, 1e-9);

    let result = build_forecast(&forecast(plg(0.0, 0.0), 12));
    assert_eq!(result.summary.ltv_cac_ratio, UNBOUNDED);
}

#[test]
fn test_burn_multiple() {
    // profitable: nothing burned
    let profitable = build_forecast(&forecast(plg(4.0, 0.0), 12));
    assert_eq!(profitable.summary.burn_multiple, 0.0);

    let mut config = forecast(plg(4.0, 0.0), 12);
    config.headcount = vec![HeadcountRow::new("Engineer", 10_000.0, ym("2025-01"))];
    let result = build_forecast(&config);
    let s = result.summary;
    assert!(s.monthly_burn > 0.0);
    assert_close(s.burn_multiple, s.monthly_burn / (s.net_new_arr / 12.0), 1e-9);
}

#[test]
fn test_rule_of_40_without_costs() {
    let result = build_forecast(&forecast(plg(4.0, 0.0), 36));
    let first = result.months[0].total_mrr;
    let last = result.months[35].total_mrr;
    let monthly = (last / first).powf(1.0 / 35.0);
    let growth = (monthly.powi(12) - 1.0) * 100.0;
    assert!(growth > 0.0 && growth < UNBOUNDED);
    // every euro of revenue is margin
    assert_close(result.summary.rule_of_40, growth + 100.0, 1e-6);
}

#[test]
fn test_monthly_burn_is_last_net_burn() {
    let mut config = forecast(RevenueConfig::default(), 9);
    config.headcount = vec![HeadcountRow::new("Engineer", 20_000.0, ym("2025-01"))];
    let result = build_forecast(&config);
    assert_eq!(result.summary.monthly_burn, result.months[8].net_burn);
}
