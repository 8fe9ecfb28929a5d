//! Investor metrics derived from a completed forecast series.
//!
//! Every ratio tolerates a zero denominator: "no finite value" is reported
//! as [`UNBOUNDED`] and "nothing to measure" as `0.0`, so no NaN or infinity
//! reaches callers.

use crate::cash::runway_months;
use crate::config::ForecastConfig;
use crate::model::{ForecastMonth, ForecastSummary, UNBOUNDED};
use crate::revenue::channel_rules;

/// Month-over-month transitions covered by the retention window
pub const RETENTION_WINDOW: usize = 12;

/// Build the summary for `months`, the series produced from `config`
pub fn summarize(config: &ForecastConfig, months: &[ForecastMonth]) -> ForecastSummary {
    let assumptions = &config.assumptions;
    let (Some(first), Some(last)) = (months.first(), months.last()) else {
        return ForecastSummary {
            cash_on_hand: assumptions.cash_on_hand,
            cac: assumptions.cac,
            ..ForecastSummary::default()
        };
    };

    let net_new_arr = last.total_arr - first.total_arr;
    let (annual_nrr, annual_grr) = retention(config, months);
    let monthly_burn = last.net_burn;

    ForecastSummary {
        projected_arr: last.total_arr,
        projected_mrr: last.total_mrr,
        net_new_arr,
        annual_nrr,
        annual_grr,
        total_customers: last.total_customers,
        cash_on_hand: assumptions.cash_on_hand,
        monthly_burn,
        runway_months: runway_months(assumptions.cash_on_hand, months),
        cac: assumptions.cac,
        cac_payback_months: cac_payback_months(assumptions.cac, months),
        ltv_cac_ratio: ltv_cac_ratio(config, last),
        burn_multiple: burn_multiple(monthly_burn, net_new_arr, months.len()),
        rule_of_40: rule_of_40(first, last, months.len()),
    }
}

/// Net and gross revenue retention over the trailing window, in percent.
///
/// The window spans `min(12, n - 1)` transitions ending at the last month, so
/// shorter series use their full length. Survived MRR is the window's
/// starting MRR, decayed per channel by its churn once per transition.
/// Gross retention is survived over starting MRR; net retention adds the
/// expansion booked inside the window. A window that starts without MRR
/// reports `(0.0, 0.0)`.
pub fn retention(config: &ForecastConfig, months: &[ForecastMonth]) -> (f64, f64) {
    let Some(last_index) = months.len().checked_sub(1) else {
        return (0.0, 0.0);
    };
    let elapsed = last_index.min(RETENTION_WINDOW);
    let window_start = &months[last_index - elapsed];

    let starting: f64 = window_start.total_mrr;
    if starting <= 0.0 {
        return (0.0, 0.0);
    }

    let periods = elapsed as i32;
    let survived: f64 = channel_rules(&config.revenue, config.assumptions.churn_rate)
        .iter()
        .map(|(channel, rule)| {
            channel.mrr_of(window_start) * rule.gross_retention().powi(periods)
        })
        .sum();
    let expanded: f64 = months[last_index - elapsed + 1..=last_index]
        .iter()
        .map(|m| m.expansion_mrr)
        .sum();

    let nrr = ((survived + expanded) / starting * 100.0).clamp(0.0, UNBOUNDED);
    let grr = (survived / starting * 100.0).clamp(0.0, 100.0);
    (nrr, grr)
}

/// CAC divided by the average entry MRR of a new customer over the horizon
pub fn cac_payback_months(cac: f64, months: &[ForecastMonth]) -> f64 {
    let new_customers: f64 = months.iter().map(|m| m.new_customers).sum();
    let new_mrr: f64 = months.iter().map(|m| m.new_mrr).sum();
    if new_customers <= 0.0 || new_mrr <= 0.0 {
        return UNBOUNDED;
    }
    let mrr_per_customer = new_mrr / new_customers;
    (cac / mrr_per_customer).clamp(0.0, UNBOUNDED)
}

/// Lifetime value over CAC at the end of the horizon.
///
/// Lifetime value is revenue per customer divided by the MRR-weighted monthly
/// churn of the channels.
pub fn ltv_cac_ratio(config: &ForecastConfig, last: &ForecastMonth) -> f64 {
    if last.total_customers <= 0.0 || last.total_mrr <= 0.0 {
        return 0.0;
    }
    let mrr_per_customer = last.total_mrr / last.total_customers;

    let weighted_churn: f64 = channel_rules(&config.revenue, config.assumptions.churn_rate)
        .iter()
        .map(|(channel, rule)| channel.mrr_of(last) * rule.churn)
        .sum::<f64>()
        / last.total_mrr;

    let cac = config.assumptions.cac;
    if weighted_churn <= 0.0 || cac <= 0.0 {
        return UNBOUNDED;
    }
    let lifetime_value = mrr_per_customer / weighted_churn;
    (lifetime_value / cac).clamp(0.0, UNBOUNDED)
}

/// Monthly burn per unit of average monthly net-new ARR.
///
/// A company that is not burning is reported as `0.0`; burning without adding
/// ARR is [`UNBOUNDED`].
pub fn burn_multiple(monthly_burn: f64, net_new_arr: f64, horizon: usize) -> f64 {
    if monthly_burn <= 0.0 {
        return 0.0;
    }
    if net_new_arr <= 0.0 || horizon == 0 {
        return UNBOUNDED;
    }
    let monthly_net_new_arr = net_new_arr / horizon as f64;
    (monthly_burn / monthly_net_new_arr).min(UNBOUNDED)
}

/// Annualized MRR growth plus profit margin, both in percent
pub fn rule_of_40(first: &ForecastMonth, last: &ForecastMonth, horizon: usize) -> f64 {
    annualized_growth(first.total_mrr, last.total_mrr, horizon) + profit_margin(last)
}

/// Compound monthly growth between the first and last month, annualized
fn annualized_growth(first_mrr: f64, last_mrr: f64, horizon: usize) -> f64 {
    if horizon < 2 || first_mrr <= 0.0 || last_mrr <= 0.0 {
        return 0.0;
    }
    let monthly = (last_mrr / first_mrr).powf(1.0 / (horizon - 1) as f64);
    ((monthly.powi(12) - 1.0) * 100.0).clamp(-100.0, UNBOUNDED)
}

/// Share of revenue left after expenses; negative while burning
fn profit_margin(month: &ForecastMonth) -> f64 {
    if month.total_mrr > 0.0 {
        (-month.net_burn / month.total_mrr * 100.0).max(-UNBOUNDED)
    } else if month.total_expense > 0.0 {
        -100.0
    } else {
        0.0
    }
}
