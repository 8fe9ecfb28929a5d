use crate::cash::CashPosition;
use crate::config::ForecastConfig;
use crate::expenses::monthly_expenses;
use crate::model::{ForecastMonth, ForecastResult};
use crate::revenue::{RevenueSimulator, RevenueState};
use crate::summary::summarize;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Project revenue, expenses and cash month by month, then derive the summary.
///
/// The whole model is recomputed from `config` on every call and `config` is
/// never modified, so callers may re-run it freely for what-if edits.
///
/// A horizon running past `9999-12` is cut at that month, so dates stay
/// strictly consecutive. Use [`ForecastConfig::check_horizon`] to reject such
/// configs up front.
pub fn build_forecast(config: &ForecastConfig) -> ForecastResult {
    let horizon = config.months.min(config.max_months());
    if horizon < config.months {
        tracing::warn!(
            start = %config.start_month,
            months = config.months,
            simulated = horizon,
            "horizon cut at the last supported month"
        );
    }

    let cash_on_hand = config.assumptions.cash_on_hand;
    let simulator = RevenueSimulator::new(&config.revenue, config.assumptions.churn_rate);

    let mut revenue_state = RevenueState::default();
    let mut cash_position = CashPosition::default();
    let mut months = Vec::with_capacity(horizon);

    for month_index in 0..horizon {
        let date = config.month_at(month_index);

        let (next_revenue, revenue) = simulator.step(revenue_state);
        revenue_state = next_revenue;

        let expenses = monthly_expenses(
            &config.headcount,
            &config.expenses,
            &config.assumptions,
            date,
        );

        let (next_cash, cash) = cash_position.apply(cash_on_hand, expenses.total, revenue.total_mrr);
        cash_position = next_cash;

        months.push(ForecastMonth {
            month_index,
            date,
            plg_mrr: revenue.plg_mrr,
            sales_mrr: revenue.sales_mrr,
            partner_mrr: revenue.partner_mrr,
            total_mrr: revenue.total_mrr,
            total_arr: revenue.total_mrr * 12.0,
            total_customers: revenue.total_customers,
            new_customers: revenue.new_customers,
            new_mrr: revenue.new_mrr,
            churned_mrr: revenue.churned_mrr,
            expansion_mrr: revenue.expansion_mrr,
            headcount_expense: expenses.headcount,
            non_headcount_expense: expenses.non_headcount,
            total_expense: expenses.total,
            net_burn: cash.net_burn,
            cumulative_burn: cash.cumulative_burn,
            cash_remaining: cash.cash_remaining,
        });
    }

    let summary = summarize(config, &months);

    tracing::debug!(
        start = %config.start_month,
        months = config.months,
        headcount_rows = config.headcount.len(),
        expense_rows = config.expenses.len(),
        runway_months = summary.runway_months,
        "forecast built"
    );

    ForecastResult { months, summary }
}

/// Forecast several independent scenarios, in parallel when the `parallel`
/// feature is enabled. Results keep the order of `configs`.
pub fn forecast_scenarios(configs: &[ForecastConfig]) -> Vec<ForecastResult> {
    tracing::trace!(scenarios = configs.len(), "forecasting scenarios");

    #[cfg(feature = "parallel")]
    {
        configs.par_iter().map(build_forecast).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(build_forecast).collect()
    }
}
