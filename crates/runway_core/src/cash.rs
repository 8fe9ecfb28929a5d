//! Cash position and runway
//!
//! Net burn is expense minus revenue, so a positive value means cash is
//! leaving the company. The only carried state is the cumulative burn.

use crate::model::{ForecastMonth, UNBOUNDED};

/// Running cash state, starting from zero burn
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CashPosition {
    pub cumulative_burn: f64,
}

/// Cash figures of one month
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CashMonth {
    pub net_burn: f64,
    pub cumulative_burn: f64,
    pub cash_remaining: f64,
}

impl CashPosition {
    /// Book one month of expense and revenue against the starting balance
    pub fn apply(self, cash_on_hand: f64, total_expense: f64, total_mrr: f64) -> (Self, CashMonth) {
        let net_burn = total_expense - total_mrr;
        let cumulative_burn = self.cumulative_burn + net_burn;
        (
            Self { cumulative_burn },
            CashMonth {
                net_burn,
                cumulative_burn,
                cash_remaining: cash_on_hand - cumulative_burn,
            },
        )
    }
}

/// Months of runway implied by a forecast series.
///
/// When cash first reaches zero inside the horizon, the result is that month's
/// index plus the share of the month's burn the previous balance still covered
/// (linear interpolation). When the horizon ends with cash left and the last
/// month still burns, the last `net_burn` is extrapolated forward. A last month
/// that does not burn means the runway is unbounded. The result saturates at
/// [`UNBOUNDED`] and is never negative.
pub fn runway_months(cash_on_hand: f64, months: &[ForecastMonth]) -> f64 {
    let Some(last) = months.last() else {
        return 0.0;
    };

    let mut previous_cash = cash_on_hand;
    for month in months {
        if month.cash_remaining <= 0.0 {
            let covered = if month.net_burn > 0.0 {
                (previous_cash / month.net_burn).clamp(0.0, 1.0)
            } else {
                0.0
            };
            return (month.month_index as f64 + covered).min(UNBOUNDED);
        }
        previous_cash = month.cash_remaining;
    }

    if last.net_burn <= 0.0 {
        return UNBOUNDED;
    }
    let extrapolated = months.len() as f64 + last.cash_remaining / last.net_burn;
    extrapolated.min(UNBOUNDED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::YearMonth;

    /// Series with a constant burn and no revenue
    fn burn_series(cash_on_hand: f64, burn: f64, months: usize) -> Vec<ForecastMonth> {
        let start: YearMonth = "2025-01".parse().unwrap();
        let mut position = CashPosition::default();
        (0..months)
            .map(|i| {
                let (next, cash) = position.apply(cash_on_hand, burn, 0.0);
                position = next;
                ForecastMonth {
                    month_index: i,
                    date: start.add_months(i as i32),
                    plg_mrr: 0.0,
                    sales_mrr: 0.0,
                    partner_mrr: 0.0,
                    total_mrr: 0.0,
                    total_arr: 0.0,
                    total_customers: 0.0,
                    new_customers: 0.0,
                    new_mrr: 0.0,
                    churned_mrr: 0.0,
                    expansion_mrr: 0.0,
                    headcount_expense: burn,
                    non_headcount_expense: 0.0,
                    total_expense: burn,
                    net_burn: cash.net_burn,
                    cumulative_burn: cash.cumulative_burn,
                    cash_remaining: cash.cash_remaining,
                }
            })
            .collect()
    }

    #[test]
    fn test_apply_accumulates() {
        let (p1, m1) = CashPosition::default().apply(1_000.0, 300.0, 100.0);
        assert_eq!(m1.net_burn, 200.0);
        assert_eq!(m1.cash_remaining, 800.0);
        let (_, m2) = p1.apply(1_000.0, 100.0, 300.0);
        assert_eq!(m2.net_burn, -200.0);
        assert_eq!(m2.cumulative_burn, 0.0);
        assert_eq!(m2.cash_remaining, 1_000.0);
    }

    #[test]
    fn test_runway_interpolates_within_crossing_month() {
        // 10_000 of cash at 4_000/month lasts 2.5 months
        let months = burn_series(10_000.0, 4_000.0, 12);
        assert!((runway_months(10_000.0, &months) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_runway_exact_exhaustion() {
        let months = burn_series(12_000.0, 4_000.0, 12);
        assert!((runway_months(12_000.0, &months) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_runway_extrapolates_past_horizon() {
        let months = burn_series(100_000.0, 10_000.0, 6);
        assert!((runway_months(100_000.0, &months) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_runway_unbounded_without_burn() {
        let months = burn_series(50_000.0, 0.0, 6);
        assert_eq!(runway_months(50_000.0, &months), UNBOUNDED);

        let months = burn_series(50_000.0, -1_000.0, 6);
        assert_eq!(runway_months(50_000.0, &months), UNBOUNDED);
    }

    #[test]
    fn test_runway_saturates() {
        let months = burn_series(1.0e12, 1.0, 3);
        assert_eq!(runway_months(1.0e12, &months), UNBOUNDED);
    }

    #[test]
    fn test_runway_without_cash() {
        let months = burn_series(0.0, 1_000.0, 3);
        assert_eq!(runway_months(0.0, &months), 0.0);
        assert_eq!(runway_months(0.0, &[]), 0.0);
    }
}
