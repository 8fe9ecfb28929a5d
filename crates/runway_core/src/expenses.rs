//! Expense amortization
//!
//! Turns headcount and expense rows into the cost charged in a given month.
//! Every month is computed independently from the row lists, so nothing is
//! carried between months.

use std::collections::BTreeMap;

use crate::config::ForecastConfig;
use crate::model::{Assumptions, ExpenseFrequency, ExpenseRow, HeadcountRow};
use crate::month::YearMonth;

/// Category used for rows that do not name one
pub const UNCATEGORIZED: &str = "uncategorized";

/// Annual step escalation: compounds `annual_rate` once per full 12 months
/// elapsed since `since`. Months before `since` get no escalation.
pub fn growth_factor(annual_rate: f64, since: YearMonth, month: YearMonth) -> f64 {
    let elapsed_years = since.months_until(month).max(0) / 12;
    (1.0 + annual_rate / 100.0).powi(elapsed_years)
}

/// Loaded monthly cost of one hire, zero before its start month
pub fn headcount_cost(row: &HeadcountRow, assumptions: &Assumptions, month: YearMonth) -> f64 {
    if !row.is_active(month) {
        return 0.0;
    }
    row.base_salary
        * row.fte
        * (1.0 + assumptions.salary_tax_rate / 100.0)
        * growth_factor(assumptions.salary_growth_rate, row.start_month, month)
}

impl ExpenseFrequency {
    /// Amount charged in `month` for `row` under this frequency
    pub fn amortize(self, row: &ExpenseRow, inflation_rate: f64, month: YearMonth) -> f64 {
        match self {
            ExpenseFrequency::OneTime => {
                if month == row.start_month {
                    row.amount
                } else {
                    0.0
                }
            }
            ExpenseFrequency::Monthly if row.is_active(month) => {
                row.amount * growth_factor(inflation_rate, row.start_month, month)
            }
            ExpenseFrequency::Annual if row.is_active(month) => {
                row.amount / 12.0 * growth_factor(inflation_rate, row.start_month, month)
            }
            ExpenseFrequency::Monthly | ExpenseFrequency::Annual => 0.0,
        }
    }
}

/// Cost of one non-headcount row in `month`
#[inline]
pub fn expense_cost(row: &ExpenseRow, assumptions: &Assumptions, month: YearMonth) -> f64 {
    row.frequency
        .amortize(row, assumptions.inflation_rate, month)
}

/// Expense figures of one month
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpenseMonth {
    pub headcount: f64,
    pub non_headcount: f64,
    pub total: f64,
}

/// Sum every row's cost for `month`
pub fn monthly_expenses(
    headcount: &[HeadcountRow],
    expenses: &[ExpenseRow],
    assumptions: &Assumptions,
    month: YearMonth,
) -> ExpenseMonth {
    let headcount: f64 = headcount
        .iter()
        .map(|row| headcount_cost(row, assumptions, month))
        .sum();
    let non_headcount: f64 = expenses
        .iter()
        .map(|row| expense_cost(row, assumptions, month))
        .sum();

    ExpenseMonth {
        headcount,
        non_headcount,
        total: headcount + non_headcount,
    }
}

fn category_key(category: &str) -> &str {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED
    } else {
        trimmed
    }
}

fn add_month_by_category(
    config: &ForecastConfig,
    month: YearMonth,
    totals: &mut BTreeMap<String, f64>,
) {
    for row in &config.headcount {
        let cost = headcount_cost(row, &config.assumptions, month);
        if cost != 0.0 {
            *totals
                .entry(category_key(&row.category).to_string())
                .or_insert(0.0) += cost;
        }
    }
    for row in &config.expenses {
        let cost = expense_cost(row, &config.assumptions, month);
        if cost != 0.0 {
            *totals
                .entry(category_key(&row.category).to_string())
                .or_insert(0.0) += cost;
        }
    }
}

/// Cost per category in a single month. Headcount and expense rows share
/// category names; categories with no cost that month are omitted.
pub fn expenses_by_category(config: &ForecastConfig, month: YearMonth) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    add_month_by_category(config, month, &mut totals);
    totals
}

/// Cost per category summed over the whole horizon
pub fn category_totals(config: &ForecastConfig) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for index in 0..config.months.min(config.max_months()) {
        add_month_by_category(config, config.month_at(index), &mut totals);
    }
    totals
}
