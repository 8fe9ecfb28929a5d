//! Plain-text rendering of forecast results
//!
//! Every renderer returns a `String` so the binary decides where it goes.

use std::collections::BTreeMap;
use std::fmt::Write;

use runway_core::model::{ForecastResult, ForecastSummary, is_unbounded};
use serde::Serialize;

/// JSON document of `forecast --format json`. Category totals are present
/// only when requested.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    #[serde(flatten)]
    pub forecast: &'a ForecastResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<&'a BTreeMap<String, f64>>,
}

pub fn json_output<'a>(
    result: &'a ForecastResult,
    categories: Option<&'a BTreeMap<String, f64>>,
) -> JsonOutput<'a> {
    JsonOutput {
        forecast: result,
        categories,
    }
}

/// Whole euros with thousands separators, e.g. `-€12,500`
pub fn format_euros(value: f64) -> String {
    let digits = (value.abs().round() as i64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // `-0` after rounding prints without a sign
    if value < 0.0 && digits != "0" {
        format!("-€{grouped}")
    } else {
        format!("€{grouped}")
    }
}

/// Fixed precision, or "∞" for the unbounded sentinel
pub fn format_metric(value: f64, precision: usize) -> String {
    if is_unbounded(value) {
        "∞".to_string()
    } else {
        format!("{value:.precision$}")
    }
}

fn format_percent(value: f64) -> String {
    if is_unbounded(value) {
        "∞".to_string()
    } else {
        format!("{value:.1}%")
    }
}

/// One row per month
pub fn monthly_table(result: &ForecastResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:>12} {:>14} {:>10} {:>12} {:>12} {:>14}",
        "Month", "MRR", "ARR", "Customers", "Expenses", "Net burn", "Cash"
    );

    for month in &result.months {
        let _ = writeln!(
            out,
            "{:<8} {:>12} {:>14} {:>10.1} {:>12} {:>12} {:>14}",
            month.date.to_string(),
            format_euros(month.total_mrr),
            format_euros(month.total_arr),
            month.total_customers,
            format_euros(month.total_expense),
            format_euros(month.net_burn),
            format_euros(month.cash_remaining),
        );
    }

    out
}

fn summary_rows(summary: &ForecastSummary) -> [(&'static str, String); 14] {
    [
        ("Projected ARR", format_euros(summary.projected_arr)),
        ("Projected MRR", format_euros(summary.projected_mrr)),
        ("Net new ARR", format_euros(summary.net_new_arr)),
        ("Annual NRR", format_percent(summary.annual_nrr)),
        ("Annual GRR", format_percent(summary.annual_grr)),
        ("Customers", format!("{:.1}", summary.total_customers)),
        ("Cash on hand", format_euros(summary.cash_on_hand)),
        ("Monthly burn", format_euros(summary.monthly_burn)),
        ("Runway (months)", format_metric(summary.runway_months, 1)),
        ("CAC", format_euros(summary.cac)),
        ("CAC payback (months)", format_metric(summary.cac_payback_months, 1)),
        ("LTV/CAC", format_metric(summary.ltv_cac_ratio, 2)),
        ("Burn multiple", format_metric(summary.burn_multiple, 2)),
        ("Rule of 40", format_metric(summary.rule_of_40, 1)),
    ]
}

pub fn summary_block(result: &ForecastResult) -> String {
    let mut out = String::new();
    for (label, value) in summary_rows(&result.summary) {
        let _ = writeln!(out, "{label:<22} {value:>14}");
    }

    match result.break_even_month() {
        Some(month) => {
            let _ = writeln!(out, "{:<22} {:>14}", "Break-even", month.date.to_string());
        }
        None => {
            let _ = writeln!(out, "{:<22} {:>14}", "Break-even", "-");
        }
    }
    if let Some(month) = result.cash_out_month() {
        let _ = writeln!(out, "{:<22} {:>14}", "Cash out", month.date.to_string());
    }
    let _ = writeln!(out, "{:<22} {:>14}", "Total revenue", format_euros(result.total_revenue()));
    let _ = writeln!(out, "{:<22} {:>14}", "Total expenses", format_euros(result.total_expense()));

    out
}

pub fn category_table(totals: &BTreeMap<String, f64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<24} {:>14}", "Category", "Total");
    for (category, total) in totals {
        let _ = writeln!(out, "{category:<24} {:>14}", format_euros(*total));
    }
    let grand: f64 = totals.values().sum();
    let _ = writeln!(out, "{:<24} {:>14}", "Total", format_euros(grand));
    out
}

/// Summary metrics side by side, one column per named scenario
pub fn compare_table(scenarios: &[(String, ForecastResult)]) -> String {
    let mut out = String::new();

    let _ = write!(out, "{:<22}", "");
    for (name, _) in scenarios {
        let _ = write!(out, " {name:>16}");
    }
    out.push('\n');

    let columns: Vec<_> = scenarios
        .iter()
        .map(|(_, result)| summary_rows(&result.summary))
        .collect();

    for row in 0..14 {
        let label = columns.first().map_or("", |rows| rows[row].0);
        let _ = write!(out, "{label:<22}");
        for rows in &columns {
            let _ = write!(out, " {:>16}", rows[row].1);
        }
        out.push('\n');
    }

    out
}
