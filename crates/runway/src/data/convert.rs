use jiff::Timestamp;
use runway_core::model::{
    Assumptions, DEFAULT_REVENUE_CONFIG, ExpenseRow, HeadcountRow, PartnerConfig, PlgConfig,
    RevenueConfig, SalesConfig,
};
use runway_core::{ForecastConfig, HorizonError, MonthParseError, YearMonth};

use super::plan_data::{
    AssumptionsData, ExpenseData, HeadcountData, PartnerData, PlanData, PlgData, RevenueData,
    SalesData,
};

/// Horizon used when a plan does not set one
pub const DEFAULT_MONTHS: usize = 24;

#[derive(Debug, Clone)]
pub enum ConvertError {
    InvalidMonth {
        field: String,
        source: MonthParseError,
    },
    Horizon(HorizonError),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::InvalidMonth { field, source } => {
                write!(f, "Invalid month in {}: {}", field, source)
            }
            ConvertError::Horizon(err) => write!(f, "Invalid horizon: {}", err),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InvalidMonth { source, .. } => Some(source),
            ConvertError::Horizon(err) => Some(err),
        }
    }
}

fn parse_month(field: impl Into<String>, raw: &str) -> Result<YearMonth, ConvertError> {
    YearMonth::parse_date_like(raw).map_err(|source| ConvertError::InvalidMonth {
        field: field.into(),
        source,
    })
}

impl AssumptionsData {
    pub fn to_assumptions(&self) -> Assumptions {
        let defaults = Assumptions::default();
        Assumptions {
            cash_on_hand: self.cash_on_hand.unwrap_or(defaults.cash_on_hand),
            cac: self.cac.unwrap_or(defaults.cac),
            churn_rate: self.churn_rate.unwrap_or(defaults.churn_rate),
            expansion_rate: self.expansion_rate.unwrap_or(defaults.expansion_rate),
            base_acv: self.base_acv.unwrap_or(defaults.base_acv),
            salary_tax_rate: self.salary_tax_rate.unwrap_or(defaults.salary_tax_rate),
            salary_growth_rate: self.salary_growth_rate.unwrap_or(defaults.salary_growth_rate),
            inflation_rate: self.inflation_rate.unwrap_or(defaults.inflation_rate),
        }
    }

    pub fn from_assumptions(assumptions: &Assumptions) -> Self {
        Self {
            cash_on_hand: Some(assumptions.cash_on_hand),
            cac: Some(assumptions.cac),
            churn_rate: Some(assumptions.churn_rate),
            expansion_rate: Some(assumptions.expansion_rate),
            base_acv: Some(assumptions.base_acv),
            salary_tax_rate: Some(assumptions.salary_tax_rate),
            salary_growth_rate: Some(assumptions.salary_growth_rate),
            inflation_rate: Some(assumptions.inflation_rate),
        }
    }
}

impl PlgData {
    fn to_config(&self, assumptions: &Assumptions) -> PlgConfig {
        PlgConfig {
            monthly_trials: self.monthly_trials,
            trial_conversion_rate: self.trial_conversion_rate,
            avg_acv: self.avg_acv.unwrap_or(assumptions.base_acv),
            churn_rate: self.churn_rate.unwrap_or(assumptions.churn_rate),
            expansion_rate: self.expansion_rate.unwrap_or(assumptions.expansion_rate),
        }
    }
}

impl SalesData {
    fn to_config(&self, assumptions: &Assumptions) -> SalesConfig {
        SalesConfig {
            monthly_sqls: self.monthly_sqls,
            close_rate: self.close_rate,
            avg_acv: self.avg_acv.unwrap_or(assumptions.base_acv),
            churn_rate: self.churn_rate.unwrap_or(assumptions.churn_rate),
            expansion_rate: self.expansion_rate.unwrap_or(assumptions.expansion_rate),
        }
    }
}

impl PartnerData {
    fn to_config(&self, assumptions: &Assumptions) -> PartnerConfig {
        PartnerConfig {
            monthly_referrals: self.monthly_referrals,
            close_rate: self.close_rate,
            avg_acv: self.avg_acv.unwrap_or(assumptions.base_acv),
            commission_rate: self.commission_rate,
        }
    }
}

impl RevenueData {
    pub fn to_revenue_config(&self, assumptions: &Assumptions) -> RevenueConfig {
        RevenueConfig {
            plg: self
                .plg
                .as_ref()
                .map_or(DEFAULT_REVENUE_CONFIG.plg, |plg| plg.to_config(assumptions)),
            sales: self
                .sales
                .as_ref()
                .map_or(DEFAULT_REVENUE_CONFIG.sales, |sales| {
                    sales.to_config(assumptions)
                }),
            partners: self
                .partners
                .as_ref()
                .map_or(DEFAULT_REVENUE_CONFIG.partners, |partners| {
                    partners.to_config(assumptions)
                }),
        }
    }

    pub fn from_revenue_config(revenue: &RevenueConfig) -> Self {
        Self {
            plg: Some(PlgData {
                monthly_trials: revenue.plg.monthly_trials,
                trial_conversion_rate: revenue.plg.trial_conversion_rate,
                avg_acv: Some(revenue.plg.avg_acv),
                churn_rate: Some(revenue.plg.churn_rate),
                expansion_rate: Some(revenue.plg.expansion_rate),
            }),
            sales: Some(SalesData {
                monthly_sqls: revenue.sales.monthly_sqls,
                close_rate: revenue.sales.close_rate,
                avg_acv: Some(revenue.sales.avg_acv),
                churn_rate: Some(revenue.sales.churn_rate),
                expansion_rate: Some(revenue.sales.expansion_rate),
            }),
            partners: Some(PartnerData {
                monthly_referrals: revenue.partners.monthly_referrals,
                close_rate: revenue.partners.close_rate,
                avg_acv: Some(revenue.partners.avg_acv),
                commission_rate: revenue.partners.commission_rate,
            }),
        }
    }
}

impl HeadcountData {
    fn to_row(&self, index: usize) -> Result<HeadcountRow, ConvertError> {
        let start_month = parse_month(format!("headcount[{index}].start_month"), &self.start_month)?;
        Ok(HeadcountRow {
            role: self.role.clone(),
            category: self.category.clone().unwrap_or_default(),
            base_salary: self.base_salary,
            fte: self.fte.unwrap_or(1.0),
            start_month,
        })
    }
}

impl ExpenseData {
    fn to_row(&self, index: usize) -> Result<ExpenseRow, ConvertError> {
        let start_month = parse_month(format!("expenses[{index}].start_month"), &self.start_month)?;
        let end_month = self
            .end_month
            .as_deref()
            .map(|raw| parse_month(format!("expenses[{index}].end_month"), raw))
            .transpose()?;
        Ok(ExpenseRow {
            name: self.name.clone(),
            category: self.category.clone().unwrap_or_default(),
            amount: self.amount,
            frequency: self.frequency,
            start_month,
            end_month,
        })
    }
}

impl PlanData {
    /// Resolve the plan into an engine config, applying defaults for every
    /// unset field
    pub fn to_forecast_config(&self) -> Result<ForecastConfig, ConvertError> {
        let start_month = match self.start_month.as_deref() {
            Some(raw) => parse_month("start_month", raw)?,
            None => YearMonth::from_timestamp(Timestamp::now()),
        };

        let assumptions = self.assumptions.to_assumptions();
        let revenue = self
            .revenue
            .as_ref()
            .map_or(DEFAULT_REVENUE_CONFIG, |r| r.to_revenue_config(&assumptions));

        let headcount = self
            .headcount
            .iter()
            .enumerate()
            .map(|(i, row)| row.to_row(i))
            .collect::<Result<Vec<_>, _>>()?;
        let expenses = self
            .expenses
            .iter()
            .enumerate()
            .map(|(i, row)| row.to_row(i))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            start = %start_month,
            headcount = headcount.len(),
            expenses = expenses.len(),
            "resolved plan"
        );

        let config = ForecastConfig {
            start_month,
            months: self.months.unwrap_or(DEFAULT_MONTHS),
            revenue,
            headcount,
            expenses,
            assumptions,
        };
        config.check_horizon().map_err(ConvertError::Horizon)?;
        Ok(config)
    }

    /// Fully-specified plan mirroring `config`
    pub fn from_forecast_config(name: Option<String>, config: &ForecastConfig) -> Self {
        Self {
            name,
            start_month: Some(config.start_month.to_string()),
            months: Some(config.months),
            assumptions: AssumptionsData::from_assumptions(&config.assumptions),
            revenue: Some(RevenueData::from_revenue_config(&config.revenue)),
            headcount: config
                .headcount
                .iter()
                .map(|row| HeadcountData {
                    role: row.role.clone(),
                    category: (!row.category.is_empty()).then(|| row.category.clone()),
                    base_salary: row.base_salary,
                    fte: Some(row.fte),
                    start_month: row.start_month.to_string(),
                })
                .collect(),
            expenses: config
                .expenses
                .iter()
                .map(|row| ExpenseData {
                    name: row.name.clone(),
                    category: (!row.category.is_empty()).then(|| row.category.clone()),
                    amount: row.amount,
                    frequency: row.frequency,
                    start_month: row.start_month.to_string(),
                    end_month: row.end_month.map(|m| m.to_string()),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway_core::model::ExpenseFrequency;

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_plan_uses_defaults() {
        let plan = PlanData {
            start_month: Some("2025-01".into()),
            ..Default::default()
        };
        let config = plan.to_forecast_config().unwrap();
        assert_eq!(config.start_month, ym("2025-01"));
        assert_eq!(config.months, DEFAULT_MONTHS);
        assert_eq!(config.assumptions, Assumptions::default());
        assert_eq!(config.revenue, DEFAULT_REVENUE_CONFIG);
    }

    #[test]
    fn test_documented_assumption_defaults() {
        let a = AssumptionsData::default().to_assumptions();
        assert_eq!(a.cac, 5_000.0);
        assert_eq!(a.churn_rate, 3.0);
        assert_eq!(a.expansion_rate, 5.0);
        assert_eq!(a.base_acv, 12_000.0);
        assert_eq!(a.salary_tax_rate, 35.0);
        assert_eq!(a.salary_growth_rate, 5.0);
        assert_eq!(a.inflation_rate, 2.0);
    }

    #[test]
    fn test_channels_fall_back_to_global_assumptions() {
        let plan = PlanData {
            start_month: Some("2025-01".into()),
            assumptions: AssumptionsData {
                churn_rate: Some(6.0),
                expansion_rate: Some(1.5),
                base_acv: Some(9_600.0),
                ..Default::default()
            },
            revenue: Some(RevenueData {
                plg: Some(PlgData {
                    monthly_trials: 50.0,
                    trial_conversion_rate: 10.0,
                    ..Default::default()
                }),
                sales: None,
                partners: Some(PartnerData {
                    monthly_referrals: 2.0,
                    close_rate: 50.0,
                    avg_acv: None,
                    commission_rate: 15.0,
                }),
            }),
            ..Default::default()
        };
        let config = plan.to_forecast_config().unwrap();
        assert_eq!(config.revenue.plg.avg_acv, 9_600.0);
        assert_eq!(config.revenue.plg.churn_rate, 6.0);
        assert_eq!(config.revenue.plg.expansion_rate, 1.5);
        assert_eq!(config.revenue.sales, DEFAULT_REVENUE_CONFIG.sales);
        assert_eq!(config.revenue.partners.avg_acv, 9_600.0);
        assert_eq!(config.revenue.partners.commission_rate, 15.0);
    }

    #[test]
    fn test_rows_accept_date_like_months() {
        let plan = PlanData {
            start_month: Some("2025-01-01".into()),
            headcount: vec![HeadcountData {
                role: "Engineer".into(),
                category: Some("engineering".into()),
                base_salary: 8_000.0,
                fte: None,
                start_month: "2025-02-15T09:00:00Z".into(),
            }],
            expenses: vec![ExpenseData {
                name: "Office".into(),
                category: None,
                amount: 2_000.0,
                frequency: ExpenseFrequency::Monthly,
                start_month: "2025-01".into(),
                end_month: Some("2025-12-31".into()),
            }],
            ..Default::default()
        };
        let config = plan.to_forecast_config().unwrap();
        assert_eq!(config.start_month, ym("2025-01"));
        assert_eq!(config.headcount[0].start_month, ym("2025-02"));
        assert_eq!(config.headcount[0].fte, 1.0);
        assert_eq!(config.headcount[0].category, "engineering");
        assert_eq!(config.expenses[0].end_month, Some(ym("2025-12")));
        assert_eq!(config.expenses[0].category, "");
    }

    #[test]
    fn test_invalid_month_names_field() {
        let plan = PlanData {
            start_month: Some("2025-01".into()),
            expenses: vec![ExpenseData {
                name: "Broken".into(),
                category: None,
                amount: 1.0,
                frequency: ExpenseFrequency::Annual,
                start_month: "2025-01".into(),
                end_month: Some("soon".into()),
            }],
            ..Default::default()
        };
        let err = plan.to_forecast_config().unwrap_err();
        assert!(err.to_string().contains("expenses[0].end_month"));
    }

    #[test]
    fn test_horizon_past_year_range_is_rejected() {
        let plan = PlanData {
            start_month: Some("9999-01".into()),
            months: Some(13),
            ..Default::default()
        };
        let err = plan.to_forecast_config().unwrap_err();
        assert!(matches!(err, ConvertError::Horizon(HorizonError { limit: 12, .. })));

        let plan = PlanData {
            months: Some(12),
            ..plan
        };
        assert!(plan.to_forecast_config().is_ok());
    }

    #[test]
    fn test_plan_from_config_converts_back() {
        let start = ym("2025-03");
        let mut config = ForecastConfig::new(start, 12);
        config.headcount.push(HeadcountRow::new("CTO", 9_000.0, start).with_category("eng"));
        config.expenses.push(
            ExpenseRow::new("Rent", 2_500.0, ExpenseFrequency::Monthly, start)
                .ending(ym("2025-12")),
        );

        let plan = PlanData::from_forecast_config(Some("Sample".into()), &config);
        assert_eq!(plan.to_forecast_config().unwrap(), config);
    }
}
