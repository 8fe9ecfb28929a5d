//! Revenue stream simulation
//!
//! Each acquisition channel carries `(customers, mrr)` from month to month.
//! A month applies churn to the existing base, adds this month's new
//! customers, then values the whole base at the channel's per-customer MRR
//! with the expansion uplift: `mrr = customers * entry_mrr * (1 + expansion)`.
//! The uplift belongs to the value per customer, so it never compounds and a
//! customer acquired later is worth exactly as much as an older one.
//!
//! Movements are booked so they reconcile exactly with
//! `mrr = prev_mrr + new_mrr - churned_mrr + expansion_mrr`: churn is valued
//! at the pre-churn MRR, new customers at entry MRR, and expansion is the
//! remaining uplift.

use serde::{Deserialize, Serialize};

use crate::model::{ForecastMonth, PartnerConfig, PlgConfig, RevenueConfig, SalesConfig};

/// Acquisition channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Plg,
    Sales,
    Partners,
}

impl Channel {
    /// This channel's MRR in a forecast month
    pub fn mrr_of(self, month: &ForecastMonth) -> f64 {
        match self {
            Channel::Plg => month.plg_mrr,
            Channel::Sales => month.sales_mrr,
            Channel::Partners => month.partner_mrr,
        }
    }
}

/// Per-month rule of one channel, rates already converted to fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRule {
    /// Trials, SQLs or referrals per month
    pub inflow: f64,
    pub conversion: f64,
    /// Recorded MRR of one new customer before expansion
    pub entry_mrr: f64,
    pub churn: f64,
    pub expansion: f64,
}

impl ChannelRule {
    /// New customers added every month
    #[inline]
    pub fn new_customers(&self) -> f64 {
        self.inflow * self.conversion
    }

    /// Recorded MRR of one customer, uplift included
    #[inline]
    pub fn customer_mrr(&self) -> f64 {
        self.entry_mrr * (1.0 + self.expansion)
    }

    /// Monthly factor applied to an existing cohort's MRR by churn
    #[inline]
    pub fn gross_retention(&self) -> f64 {
        1.0 - self.churn
    }
}

impl From<&PlgConfig> for ChannelRule {
    fn from(plg: &PlgConfig) -> Self {
        Self {
            inflow: plg.monthly_trials,
            conversion: plg.trial_conversion_rate / 100.0,
            entry_mrr: plg.avg_acv / 12.0,
            churn: plg.churn_rate / 100.0,
            expansion: plg.expansion_rate / 100.0,
        }
    }
}

impl From<&SalesConfig> for ChannelRule {
    fn from(sales: &SalesConfig) -> Self {
        Self {
            inflow: sales.monthly_sqls,
            conversion: sales.close_rate / 100.0,
            entry_mrr: sales.avg_acv / 12.0,
            churn: sales.churn_rate / 100.0,
            expansion: sales.expansion_rate / 100.0,
        }
    }
}

impl ChannelRule {
    /// Partners keep `1 - commission` of gross revenue and churn at the global rate
    pub fn partners(partners: &PartnerConfig, global_churn_rate: f64) -> Self {
        Self {
            inflow: partners.monthly_referrals,
            conversion: partners.close_rate / 100.0,
            entry_mrr: partners.avg_acv / 12.0 * (1.0 - partners.commission_rate / 100.0),
            churn: global_churn_rate / 100.0,
            expansion: 0.0,
        }
    }
}

/// Rules for all channels: PLG, sales, partners
pub fn channel_rules(config: &RevenueConfig, global_churn_rate: f64) -> [(Channel, ChannelRule); 3] {
    [
        (Channel::Plg, ChannelRule::from(&config.plg)),
        (Channel::Sales, ChannelRule::from(&config.sales)),
        (
            Channel::Partners,
            ChannelRule::partners(&config.partners, global_churn_rate),
        ),
    ]
}

/// Carried state of one channel. Customers are fractional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelState {
    pub customers: f64,
    pub mrr: f64,
}

/// Outcome of advancing one channel by a month
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelStep {
    pub state: ChannelState,
    pub new_customers: f64,
    pub new_mrr: f64,
    pub churned_mrr: f64,
    pub expansion_mrr: f64,
}

impl ChannelState {
    #[must_use]
    pub fn advance(self, rule: &ChannelRule) -> ChannelStep {
        let churned_mrr = self.mrr * rule.churn;
        let new_customers = rule.new_customers();
        let customers = self.customers * rule.gross_retention() + new_customers;

        let mrr = customers * rule.customer_mrr();
        let new_mrr = new_customers * rule.entry_mrr;
        let expansion_mrr = mrr - (self.mrr - churned_mrr) - new_mrr;

        ChannelStep {
            state: ChannelState { customers, mrr },
            new_customers,
            new_mrr,
            churned_mrr,
            expansion_mrr,
        }
    }
}

/// Revenue figures of one month, combined across channels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevenueMonth {
    pub plg_mrr: f64,
    pub sales_mrr: f64,
    pub partner_mrr: f64,
    pub total_mrr: f64,
    pub total_customers: f64,
    pub new_customers: f64,
    pub new_mrr: f64,
    pub churned_mrr: f64,
    pub expansion_mrr: f64,
}

/// State of every channel, threaded through the month loop
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevenueState {
    pub plg: ChannelState,
    pub sales: ChannelState,
    pub partners: ChannelState,
}

/// Advances all channels under a fixed configuration
#[derive(Debug, Clone, Copy)]
pub struct RevenueSimulator {
    plg: ChannelRule,
    sales: ChannelRule,
    partners: ChannelRule,
}

impl RevenueSimulator {
    pub fn new(config: &RevenueConfig, global_churn_rate: f64) -> Self {
        let [(_, plg), (_, sales), (_, partners)] = channel_rules(config, global_churn_rate);
        Self {
            plg,
            sales,
            partners,
        }
    }

    /// Advance every channel by one month
    pub fn step(&self, state: RevenueState) -> (RevenueState, RevenueMonth) {
        let plg = state.plg.advance(&self.plg);
        let sales = state.sales.advance(&self.sales);
        let partners = state.partners.advance(&self.partners);
        let steps = [plg, sales, partners];

        let month = RevenueMonth {
            plg_mrr: plg.state.mrr,
            sales_mrr: sales.state.mrr,
            partner_mrr: partners.state.mrr,
            total_mrr: steps.iter().map(|s| s.state.mrr).sum(),
            total_customers: steps.iter().map(|s| s.state.customers).sum(),
            new_customers: steps.iter().map(|s| s.new_customers).sum(),
            new_mrr: steps.iter().map(|s| s.new_mrr).sum(),
            churned_mrr: steps.iter().map(|s| s.churned_mrr).sum(),
            expansion_mrr: steps.iter().map(|s| s.expansion_mrr).sum(),
        };

        let next = RevenueState {
            plg: plg.state,
            sales: sales.state,
            partners: partners.state,
        };
        (next, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(inflow: f64, conversion: f64, acv: f64, churn: f64, expansion: f64) -> ChannelRule {
        ChannelRule {
            inflow,
            conversion,
            entry_mrr: acv / 12.0,
            churn,
            expansion,
        }
    }

    fn run(sim: &RevenueSimulator, months: usize) -> Vec<RevenueMonth> {
        let mut state = RevenueState::default();
        (0..months)
            .map(|_| {
                let (next, month) = sim.step(state);
                state = next;
                month
            })
            .collect()
    }

    #[test]
    fn test_first_month_books_new_customers_with_uplift() {
        let step = ChannelState::default().advance(&rule(100.0, 0.1, 1_200.0, 0.05, 0.02));
        assert!((step.state.customers - 10.0).abs() < 1e-9);
        assert!((step.state.mrr - 10.0 * 100.0 * 1.02).abs() < 1e-9);
        assert!((step.new_mrr - 1_000.0).abs() < 1e-9);
        assert!((step.expansion_mrr - 20.0).abs() < 1e-9);
        assert_eq!(step.churned_mrr, 0.0);
    }

    #[test]
    fn test_churn_applies_before_new_customers() {
        let prev = ChannelState {
            customers: 100.0,
            mrr: 10_000.0,
        };
        let step = prev.advance(&rule(50.0, 0.2, 1_200.0, 0.1, 0.0));
        // 100 * 0.9 + 10
        assert!((step.state.customers - 100.0).abs() < 1e-9);
        assert!((step.churned_mrr - 1_000.0).abs() < 1e-9);
        assert!((step.new_mrr - 1_000.0).abs() < 1e-9);
        assert!((step.state.mrr - 10_000.0).abs() < 1e-9);
        assert!(step.expansion_mrr.abs() < 1e-9);
    }

    #[test]
    fn test_base_is_revalued_at_customer_mrr() {
        let prev = ChannelState {
            customers: 10.0,
            mrr: 1_000.0,
        };
        let step = prev.advance(&rule(0.0, 0.0, 1_200.0, 0.1, 0.05));
        // 9 survivors at 105/month
        assert!((step.state.mrr - 945.0).abs() < 1e-9);
        assert!((step.expansion_mrr - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_uplift_does_not_compound() {
        let r = rule(100.0, 0.1, 1_200.0, 0.0, 0.05);
        let mut state = ChannelState::default();
        for month in 1..=12 {
            let step = state.advance(&r);
            state = step.state;
            let customers = 10.0 * month as f64;
            assert!((state.mrr - customers * 100.0 * 1.05).abs() < 1e-6);
            // only the newcomers' uplift is booked as expansion
            assert!((step.expansion_mrr - 50.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_partner_commission_and_global_churn() {
        let partners = PartnerConfig {
            monthly_referrals: 10.0,
            close_rate: 50.0,
            avg_acv: 12_000.0,
            commission_rate: 25.0,
        };
        let rule = ChannelRule::partners(&partners, 3.0);
        assert!((rule.churn - 0.03).abs() < 1e-12);
        assert_eq!(rule.expansion, 0.0);
        // gross 1000/month per customer, 75% retained
        assert!((rule.entry_mrr - 750.0).abs() < 1e-9);

        let step = ChannelState::default().advance(&rule);
        assert!((step.state.mrr - 5.0 * 750.0).abs() < 1e-9);
    }

    #[test]
    fn test_simulator_uses_channel_rules() {
        let config = RevenueConfig::default();
        let sim = RevenueSimulator::new(&config, 3.0);
        let [(_, plg), (_, sales), (_, partners)] = channel_rules(&config, 3.0);
        assert_eq!(sim.plg, plg);
        assert_eq!(sim.sales, sales);
        assert_eq!(sim.partners, partners);
    }

    #[test]
    fn test_movements_reconcile() {
        let sim = RevenueSimulator::new(&RevenueConfig::default(), 3.0);
        let mut prev_mrr = 0.0;
        for m in run(&sim, 36) {
            let expected = prev_mrr + m.new_mrr - m.churned_mrr + m.expansion_mrr;
            assert!(
                (m.total_mrr - expected).abs() < 1e-6,
                "movement mismatch: {} vs {}",
                m.total_mrr,
                expected
            );
            prev_mrr = m.total_mrr;
        }
    }

    #[test]
    fn test_zero_config_stays_flat() {
        let sim = RevenueSimulator::new(&RevenueConfig::zero(), 3.0);
        assert!(run(&sim, 12).iter().all(|m| m.total_mrr == 0.0 && m.total_customers == 0.0));
    }

    #[test]
    fn test_rule_factors() {
        let r = rule(0.0, 0.0, 1_200.0, 0.04, 0.01);
        assert!((r.gross_retention() - 0.96).abs() < 1e-12);
        assert!((r.customer_mrr() - 101.0).abs() < 1e-9);
    }
}
