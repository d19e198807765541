use crate::Economy;
use serde::{Deserialize, Serialize};

/// A household class: one record stands for `n` identical units.
///
/// `labor_supply` and `max_labor_time` are per unit; `income`,
/// `consumption`, `savings` and `desired_consumption` are class
/// aggregates. Quantities cross the market boundary scaled by `n`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Household {
    pub class: String,
    pub n: u32,
    pub income: f64,
    pub consumption: f64,
    pub savings: f64,
    pub propensity_to_consume: f64,
    pub labor_sensitivity: f64,
    pub max_labor_time: f64,
    /// Share of positive savings made available for consumption on top of
    /// income. Zero funds consumption from income alone.
    pub savings_drawdown: f64,
    pub labor_supply: f64,
    pub desired_consumption: f64,
}

impl Household {
    /// Labor supplied at the given wage, clamped per unit to
    /// `[0, max_labor_time]`. Returns the class aggregate.
    pub fn decide_labor(&mut self, wage: f64) -> f64 {
        let raw = self.labor_sensitivity * wage;
        self.labor_supply = raw.clamp(0.0, self.max_labor_time);
        self.labor_supply * f64::from(self.n)
    }

    /// `employment` is the rationed aggregate allocation from the labor
    /// market, not the stated supply.
    pub fn update_income(&mut self, wage: f64, employment: f64) {
        self.income = wage * employment;
    }

    pub fn decide_consumption(&mut self) -> f64 {
        let funds = self.income + self.savings_drawdown * self.savings.max(0.0);
        self.desired_consumption = self.propensity_to_consume * funds;
        self.desired_consumption
    }

    pub fn decide_goods_demand(&self, price: f64) -> f64 {
        if price <= 0.0 {
            return 0.0;
        }
        self.desired_consumption / price
    }

    /// Settles the period: spending equals the rationed goods actually
    /// bought, savings absorb the gap between income and spending.
    pub fn update_consumption(&mut self, actual_goods: f64, price: f64) {
        self.consumption = actual_goods * price;
        self.savings += self.income - self.consumption;
    }
}

/// Households turn their rationed employment into income and plan how much
/// of it to consume. Runs on the cleared wage, after labor rationing.
pub fn consumption_plan_system(eco: &mut Economy) {
    profiling::scope!("agents::consumption_plan_system");
    let Economy {
        ref mut world,
        ref labor_market,
        ..
    } = *eco;

    let wage = labor_market.wage;
    for &(id, employment) in labor_market.employed() {
        let h = unwrap_or!(world.households.get_mut(id), continue);
        h.update_income(wage, employment);
        h.decide_consumption();
    }
}
