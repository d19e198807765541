use crate::Economy;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

/// Stated labor demand never falls below this per-unit quantity while the
/// wage is positive, so a live labor market cannot stall on zero demand.
const MIN_LABOR_DEMAND_PER_UNIT: f64 = 0.01;

/// A firm class: one record stands for `n` identical units.
///
/// `capital`, `productivity`, `labor_demand`, `output` and `profit` are per
/// unit; quantities cross the market boundary scaled by `n`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firm {
    pub class: String,
    pub n: u32,
    pub capital: f64,
    /// Capital share of the Cobb-Douglas production function.
    pub alpha: f64,
    pub productivity: f64,
    pub investment_rate: f64,
    pub depreciation_rate: f64,
    pub labor_demand: f64,
    pub output: f64,
    pub profit: f64,
    /// Rationed aggregate labor allocated by the labor market this period.
    pub hired: f64,
}

impl Firm {
    /// Labor demanded at the given wage, from the Cobb-Douglas first-order
    /// condition (marginal product of labor = wage). Returns the class
    /// aggregate, floored at `0.01 * n` on a live market; at a collapsed
    /// wage both the stored and the returned demand are exactly zero.
    pub fn decide_labor_demand(&mut self, wage: f64) -> f64 {
        if wage <= 0.0 {
            self.labor_demand = 0.0;
            return 0.0;
        }
        let mpl_coef = (1.0 - self.alpha) * self.productivity;
        let base = mpl_coef * self.capital.powf(self.alpha) / wage;
        self.labor_demand = base.powf(1.0 / (1.0 + self.alpha));

        let n = f64::from(self.n);
        (self.labor_demand * n).max(MIN_LABOR_DEMAND_PER_UNIT * n)
    }

    /// Cobb-Douglas production over capital and rationed labor. `labor` is
    /// the aggregate allocation; output is stored per unit and returned as
    /// the class aggregate.
    pub fn produce(&mut self, labor: f64) -> f64 {
        let per_unit = labor / f64::from(self.n);
        self.output =
            self.productivity * self.capital.powf(self.alpha) * per_unit.powf(1.0 - self.alpha);
        self.output * f64::from(self.n)
    }

    /// Everything produced this period is offered to the goods market.
    pub fn decide_goods_supply(&self) -> f64 {
        self.output * f64::from(self.n)
    }

    /// Sales-based profit: revenue from the rationed quantity actually
    /// sold, labor cost at the cleared wage. Both inputs are aggregates.
    pub fn update_sales(&mut self, actual_sold: f64, price: f64, wage: f64, labor: f64) {
        let n = f64::from(self.n);
        let revenue = price * actual_sold / n;
        let cost = wage * labor / n;
        self.profit = revenue - cost;
    }

    /// Retained-profit investment, suppressed linearly as the interest
    /// rate rises above a 3% reference, less depreciation. Capital never
    /// drops below 1.0.
    pub fn update_capital(&mut self, interest_rate: f64) {
        let rate_factor = (1.1 - 4.0 * (interest_rate - 0.03)).max(0.6);
        let investment = (self.profit * self.investment_rate * rate_factor).max(0.0);
        let depreciation = self.capital * self.depreciation_rate;
        self.capital = (self.capital + investment - depreciation).max(1.0);
    }
}

/// Firms produce from their rationed labor; the sum is the period's output.
pub fn production_system(eco: &mut Economy) {
    profiling::scope!("agents::production_system");
    let Economy {
        ref mut world,
        ref labor_market,
        ref mut aggregates,
        ..
    } = *eco;

    aggregates.output = 0.0;
    for &(id, labor) in labor_market.filled() {
        let f = unwrap_or!(world.firms.get_mut(id), continue);
        f.hired = labor;
        aggregates.output += f.produce(labor);
    }
}

/// Capital accumulation and technology growth. Runs on the pre-update
/// interest rate (the policy phase comes after) and is independent per
/// firm, so the work is fanned out across firms.
pub fn investment_system(eco: &mut Economy) {
    profiling::scope!("agents::investment_system");
    let interest_rate = eco.state.interest_rate;
    let growth = 1.0 + eco.tech_progress_rate;

    let firms: Vec<&mut Firm> = eco.world.firms.values_mut().collect();
    firms.into_par_iter().for_each(|f| {
        f.update_capital(interest_rate);
        f.productivity *= growth;
    });
}

#[cfg(test)]
mod tests {
    use super::Firm;

    fn firm(n: u32) -> Firm {
        Firm {
            class: "test".to_string(),
            n,
            capital: 100.0,
            alpha: 0.33,
            productivity: 1.0,
            investment_rate: 0.25,
            depreciation_rate: 0.025,
            labor_demand: 0.0,
            output: 0.0,
            profit: 0.0,
            hired: 0.0,
        }
    }

    #[test]
    fn labor_demand_follows_first_order_condition() {
        let mut f = firm(10);
        let wage = 4.0;
        let got = f.decide_labor_demand(wage);

        let base = (1.0 - 0.33) * 100.0f64.powf(0.33) / wage;
        let expected = base.powf(1.0 / 1.33);
        assert_delta!(f.labor_demand, expected, 1e-12);
        assert_delta!(got, expected * 10.0, 1e-12);
    }

    #[test]
    fn labor_demand_is_floored_on_live_market() {
        let mut f = firm(10);
        f.productivity = 1e-9;
        assert_eq!(f.decide_labor_demand(1e6), 0.01 * 10.0);
    }

    #[test]
    fn zero_wage_yields_zero_demand() {
        let mut f = firm(10);
        assert_eq!(f.decide_labor_demand(0.0), 0.0);
        assert_eq!(f.labor_demand, 0.0);
        assert_eq!(f.decide_labor_demand(-1.0), 0.0);
    }

    #[test]
    fn production_is_cobb_douglas() {
        let mut f = firm(10);
        let total = f.produce(20.0);

        let expected = 100.0f64.powf(0.33) * 2.0f64.powf(0.67);
        assert_delta!(f.output, expected, 1e-12);
        assert_delta!(total, expected * 10.0, 1e-9);
        assert_delta!(f.decide_goods_supply(), total, 1e-9);

        assert_eq!(f.produce(0.0), 0.0);
    }

    #[test]
    fn sales_based_profit() {
        let mut f = firm(10);
        f.update_sales(50.0, 2.0, 4.0, 20.0);
        // per unit: revenue 2.0 * 5.0, cost 4.0 * 2.0
        assert_delta!(f.profit, 2.0, 1e-12);
    }

    #[test]
    fn capital_is_floored_and_rate_sensitive() {
        let mut f = firm(1);
        f.capital = 1.0;
        f.profit = -100.0;
        f.update_capital(0.03);
        assert_eq!(f.capital, 1.0);

        // at the 3% reference the rate factor is 1.1
        let mut f = firm(1);
        f.profit = 100.0;
        f.update_capital(0.03);
        assert_delta!(f.capital, 100.0 + 100.0 * 0.25 * 1.1 - 2.5, 1e-9);

        // high rates bottom out at a factor of 0.6
        let mut f = firm(1);
        f.profit = 100.0;
        f.update_capital(0.5);
        assert_delta!(f.capital, 100.0 + 100.0 * 0.25 * 0.6 - 2.5, 1e-9);
    }
}
