use crate::config::LaborMarketConfig;
use crate::economy::{clear_price, ration, MARKET_EPSILON};
use crate::world::{FirmID, HouseholdID};
use crate::Economy;
use serde::{Deserialize, Serialize};

/// The labor market. Households offer hours, firms bid for them, the wage
/// steps with the book imbalance and the long side is rationed.
///
/// Wage cuts use a smaller `k` than raises (downward wage rigidity).
#[derive(Serialize, Deserialize)]
pub struct LaborMarket {
    pub wage: f64,
    pub wage_floor: f64,
    pub k_up: f64,
    pub k_down: f64,

    #[serde(skip)]
    offers: Vec<(HouseholdID, f64)>,
    #[serde(skip)]
    bids: Vec<(FirmID, f64)>,
    #[serde(skip)]
    employed: Vec<(HouseholdID, f64)>,
    #[serde(skip)]
    filled: Vec<(FirmID, f64)>,
}

impl LaborMarket {
    pub fn new(wage: f64, cfg: &LaborMarketConfig) -> Self {
        Self {
            wage,
            wage_floor: cfg.wage_floor,
            k_up: cfg.k_up,
            k_down: cfg.k_down,
            offers: Vec::new(),
            bids: Vec::new(),
            employed: Vec::new(),
            filled: Vec::new(),
        }
    }

    pub fn offer(&mut self, id: HouseholdID, hours: f64) {
        self.offers.push((id, hours));
    }

    pub fn bid(&mut self, id: FirmID, hours: f64) {
        self.bids.push((id, hours));
    }

    /// (total offered, total demanded) currently on the books.
    pub fn totals(&self) -> (f64, f64) {
        (
            self.offers.iter().map(|&(_, q)| q).sum(),
            self.bids.iter().map(|&(_, q)| q).sum(),
        )
    }

    /// Wage update, then proportional allocation of the books. A market
    /// with no labor offered at all has collapsed: the wage takes the 0.0
    /// sentinel and nothing trades.
    pub fn clear(&mut self) {
        let (supply, demand) = self.totals();

        if supply <= 0.0 {
            log::warn!("labor market collapsed: nothing offered, wage sentinel 0");
            self.wage = 0.0;
        } else {
            self.wage = clear_price(
                self.wage,
                demand,
                supply,
                self.k_up,
                self.k_down,
                self.wage_floor,
            );
        }

        ration(&self.offers, &self.bids, &mut self.employed, &mut self.filled);
        self.offers.clear();
        self.bids.clear();
    }

    /// Per-household labor actually worked this period.
    pub fn employed(&self) -> &[(HouseholdID, f64)] {
        &self.employed
    }

    /// Per-firm labor actually hired this period.
    pub fn filled(&self) -> &[(FirmID, f64)] {
        &self.filled
    }
}

/// Clears the labor book and records the period's unemployment rate.
pub fn labor_clearing_system(eco: &mut Economy) {
    profiling::scope!("economy::labor_clearing_system");
    let Economy {
        ref mut labor_market,
        ref mut aggregates,
        ..
    } = *eco;

    let (supply, _) = labor_market.totals();
    labor_market.clear();

    let employment: f64 = labor_market.employed().iter().map(|&(_, q)| q).sum();
    aggregates.labor_supply = supply;
    aggregates.employment = employment;
    aggregates.unemployment = if supply > 0.0 {
        ((supply - employment) / supply.max(MARKET_EPSILON)).max(0.0)
    } else {
        0.0
    };
}
