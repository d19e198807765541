use crate::config::GoodsMarketConfig;
use crate::economy::{clear_price, ration};
use crate::world::{FirmID, HouseholdID};
use crate::Economy;
use serde::{Deserialize, Serialize};

/// The goods market. Firms offer the period's production, households bid
/// their planned consumption; a single symmetric `k` drives the price.
#[derive(Serialize, Deserialize)]
pub struct GoodsMarket {
    pub price: f64,
    pub price_floor: f64,
    pub k: f64,

    #[serde(skip)]
    offers: Vec<(FirmID, f64)>,
    #[serde(skip)]
    bids: Vec<(HouseholdID, f64)>,
    #[serde(skip)]
    sold: Vec<(FirmID, f64)>,
    #[serde(skip)]
    bought: Vec<(HouseholdID, f64)>,
}

impl GoodsMarket {
    pub fn new(price: f64, cfg: &GoodsMarketConfig) -> Self {
        Self {
            price,
            price_floor: cfg.price_floor,
            k: cfg.k,
            offers: Vec::new(),
            bids: Vec::new(),
            sold: Vec::new(),
            bought: Vec::new(),
        }
    }

    pub fn offer(&mut self, id: FirmID, quantity: f64) {
        self.offers.push((id, quantity));
    }

    pub fn bid(&mut self, id: HouseholdID, quantity: f64) {
        self.bids.push((id, quantity));
    }

    /// (total offered, total demanded) currently on the books.
    pub fn totals(&self) -> (f64, f64) {
        (
            self.offers.iter().map(|&(_, q)| q).sum(),
            self.bids.iter().map(|&(_, q)| q).sum(),
        )
    }

    /// Price update, then proportional allocation of the books. With
    /// nothing produced at all the price resets to the 1.0 numeraire
    /// sentinel.
    pub fn clear(&mut self) {
        let (supply, demand) = self.totals();

        if supply <= 0.0 {
            log::warn!("goods market collapsed: nothing produced, price sentinel 1");
            self.price = 1.0;
        } else {
            self.price = clear_price(self.price, demand, supply, self.k, self.k, self.price_floor);
        }

        ration(&self.offers, &self.bids, &mut self.sold, &mut self.bought);
        self.offers.clear();
        self.bids.clear();
    }

    /// Per-firm quantity actually sold this period.
    pub fn sold(&self) -> &[(FirmID, f64)] {
        &self.sold
    }

    /// Per-household quantity actually bought this period.
    pub fn bought(&self) -> &[(HouseholdID, f64)] {
        &self.bought
    }
}

/// Clears the goods book and records the period's inflation as the price
/// change against the pre-clear price level; a falling price reads as
/// negative inflation.
pub fn goods_clearing_system(eco: &mut Economy) {
    profiling::scope!("economy::goods_clearing_system");
    let Economy {
        ref mut goods_market,
        ref state,
        ref mut aggregates,
        ..
    } = *eco;

    goods_market.clear();

    let base = state.price_level;
    aggregates.inflation = if base > 0.0 {
        (goods_market.price - base) / base
    } else {
        0.0
    };
}

#[cfg(test)]
mod tests {
    use super::GoodsMarket;
    use crate::config::GoodsMarketConfig;
    use crate::world::{FirmID, HouseholdID};
    use slotmapd::HopSlotMap;

    fn market(price: f64) -> GoodsMarket {
        GoodsMarket::new(price, &GoodsMarketConfig::default())
    }

    fn hh_keys(n: usize) -> Vec<HouseholdID> {
        let mut arena: HopSlotMap<HouseholdID, ()> = HopSlotMap::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    fn firm_keys(n: usize) -> Vec<FirmID> {
        let mut arena: HopSlotMap<FirmID, ()> = HopSlotMap::with_key();
        (0..n).map(|_| arena.insert(())).collect()
    }

    #[test]
    fn price_steps_symmetrically() {
        let hh = hh_keys(1);
        let firms = firm_keys(1);

        let mut m = market(1.0);
        m.offer(firms[0], 100.0);
        m.bid(hh[0], 105.0);
        m.clear();
        assert_delta!(m.price, 1.0025, 1e-12);

        let mut m = market(1.0);
        m.offer(firms[0], 100.0);
        m.bid(hh[0], 95.0);
        m.clear();
        assert_delta!(m.price, 0.9975, 1e-12);
    }

    #[test]
    fn price_never_falls_below_the_floor() {
        let mut m = market(0.51);
        m.offer(firm_keys(1)[0], 100.0);
        m.clear();
        assert_eq!(m.price, 0.5);
    }

    #[test]
    fn collapsed_supply_resets_to_the_numeraire() {
        let hh = hh_keys(1);
        let mut m = market(2.4);
        m.bid(hh[0], 80.0);
        m.clear();

        assert_eq!(m.price, 1.0);
        assert_eq!(m.bought(), &[(hh[0], 0.0)]);
    }

    #[test]
    fn scarce_goods_are_rationed_across_buyers() {
        let hh = hh_keys(2);
        let firms = firm_keys(1);

        let mut m = market(1.0);
        m.offer(firms[0], 30.0);
        m.bid(hh[0], 40.0);
        m.bid(hh[1], 20.0);
        m.clear();

        assert_eq!(m.sold(), &[(firms[0], 30.0)]);
        assert_eq!(m.bought(), &[(hh[0], 20.0), (hh[1], 10.0)]);
    }
}
