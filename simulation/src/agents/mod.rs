//! Agent decision rules. One record stands for a whole class of `n`
//! identical units; the systems here put the resulting class aggregates on
//! the market books.

use crate::Economy;

pub mod firm;
pub mod household;

pub use firm::*;
pub use household::*;

/// Households offer labor and firms bid for it, both at the posted wage.
pub fn labor_orders_system(eco: &mut Economy) {
    profiling::scope!("agents::labor_orders_system");
    let Economy {
        ref mut world,
        ref mut labor_market,
        ..
    } = *eco;

    let wage = labor_market.wage;
    for (id, h) in &mut world.households {
        let supply = h.decide_labor(wage);
        labor_market.offer(id, supply);
    }
    for (id, f) in &mut world.firms {
        let demand = f.decide_labor_demand(wage);
        labor_market.bid(id, demand);
    }
}

/// Firms put the period's production on the goods market; households bid
/// their planned consumption at the posted price.
pub fn goods_orders_system(eco: &mut Economy) {
    profiling::scope!("agents::goods_orders_system");
    let Economy {
        ref mut world,
        ref mut goods_market,
        ..
    } = *eco;

    for (id, f) in &world.firms {
        goods_market.offer(id, f.decide_goods_supply());
    }
    let price = goods_market.price;
    for (id, h) in &mut world.households {
        let demand = h.decide_goods_demand(price);
        goods_market.bid(id, demand);
    }
}

/// Trades are booked at the cleared prices: households pay for their
/// rationed goods, firms realize profit from actual sales and the wage
/// bill of the labor they were allocated.
pub fn settlement_system(eco: &mut Economy) {
    profiling::scope!("agents::settlement_system");
    let Economy {
        ref mut world,
        ref labor_market,
        ref goods_market,
        ..
    } = *eco;

    let price = goods_market.price;
    for &(id, goods) in goods_market.bought() {
        let h = unwrap_or!(world.households.get_mut(id), continue);
        h.update_consumption(goods, price);
    }

    let wage = labor_market.wage;
    for &(id, sold) in goods_market.sold() {
        let f = unwrap_or!(world.firms.get_mut(id), continue);
        let labor = f.hired;
        f.update_sales(sold, price, wage, labor);
    }
}
