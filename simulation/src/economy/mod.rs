//! Market mechanics shared by the labor and goods markets: a relative
//! excess-demand price step and proportional rationing of the long side.

pub mod central_bank;
pub mod goods;
pub mod labor;

pub use central_bank::*;
pub use goods::*;
pub use labor::*;

/// Floor put under denominators so an empty market never divides by zero.
pub const MARKET_EPSILON: f64 = 1e-6;

/// One price step from relative excess demand,
/// `p * (1 + k * (d - s) / s)`, floored. `k` may differ between the up
/// and the down direction.
pub fn clear_price(
    price: f64,
    demand: f64,
    supply: f64,
    k_up: f64,
    k_down: f64,
    floor: f64,
) -> f64 {
    let imbalance = (demand - supply) / supply.max(MARKET_EPSILON);
    let k = if imbalance >= 0.0 { k_up } else { k_down };
    (price * (1.0 + k * imbalance)).max(floor)
}

/// Proportional rationing: the short side trades in full, every entry on
/// the long side is scaled by the same factor. Every participant gets an
/// allocation, zero included; books with no positive quantity on either
/// side come out all zero.
pub fn ration<S: Copy, D: Copy>(
    offers: &[(S, f64)],
    bids: &[(D, f64)],
    supplied: &mut Vec<(S, f64)>,
    bought: &mut Vec<(D, f64)>,
) {
    supplied.clear();
    bought.clear();

    let total_supply: f64 = offers.iter().map(|&(_, q)| q).sum();
    let total_demand: f64 = bids.iter().map(|&(_, q)| q).sum();

    if total_supply <= 0.0 && total_demand <= 0.0 {
        supplied.extend(offers.iter().map(|&(id, _)| (id, 0.0)));
        bought.extend(bids.iter().map(|&(id, _)| (id, 0.0)));
        return;
    }

    if total_demand >= total_supply {
        let scale = total_supply / total_demand.max(MARKET_EPSILON);
        supplied.extend(offers.iter().copied());
        bought.extend(bids.iter().map(|&(id, q)| (id, q * scale)));
    } else {
        let scale = total_demand / total_supply.max(MARKET_EPSILON);
        supplied.extend(offers.iter().map(|&(id, q)| (id, q * scale)));
        bought.extend(bids.iter().copied());
    }
}
