#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]
#![warn(clippy::iter_over_hash_type)]

use crate::agents::{
    consumption_plan_system, goods_orders_system, investment_system, labor_orders_system,
    production_system, settlement_system, Firm, Household,
};
use crate::config::{EconomyConfig, ValidationError};
use crate::economy::{
    goods_clearing_system, labor_clearing_system, policy_system, CentralBank, GoodsMarket,
    LaborMarket,
};
use crate::utils::scheduler::{RunnableFn, SeqSchedule};
use common::error::MultiError;

#[macro_use]
extern crate common;

#[macro_use]
extern crate log as extern_log;

pub mod agents;
pub mod config;
pub mod economy;
mod state;
#[cfg(test)]
mod tests;
pub mod utils;
mod world;

pub use state::*;
pub use world::*;

/// Cross-agent sums collected while a period runs, reset or overwritten by
/// the phase that owns them. They only become observable once
/// [`EconomyState`] advances at the end of the step.
#[derive(Debug, Default)]
pub(crate) struct Aggregates {
    pub output: f64,
    pub labor_supply: f64,
    pub employment: f64,
    pub unemployment: f64,
    pub inflation: f64,
}

/// The whole closed economy: agent arenas, the two markets, the central
/// bank and the aggregate state. Sole owner and mutator of all of them.
pub struct Economy {
    pub(crate) world: World,
    pub(crate) labor_market: LaborMarket,
    pub(crate) goods_market: GoodsMarket,
    pub(crate) central_bank: CentralBank,
    pub(crate) state: EconomyState,
    pub(crate) aggregates: Aggregates,
    pub(crate) tech_progress_rate: f64,
}

impl Economy {
    /// Builds the economy from a validated configuration. Classes are
    /// seeded in their document (BTreeMap) order, which fixes the arena
    /// iteration order and with it the whole run.
    pub fn from_config(config: &EconomyConfig) -> Result<Economy, MultiError<ValidationError>> {
        config.validate()?;

        let mut world = World::default();
        for (name, class) in &config.households {
            world.insert_household(Household {
                class: name.clone(),
                n: class.n,
                income: 0.0,
                consumption: 0.0,
                savings: class.initial_savings,
                propensity_to_consume: class.propensity_to_consume,
                labor_sensitivity: class.labor_sensitivity,
                max_labor_time: class.max_labor_time,
                savings_drawdown: class.savings_drawdown,
                labor_supply: 0.0,
                desired_consumption: 0.0,
            });
        }
        for (name, class) in &config.firms {
            world.insert_firm(Firm {
                class: name.clone(),
                n: class.n,
                capital: class.capital,
                alpha: class.alpha,
                productivity: class.productivity,
                investment_rate: class.investment_rate,
                depreciation_rate: class.depreciation_rate,
                labor_demand: 0.0,
                output: 0.0,
                profit: 0.0,
                hired: 0.0,
            });
        }

        info!(
            "seeded {} household units and {} firm units from {} classes",
            world.household_units(),
            world.firm_units(),
            world.n_agents()
        );

        let init = &config.initial_state;
        let goods_price = config.goods_market.initial_price.unwrap_or(init.price_level);

        Ok(Economy {
            labor_market: LaborMarket::new(init.wage, &config.labor_market),
            goods_market: GoodsMarket::new(goods_price, &config.goods_market),
            central_bank: CentralBank::new(&config.central_bank),
            state: EconomyState {
                period: init.period,
                output: init.output,
                inflation: init.inflation,
                unemployment: init.unemployment,
                interest_rate: init.interest_rate,
                wage: init.wage,
                price_level: init.price_level,
            },
            aggregates: Aggregates::default(),
            tech_progress_rate: config.tech_progress_rate,
            world,
        })
    }

    /// The period transition as an ordered schedule of named systems.
    /// Every phase reads only what the phases before it produced.
    pub fn schedule() -> SeqSchedule {
        let mut schedule = SeqSchedule::default();
        let systems: [(&'static str, fn(&mut Economy)); 10] = [
            ("labor_orders_system", labor_orders_system),
            ("labor_clearing_system", labor_clearing_system),
            ("production_system", production_system),
            ("consumption_plan_system", consumption_plan_system),
            ("goods_orders_system", goods_orders_system),
            ("goods_clearing_system", goods_clearing_system),
            ("settlement_system", settlement_system),
            ("investment_system", investment_system),
            ("policy_system", policy_system),
            ("state_advance_system", state_advance_system),
        ];
        for (name, f) in systems {
            schedule.add_system(Box::new(RunnableFn { f, name }));
        }
        schedule
    }

    /// Runs one full period and emits its record. Never fails: every
    /// degenerate market condition resolves to a sentinel inside the
    /// schedule.
    pub fn step(&mut self, schedule: &mut SeqSchedule) -> PeriodRecord {
        profiling::scope!("simulation::step");
        schedule.execute(self);

        debug!(
            "period {}: employment {:.2}/{:.2}, output {:.2}",
            self.state.period,
            self.aggregates.employment,
            self.aggregates.labor_supply,
            self.state.output
        );

        self.state.record()
    }

    pub fn state(&self) -> &EconomyState {
        &self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}

/// The atomic end of the period: everything the earlier phases produced is
/// written into the state in one go.
pub fn state_advance_system(eco: &mut Economy) {
    profiling::scope!("state_advance_system");
    let Economy {
        ref mut state,
        ref aggregates,
        ref labor_market,
        ref goods_market,
        ref central_bank,
        ..
    } = *eco;

    state.advance(
        aggregates.output,
        aggregates.inflation,
        aggregates.unemployment,
        central_bank.r,
        labor_market.wage,
        goods_market.price,
    );
}
