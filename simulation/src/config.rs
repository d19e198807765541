use common::error::MultiError;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Typed mirror of the YAML configuration document.
///
/// Every field is enumerated here with its default resolved at load time,
/// so the simulation core never falls back on ad-hoc lookups. Unknown keys
/// are rejected by the deserializer; value ranges are checked by
/// [`EconomyConfig::validate`] before any agent is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EconomyConfig {
    /// Household classes by label, e.g. `high_income`. A class with `n = 1`
    /// models a single unit, `n > 1` a representative aggregate.
    pub households: BTreeMap<String, HouseholdClass>,
    /// Firm classes by label, e.g. `small_firms`.
    pub firms: BTreeMap<String, FirmClass>,
    pub central_bank: CentralBankConfig,
    #[serde(default)]
    pub labor_market: LaborMarketConfig,
    #[serde(default)]
    pub goods_market: GoodsMarketConfig,
    pub initial_state: InitialState,
    /// Multiplicative productivity growth applied to every firm each period.
    #[serde(default = "default_tech_progress_rate")]
    pub tech_progress_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HouseholdClass {
    /// Number of identical units this class stands for.
    pub n: u32,
    pub propensity_to_consume: f64,
    pub labor_sensitivity: f64,
    #[serde(default = "default_max_labor_time")]
    pub max_labor_time: f64,
    #[serde(default)]
    pub initial_savings: f64,
    /// Share of positive savings added to consumable funds each period.
    /// Zero keeps consumption funded by income alone.
    #[serde(default)]
    pub savings_drawdown: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FirmClass {
    /// Number of identical units this class stands for.
    pub n: u32,
    pub capital: f64,
    pub alpha: f64,
    pub productivity: f64,
    #[serde(default = "default_investment_rate")]
    pub investment_rate: f64,
    #[serde(default = "default_depreciation_rate")]
    pub depreciation_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CentralBankConfig {
    /// Starting policy rate.
    pub r: f64,
    pub r_star: f64,
    pub pi_star: f64,
    #[serde(alias = "Y_star")]
    pub y_star: f64,
    pub phi_pi: f64,
    pub phi_y: f64,
    #[serde(default)]
    pub r_min: f64,
    #[serde(default = "default_r_max")]
    pub r_max: f64,
    #[serde(default = "default_adjustment_speed")]
    pub adjustment_speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaborMarketConfig {
    #[serde(default = "default_wage_floor")]
    pub wage_floor: f64,
    /// Wage adjustment speed when labor demand exceeds supply.
    #[serde(default = "default_labor_k_up")]
    pub k_up: f64,
    /// Wage adjustment speed when labor demand falls short; smaller than
    /// `k_up` models downward wage rigidity.
    #[serde(default = "default_labor_k_down")]
    pub k_down: f64,
}

impl Default for LaborMarketConfig {
    fn default() -> Self {
        Self {
            wage_floor: default_wage_floor(),
            k_up: default_labor_k_up(),
            k_down: default_labor_k_down(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoodsMarketConfig {
    #[serde(default = "default_price_floor")]
    pub price_floor: f64,
    #[serde(default = "default_goods_k")]
    pub k: f64,
    /// Starting goods price; falls back to `initial_state.price_level`.
    #[serde(default)]
    pub initial_price: Option<f64>,
}

impl Default for GoodsMarketConfig {
    fn default() -> Self {
        Self {
            price_floor: default_price_floor(),
            k: default_goods_k(),
            initial_price: None,
        }
    }
}

/// Seed values for [`crate::EconomyState`]. Only the wage and the price
/// level have no sensible default and must be supplied.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitialState {
    pub wage: f64,
    pub price_level: f64,
    #[serde(default)]
    pub period: u64,
    #[serde(default = "default_output")]
    pub output: f64,
    #[serde(default = "default_inflation")]
    pub inflation: f64,
    #[serde(default = "default_unemployment")]
    pub unemployment: f64,
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,
}

fn default_tech_progress_rate() -> f64 {
    0.005
}
fn default_max_labor_time() -> f64 {
    1.0
}
fn default_investment_rate() -> f64 {
    0.25
}
fn default_depreciation_rate() -> f64 {
    0.025
}
fn default_r_max() -> f64 {
    0.10
}
fn default_adjustment_speed() -> f64 {
    0.3
}
fn default_wage_floor() -> f64 {
    1.0
}
fn default_labor_k_up() -> f64 {
    0.10
}
fn default_labor_k_down() -> f64 {
    0.05
}
fn default_price_floor() -> f64 {
    0.5
}
fn default_goods_k() -> f64 {
    0.05
}
fn default_output() -> f64 {
    680.0
}
fn default_inflation() -> f64 {
    0.02
}
fn default_unemployment() -> f64 {
    0.05
}
fn default_interest_rate() -> f64 {
    0.025
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("no household classes defined")]
    NoHouseholds,
    #[error("no firm classes defined")]
    NoFirms,
    #[error("{0}.{1}: {2}")]
    InvalidField(String, &'static str, String),
}

fn invalid(name: &str, field: &'static str, msg: &str) -> ValidationError {
    ValidationError::InvalidField(name.to_string(), field, msg.to_string())
}

impl EconomyConfig {
    /// Checks every parameter range, reporting all violations at once.
    ///
    /// Comparisons are written so that a NaN never passes.
    pub fn validate(&self) -> Result<(), MultiError<ValidationError>> {
        let mut errors = vec![];

        if self.households.is_empty() {
            errors.push(ValidationError::NoHouseholds);
        }
        if self.firms.is_empty() {
            errors.push(ValidationError::NoFirms);
        }

        for (name, class) in &self.households {
            if class.n == 0 {
                errors.push(invalid(name, "n", "must be at least 1"));
            }
            if !(class.propensity_to_consume > 0.0 && class.propensity_to_consume <= 1.0) {
                errors.push(invalid(name, "propensity_to_consume", "must be in (0, 1]"));
            }
            if !(class.labor_sensitivity >= 0.0) {
                errors.push(invalid(name, "labor_sensitivity", "must not be negative"));
            }
            if !(class.max_labor_time > 0.0) {
                errors.push(invalid(name, "max_labor_time", "must be positive"));
            }
            if !(class.savings_drawdown >= 0.0 && class.savings_drawdown <= 1.0) {
                errors.push(invalid(name, "savings_drawdown", "must be in [0, 1]"));
            }
            if !(class.initial_savings >= 0.0) {
                errors.push(invalid(name, "initial_savings", "must not be negative"));
            }
        }

        for (name, class) in &self.firms {
            if class.n == 0 {
                errors.push(invalid(name, "n", "must be at least 1"));
            }
            if !(class.capital >= 1.0) {
                errors.push(invalid(name, "capital", "must be at least 1.0"));
            }
            if !(class.alpha > 0.0 && class.alpha < 1.0) {
                errors.push(invalid(name, "alpha", "must be in (0, 1)"));
            }
            if !(class.productivity > 0.0) {
                errors.push(invalid(name, "productivity", "must be positive"));
            }
            if !(class.investment_rate >= 0.0 && class.investment_rate <= 1.0) {
                errors.push(invalid(name, "investment_rate", "must be in [0, 1]"));
            }
            if !(class.depreciation_rate >= 0.0 && class.depreciation_rate < 1.0) {
                errors.push(invalid(name, "depreciation_rate", "must be in [0, 1)"));
            }
        }

        let cb = &self.central_bank;
        if !(cb.r_min <= cb.r_max) {
            errors.push(invalid("central_bank", "r_min", "must not exceed r_max"));
        }
        if !(cb.adjustment_speed > 0.0 && cb.adjustment_speed <= 1.0) {
            errors.push(invalid(
                "central_bank",
                "adjustment_speed",
                "must be in (0, 1]",
            ));
        }
        if !(cb.r >= cb.r_min && cb.r <= cb.r_max) {
            errors.push(invalid(
                "central_bank",
                "r",
                "must start within [r_min, r_max]",
            ));
        }

        let lm = &self.labor_market;
        if !(lm.wage_floor > 0.0) {
            errors.push(invalid("labor_market", "wage_floor", "must be positive"));
        }
        if !(lm.k_up >= 0.0) {
            errors.push(invalid("labor_market", "k_up", "must not be negative"));
        }
        if !(lm.k_down >= 0.0) {
            errors.push(invalid("labor_market", "k_down", "must not be negative"));
        }

        let gm = &self.goods_market;
        if !(gm.price_floor > 0.0) {
            errors.push(invalid("goods_market", "price_floor", "must be positive"));
        }
        if !(gm.k >= 0.0) {
            errors.push(invalid("goods_market", "k", "must not be negative"));
        }
        if let Some(p) = gm.initial_price {
            if !(p > 0.0) {
                errors.push(invalid("goods_market", "initial_price", "must be positive"));
            }
        }

        if !(self.initial_state.wage > 0.0) {
            errors.push(invalid("initial_state", "wage", "must be positive"));
        }
        if !(self.initial_state.price_level > 0.0) {
            errors.push(invalid("initial_state", "price_level", "must be positive"));
        }

        if !(self.tech_progress_rate >= 0.0) {
            errors.push(invalid(
                "economy",
                "tech_progress_rate",
                "must not be negative",
            ));
        }

        if !errors.is_empty() {
            return Err(MultiError(errors));
        }
        Ok(())
    }
}
