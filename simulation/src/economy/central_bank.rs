use crate::config::CentralBankConfig;
use crate::economy::MARKET_EPSILON;
use crate::Economy;
use serde::{Deserialize, Serialize};

/// Monetary policy: a Taylor rule with partial adjustment toward the
/// implied target and hard bounds on the policy rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentralBank {
    /// Current policy rate.
    pub r: f64,
    pub r_star: f64,
    pub pi_star: f64,
    pub y_star: f64,
    pub phi_pi: f64,
    pub phi_y: f64,
    pub r_min: f64,
    pub r_max: f64,
    pub adjustment_speed: f64,
}

impl CentralBank {
    pub fn new(cfg: &CentralBankConfig) -> Self {
        Self {
            r: cfg.r,
            r_star: cfg.r_star,
            pi_star: cfg.pi_star,
            y_star: cfg.y_star,
            phi_pi: cfg.phi_pi,
            phi_y: cfg.phi_y,
            r_min: cfg.r_min,
            r_max: cfg.r_max,
            adjustment_speed: cfg.adjustment_speed,
        }
    }

    /// One smoothed step toward the Taylor target
    /// `r* + phi_pi * (pi - pi*) + phi_y * gap`, clamped to
    /// `[r_min, r_max]`.
    pub fn propose_rate(&mut self, inflation: f64, output: f64) -> f64 {
        let gap = (output - self.y_star) / self.y_star.max(MARKET_EPSILON);
        let target = self.r_star + self.phi_pi * (inflation - self.pi_star) + self.phi_y * gap;

        self.r += self.adjustment_speed * (target - self.r);
        self.r = self.r.clamp(self.r_min, self.r_max);
        self.r
    }
}

/// The policy response to the period's realized inflation and output.
pub fn policy_system(eco: &mut Economy) {
    profiling::scope!("economy::policy_system");
    let Economy {
        ref mut central_bank,
        ref aggregates,
        ..
    } = *eco;

    central_bank.propose_rate(aggregates.inflation, aggregates.output);
}
