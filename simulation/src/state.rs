use serde::{Deserialize, Serialize};

/// The aggregate macro snapshot, owned exclusively by [`crate::Economy`].
///
/// Constructed once from the initial configuration and then mutated in
/// place exactly once per period through [`EconomyState::advance`]; a
/// partially updated state is never observable from outside a step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyState {
    pub period: u64,
    pub output: f64,
    pub inflation: f64,
    pub unemployment: f64,
    pub interest_rate: f64,
    pub wage: f64,
    pub price_level: f64,
}

impl EconomyState {
    /// The single mutation point: increments the period counter and
    /// overwrites every field together.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn advance(
        &mut self,
        output: f64,
        inflation: f64,
        unemployment: f64,
        interest_rate: f64,
        wage: f64,
        price_level: f64,
    ) {
        self.period += 1;
        self.output = output;
        self.inflation = inflation;
        self.unemployment = unemployment;
        self.interest_rate = interest_rate;
        self.wage = wage;
        self.price_level = price_level;
    }

    pub fn record(&self) -> PeriodRecord {
        PeriodRecord {
            period: self.period,
            output: self.output,
            inflation: self.inflation,
            unemployment: self.unemployment,
            rate: self.interest_rate,
            wage: self.wage,
        }
    }
}

/// What one call to the stepping algorithm emits, in period order.
///
/// `rate` is the interest rate proposed this period, i.e. the one that
/// will prevail over the next one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub period: u64,
    pub output: f64,
    pub inflation: f64,
    pub unemployment: f64,
    pub rate: f64,
    pub wage: f64,
}

#[cfg(test)]
mod tests {
    use super::EconomyState;

    #[test]
    fn advance_overwrites_everything() {
        let mut state = EconomyState {
            period: 3,
            output: 680.0,
            inflation: 0.02,
            unemployment: 0.05,
            interest_rate: 0.025,
            wage: 4.0,
            price_level: 1.0,
        };

        state.advance(700.0, 0.03, 0.04, 0.03, 4.2, 1.03);

        assert_eq!(state.period, 4);
        assert_eq!(state.output, 700.0);
        assert_eq!(state.inflation, 0.03);
        assert_eq!(state.unemployment, 0.04);
        assert_eq!(state.interest_rate, 0.03);
        assert_eq!(state.wage, 4.2);
        assert_eq!(state.price_level, 1.03);

        let r = state.record();
        assert_eq!(r.period, 4);
        assert_eq!(r.rate, 0.03);
        assert_eq!(r.wage, 4.2);
    }
}
