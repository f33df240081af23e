//! # Inflation Calculation
//!
//! Future cost of an amount under constant annual inflation, compounded
//! yearly:
//!
//! ```text
//! future = amount * (1 + rate% / 100)^years
//! lost   = future - amount
//! ```

use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::errors::{CalcError, CalcResult};
use crate::localization::Translate;
use crate::numeric::{growth_factor, percent_to_decimal, require_finite, require_finite_result};
use crate::report::{Reportable, ResultLine};

/// Input parameters for an inflation projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationInput {
    /// Amount in today's money (> 0)
    pub initial_amount: f64,

    /// Annual inflation rate in percent (≥ 0)
    pub inflation_rate_percent: f64,

    /// Years ahead (> 0, fractional allowed)
    pub years: f64,
}

impl InflationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("initial_amount", self.initial_amount)?;
        require_finite("inflation_rate_percent", self.inflation_rate_percent)?;
        require_finite("years", self.years)?;

        if self.initial_amount <= 0.0 {
            return Err(CalcError::invalid_input(
                "initial_amount",
                self.initial_amount.to_string(),
                "Initial amount must be positive",
            ));
        }
        if self.inflation_rate_percent < 0.0 {
            return Err(CalcError::invalid_input(
                "inflation_rate_percent",
                self.inflation_rate_percent.to_string(),
                "Inflation rate cannot be negative",
            ));
        }
        if self.years <= 0.0 {
            return Err(CalcError::invalid_input(
                "years",
                self.years.to_string(),
                "Number of years must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from an inflation projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationResult {
    /// What the same goods will cost
    pub future_cost: f64,

    /// Future cost minus today's amount
    pub purchasing_power_lost: f64,
}

/// Project the future cost of an amount under inflation.
pub fn calculate(input: &InflationInput) -> CalcResult<InflationResult> {
    input.validate()?;

    let future_cost = require_finite_result(
        "future_cost",
        input.initial_amount * growth_factor(percent_to_decimal(input.inflation_rate_percent), input.years),
    )?;
    Ok(InflationResult {
        future_cost,
        purchasing_power_lost: future_cost - input.initial_amount,
    })
}

impl Reportable for InflationResult {
    fn lines(&self, t: &dyn Translate) -> Vec<ResultLine> {
        let lang = t.language();
        vec![
            ResultLine::new(t, "futureCost", format_currency(self.future_cost, lang)),
            ResultLine::new(t, "purchasingPowerLost", format_currency(self.purchasing_power_lost, lang)),
        ]
    }
}
