//! # Return on Investment
//!
//! ```text
//! profit = final - initial
//! ROI%   = profit / initial * 100
//! ```

use serde::{Deserialize, Serialize};

use crate::currency::{format_currency, format_percent};
use crate::errors::{CalcError, CalcResult};
use crate::localization::Translate;
use crate::numeric::{require_finite, require_finite_result};
use crate::report::{Reportable, ResultLine};

/// Input parameters for an ROI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    /// Amount invested (must not be zero)
    pub initial_investment: f64,

    /// Value of the investment at the end
    pub final_value: f64,
}

impl RoiInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("initial_investment", self.initial_investment)?;
        require_finite("final_value", self.final_value)?;

        if self.initial_investment == 0.0 {
            return Err(CalcError::invalid_input(
                "initial_investment",
                "0",
                "Initial investment cannot be zero",
            ));
        }
        Ok(())
    }
}

/// Results from an ROI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Return as a percentage of the initial investment
    pub roi_percent: f64,

    /// Final value minus initial investment
    pub net_profit: f64,
}

/// Calculate return on investment.
pub fn calculate(input: &RoiInput) -> CalcResult<RoiResult> {
    input.validate()?;

    let net_profit = require_finite_result("net_profit", input.final_value - input.initial_investment)?;
    Ok(RoiResult {
        roi_percent: require_finite_result("roi_percent", net_profit / input.initial_investment * 100.0)?,
        net_profit,
    })
}

impl Reportable for RoiResult {
    fn lines(&self, t: &dyn Translate) -> Vec<ResultLine> {
        vec![
            ResultLine::new(t, "roiPercentage", format_percent(self.roi_percent)),
            ResultLine::new(t, "netProfit", format_currency(self.net_profit, t.language())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Localizer;

    #[test]
    fn test_roi() {
        let result = calculate(&RoiInput {
            initial_investment: 1000.0,
            final_value: 1500.0,
        })
        .unwrap();
        assert_eq!(result.roi_percent, 50.0);
        assert_eq!(result.net_profit, 500.0);

        let lines = result.lines(&Localizer::english());
        assert_eq!(lines[0].value, "50.00%");
        assert_eq!(lines[1].value, "$500.00");
    }

    #[test]
    fn test_loss() {
        let result = calculate(&RoiInput {
            initial_investment: 2000.0,
            final_value: 1500.0,
        })
        .unwrap();
        assert_eq!(result.roi_percent, -25.0);
        assert_eq!(result.net_profit, -500.0);
    }

    #[test]
    fn test_overflowing_percentage_rejected() {
        let input = RoiInput {
            initial_investment: 1e-300,
            final_value: 1e300,
        };
        assert!(matches!(calculate(&input), Err(CalcError::OutOfRange { .. })));
    }

    #[test]
    fn test_zero_investment_rejected() {
        for final_value in [0.0, 100.0, -5.0] {
            let input = RoiInput {
                initial_investment: 0.0,
                final_value,
            };
            assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));
        }
    }
}
