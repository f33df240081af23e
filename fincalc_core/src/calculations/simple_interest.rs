//! # Simple Interest Calculation
//!
//! Interest accrues on the original principal only:
//!
//! ```text
//! I  = P * (rate% / 100) * years
//! FV = P + I
//! ```
//!
//! Unlike the other calculators, no sign constraints are applied: a negative
//! principal (a debt) or a negative rate is computed as entered. Only
//! non-finite values are rejected.

use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::errors::CalcResult;
use crate::localization::Translate;
use crate::numeric::{percent_to_decimal, require_finite, require_finite_result};
use crate::report::{Reportable, ResultLine};

/// Input parameters for a simple interest calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    /// Principal amount
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_percent: f64,

    /// Term in years (fractional years allowed)
    pub years: f64,
}

impl SimpleInterestInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("principal", self.principal)?;
        require_finite("annual_rate_percent", self.annual_rate_percent)?;
        require_finite("years", self.years)?;
        Ok(())
    }
}

/// Results from a simple interest calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    /// Principal plus interest
    pub future_value: f64,

    /// Principal, echoed back
    pub principal: f64,

    /// Interest over the whole term
    pub total_interest: f64,
}

/// Calculate simple interest.
pub fn calculate(input: &SimpleInterestInput) -> CalcResult<SimpleInterestResult> {
    input.validate()?;

    let total_interest = require_finite_result(
        "total_interest",
        input.principal * percent_to_decimal(input.annual_rate_percent) * input.years,
    )?;

    Ok(SimpleInterestResult {
        future_value: require_finite_result("future_value", input.principal + total_interest)?,
        principal: input.principal,
        total_interest,
    })
}

impl Reportable for SimpleInterestResult {
    fn lines(&self, t: &dyn Translate) -> Vec<ResultLine> {
        let lang = t.language();
        vec![
            ResultLine::new(t, "futureValue", format_currency(self.future_value, lang)),
            ResultLine::new(t, "principal", format_currency(self.principal, lang)),
            ResultLine::new(t, "totalInterest", format_currency(self.total_interest, lang)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalcError;
    use crate::localization::Localizer;

    #[test]
    fn test_simple_interest() {
        let input = SimpleInterestInput {
            principal: 1000.0,
            annual_rate_percent: 5.0,
            years: 2.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.total_interest - 100.0).abs() < 1e-9);
        assert!((result.future_value - 1100.0).abs() < 1e-9);
        assert_eq!(result.principal, 1000.0);
    }

    #[test]
    fn test_fractional_years() {
        let input = SimpleInterestInput {
            principal: 2000.0,
            annual_rate_percent: 3.0,
            years: 0.5,
        };
        let result = calculate(&input).unwrap();
        assert!((result.total_interest - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_values_are_computed() {
        let input = SimpleInterestInput {
            principal: -1000.0,
            annual_rate_percent: 5.0,
            years: 1.0,
        };
        let result = calculate(&input).unwrap();
        assert!((result.future_value + 1050.0).abs() < 1e-9);
    }

    #[test]
    fn test_overflowing_interest_rejected() {
        let input = SimpleInterestInput {
            principal: 1e300,
            annual_rate_percent: 1e10,
            years: 1e10,
        };
        assert!(matches!(calculate(&input), Err(CalcError::OutOfRange { .. })));
    }

    #[test]
    fn test_nan_rejected() {
        let input = SimpleInterestInput {
            principal: 1000.0,
            annual_rate_percent: f64::NAN,
            years: 1.0,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_report_order() {
        let t = Localizer::english();
        let result = calculate(&SimpleInterestInput {
            principal: 1000.0,
            annual_rate_percent: 5.0,
            years: 2.0,
        })
        .unwrap();
        let lines = result.lines(&t);
        let labels: Vec<_> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Future Value", "Principal", "Total Interest"]);
        assert_eq!(lines[0].value, "$1,100.00");
    }
}
