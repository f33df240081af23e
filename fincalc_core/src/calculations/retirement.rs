//! # Retirement Savings Projection
//!
//! Projects current savings plus a level monthly contribution forward to a
//! retirement age.
//!
//! ```text
//! n  = (retirement_age - current_age) * 12
//! r  = annual% / 100 / 12
//! FV = S(1 + r)^n + C((1 + r)^n - 1) / r
//! ```

use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::errors::{CalcError, CalcResult};
use crate::localization::Translate;
use crate::numeric::{
    annuity_future_value_factor, growth_factor, monthly_rate_from_annual, require_finite, require_finite_result,
};
use crate::report::{Reportable, ResultLine};

/// Oldest accepted retirement age (and so the longest projection)
pub const MAX_AGE: u32 = 150;

/// Input parameters for a retirement projection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "current_age": 30,
///   "retirement_age": 65,
///   "current_savings": 20000.0,
///   "monthly_contribution": 500.0,
///   "annual_return_percent": 7.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementInput {
    /// Age today, in whole years
    pub current_age: u32,

    /// Planned retirement age (must exceed current age)
    pub retirement_age: u32,

    /// Savings today (≥ 0)
    pub current_savings: f64,

    /// Amount added every month
    pub monthly_contribution: f64,

    /// Expected annual return in percent
    pub annual_return_percent: f64,
}

impl RetirementInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("current_savings", self.current_savings)?;
        require_finite("monthly_contribution", self.monthly_contribution)?;
        require_finite("annual_return_percent", self.annual_return_percent)?;

        if self.retirement_age > MAX_AGE {
            return Err(CalcError::out_of_range(
                "retirement_age",
                self.retirement_age.to_string(),
                MAX_AGE.to_string(),
            ));
        }
        if self.current_age >= self.retirement_age {
            return Err(CalcError::invalid_input(
                "retirement_age",
                self.retirement_age.to_string(),
                format!("Retirement age must be greater than current age ({})", self.current_age),
            ));
        }
        if self.current_savings < 0.0 {
            return Err(CalcError::invalid_input(
                "current_savings",
                self.current_savings.to_string(),
                "Current savings cannot be negative",
            ));
        }
        Ok(())
    }

    /// Months until retirement, saturating for spans no calendar holds
    pub fn months_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age).saturating_mul(12)
    }
}

/// Results from a retirement projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    /// Projected balance at retirement
    pub future_value: f64,

    /// Current savings plus all contributions
    pub total_contributions: f64,

    /// Growth beyond contributions
    pub total_interest: f64,
}

/// Project retirement savings.
pub fn calculate(input: &RetirementInput) -> CalcResult<RetirementResult> {
    input.validate()?;

    let months = f64::from(input.months_to_retirement());
    let monthly_rate = monthly_rate_from_annual(input.annual_return_percent);

    let future_value = require_finite_result(
        "future_value",
        input.current_savings * growth_factor(monthly_rate, months)
            + input.monthly_contribution * annuity_future_value_factor(monthly_rate, months),
    )?;
    let total_contributions = input.current_savings + input.monthly_contribution * months;

    Ok(RetirementResult {
        future_value,
        total_contributions,
        total_interest: require_finite_result("total_interest", future_value - total_contributions)?,
    })
}

impl Reportable for RetirementResult {
    fn lines(&self, t: &dyn Translate) -> Vec<ResultLine> {
        let lang = t.language();
        vec![
            ResultLine::new(t, "estimatedRetirementSavings", format_currency(self.future_value, lang)),
            ResultLine::new(t, "totalContributions", format_currency(self.total_contributions, lang)),
            ResultLine::new(t, "totalInterest", format_currency(self.total_interest, lang)),
        ]
    }
}
