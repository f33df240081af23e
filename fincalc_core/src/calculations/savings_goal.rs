//! # Savings Goal Calculation
//!
//! Solves for the level monthly contribution that grows, together with an
//! initial deposit, to a target amount.
//!
//! ## Method
//!
//! ```text
//! r      = annual% / 100 / 12
//! n      = years * 12
//! FV_pv  = P * (1 + r)^n
//! needed = target - FV_pv
//! PMT    = needed / (((1 + r)^n - 1) / r)
//! ```
//!
//! When the deposit alone already grows past the target, the required
//! contribution is zero and no totals are reported.

use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::errors::{CalcError, CalcResult};
use crate::localization::Translate;
use crate::numeric::{
    annuity_future_value_factor, growth_factor, monthly_rate_from_annual, require_finite, require_finite_result,
    MONTHS_PER_YEAR,
};
use crate::report::{Reportable, ResultLine};

/// Input parameters for a savings goal.
///
/// ## JSON Example
///
/// ```json
/// {
///   "target_future_value": 50000.0,
///   "initial_principal": 5000.0,
///   "years": 5.0,
///   "annual_rate_percent": 4.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalInput {
    /// Amount to reach
    pub target_future_value: f64,

    /// Initial deposit (≥ 0)
    #[serde(default)]
    pub initial_principal: f64,

    /// Years to save (> 0)
    pub years: f64,

    /// Expected annual return in percent
    pub annual_rate_percent: f64,
}

impl SavingsGoalInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("target_future_value", self.target_future_value)?;
        require_finite("initial_principal", self.initial_principal)?;
        require_finite("years", self.years)?;
        require_finite("annual_rate_percent", self.annual_rate_percent)?;

        if self.initial_principal < 0.0 {
            return Err(CalcError::invalid_input(
                "initial_principal",
                self.initial_principal.to_string(),
                "Initial deposit cannot be negative",
            ));
        }
        if self.target_future_value <= self.initial_principal {
            return Err(CalcError::invalid_input(
                "target_future_value",
                self.target_future_value.to_string(),
                "Savings goal must be greater than the initial deposit",
            ));
        }
        if self.years <= 0.0 {
            return Err(CalcError::invalid_input(
                "years",
                self.years.to_string(),
                "Years to save must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a savings goal calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoalResult {
    /// Monthly contribution needed to reach the target
    pub monthly_contribution: f64,

    /// Initial deposit plus all contributions
    pub total_contributions: f64,

    /// Target minus total contributions
    pub total_interest: f64,

    /// True when the deposit alone reaches the target; only the
    /// (zero) contribution is meaningful in that case
    pub goal_met_by_principal: bool,
}

/// Calculate the monthly contribution needed to reach a savings goal.
pub fn calculate(input: &SavingsGoalInput) -> CalcResult<SavingsGoalResult> {
    input.validate()?;

    let monthly_rate = monthly_rate_from_annual(input.annual_rate_percent);
    let months = input.years * MONTHS_PER_YEAR;

    let principal_future_value = input.initial_principal * growth_factor(monthly_rate, months);
    let needed_from_contributions = input.target_future_value - principal_future_value;

    if needed_from_contributions <= 0.0 {
        return Ok(SavingsGoalResult {
            monthly_contribution: 0.0,
            total_contributions: input.initial_principal,
            total_interest: input.target_future_value - input.initial_principal,
            goal_met_by_principal: true,
        });
    }

    let monthly_contribution = require_finite_result(
        "monthly_contribution",
        needed_from_contributions / annuity_future_value_factor(monthly_rate, months),
    )?;
    let total_contributions =
        require_finite_result("total_contributions", input.initial_principal + monthly_contribution * months)?;

    Ok(SavingsGoalResult {
        monthly_contribution,
        total_contributions,
        total_interest: input.target_future_value - total_contributions,
        goal_met_by_principal: false,
    })
}

impl Reportable for SavingsGoalResult {
    fn lines(&self, t: &dyn Translate) -> Vec<ResultLine> {
        let lang = t.language();
        let mut lines = vec![ResultLine::new(
            t,
            "monthlyContributionNeeded",
            format_currency(self.monthly_contribution, lang),
        )];
        if !self.goal_met_by_principal {
            lines.push(ResultLine::new(t, "totalContributions", format_currency(self.total_contributions, lang)));
            lines.push(ResultLine::new(t, "totalInterest", format_currency(self.total_interest, lang)));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Localizer;

    fn test_input() -> SavingsGoalInput {
        SavingsGoalInput {
            target_future_value: 10000.0,
            initial_principal: 0.0,
            years: 1.0,
            annual_rate_percent: 12.0,
        }
    }

    #[test]
    fn test_contribution_reaches_target() {
        let result = calculate(&test_input()).unwrap();
        // 10000 / 12.682503 = 788.49
        assert!((result.monthly_contribution - 788.487886).abs() < 1e-3);
        assert!(!result.goal_met_by_principal);

        // Feed it back through the annuity: it must land on the target
        let fv = result.monthly_contribution * annuity_future_value_factor(0.01, 12.0);
        assert!((fv - 10000.0).abs() < 1e-6);
        assert!((result.total_contributions + result.total_interest - 10000.0).abs() < 1e-9);
    }

    #[test]
    fn test_with_principal() {
        let input = SavingsGoalInput {
            initial_principal: 5000.0,
            ..test_input()
        };
        let result = calculate(&input).unwrap();
        let principal_fv = 5000.0 * 1.01_f64.powi(12);
        let expected = (10000.0 - principal_fv) / annuity_future_value_factor(0.01, 12.0);
        assert!((result.monthly_contribution - expected).abs() < 1e-9);
        assert!((result.total_contributions - (5000.0 + expected * 12.0)).abs() < 1e-9);
    }

    #[test]
    fn test_goal_met_by_principal_growth() {
        let input = SavingsGoalInput {
            target_future_value: 10500.0,
            initial_principal: 10000.0,
            years: 10.0,
            annual_rate_percent: 5.0,
        };
        let result = calculate(&input).unwrap();
        assert!(result.goal_met_by_principal);
        assert_eq!(result.monthly_contribution, 0.0);

        let lines = result.lines(&Localizer::english());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].value, "$0.00");
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let input = SavingsGoalInput {
            annual_rate_percent: 0.0,
            years: 2.0,
            ..test_input()
        };
        let result = calculate(&input).unwrap();
        assert!((result.monthly_contribution - 10000.0 / 24.0).abs() < 1e-9);
        assert!(result.total_interest.abs() < 1e-9);
    }

    #[test]
    fn test_target_not_above_principal_rejected() {
        let input = SavingsGoalInput {
            target_future_value: 5000.0,
            initial_principal: 5000.0,
            ..test_input()
        };
        assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_overflowing_growth_rejected() {
        // Annuity factor overflows while the zero principal's growth is NaN
        let input = SavingsGoalInput {
            annual_rate_percent: 1e6,
            years: 1000.0,
            ..test_input()
        };
        assert!(matches!(calculate(&input), Err(CalcError::OutOfRange { .. })));
    }

    #[test]
    fn test_zero_years_rejected() {
        let input = SavingsGoalInput {
            years: 0.0,
            ..test_input()
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_report_has_three_lines() {
        let lines = calculate(&test_input()).unwrap().lines(&Localizer::english());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].label, "Monthly Contribution Needed");
        assert_eq!(lines[0].value, "$788.49");
    }
}
