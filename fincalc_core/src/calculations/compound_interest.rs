//! # Compound Interest Calculation
//!
//! Grows a principal month by month at a nominal annual rate, adding a level
//! monthly contribution at the end of each month, and records the full
//! month-by-month schedule.
//!
//! ## Method
//!
//! ```text
//! r = annual% / 100 / 12
//! for i in 1..=n:
//!     interest_i = balance * r
//!     balance   += interest_i + contribution
//! ```
//!
//! The balance is iterated rather than computed in closed form so that every
//! schedule row is exactly the running state, and the last row's balance is
//! the reported future value bit-for-bit.
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::calculations::compound_interest::{calculate, CompoundInterestInput};
//!
//! let input = CompoundInterestInput {
//!     principal: 1000.0,
//!     annual_rate_percent: 12.0,
//!     number_of_months: 12,
//!     monthly_contribution: 0.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.future_value - 1126.83).abs() < 0.01);
//! assert_eq!(result.schedule.len(), 12);
//! ```

use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::errors::{CalcError, CalcResult};
use crate::localization::Translate;
use crate::numeric::{monthly_rate_from_annual, require_finite, require_finite_result, MAX_SCHEDULE_MONTHS};
use crate::report::{Reportable, ResultLine, ScheduleLine, ScheduleTable};

/// Input parameters for a compound interest projection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "principal": 1000.0,
///   "annual_rate_percent": 12.0,
///   "number_of_months": 12,
///   "monthly_contribution": 100.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    /// Starting balance (≥ 0)
    pub principal: f64,

    /// Nominal annual interest rate in percent (e.g., 5.0 for 5%)
    pub annual_rate_percent: f64,

    /// Number of monthly compounding periods (≥ 1)
    pub number_of_months: u32,

    /// Amount added at the end of every month (≥ 0)
    #[serde(default)]
    pub monthly_contribution: f64,
}

impl CompoundInterestInput {
    /// Validate input parameters against the default schedule ceiling.
    pub fn validate(&self) -> CalcResult<()> {
        self.validate_with_limit(MAX_SCHEDULE_MONTHS)
    }

    /// Validate input parameters, rejecting schedules longer than `max_months`.
    pub fn validate_with_limit(&self, max_months: u32) -> CalcResult<()> {
        require_finite("principal", self.principal)?;
        require_finite("annual_rate_percent", self.annual_rate_percent)?;
        require_finite("monthly_contribution", self.monthly_contribution)?;

        if self.principal < 0.0 {
            return Err(CalcError::invalid_input(
                "principal",
                self.principal.to_string(),
                "Principal cannot be negative",
            ));
        }
        if self.monthly_contribution < 0.0 {
            return Err(CalcError::invalid_input(
                "monthly_contribution",
                self.monthly_contribution.to_string(),
                "Monthly contribution cannot be negative",
            ));
        }
        if self.number_of_months == 0 {
            return Err(CalcError::invalid_input(
                "number_of_months",
                "0",
                "Number of months must be at least 1",
            ));
        }
        if self.number_of_months > max_months {
            return Err(CalcError::out_of_range(
                "number_of_months",
                self.number_of_months.to_string(),
                max_months.to_string(),
            ));
        }
        Ok(())
    }
}

/// One month of the compound interest schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Month number, starting at 1
    pub period: u32,

    /// Interest earned during this month
    pub interest: f64,

    /// Principal plus all contributions made through this month
    pub cumulative_contributions: f64,

    /// Balance at the end of this month
    pub end_balance: f64,
}

/// Results from a compound interest projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    /// Balance after the final month
    pub future_value: f64,

    /// Principal plus all monthly contributions
    pub total_contributions: f64,

    /// Sum of monthly interest
    pub total_interest: f64,

    /// One row per month, in order
    pub schedule: Vec<ScheduleRow>,
}

/// Calculate with the default schedule ceiling.
pub fn calculate(input: &CompoundInterestInput) -> CalcResult<CompoundInterestResult> {
    calculate_with_limit(input, MAX_SCHEDULE_MONTHS)
}

/// Calculate, rejecting schedules longer than `max_months`.
///
/// # Returns
///
/// * `Ok(CompoundInterestResult)` - Totals and the full monthly schedule
/// * `Err(CalcError)` - If inputs are invalid or the term exceeds `max_months`
pub fn calculate_with_limit(input: &CompoundInterestInput, max_months: u32) -> CalcResult<CompoundInterestResult> {
    input.validate_with_limit(max_months)?;

    let monthly_rate = monthly_rate_from_annual(input.annual_rate_percent);
    let contribution = input.monthly_contribution;

    let mut balance = input.principal;
    let mut total_interest = 0.0;
    let mut schedule = Vec::with_capacity(input.number_of_months as usize);

    for period in 1..=input.number_of_months {
        let interest = balance * monthly_rate;
        balance += interest + contribution;
        total_interest += interest;

        schedule.push(ScheduleRow {
            period,
            interest,
            cumulative_contributions: input.principal + contribution * f64::from(period),
            end_balance: balance,
        });
    }

    Ok(CompoundInterestResult {
        future_value: require_finite_result("future_value", balance)?,
        total_contributions: input.principal + contribution * f64::from(input.number_of_months),
        total_interest: require_finite_result("total_interest", total_interest)?,
        schedule,
    })
}

impl Reportable for CompoundInterestResult {
    fn lines(&self, t: &dyn Translate) -> Vec<ResultLine> {
        let lang = t.language();
        vec![
            ResultLine::new(t, "futureValue", format_currency(self.future_value, lang)),
            ResultLine::new(t, "totalContributions", format_currency(self.total_contributions, lang)),
            ResultLine::new(t, "totalInterest", format_currency(self.total_interest, lang)),
        ]
    }

    fn schedule(&self, t: &dyn Translate) -> Option<ScheduleTable> {
        let lang = t.language();
        let rows = self
            .schedule
            .iter()
            .map(|row| ScheduleLine {
                period: row.period,
                cells: vec![
                    format_currency(row.interest, lang),
                    format_currency(row.cumulative_contributions, lang),
                    format_currency(row.end_balance, lang),
                ],
            })
            .collect();

        Some(ScheduleTable {
            title: t.translate("monthlyBreakdown"),
            headers: ["month", "monthlyInterest", "totalContributions", "endBalance"]
                .iter()
                .map(|key| t.translate(key))
                .collect(),
            rows,
        })
    }
}
