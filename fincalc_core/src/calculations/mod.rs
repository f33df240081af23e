//! # Financial Calculations
//!
//! This module contains every calculator. Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable) with a `validate()` method
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! All inputs are validated up front; a calculation either returns a complete
//! result or an error, never a partial result.
//!
//! ## Available Calculations
//!
//! - [`compound_interest`] - Monthly compounding with contributions and a full schedule
//! - [`simple_interest`] - Interest on principal only
//! - [`savings_goal`] - Monthly contribution needed to reach a target
//! - [`roi`] - Return on investment
//! - [`loan`] - Amortized loan payment with an amortization schedule
//! - [`retirement`] - Retirement savings projection
//! - [`inflation`] - Future cost under inflation
//! - [`break_even`] - Break-even units and revenue
//!
//! ## Dispatch
//!
//! [`CalculationInput`] wraps any of the inputs in a `type`-tagged enum so a
//! calculation can be described in JSON and run without knowing its type:
//!
//! ```rust
//! use fincalc_core::calculations::{CalculationInput, CalculatorKind};
//! use fincalc_core::settings::Settings;
//!
//! let json = r#"{"type": "roi", "initial_investment": 1000.0, "final_value": 1500.0}"#;
//! let input: CalculationInput = serde_json::from_str(json).unwrap();
//! assert_eq!(input.kind(), CalculatorKind::Roi);
//!
//! let output = input.calculate(&Settings::default()).unwrap();
//! assert_eq!(output.kind(), CalculatorKind::Roi);
//! ```

pub mod break_even;
pub mod compound_interest;
pub mod inflation;
pub mod loan;
pub mod retirement;
pub mod roi;
pub mod savings_goal;
pub mod simple_interest;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::localization::Translate;
use crate::report::{CalculationReport, Reportable};
use crate::settings::Settings;

// Re-export commonly used types
pub use break_even::{BreakEvenInput, BreakEvenResult};
pub use compound_interest::{CompoundInterestInput, CompoundInterestResult, ScheduleRow};
pub use inflation::{InflationInput, InflationResult};
pub use loan::{AmortizationRow, LoanInput, LoanResult};
pub use retirement::{RetirementInput, RetirementResult};
pub use roi::{RoiInput, RoiResult};
pub use savings_goal::{SavingsGoalInput, SavingsGoalResult};
pub use simple_interest::{SimpleInterestInput, SimpleInterestResult};

/// The calculators that have a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    #[serde(rename = "compound")]
    CompoundInterest,
    #[serde(rename = "simple")]
    SimpleInterest,
    #[serde(rename = "savings")]
    SavingsGoal,
    Roi,
    Loan,
    Retirement,
    Inflation,
    BreakEven,
}

impl CalculatorKind {
    /// All calculators, in menu order
    pub const ALL: [CalculatorKind; 8] = [
        CalculatorKind::CompoundInterest,
        CalculatorKind::SimpleInterest,
        CalculatorKind::SavingsGoal,
        CalculatorKind::Roi,
        CalculatorKind::Loan,
        CalculatorKind::Retirement,
        CalculatorKind::Inflation,
        CalculatorKind::BreakEven,
    ];

    /// Short identifier used in JSON, on the command line and in asset files
    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorKind::CompoundInterest => "compound",
            CalculatorKind::SimpleInterest => "simple",
            CalculatorKind::SavingsGoal => "savings",
            CalculatorKind::Roi => "roi",
            CalculatorKind::Loan => "loan",
            CalculatorKind::Retirement => "retirement",
            CalculatorKind::Inflation => "inflation",
            CalculatorKind::BreakEven => "break_even",
        }
    }

    /// Parse a slug, accepting `-` or `_` as the separator and any case
    pub fn from_slug(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        CalculatorKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == normalized)
            .ok_or_else(|| CalcError::unknown_calculator(s))
    }

    /// Translation key of the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            CalculatorKind::CompoundInterest => "compoundInterestTitle",
            CalculatorKind::SimpleInterest => "simpleInterestTitle",
            CalculatorKind::SavingsGoal => "savingsGoalTitle",
            CalculatorKind::Roi => "roiTitle",
            CalculatorKind::Loan => "loanTitle",
            CalculatorKind::Retirement => "retirementTitle",
            CalculatorKind::Inflation => "inflationTitle",
            CalculatorKind::BreakEven => "breakEvenTitle",
        }
    }

    /// English name, for logs and untranslated contexts
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorKind::CompoundInterest => "Compound Interest",
            CalculatorKind::SimpleInterest => "Simple Interest",
            CalculatorKind::SavingsGoal => "Savings Goal",
            CalculatorKind::Roi => "Return on Investment",
            CalculatorKind::Loan => "Loan",
            CalculatorKind::Retirement => "Retirement",
            CalculatorKind::Inflation => "Inflation",
            CalculatorKind::BreakEven => "Break-Even Point",
        }
    }

    /// Whether results include a month-by-month table
    pub fn has_schedule(&self) -> bool {
        matches!(self, CalculatorKind::CompoundInterest | CalculatorKind::Loan)
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input for any calculator.
///
/// Serialized with a `type` tag holding the calculator slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationInput {
    #[serde(rename = "compound")]
    CompoundInterest(CompoundInterestInput),
    #[serde(rename = "simple")]
    SimpleInterest(SimpleInterestInput),
    #[serde(rename = "savings")]
    SavingsGoal(SavingsGoalInput),
    #[serde(rename = "roi")]
    Roi(RoiInput),
    #[serde(rename = "loan")]
    Loan(LoanInput),
    #[serde(rename = "retirement")]
    Retirement(RetirementInput),
    #[serde(rename = "inflation")]
    Inflation(InflationInput),
    #[serde(rename = "break_even")]
    BreakEven(BreakEvenInput),
}

impl CalculationInput {
    /// Which calculator this input is for
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationInput::CompoundInterest(_) => CalculatorKind::CompoundInterest,
            CalculationInput::SimpleInterest(_) => CalculatorKind::SimpleInterest,
            CalculationInput::SavingsGoal(_) => CalculatorKind::SavingsGoal,
            CalculationInput::Roi(_) => CalculatorKind::Roi,
            CalculationInput::Loan(_) => CalculatorKind::Loan,
            CalculationInput::Retirement(_) => CalculatorKind::Retirement,
            CalculationInput::Inflation(_) => CalculatorKind::Inflation,
            CalculationInput::BreakEven(_) => CalculatorKind::BreakEven,
        }
    }

    /// Run the calculation this input describes.
    pub fn calculate(&self, settings: &Settings) -> CalcResult<CalculationOutput> {
        let kind = self.kind();
        log::debug!("Calculating {}", kind);

        let output = match self {
            CalculationInput::CompoundInterest(input) => {
                compound_interest::calculate_with_limit(input, settings.max_schedule_months)
                    .map(CalculationOutput::CompoundInterest)
            }
            CalculationInput::SimpleInterest(input) => {
                simple_interest::calculate(input).map(CalculationOutput::SimpleInterest)
            }
            CalculationInput::SavingsGoal(input) => {
                savings_goal::calculate(input).map(CalculationOutput::SavingsGoal)
            }
            CalculationInput::Roi(input) => roi::calculate(input).map(CalculationOutput::Roi),
            CalculationInput::Loan(input) => {
                loan::calculate_with_limit(input, settings.max_schedule_months).map(CalculationOutput::Loan)
            }
            CalculationInput::Retirement(input) => {
                retirement::calculate(input).map(CalculationOutput::Retirement)
            }
            CalculationInput::Inflation(input) => {
                inflation::calculate(input).map(CalculationOutput::Inflation)
            }
            CalculationInput::BreakEven(input) => {
                break_even::calculate(input).map(CalculationOutput::BreakEven)
            }
        };

        match &output {
            Ok(_) => log::debug!("{} calculated", kind),
            Err(e) => log::warn!("{} rejected input: {}", kind, e),
        }
        output
    }
}

/// Result of any calculator, tagged like [`CalculationInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    #[serde(rename = "compound")]
    CompoundInterest(CompoundInterestResult),
    #[serde(rename = "simple")]
    SimpleInterest(SimpleInterestResult),
    #[serde(rename = "savings")]
    SavingsGoal(SavingsGoalResult),
    #[serde(rename = "roi")]
    Roi(RoiResult),
    #[serde(rename = "loan")]
    Loan(LoanResult),
    #[serde(rename = "retirement")]
    Retirement(RetirementResult),
    #[serde(rename = "inflation")]
    Inflation(InflationResult),
    #[serde(rename = "break_even")]
    BreakEven(BreakEvenResult),
}

impl CalculationOutput {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculationOutput::CompoundInterest(_) => CalculatorKind::CompoundInterest,
            CalculationOutput::SimpleInterest(_) => CalculatorKind::SimpleInterest,
            CalculationOutput::SavingsGoal(_) => CalculatorKind::SavingsGoal,
            CalculationOutput::Roi(_) => CalculatorKind::Roi,
            CalculationOutput::Loan(_) => CalculatorKind::Loan,
            CalculationOutput::Retirement(_) => CalculatorKind::Retirement,
            CalculationOutput::Inflation(_) => CalculatorKind::Inflation,
            CalculationOutput::BreakEven(_) => CalculatorKind::BreakEven,
        }
    }

    fn as_reportable(&self) -> &dyn Reportable {
        match self {
            CalculationOutput::CompoundInterest(r) => r,
            CalculationOutput::SimpleInterest(r) => r,
            CalculationOutput::SavingsGoal(r) => r,
            CalculationOutput::Roi(r) => r,
            CalculationOutput::Loan(r) => r,
            CalculationOutput::Retirement(r) => r,
            CalculationOutput::Inflation(r) => r,
            CalculationOutput::BreakEven(r) => r,
        }
    }

    /// Render translated result lines (and the breakdown table, if any)
    pub fn report(&self, t: &dyn Translate) -> CalculationReport {
        let result = self.as_reportable();
        CalculationReport {
            kind: self.kind(),
            language: t.language().to_string(),
            lines: result.lines(t),
            schedule: result.schedule(t),
        }
    }
}
