//! # Calculator Sessions
//!
//! A [`CalculatorSession`] is what a front end holds for one calculator page:
//! the raw text of each input field and the outcome of the last calculation.
//!
//! ```text
//! Idle --calculate--> Computed | Failed
//! any  --calculate--> Computed | Failed   (previous outcome replaced)
//! any  --reset------> Idle                (fields cleared, nothing computed)
//! ```
//!
//! A session never keeps a partial result: `calculate` either stores a full
//! report or the error that prevented one.
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::calculations::CalculatorKind;
//! use fincalc_core::localization::Localizer;
//! use fincalc_core::session::{CalculatorSession, SessionState};
//! use fincalc_core::settings::Settings;
//!
//! let mut session = CalculatorSession::new(CalculatorKind::Roi);
//! session.set_field("initialInvestment", "1,000").unwrap();
//! session.set_field("finalValue", "1,500").unwrap();
//!
//! let t = Localizer::english();
//! match session.calculate(&Settings::default(), &t) {
//!     SessionState::Computed { report, .. } => {
//!         assert_eq!(report.value_of("ROI Percentage"), Some("50.00%"));
//!     }
//!     other => panic!("unexpected state: {:?}", other),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::{
    BreakEvenInput, CalculationInput, CalculationOutput, CalculatorKind, CompoundInterestInput, InflationInput,
    LoanInput, RetirementInput, RoiInput, SavingsGoalInput, SimpleInterestInput,
};
use crate::currency::currency_profile;
use crate::errors::{CalcError, CalcResult};
use crate::input::{
    format_for_display, parse_for_calculation, parse_optional_decimal, parse_required_decimal, parse_whole_number,
};
use crate::localization::Translate;
use crate::report::CalculationReport;
use crate::settings::Settings;

/// What kind of quantity a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldUnit {
    /// Money, echoed with thousands separators
    Currency,
    /// Percentage rate
    Percent,
    /// Whole number (months, ages)
    Count,
    /// Number of years, fractional allowed
    Years,
}

impl FieldUnit {
    /// Short unit shown next to the input box
    pub fn suffix(&self, t: &dyn Translate) -> String {
        match self {
            FieldUnit::Currency => currency_profile(t.language()).symbol.to_string(),
            FieldUnit::Percent => "%".to_string(),
            FieldUnit::Count => String::new(),
            FieldUnit::Years => t.translate("yearsUnit"),
        }
    }
}

/// One input field of a calculator page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Stable identifier used by [`CalculatorSession::set_field`]
    pub id: &'static str,
    /// Translation key of the label
    pub label_key: &'static str,
    pub unit: FieldUnit,
    /// Value used when the field is left blank; `None` means the field is required
    pub default: Option<f64>,
}

const fn field(id: &'static str, label_key: &'static str, unit: FieldUnit) -> FieldSpec {
    FieldSpec {
        id,
        label_key,
        unit,
        default: None,
    }
}

const fn defaulted(id: &'static str, label_key: &'static str, unit: FieldUnit, default: f64) -> FieldSpec {
    FieldSpec {
        id,
        label_key,
        unit,
        default: Some(default),
    }
}

use FieldUnit::{Count, Currency, Percent, Years};

const COMPOUND_FIELDS: &[FieldSpec] = &[
    defaulted("principal", "principal", Currency, 0.0),
    field("rate", "annualRate", Percent),
    field("months", "numberOfMonths", Count),
    defaulted("contribution", "monthlyContribution", Currency, 0.0),
];

const SIMPLE_FIELDS: &[FieldSpec] = &[
    field("principal", "principal", Currency),
    field("rate", "annualRate", Percent),
    field("years", "years", Years),
];

const SAVINGS_FIELDS: &[FieldSpec] = &[
    field("target", "savingsGoal", Currency),
    defaulted("principal", "initialDeposit", Currency, 0.0),
    field("years", "yearsToSave", Years),
    field("rate", "estimatedAnnualRate", Percent),
];

const ROI_FIELDS: &[FieldSpec] = &[
    field("initialInvestment", "initialInvestment", Currency),
    field("finalValue", "finalValueOfInvestment", Currency),
];

const LOAN_FIELDS: &[FieldSpec] = &[
    field("loanAmount", "loanAmount", Currency),
    field("interestRate", "annualRate", Percent),
    field("loanTerm", "loanTermInYears", Years),
];

const RETIREMENT_FIELDS: &[FieldSpec] = &[
    field("currentAge", "currentAge", Count),
    field("retirementAge", "retirementAge", Count),
    field("currentSavings", "currentSavings", Currency),
    field("monthlyContribution", "monthlyContribution", Currency),
    field("annualReturn", "estimatedAnnualReturn", Percent),
];

const INFLATION_FIELDS: &[FieldSpec] = &[
    field("initialAmount", "initialAmount", Currency),
    field("inflationRate", "annualInflationRate", Percent),
    field("years", "numberOfYears", Years),
];

const BREAK_EVEN_FIELDS: &[FieldSpec] = &[
    field("fixedCosts", "totalFixedCosts", Currency),
    field("variableCostPerUnit", "variableCostPerUnit", Currency),
    field("pricePerUnit", "pricePerUnit", Currency),
];

/// Input fields of a calculator page, in display order
pub fn fields(kind: CalculatorKind) -> &'static [FieldSpec] {
    match kind {
        CalculatorKind::CompoundInterest => COMPOUND_FIELDS,
        CalculatorKind::SimpleInterest => SIMPLE_FIELDS,
        CalculatorKind::SavingsGoal => SAVINGS_FIELDS,
        CalculatorKind::Roi => ROI_FIELDS,
        CalculatorKind::Loan => LOAN_FIELDS,
        CalculatorKind::Retirement => RETIREMENT_FIELDS,
        CalculatorKind::Inflation => INFLATION_FIELDS,
        CalculatorKind::BreakEven => BREAK_EVEN_FIELDS,
    }
}

/// Outcome of the last calculation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Nothing calculated since creation or the last reset
    #[default]
    Idle,
    /// The last calculation succeeded
    Computed {
        output: CalculationOutput,
        report: CalculationReport,
    },
    /// The last calculation was rejected
    Failed(CalcError),
}

/// Field values and last outcome for one calculator
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    kind: CalculatorKind,
    /// Sanitised text, aligned with `fields(kind)`
    values: Vec<String>,
    state: SessionState,
}

impl CalculatorSession {
    pub fn new(kind: CalculatorKind) -> Self {
        CalculatorSession {
            kind,
            values: vec![String::new(); fields(kind).len()],
            state: SessionState::Idle,
        }
    }

    pub fn kind(&self) -> CalculatorKind {
        self.kind
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        fields(self.kind)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn index_of(&self, id: &str) -> CalcResult<usize> {
        self.fields()
            .iter()
            .position(|spec| spec.id == id)
            .ok_or_else(|| {
                CalcError::invalid_input(id, "", format!("{} has no such field", self.kind.display_name()))
            })
    }

    /// Store a field value, keeping only digits and the first decimal point.
    pub fn set_field(&mut self, id: &str, raw: &str) -> CalcResult<()> {
        let index = self.index_of(id)?;
        self.values[index] = parse_for_calculation(raw);
        Ok(())
    }

    /// Stored (sanitised) text of a field
    pub fn value(&self, id: &str) -> Option<&str> {
        let index = self.index_of(id).ok()?;
        Some(self.values[index].as_str())
    }

    /// Field text as it should be echoed in the input box
    pub fn display_value(&self, id: &str) -> Option<String> {
        let index = self.index_of(id).ok()?;
        let value = &self.values[index];
        Some(match self.fields()[index].unit {
            FieldUnit::Currency => format_for_display(value),
            _ => value.clone(),
        })
    }

    fn decimal(&self, id: &str) -> CalcResult<f64> {
        let index = self.index_of(id)?;
        let raw = &self.values[index];
        match self.fields()[index].default {
            Some(default) => parse_optional_decimal(id, raw, default),
            None => parse_required_decimal(id, raw),
        }
    }

    fn whole(&self, id: &str) -> CalcResult<u32> {
        let index = self.index_of(id)?;
        parse_whole_number(id, &self.values[index])
    }

    /// Parse every field into the calculator's typed input.
    pub fn build_input(&self) -> CalcResult<CalculationInput> {
        let input = match self.kind {
            CalculatorKind::CompoundInterest => CalculationInput::CompoundInterest(CompoundInterestInput {
                principal: self.decimal("principal")?,
                annual_rate_percent: self.decimal("rate")?,
                number_of_months: self.whole("months")?,
                monthly_contribution: self.decimal("contribution")?,
            }),
            CalculatorKind::SimpleInterest => CalculationInput::SimpleInterest(SimpleInterestInput {
                principal: self.decimal("principal")?,
                annual_rate_percent: self.decimal("rate")?,
                years: self.decimal("years")?,
            }),
            CalculatorKind::SavingsGoal => CalculationInput::SavingsGoal(SavingsGoalInput {
                target_future_value: self.decimal("target")?,
                initial_principal: self.decimal("principal")?,
                years: self.decimal("years")?,
                annual_rate_percent: self.decimal("rate")?,
            }),
            CalculatorKind::Roi => CalculationInput::Roi(RoiInput {
                initial_investment: self.decimal("initialInvestment")?,
                final_value: self.decimal("finalValue")?,
            }),
            CalculatorKind::Loan => CalculationInput::Loan(LoanInput {
                principal: self.decimal("loanAmount")?,
                annual_rate_percent: self.decimal("interestRate")?,
                term_years: self.decimal("loanTerm")?,
            }),
            CalculatorKind::Retirement => CalculationInput::Retirement(RetirementInput {
                current_age: self.whole("currentAge")?,
                retirement_age: self.whole("retirementAge")?,
                current_savings: self.decimal("currentSavings")?,
                monthly_contribution: self.decimal("monthlyContribution")?,
                annual_return_percent: self.decimal("annualReturn")?,
            }),
            CalculatorKind::Inflation => CalculationInput::Inflation(InflationInput {
                initial_amount: self.decimal("initialAmount")?,
                inflation_rate_percent: self.decimal("inflationRate")?,
                years: self.decimal("years")?,
            }),
            CalculatorKind::BreakEven => CalculationInput::BreakEven(BreakEvenInput {
                fixed_costs: self.decimal("fixedCosts")?,
                variable_cost_per_unit: self.decimal("variableCostPerUnit")?,
                price_per_unit: self.decimal("pricePerUnit")?,
            }),
        };
        Ok(input)
    }

    /// Parse, validate and calculate, replacing the previous outcome.
    pub fn calculate(&mut self, settings: &Settings, t: &dyn Translate) -> &SessionState {
        self.state = match self.build_input().and_then(|input| input.calculate(settings)) {
            Ok(output) => {
                let report = output.report(t);
                SessionState::Computed { output, report }
            }
            Err(e) => SessionState::Failed(e),
        };
        &self.state
    }

    /// Clear all fields and the last outcome. Nothing is calculated.
    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(String::clear);
        self.state = SessionState::Idle;
    }

    /// Last report, if the last calculation succeeded
    pub fn report(&self) -> Option<&CalculationReport> {
        match &self.state {
            SessionState::Computed { report, .. } => Some(report),
            _ => None,
        }
    }

    /// Last error, if the last calculation failed
    pub fn error(&self) -> Option<&CalcError> {
        match &self.state {
            SessionState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Localizer;

    fn settings() -> Settings {
        Settings::default().with_language("en")
    }

    fn compound_session() -> CalculatorSession {
        let mut session = CalculatorSession::new(CalculatorKind::CompoundInterest);
        session.set_field("principal", "1,000").unwrap();
        session.set_field("rate", "12").unwrap();
        session.set_field("months", "12").unwrap();
        session
    }

    #[test]
    fn test_every_label_is_translated() {
        let t = Localizer::english();
        for kind in CalculatorKind::ALL {
            for spec in fields(kind) {
                assert_ne!(t.translate(spec.label_key), spec.label_key, "{} / {}", kind, spec.id);
            }
        }
    }

    #[test]
    fn test_field_ids_unique_per_calculator() {
        for kind in CalculatorKind::ALL {
            let ids: Vec<_> = fields(kind).iter().map(|f| f.id).collect();
            let mut deduped = ids.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(ids.len(), deduped.len(), "{}", kind);
        }
    }

    #[test]
    fn test_every_blank_calculator_fails_cleanly() {
        let t = Localizer::english();
        for kind in CalculatorKind::ALL {
            let mut session = CalculatorSession::new(kind);
            let state = session.calculate(&settings(), &t);
            assert!(matches!(state, SessionState::Failed(e) if e.is_validation()), "{}", kind);
        }
    }

    #[test]
    fn test_compound_with_default_contribution() {
        let mut session = compound_session();
        session.calculate(&settings(), &Localizer::english());
        let report = session.report().unwrap();
        assert_eq!(report.value_of("Future Value"), Some("$1,126.83"));
        assert_eq!(report.schedule.as_ref().unwrap().rows.len(), 12);
    }

    #[test]
    fn test_failure_replaces_previous_result() {
        let t = Localizer::english();
        let mut session = compound_session();
        session.calculate(&settings(), &t);
        assert!(session.report().is_some());

        session.set_field("months", "0").unwrap();
        session.calculate(&settings(), &t);
        assert!(session.report().is_none());
        assert!(matches!(session.error(), Some(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let t = Localizer::english();
        let mut session = compound_session();
        let first = session.calculate(&settings(), &t).clone();
        let second = session.calculate(&settings(), &t).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = compound_session();
        session.calculate(&settings(), &Localizer::english());
        session.reset();
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.value("principal"), Some(""));
        assert_eq!(session.value("months"), Some(""));
    }

    #[test]
    fn test_display_value_groups_currency_only() {
        let mut session = CalculatorSession::new(CalculatorKind::Retirement);
        session.set_field("currentSavings", "1234567.5").unwrap();
        session.set_field("currentAge", "1234").unwrap();
        assert_eq!(session.display_value("currentSavings").unwrap(), "1,234,567.5");
        assert_eq!(session.display_value("currentAge").unwrap(), "1234");
    }

    #[test]
    fn test_set_field_sanitises() {
        let mut session = CalculatorSession::new(CalculatorKind::Loan);
        session.set_field("loanAmount", "$250,000.00.1").unwrap();
        assert_eq!(session.value("loanAmount"), Some("250000.001"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut session = CalculatorSession::new(CalculatorKind::Roi);
        assert!(session.set_field("principal", "1").is_err());
        assert_eq!(session.value("principal"), None);
    }

    #[test]
    fn test_missing_required_field_reported() {
        let mut session = CalculatorSession::new(CalculatorKind::Roi);
        session.set_field("initialInvestment", "1000").unwrap();
        session.calculate(&settings(), &Localizer::english());
        assert_eq!(session.error(), Some(&CalcError::missing_field("finalValue")));
    }

    #[test]
    fn test_break_even_report() {
        let mut session = CalculatorSession::new(CalculatorKind::BreakEven);
        session.set_field("fixedCosts", "10,000").unwrap();
        session.set_field("variableCostPerUnit", "20").unwrap();
        session.set_field("pricePerUnit", "50").unwrap();
        session.calculate(&settings(), &Localizer::english());
        let report = session.report().unwrap();
        assert_eq!(report.value_of("Break-Even Units"), Some("334"));
        assert_eq!(report.value_of("Break-Even Revenue"), Some("$16,666.67"));
    }

    #[test]
    fn test_huge_loan_term_fails_without_building_a_schedule() {
        let t = Localizer::english();
        for term in ["100000", "1000000000"] {
            let mut session = CalculatorSession::new(CalculatorKind::Loan);
            session.set_field("loanAmount", "100,000").unwrap();
            session.set_field("interestRate", "5").unwrap();
            session.set_field("loanTerm", term).unwrap();
            session.calculate(&settings(), &t);
            assert!(session.report().is_none());
            assert!(matches!(session.error(), Some(CalcError::OutOfRange { .. })), "{}", term);
        }
    }

    #[test]
    fn test_huge_retirement_age_fails() {
        let mut session = CalculatorSession::new(CalculatorKind::Retirement);
        session.set_field("currentAge", "0").unwrap();
        session.set_field("retirementAge", "400000000").unwrap();
        session.set_field("currentSavings", "1000").unwrap();
        session.set_field("monthlyContribution", "100").unwrap();
        session.set_field("annualReturn", "5").unwrap();
        session.calculate(&settings(), &Localizer::english());
        assert!(matches!(session.error(), Some(CalcError::OutOfRange { .. })));
    }

    #[test]
    fn test_overflowing_result_is_an_error_not_inf() {
        let mut session = CalculatorSession::new(CalculatorKind::Inflation);
        session.set_field("initialAmount", "1").unwrap();
        session.set_field("inflationRate", "100").unwrap();
        session.set_field("years", "5000").unwrap();
        session.calculate(&settings(), &Localizer::english());
        assert!(session.report().is_none());
        assert_eq!(session.error().and_then(|e| e.field()), Some("future_cost"));
    }

    #[test]
    fn test_unit_suffix() {
        let t = Localizer::load("ko");
        assert_eq!(FieldUnit::Currency.suffix(&t), "₩");
        assert_eq!(FieldUnit::Percent.suffix(&t), "%");
        assert_eq!(FieldUnit::Years.suffix(&t), "년");
    }
}
