//! # Calculation Reports
//!
//! The display form of a calculation: an ordered list of translated
//! label/value pairs, plus the formatted monthly breakdown for calculators
//! that produce one. Reports are built fresh from a typed result on every
//! calculation and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::localization::Translate;

/// One row of the results panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultLine {
    /// Translated label (e.g., "Future Value")
    pub label: String,
    /// Formatted value (e.g., "$1,126.83" or "50.00%")
    pub value: String,
}

impl ResultLine {
    /// Build a line, translating `label_key`
    pub fn new(t: &dyn Translate, label_key: &str, value: impl Into<String>) -> Self {
        ResultLine {
            label: t.translate(label_key),
            value: value.into(),
        }
    }
}

/// One formatted row of a monthly breakdown table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleLine {
    pub period: u32,
    /// Formatted cells after the period column, in column order
    pub cells: Vec<String>,
}

/// A formatted breakdown table with translated headers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTable {
    /// Translated table title
    pub title: String,
    /// Translated column headers, period column first
    pub headers: Vec<String>,
    pub rows: Vec<ScheduleLine>,
}

/// Complete display output of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationReport {
    pub kind: CalculatorKind,
    /// Language the labels and values were rendered in
    pub language: String,
    pub lines: Vec<ResultLine>,
    /// Monthly breakdown, when the calculator produces one
    pub schedule: Option<ScheduleTable>,
}

impl CalculationReport {
    /// Look up a line's value by its translated label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

/// Typed results that know how to present themselves.
///
/// Implemented by every `*Result` in [`crate::calculations`]; the language for
/// number formatting comes from the translator.
pub trait Reportable {
    /// Result lines in display order
    fn lines(&self, t: &dyn Translate) -> Vec<ResultLine>;

    /// Monthly breakdown table, if any
    fn schedule(&self, _t: &dyn Translate) -> Option<ScheduleTable> {
        None
    }
}
