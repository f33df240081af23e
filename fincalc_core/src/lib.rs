//! # fincalc_core - Financial Calculation Engine
//!
//! `fincalc_core` is the computational heart of Fincalc: compound and simple
//! interest, savings goals, ROI, loans, retirement, inflation and break-even
//! calculations with a clean, JSON-friendly API. Front ends (the `fincalc` CLI
//! and the desktop GUI) only collect text, hand it to a [`session`] and show
//! the translated report that comes back.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Calculators are pure functions from input to result
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Validation failures are structured, never a silently empty panel
//! - **Injected Language**: Translation and number formatting come from a [`Translate`]
//!   value passed in by the caller, not from global state
//!
//! ## Quick Start
//!
//! ```rust
//! use fincalc_core::calculations::loan::{calculate, LoanInput};
//! use fincalc_core::localization::Localizer;
//! use fincalc_core::report::Reportable;
//!
//! let result = calculate(&LoanInput {
//!     principal: 100_000.0,
//!     annual_rate_percent: 6.0,
//!     term_years: 30.0,
//! }).unwrap();
//!
//! let lines = result.lines(&Localizer::english());
//! assert_eq!(lines[0].label, "Monthly Payment");
//! assert_eq!(lines[0].value, "$599.55");
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The eight calculators and typed dispatch
//! - [`numeric`] - Rate conversions and the annuity factor
//! - [`input`] - Text field formatting and parsing
//! - [`currency`] - Locale profiles and currency formatting
//! - [`localization`] - Embedded translation dictionaries
//! - [`report`] - Translated result lines and breakdown tables
//! - [`session`] - Per-page field state with calculate/reset
//! - [`seo`] - Page titles and structured data
//! - [`settings`] - TOML configuration
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod currency;
pub mod errors;
pub mod input;
pub mod localization;
pub mod numeric;
pub mod report;
pub mod seo;
pub mod session;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationInput, CalculationOutput, CalculatorKind};
pub use errors::{CalcError, CalcResult};
pub use localization::{Localizer, Translate};
pub use report::{CalculationReport, Reportable};
pub use session::{CalculatorSession, SessionState};
pub use settings::Settings;
