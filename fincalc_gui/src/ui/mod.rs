//! UI module for Fincalc GUI
//!
//! # Panel Structure
//! - `toolbar` - Header with the app title and language picker
//! - `calculators_panel` - Left sidebar: one entry per calculator
//! - `input_panel` - Center panel: the selected calculator's fields, Calculate and Reset
//! - `results_panel` - Right panel: result lines, breakdown table or validation error
//! - `status_bar` - Bottom status messages

pub mod calculators_panel;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;
