//! # Break-Even Point
//!
//! Units that must be sold before revenue covers fixed and variable costs:
//!
//! ```text
//! units   = fixed / (price - variable)
//! revenue = units * price
//! ```
//!
//! The reported unit count is rounded up (a partial unit cannot be sold).
//! Revenue is computed from the exact, unrounded unit count: it is the
//! revenue at which profit is exactly zero. Revenue at the rounded count is
//! available as [`BreakEvenResult::revenue_at_whole_units`].

use serde::{Deserialize, Serialize};

use crate::currency::{format_currency, format_units};
use crate::errors::{CalcError, CalcResult};
use crate::localization::Translate;
use crate::numeric::{require_finite, require_finite_result};
use crate::report::{Reportable, ResultLine};

/// Input parameters for a break-even analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInput {
    /// Total fixed costs
    pub fixed_costs: f64,

    /// Variable cost per unit
    pub variable_cost_per_unit: f64,

    /// Selling price per unit (must exceed the variable cost)
    pub price_per_unit: f64,
}

impl BreakEvenInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_finite("fixed_costs", self.fixed_costs)?;
        require_finite("variable_cost_per_unit", self.variable_cost_per_unit)?;
        require_finite("price_per_unit", self.price_per_unit)?;

        if self.price_per_unit <= self.variable_cost_per_unit {
            return Err(CalcError::invalid_input(
                "price_per_unit",
                self.price_per_unit.to_string(),
                format!(
                    "Price per unit must exceed the variable cost per unit ({})",
                    self.variable_cost_per_unit
                ),
            ));
        }
        Ok(())
    }

    /// Contribution margin per unit sold
    pub fn unit_margin(&self) -> f64 {
        self.price_per_unit - self.variable_cost_per_unit
    }
}

/// Results from a break-even analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Exact break-even quantity
    pub break_even_units_exact: f64,

    /// Quantity rounded up to a whole unit
    pub break_even_units: f64,

    /// Revenue at the exact break-even quantity
    pub break_even_revenue: f64,

    /// Price per unit, carried for [`BreakEvenResult::revenue_at_whole_units`]
    pub price_per_unit: f64,
}

impl BreakEvenResult {
    /// Revenue when selling the rounded-up number of units
    pub fn revenue_at_whole_units(&self) -> f64 {
        self.break_even_units * self.price_per_unit
    }
}

/// Calculate the break-even point.
pub fn calculate(input: &BreakEvenInput) -> CalcResult<BreakEvenResult> {
    input.validate()?;

    let exact = require_finite_result("break_even_units", input.fixed_costs / input.unit_margin())?;
    Ok(BreakEvenResult {
        break_even_units_exact: exact,
        break_even_units: exact.ceil(),
        break_even_revenue: require_finite_result("break_even_revenue", exact * input.price_per_unit)?,
        price_per_unit: input.price_per_unit,
    })
}

impl Reportable for BreakEvenResult {
    fn lines(&self, t: &dyn Translate) -> Vec<ResultLine> {
        let lang = t.language();
        vec![
            ResultLine::new(t, "breakEvenUnits", format_units(self.break_even_units, lang)),
            ResultLine::new(t, "breakEvenRevenue", format_currency(self.break_even_revenue, lang)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Localizer;

    fn test_input() -> BreakEvenInput {
        BreakEvenInput {
            fixed_costs: 10_000.0,
            variable_cost_per_unit: 20.0,
            price_per_unit: 50.0,
        }
    }

    #[test]
    fn test_units_round_up() {
        let result = calculate(&test_input()).unwrap();
        assert!((result.break_even_units_exact - 333.3333333).abs() < 1e-6);
        assert_eq!(result.break_even_units, 334.0);
    }

    #[test]
    fn test_revenue_uses_exact_units() {
        let result = calculate(&test_input()).unwrap();
        assert!((result.break_even_revenue - 16_666.666_666).abs() < 1e-3);
        assert_eq!(result.revenue_at_whole_units(), 16_700.0);
    }

    #[test]
    fn test_exact_division() {
        let result = calculate(&BreakEvenInput {
            fixed_costs: 9_000.0,
            ..test_input()
        })
        .unwrap();
        assert_eq!(result.break_even_units, 300.0);
        assert_eq!(result.break_even_revenue, 15_000.0);
    }

    #[test]
    fn test_overflowing_units_rejected() {
        let input = BreakEvenInput {
            fixed_costs: 1e308,
            variable_cost_per_unit: 0.0,
            price_per_unit: 1e-10,
        };
        assert!(matches!(calculate(&input), Err(CalcError::OutOfRange { .. })));
    }

    #[test]
    fn test_price_not_above_cost_rejected() {
        for price in [20.0, 10.0] {
            let input = BreakEvenInput {
                price_per_unit: price,
                ..test_input()
            };
            assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_report() {
        let t = Localizer::load("de");
        let lines = calculate(&BreakEvenInput {
            fixed_costs: 1_000_000.0,
            variable_cost_per_unit: 10.0,
            price_per_unit: 20.0,
        })
        .unwrap()
        .lines(&t);
        assert_eq!(lines[0].value, "100.000");
        assert_eq!(lines[1].value, "2.000.000,00\u{a0}€");
    }
}
