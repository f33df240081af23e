//! # Loan Payment Calculation
//!
//! Level monthly payment for a fully amortizing fixed-rate loan.
//!
//! ## Method
//!
//! ```text
//! r   = annual% / 100 / 12
//! n   = years * 12
//! PMT = P * r(1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! Total payment is `PMT * n` and total interest is what is paid beyond the
//! principal. [`LoanResult::amortization_schedule`] breaks the payments into
//! their interest and principal parts month by month.
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::calculations::loan::{calculate, LoanInput};
//!
//! let result = calculate(&LoanInput {
//!     principal: 100_000.0,
//!     annual_rate_percent: 6.0,
//!     term_years: 30.0,
//! }).unwrap();
//! assert!((result.monthly_payment - 599.55).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::currency::format_currency;
use crate::errors::{CalcError, CalcResult};
use crate::localization::Translate;
use crate::numeric::{
    growth_factor, monthly_rate_from_annual, require_finite, require_finite_result, MAX_SCHEDULE_MONTHS,
    MONTHS_PER_YEAR,
};
use crate::report::{Reportable, ResultLine, ScheduleLine, ScheduleTable};

/// Input parameters for a loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed (> 0)
    pub principal: f64,

    /// Annual interest rate in percent (> 0)
    pub annual_rate_percent: f64,

    /// Loan term in years (> 0)
    pub term_years: f64,
}

impl LoanInput {
    /// Validate input parameters with the default schedule ceiling.
    pub fn validate(&self) -> CalcResult<()> {
        self.validate_with_limit(MAX_SCHEDULE_MONTHS)
    }

    /// Validate input parameters, rejecting terms longer than `max_months`.
    pub fn validate_with_limit(&self, max_months: u32) -> CalcResult<()> {
        require_finite("principal", self.principal)?;
        require_finite("annual_rate_percent", self.annual_rate_percent)?;
        require_finite("term_years", self.term_years)?;

        if self.principal <= 0.0 {
            return Err(CalcError::invalid_input(
                "principal",
                self.principal.to_string(),
                "Loan amount must be positive",
            ));
        }
        if self.annual_rate_percent <= 0.0 {
            return Err(CalcError::invalid_input(
                "annual_rate_percent",
                self.annual_rate_percent.to_string(),
                "Interest rate must be positive",
            ));
        }
        if self.term_years <= 0.0 {
            return Err(CalcError::invalid_input(
                "term_years",
                self.term_years.to_string(),
                "Loan term must be positive",
            ));
        }
        if self.number_of_payments().ceil() > f64::from(max_months) {
            return Err(CalcError::out_of_range(
                "term_years",
                self.term_years.to_string(),
                (f64::from(max_months) / MONTHS_PER_YEAR).to_string(),
            ));
        }
        Ok(())
    }

    /// Number of monthly payments (may be fractional for fractional years)
    pub fn number_of_payments(&self) -> f64 {
        self.term_years * MONTHS_PER_YEAR
    }
}

/// Results from a loan calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: f64,

    /// Monthly payment times the number of payments
    pub total_payment: f64,

    /// Total payment minus principal
    pub total_interest: f64,

    /// Carried for the amortization schedule
    pub principal: f64,
    pub monthly_rate: f64,
    pub number_of_payments: f64,
}

/// One month of a loan amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number, starting at 1
    pub period: u32,
    pub payment: f64,
    pub interest_paid: f64,
    pub principal_paid: f64,
    /// Balance owed after this payment
    pub remaining_balance: f64,
}

impl LoanResult {
    /// Split each payment into interest and principal.
    ///
    /// The schedule covers `ceil(n)` payments. The final payment is trimmed
    /// so the loan closes at exactly zero rather than leaving rounding dust
    /// (or overpaying, for a fractional final month).
    pub fn amortization_schedule(&self) -> Vec<AmortizationRow> {
        let periods = self.number_of_payments.ceil() as u32;
        let mut balance = self.principal;
        let mut rows = Vec::with_capacity(periods.min(MAX_SCHEDULE_MONTHS) as usize);

        for period in 1..=periods {
            let interest_paid = balance * self.monthly_rate;
            let mut payment = self.monthly_payment;
            if period == periods || payment > balance + interest_paid {
                payment = balance + interest_paid;
            }
            let principal_paid = payment - interest_paid;
            balance -= principal_paid;
            if period == periods {
                balance = 0.0;
            }

            rows.push(AmortizationRow {
                period,
                payment,
                interest_paid,
                principal_paid,
                remaining_balance: balance,
            });
        }
        rows
    }
}

/// Calculate with the default schedule ceiling.
pub fn calculate(input: &LoanInput) -> CalcResult<LoanResult> {
    calculate_with_limit(input, MAX_SCHEDULE_MONTHS)
}

/// Calculate the monthly payment and totals for a loan whose amortization
/// schedule may run at most `max_months` payments.
pub fn calculate_with_limit(input: &LoanInput, max_months: u32) -> CalcResult<LoanResult> {
    input.validate_with_limit(max_months)?;

    let monthly_rate = monthly_rate_from_annual(input.annual_rate_percent);
    let n = input.number_of_payments();
    let growth = growth_factor(monthly_rate, n);

    // Rates too small to move (1 + r)^n off 1.0 amortize linearly
    let monthly_payment = if growth == 1.0 {
        input.principal / n
    } else {
        input.principal * (monthly_rate * growth) / (growth - 1.0)
    };
    let monthly_payment = require_finite_result("monthly_payment", monthly_payment)?;
    let total_payment = require_finite_result("total_payment", monthly_payment * n)?;

    Ok(LoanResult {
        monthly_payment,
        total_payment,
        total_interest: total_payment - input.principal,
        principal: input.principal,
        monthly_rate,
        number_of_payments: n,
    })
}

impl Reportable for LoanResult {
    fn lines(&self, t: &dyn Translate) -> Vec<ResultLine> {
        let lang = t.language();
        vec![
            ResultLine::new(t, "monthlyPayment", format_currency(self.monthly_payment, lang)),
            ResultLine::new(t, "totalPayment", format_currency(self.total_payment, lang)),
            ResultLine::new(t, "totalInterestPaid", format_currency(self.total_interest, lang)),
        ]
    }

    fn schedule(&self, t: &dyn Translate) -> Option<ScheduleTable> {
        let lang = t.language();
        let rows = self
            .amortization_schedule()
            .into_iter()
            .map(|row| ScheduleLine {
                period: row.period,
                cells: vec![
                    format_currency(row.payment, lang),
                    format_currency(row.interest_paid, lang),
                    format_currency(row.principal_paid, lang),
                    format_currency(row.remaining_balance, lang),
                ],
            })
            .collect();

        Some(ScheduleTable {
            title: t.translate("amortizationSchedule"),
            headers: ["month", "payment", "interestPaid", "principalPaid", "remainingBalance"]
                .iter()
                .map(|key| t.translate(key))
                .collect(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Localizer;

    fn mortgage() -> LoanInput {
        LoanInput {
            principal: 100_000.0,
            annual_rate_percent: 6.0,
            term_years: 30.0,
        }
    }

    #[test]
    fn test_thirty_year_mortgage() {
        let result = calculate(&mortgage()).unwrap();
        assert!((result.monthly_payment - 599.5505251527569).abs() < 1e-6);
        assert!((result.total_payment - result.monthly_payment * 360.0).abs() < 1e-6);
        assert!((result.total_interest - (result.total_payment - 100_000.0)).abs() < 1e-6);
    }

    #[test]
    fn test_report_values() {
        let lines = calculate(&mortgage()).unwrap().lines(&Localizer::english());
        assert_eq!(lines[0].value, "$599.55");
        assert_eq!(lines[1].value, "$215,838.19");
        assert_eq!(lines[2].value, "$115,838.19");
    }

    #[test]
    fn test_amortization_closes_loan() {
        let result = calculate(&mortgage()).unwrap();
        let rows = result.amortization_schedule();
        assert_eq!(rows.len(), 360);
        assert_eq!(rows.last().unwrap().remaining_balance, 0.0);

        // First payment: interest on the full principal
        assert!((rows[0].interest_paid - 500.0).abs() < 1e-9);
        assert!((rows[0].principal_paid - 99.5505251527569).abs() < 1e-6);

        let principal_sum: f64 = rows.iter().map(|r| r.principal_paid).sum();
        assert!((principal_sum - 100_000.0).abs() < 1e-6);
        let interest_sum: f64 = rows.iter().map(|r| r.interest_paid).sum();
        assert!((interest_sum - result.total_interest).abs() < 1e-3);
    }

    #[test]
    fn test_fractional_term_schedule_length() {
        let result = calculate(&LoanInput {
            principal: 10_000.0,
            annual_rate_percent: 5.0,
            term_years: 2.5,
        })
        .unwrap();
        assert_eq!(result.number_of_payments, 30.0);
        assert_eq!(result.amortization_schedule().len(), 30);
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        let bad = [
            LoanInput { principal: 0.0, ..mortgage() },
            LoanInput { annual_rate_percent: 0.0, ..mortgage() },
            LoanInput { term_years: -1.0, ..mortgage() },
        ];
        for input in bad {
            assert!(matches!(calculate(&input), Err(CalcError::InvalidInput { .. })));
        }
    }

    #[test]
    fn test_term_beyond_schedule_ceiling_rejected() {
        for term_years in [100_000.0, 1_000_000_000.0] {
            let input = LoanInput { term_years, ..mortgage() };
            let err = calculate(&input).unwrap_err();
            assert!(matches!(err, CalcError::OutOfRange { .. }));
            assert_eq!(err.field(), Some("term_years"));
        }

        // 100 years is the default ceiling; a tighter limit rejects the mortgage
        assert!(calculate(&LoanInput { term_years: 100.0, ..mortgage() }).is_ok());
        assert!(calculate(&LoanInput { term_years: 100.5, ..mortgage() }).is_err());
        assert!(calculate_with_limit(&mortgage(), 120).is_err());
        assert!(calculate_with_limit(&LoanInput { term_years: 150.0, ..mortgage() }, 1800).is_ok());
    }

    #[test]
    fn test_overflowing_payment_rejected() {
        let input = LoanInput {
            annual_rate_percent: 1e300,
            ..mortgage()
        };
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::OutOfRange { .. }));
    }

    #[test]
    fn test_vanishing_rate_amortizes_linearly() {
        let result = calculate(&LoanInput {
            principal: 1200.0,
            annual_rate_percent: 1e-300,
            term_years: 1.0,
        })
        .unwrap();
        assert_eq!(result.monthly_payment, 100.0);
        assert_eq!(result.total_payment, 1200.0);
    }

    #[test]
    fn test_schedule_table() {
        let table = calculate(&mortgage()).unwrap().schedule(&Localizer::english()).unwrap();
        assert_eq!(table.headers.len(), 5);
        assert_eq!(table.rows.len(), 360);
        assert_eq!(table.rows[0].cells[0], "$599.55");
        assert_eq!(table.rows[0].cells[1], "$500.00");
    }
}
