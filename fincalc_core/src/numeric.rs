//! # Shared Numeric Helpers
//!
//! Conventions shared by every calculator:
//!
//! - Rates are entered as percentages and converted with [`percent_to_decimal`]
//! - Monthly rates are the nominal annual rate divided by 12 (no effective-rate conversion)
//! - Intermediate money values stay unrounded `f64`; rounding happens only when
//!   formatting for display (see [`crate::currency`])
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::numeric::{annuity_future_value_factor, monthly_rate_from_annual};
//!
//! let r = monthly_rate_from_annual(12.0);
//! assert!((r - 0.01).abs() < 1e-12);
//!
//! // Zero rate degrades to linear accumulation
//! assert_eq!(annuity_future_value_factor(0.0, 24.0), 24.0);
//! ```

use crate::errors::{CalcError, CalcResult};

/// Months in a year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Default ceiling on the length of a generated monthly schedule (100 years)
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// Largest schedule ceiling a settings file may configure (1000 years)
pub const SCHEDULE_MONTHS_CEILING: u32 = 12_000;

/// Convert a percentage to a decimal fraction: `p / 100`
pub fn percent_to_decimal(percent: f64) -> f64 {
    percent / 100.0
}

/// Nominal monthly rate from an annual percentage: `annual% / 100 / 12`
pub fn monthly_rate_from_annual(annual_percent: f64) -> f64 {
    percent_to_decimal(annual_percent) / MONTHS_PER_YEAR
}

/// Compound growth over `periods`: `(1 + rate)^periods`
pub fn growth_factor(rate: f64, periods: f64) -> f64 {
    (1.0 + rate).powf(periods)
}

/// Future value of a level contribution of 1 per period:
///
/// ```text
/// ((1 + r)^n - 1) / r
/// ```
///
/// The expression is a removable singularity at `r = 0`, where the limit is `n`.
pub fn annuity_future_value_factor(rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return periods;
    }
    (growth_factor(rate, periods) - 1.0) / rate
}

/// Reject NaN and infinite values with a ParseError on `field`.
pub fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::parse_error(field, value.to_string()))
    }
}

/// Reject a computed value that overflowed to infinity or became NaN.
///
/// Inputs can be finite and still produce results no `f64` can hold
/// (a century of 100% inflation, say). Those surface as `OutOfRange` on
/// the result field instead of rendering as `inf` or `NaN`.
pub fn require_finite_result(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::out_of_range(field, value.to_string(), format!("{:e}", f64::MAX)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_conversions() {
        assert_eq!(percent_to_decimal(5.0), 0.05);
        assert!((monthly_rate_from_annual(6.0) - 0.005).abs() < 1e-15);
    }

    #[test]
    fn test_annuity_factor() {
        // ((1.01)^12 - 1) / 0.01 = 12.682503...
        let f = annuity_future_value_factor(0.01, 12.0);
        assert!((f - 12.682503013196972).abs() < 1e-9);
    }

    #[test]
    fn test_annuity_factor_zero_rate() {
        assert_eq!(annuity_future_value_factor(0.0, 360.0), 360.0);
        assert!(annuity_future_value_factor(0.0, 360.0).is_finite());
    }

    #[test]
    fn test_annuity_factor_near_zero_rate_approaches_periods() {
        let f = annuity_future_value_factor(1e-9, 120.0);
        assert!((f - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("x", 3.5), Ok(3.5));
        assert!(require_finite("x", f64::NAN).is_err());
        assert!(require_finite("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_finite_result() {
        assert_eq!(require_finite_result("future_cost", 1.5), Ok(1.5));
        let err = require_finite_result("future_cost", f64::INFINITY).unwrap_err();
        assert_eq!(err.field(), Some("future_cost"));
        assert!(matches!(err, CalcError::OutOfRange { .. }));
        assert!(require_finite_result("monthly_payment", f64::NAN).is_err());
    }
}
