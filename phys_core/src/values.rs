//! # Value Sets
//!
//! Known variable values travel through the solver as a plain ordered map of
//! symbol to SI value. Ordering keeps JSON output and diagnostics stable.
//!
//! A value is *known* when its key is present and it is not `NaN`.
//!
//! ## Lenient reads
//!
//! [`Knowns`] is the read-only view the formula modules use. It encodes the
//! registry's numeric policy for absent symbols:
//!
//! - [`Knowns::term`] reads an absent symbol as `0.0` (additive or
//!   multiplicative term)
//! - [`Knowns::divisor`] reads an absent symbol as `1.0` (standalone
//!   denominator)
//!
//! A present value is always returned as-is, including `0.0`.
//!
//! ```rust
//! use phys_core::values::{values_from, Knowns};
//!
//! let values = values_from(&[("m", 2.0)]);
//! let k = Knowns::new(&values);
//! assert_eq!(k.term("m"), 2.0);
//! assert_eq!(k.term("a"), 0.0);
//! assert_eq!(k.divisor("a"), 1.0);
//! ```

use std::collections::BTreeMap;

/// Symbol-to-value mapping (values in SI units)
pub type Values = BTreeMap<String, f64>;

/// Whether `symbol` has a usable (non-NaN) value
pub fn is_known(values: &Values, symbol: &str) -> bool {
    values.get(symbol).is_some_and(|v| !v.is_nan())
}

/// Build a value set from `(symbol, value)` pairs
pub fn values_from(pairs: &[(&str, f64)]) -> Values {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Lenient reader over a value set.
#[derive(Debug, Clone, Copy)]
pub struct Knowns<'a> {
    values: &'a Values,
}

impl<'a> Knowns<'a> {
    pub fn new(values: &'a Values) -> Self {
        Self { values }
    }

    /// The value of `symbol` if it is known
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.values.get(symbol).copied().filter(|v| !v.is_nan())
    }

    /// Read a term; absent reads as 0
    #[inline]
    pub fn term(&self, symbol: &str) -> f64 {
        self.or(symbol, 0.0)
    }

    /// Read a denominator; absent reads as 1
    #[inline]
    pub fn divisor(&self, symbol: &str) -> f64 {
        self.or(symbol, 1.0)
    }

    /// Read with an explicit default
    #[inline]
    pub fn or(&self, symbol: &str, default: f64) -> f64 {
        self.get(symbol).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_is_not_known() {
        let values = values_from(&[("a", f64::NAN), ("b", 0.0)]);
        assert!(!is_known(&values, "a"));
        assert!(is_known(&values, "b"));
        assert!(!is_known(&values, "c"));

        let k = Knowns::new(&values);
        assert_eq!(k.term("a"), 0.0);
        assert_eq!(k.divisor("a"), 1.0);
    }

    #[test]
    fn test_present_zero_is_kept() {
        // Leniency only covers omissions; an explicit zero is a real value
        let values = values_from(&[("t", 0.0)]);
        assert_eq!(Knowns::new(&values).divisor("t"), 0.0);
    }
}
