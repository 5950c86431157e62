use serde::{Serialize, Deserialize};

use std::fmt;
use std::cmp::Ordering;

use crate::error::{Result, TreeError};

/// A single attribute value of a [`Record`](crate::Record).
///
/// `Bool` values are treated as binary categories,
/// every other variant is treated as an ordered value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Int(i64),
    /// A floating point value. `NaN` is rejected wherever an order is needed.
    Float(f64),
    /// A text value, ordered lexicographically.
    Text(String),
}

/// The way a predictor is split.
/// Decided once per predictor and never re-derived per comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictorKind {
    /// Boolean predictor, split by `var == true`.
    Categorical,
    /// Ordered predictor, split by `var <= threshold`.
    Ordered,
}

impl Value {
    /// Returns the kind of predictor this value belongs to.
    #[inline]
    pub fn kind(&self) -> PredictorKind {
        match self {
            Self::Bool(_) => PredictorKind::Categorical,
            _ => PredictorKind::Ordered,
        }
    }

    /// Returns the boolean held by `self`, if any.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// A short human readable name of the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_)  => "a boolean",
            Self::Int(_)   => "an integer",
            Self::Float(_) => "a float",
            Self::Text(_)  => "a text",
        }
    }

    /// Returns `true` if `self` and `other` can be compared
    /// by the same comparison rule.
    pub(crate) fn is_compatible_with(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Bool(_), Self::Bool(_))
            | (Self::Text(_), Self::Text(_))
            | (Self::Int(_) | Self::Float(_), Self::Int(_) | Self::Float(_))
        )
    }

    /// Returns `true` if `self` has a total order, i.e., is not `NaN`.
    #[inline]
    pub(crate) fn is_ordered(&self) -> bool {
        !matches!(self, Self::Float(x) if x.is_nan())
    }

    /// Compares two ordered values of attribute `name`.
    /// Integers and floats compare numerically with each other.
    pub(crate) fn try_cmp(&self, other: &Self, name: &str)
        -> Result<Ordering>
    {
        let ordering = match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => {
                cmp_int_float(*b, *a).map(Ordering::reverse)
            },
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            _ => {
                return Err(TreeError::attribute_type(
                    name, other.type_name(), self.type_name()
                ));
            },
        };

        ordering.ok_or_else(|| {
            TreeError::attribute_type(name, "an ordered value", "NaN")
        })
    }

    /// A total order over every pair of values,
    /// used only to break ties between equally good splits.
    ///
    /// Booleans count as `0`/`1` and compare numerically with
    /// integers and floats; texts sort after every number.
    pub(crate) fn tie_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Text(_), _) => Ordering::Greater,
            (_, Self::Text(_)) => Ordering::Less,
            (Self::Int(a), Self::Float(b)) => {
                cmp_int_float(*a, *b)
                    .unwrap_or_else(|| (*a as f64).total_cmp(b))
            },
            (Self::Float(a), Self::Int(b)) => {
                cmp_int_float(*b, *a)
                    .map(Ordering::reverse)
                    .unwrap_or_else(|| a.total_cmp(&(*b as f64)))
            },
            (a, b) => a.numeric().total_cmp(&b.numeric()),
        }
    }

    fn numeric(&self) -> f64 {
        match self {
            Self::Bool(b) => if *b { 1f64 } else { 0f64 },
            Self::Int(i) => *i as f64,
            Self::Float(x) => *x,
            Self::Text(_) => f64::NAN,
        }
    }
}

/// Compares an integer with a float exactly,
/// without rounding the integer to the nearest `f64`.
/// Returns `None` if `x` is `NaN`.
fn cmp_int_float(i: i64, x: f64) -> Option<Ordering> {
    // `i64::MIN as f64` is exactly `-2^63`.
    const BOUND: f64 = -(i64::MIN as f64);

    if x.is_nan() {
        return None;
    }
    if x >= BOUND {
        return Some(Ordering::Less);
    }
    if x < -BOUND {
        return Some(Ordering::Greater);
    }

    // `x` lies in `[-2^63, 2^63)`, so its integral part fits in `i64`.
    let integral = x.trunc();
    let ordering = i.cmp(&(integral as i64))
        .then_with(|| 0f64.partial_cmp(&(x - integral)).unwrap_or(Ordering::Equal));
    Some(ordering)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Value {
    #[inline(always)]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    #[inline(always)]
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    #[inline(always)]
    fn from(i: i32) -> Self {
        Self::Int(i as i64)
    }
}

impl From<f64> for Value {
    #[inline(always)]
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    #[inline(always)]
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    #[inline(always)]
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Value::from(true).kind(), PredictorKind::Categorical);
        assert_eq!(Value::from(3).kind(), PredictorKind::Ordered);
        assert_eq!(Value::from(0.5).kind(), PredictorKind::Ordered);
        assert_eq!(Value::from("a").kind(), PredictorKind::Ordered);
    }

    #[test]
    fn test_try_cmp_mixed_numbers() {
        let a = Value::from(2);
        let b = Value::from(2.5);
        assert_eq!(a.try_cmp(&b, "x").unwrap(), Ordering::Less);
        assert_eq!(b.try_cmp(&a, "x").unwrap(), Ordering::Greater);
        assert_eq!(a.try_cmp(&Value::from(2.0), "x").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_try_cmp_large_integers() {
        // 2^53 + 1 has no exact `f64` representation.
        let a = Value::from(9_007_199_254_740_993_i64);
        let b = Value::from(9_007_199_254_740_992f64);
        assert_eq!(a.try_cmp(&b, "x").unwrap(), Ordering::Greater);
        assert_eq!(b.try_cmp(&a, "x").unwrap(), Ordering::Less);
        assert_eq!(a.tie_cmp(&b), Ordering::Greater);
        assert_eq!(b.tie_cmp(&a), Ordering::Less);

        let max = Value::from(i64::MAX);
        assert_eq!(max.try_cmp(&Value::from(9.3e18), "x").unwrap(), Ordering::Less);
        let min = Value::from(i64::MIN);
        assert_eq!(min.try_cmp(&Value::from(-9.3e18), "x").unwrap(), Ordering::Greater);
        assert_eq!(min.try_cmp(&Value::from(i64::MIN as f64), "x").unwrap(), Ordering::Equal);
        assert_eq!(
            Value::from(-3).try_cmp(&Value::from(-2.5), "x").unwrap(),
            Ordering::Less,
        );
    }

    #[test]
    fn test_try_cmp_rejects_mismatch_and_nan() {
        let err = Value::from("a").try_cmp(&Value::from(1), "x");
        assert!(matches!(err, Err(TreeError::AttributeType { .. })));

        let err = Value::from(f64::NAN).try_cmp(&Value::from(1.0), "x");
        assert!(matches!(err, Err(TreeError::AttributeType { .. })));
    }

    #[test]
    fn test_compatibility() {
        assert!(Value::from(1).is_compatible_with(&Value::from(0.5)));
        assert!(!Value::from(1).is_compatible_with(&Value::from(true)));
        assert!(!Value::from("a").is_compatible_with(&Value::from(0.5)));
        assert!(!Value::from(f64::NAN).is_ordered());
    }

    #[test]
    fn test_tie_cmp() {
        assert_eq!(Value::from(true).tie_cmp(&Value::from(1)), Ordering::Equal);
        assert_eq!(Value::from(true).tie_cmp(&Value::from(2)), Ordering::Less);
        assert_eq!(Value::from(9).tie_cmp(&Value::from("a")), Ordering::Less);
        assert_eq!(Value::from("b").tie_cmp(&Value::from("a")), Ordering::Greater);
    }
}
