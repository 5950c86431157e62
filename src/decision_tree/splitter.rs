//! Partitioning a group of records by a predictor and a split value.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::error::{Result, TreeError};
use crate::sample::{Record, Value};
use super::impurity::gini_index;


/// The comparison applied between a record's value and a split value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `x == value`, for boolean split values.
    Equal,
    /// `x <= value`, for ordered split values.
    LessOrEqual,
}


impl CompareOp {
    /// Returns the comparison rule for the split value `value`.
    #[inline]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Bool(_) => Self::Equal,
            _ => Self::LessOrEqual,
        }
    }


    /// Returns `true` if `x op value` holds.
    /// `name` is the attribute `x` was read from.
    pub fn holds(&self, x: &Value, value: &Value, name: &str) -> Result<bool> {
        match self {
            Self::Equal => {
                match (x, value) {
                    (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
                    _ => Err(TreeError::attribute_type(
                        name, value.type_name(), x.type_name()
                    )),
                }
            },
            Self::LessOrEqual => {
                let ordering = x.try_cmp(value, name)?;
                Ok(ordering != Ordering::Greater)
            },
        }
    }
}


impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Self::Equal => "==",
            Self::LessOrEqual => "<=",
        };
        write!(f, "{op}")
    }
}


/// The side of a split a record falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// The rule holds.
    Left,
    /// The rule does not hold.
    Right,
}


/// A splitting rule: a predictor name and a split value.
/// The comparison rule is fixed by the type of `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// The predictor to split on.
    pub var: String,
    /// The category (boolean) or the threshold (ordered).
    pub value: Value,
}


impl Split {
    /// Construct a new splitting rule.
    #[inline]
    pub fn new<T>(var: T, value: Value) -> Self
        where T: ToString
    {
        Self { var: var.to_string(), value, }
    }


    /// Returns the comparison rule of this split.
    #[inline]
    pub fn op(&self) -> CompareOp {
        CompareOp::of(&self.value)
    }


    /// Returns the side `record` falls on.
    #[inline]
    pub fn side(&self, record: &Record) -> Result<LeftRight> {
        let x = record.get(&self.var)?;
        if self.op().holds(x, &self.value, &self.var)? {
            Ok(LeftRight::Left)
        } else {
            Ok(LeftRight::Right)
        }
    }


    /// Returns `true` if `record` goes to the left child.
    #[inline]
    pub fn is_left(&self, record: &Record) -> Result<bool> {
        Ok(self.side(record)? == LeftRight::Left)
    }


    /// Partition `data` into the records that satisfy this rule
    /// and the rest, keeping the relative order of each group.
    pub fn partition<'a, R>(&self, data: &'a [R])
        -> Result<(Vec<&'a Record>, Vec<&'a Record>)>
        where R: Borrow<Record>
    {
        let op = self.op();
        let mut left = Vec::new();
        let mut right = Vec::new();
        for record in data {
            let record: &Record = record.borrow();
            let x = record.get(&self.var)?;
            if op.holds(x, &self.value, &self.var)? {
                left.push(record);
            } else {
                right.push(record);
            }
        }
        Ok((left, right))
    }
}


impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.var, self.op(), self.value)
    }
}


/// Returns the comparison rule for the split value `value`.
#[inline]
pub fn compare_op(value: &Value) -> CompareOp {
    CompareOp::of(value)
}


/// Partition `data` into `(left, right)` by comparing `var` to `value`.
/// Both groups may be empty.
pub fn split<'a, R>(data: &'a [R], var: &str, value: &Value)
    -> Result<(Vec<&'a Record>, Vec<&'a Record>)>
    where R: Borrow<Record>
{
    Split::new(var, value.clone()).partition(data)
}


/// Returns the Gini impurity reduction achieved by splitting
/// `data` into `left` and `right`.
///
/// A split with an empty side has quality `0`.
pub fn split_quality<D, L, R>(
    data:   &[D],
    left:   &[L],
    right:  &[R],
    target: &str,
) -> Result<f64>
    where D: Borrow<Record>,
          L: Borrow<Record>,
          R: Borrow<Record>,
{
    if left.is_empty() || right.is_empty() {
        return Ok(0f64);
    }

    let n_sample = data.len() as f64;
    let pl = left.len() as f64 / n_sample;
    let pr = right.len() as f64 / n_sample;

    let gd = gini_index(data, target)?;
    let gl = gini_index(left, target)?;
    let gr = gini_index(right, target)?;

    Ok(gd - pl * gl - pr * gr)
}
