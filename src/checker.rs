//! This file defines some functions that checks some pre-conditions
//! E.g., the kind of each attribute

use crate::error::{Result, TreeError};
use crate::sample::{Record, Value};


/// Check whether the training sample is valid or not.
///
/// - `data` and `predictors` must be non-empty,
/// - every record must carry `target` as a boolean,
/// - every predictor must hold one kind of value over `data`,
///   and ordered values must not be `NaN`.
pub(crate) fn check_sample<S>(data: &[Record], predictors: &[S], target: &str)
    -> Result<()>
    where S: AsRef<str>
{
    if data.is_empty() {
        return Err(TreeError::EmptyDataset);
    }

    if predictors.is_empty() {
        return Err(TreeError::NoPredictors);
    }

    for record in data {
        record.get_bool(target)?;
    }

    for var in predictors {
        check_predictor(data, var.as_ref())?;
    }

    Ok(())
}


/// Check that `var` has the same kind on every record of `data`.
fn check_predictor(data: &[Record], var: &str) -> Result<()> {
    let mut first: Option<&Value> = None;
    for record in data {
        let value = record.get(var)?;

        if !value.is_ordered() {
            return Err(TreeError::attribute_type(
                var, "an ordered value", "NaN"
            ));
        }

        match first {
            None => { first = Some(value); },
            Some(first) if !first.is_compatible_with(value) => {
                return Err(TreeError::attribute_type(
                    var, first.type_name(), value.type_name()
                ));
            },
            Some(_) => {},
        }
    }
    Ok(())
}
