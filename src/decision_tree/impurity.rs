//! Class proportion and Gini impurity of a group of records.
use std::borrow::Borrow;

use crate::error::{Result, TreeError};
use crate::sample::Record;


/// Returns the fraction of records in `data`
/// whose boolean attribute `attr` is `true`.
///
/// Fails with [`TreeError::EmptyDataset`] if `data` is empty.
pub fn proportion<R>(data: &[R], attr: &str) -> Result<f64>
    where R: Borrow<Record>
{
    if data.is_empty() {
        return Err(TreeError::EmptyDataset);
    }

    let mut n_true = 0_usize;
    for record in data {
        let record: &Record = record.borrow();
        if record.get_bool(attr)? {
            n_true += 1;
        }
    }

    Ok(n_true as f64 / data.len() as f64)
}


/// Returns the Gini impurity `p * (1 - p)` of `data`
/// with respect to the boolean attribute `attr`,
/// where `p` is the [`proportion`] of `attr`.
///
/// The value lies in `[0, 0.25]`,
/// and is `0` iff the group is pure.
#[inline]
pub fn gini_index<R>(data: &[R], attr: &str) -> Result<f64>
    where R: Borrow<Record>
{
    let p = proportion(data, attr)?;
    Ok(p * (1f64 - p))
}
