//! Enumerating candidate splits and picking the best one.
use rayon::prelude::*;
use tracing::trace;

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::error::{Result, TreeError};
use crate::sample::{PredictorKind, Record, Value};
use super::splitter::{split, split_quality};


/// A scored split candidate: the quality and the split value.
/// The value is `None` iff the split does not improve the impurity.
pub type Candidate = (f64, Option<Value>);


/// Returns the single boolean split of `data` on `var`,
/// i.e., `var == true` vs. `var == false`.
pub fn all_boolean_splits<R>(data: &[R], var: &str, target: &str)
    -> Result<Vec<Candidate>>
    where R: Borrow<Record>
{
    let value = Value::Bool(true);
    let (left, right) = split(data, var, &value)?;
    let quality = split_quality(data, &left, &right, target)?;

    let candidate = if quality == 0f64 {
        (0f64, None)
    } else {
        (quality, Some(value))
    };
    Ok(vec![candidate])
}


/// Returns one split of `data` on `var` per record,
/// using the record's value as the threshold (`left` is `var <= threshold`).
pub fn all_numeric_splits<R>(data: &[R], var: &str, target: &str)
    -> Result<Vec<Candidate>>
    where R: Borrow<Record>
{
    let mut candidates = Vec::with_capacity(data.len());
    for record in data {
        let record: &Record = record.borrow();
        let threshold = record.get(var)?;
        let (left, right) = split(data, var, threshold)?;
        let quality = split_quality(data, &left, &right, target)?;

        let candidate = if quality == 0f64 {
            (0f64, None)
        } else {
            (quality, Some(threshold.clone()))
        };
        candidates.push(candidate);
    }
    Ok(candidates)
}


/// Returns the best split of `data` on `var`.
///
/// The enumeration is chosen by the kind of `var` on the first record.
/// Candidates are compared by quality, then by split value;
/// among equal candidates the first one wins.
pub fn best_split_on_var<R>(data: &[R], var: &str, target: &str)
    -> Result<Candidate>
    where R: Borrow<Record>
{
    let first: &Record = data.first()
        .ok_or(TreeError::EmptyDataset)?
        .borrow();

    let candidates = match first.get(var)?.kind() {
        PredictorKind::Categorical => all_boolean_splits(data, var, target)?,
        PredictorKind::Ordered => all_numeric_splits(data, var, target)?,
    };

    first_max_by(candidates, cmp_candidate)
        .ok_or(TreeError::EmptyDataset)
}


/// Returns the predictor and the split value that maximize
/// the impurity reduction over all `predictors`.
///
/// Ties in `(quality, value)` go to the lexicographically
/// greatest predictor name.
/// The value is `None` if no predictor improves the impurity.
pub fn best_split<R, S>(data: &[R], predictors: &[S], target: &str)
    -> Result<(String, Option<Value>)>
    where R: Borrow<Record> + Sync,
          S: AsRef<str> + Sync,
{
    let ((_, value), var) = search(data, predictors, target, false)?;
    Ok((var.to_string(), value))
}


/// Scores every predictor and returns the best `(candidate, predictor)`.
/// With `parallel`, predictors are scored on the rayon pool;
/// the result is the same as the sequential one.
pub(super) fn search<'p, R, S>(
    data:       &[R],
    predictors: &'p [S],
    target:     &str,
    parallel:   bool,
) -> Result<(Candidate, &'p str)>
    where R: Borrow<Record> + Sync,
          S: AsRef<str> + Sync,
{
    let score = |var: &'p S| -> Result<(Candidate, &'p str)> {
        let var = var.as_ref();
        let candidate = best_split_on_var(data, var, target)?;
        trace!(
            predictor = var,
            quality = candidate.0,
            value = ?candidate.1,
            "scored predictor"
        );
        Ok((candidate, var))
    };

    let scores = if parallel {
        predictors.par_iter()
            .map(score)
            .collect::<Result<Vec<_>>>()?
    } else {
        predictors.iter()
            .map(score)
            .collect::<Result<Vec<_>>>()?
    };

    first_max_by(scores, |(a, a_var), (b, b_var)| {
        cmp_candidate(a, b).then_with(|| a_var.cmp(b_var))
    })
    .ok_or(TreeError::NoPredictors)
}


/// Compares two candidates by quality, then by split value.
/// `None` sorts below every value.
fn cmp_candidate(a: &Candidate, b: &Candidate) -> Ordering {
    a.0.partial_cmp(&b.0)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            match (&a.1, &b.1) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(x), Some(y)) => x.tie_cmp(y),
            }
        })
}


/// Returns the first maximal item of `iter` under `cmp`.
/// `Iterator::max_by` returns the last one, which breaks ties differently.
fn first_max_by<T, I, F>(iter: I, mut cmp: F) -> Option<T>
    where I: IntoIterator<Item = T>,
          F: FnMut(&T, &T) -> Ordering,
{
    iter.into_iter()
        .fold(None, |best, item| {
            match best {
                Some(best) if cmp(&item, &best) != Ordering::Greater => {
                    Some(best)
                },
                _ => Some(item),
            }
        })
}
