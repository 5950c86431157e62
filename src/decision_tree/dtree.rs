//! Recursive construction of the classification tree.
use tracing::debug;

use std::borrow::Borrow;

use crate::error::Result;
use crate::sample::{Dataset, Record};
use super::node::Node;
use super::split_search::search;
use super::splitter::Split;


/// Build a classification tree from `data`.
///
/// A branch becomes a leaf owning its records
/// exactly when no predictor improves the Gini impurity.
/// There is no other stopping rule.
pub fn build_tree<R, S>(data: &[R], predictors: &[S], target: &str)
    -> Result<Node>
    where R: Borrow<Record> + Sync,
          S: AsRef<str> + Sync,
{
    let group = data.iter()
        .map(Borrow::<Record>::borrow)
        .collect::<Vec<&Record>>();
    grow(&group, predictors, target, false, 0)
}


/// Grow the subtree for `data`.
/// With `parallel`, both children are grown on the rayon pool.
pub(crate) fn grow<S>(
    data:       &[&Record],
    predictors: &[S],
    target:     &str,
    parallel:   bool,
    depth:      usize,
) -> Result<Node>
    where S: AsRef<str> + Sync,
{
    let ((quality, value), var) = search(data, predictors, target, parallel)?;

    // No predictor improves the impurity.
    let Some(value) = value else {
        debug!(depth, n_sample = data.len(), "grew a leaf");
        let leaf = data.iter()
            .map(|&record| record.clone())
            .collect::<Dataset>();
        return Ok(Node::leaf(leaf));
    };

    let rule = Split::new(var, value);
    let (left, right) = rule.partition(data)?;
    debug!(
        depth,
        n_sample = data.len(),
        n_left = left.len(),
        n_right = right.len(),
        quality,
        split = %rule,
        "grew an internal node"
    );

    // A candidate with a value never has an empty side,
    // so each recursive call works on a strictly smaller group.
    let depth = depth + 1;
    let (left, right) = if parallel {
        rayon::join(
            || grow(&left, predictors, target, parallel, depth),
            || grow(&right, predictors, target, parallel, depth),
        )
    } else {
        (
            grow(&left, predictors, target, parallel, depth),
            grow(&right, predictors, target, parallel, depth),
        )
    };

    Ok(Node::internal(rule, Box::new(left?), Box::new(right?)))
}
