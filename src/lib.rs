#![warn(missing_docs)]

//!
//! A crate that grows a binary classification tree
//! from labeled records and predicts a boolean target with it.
//!
//! The tree is grown greedily.
//! For each group of records, every predictor is searched
//! for the split that maximizes the reduction of the Gini impurity
//! of the target.
//!
//! - Boolean predictors are split by `var == true`.
//! - Ordered predictors (integers, floats, texts) are split by
//!   `var <= threshold`, where the threshold is drawn from the records.
//!
//! A group becomes a leaf exactly when no split improves the impurity.
//! A leaf predicts the majority of its records, ties going to `true`.
//!
//! # Example
//!
//! ```
//! use gini_tree::prelude::*;
//!
//! let data = vec![
//!     Record::new().with("i", 1).with("b", true).with("y", true),
//!     Record::new().with("i", 2).with("b", true).with("y", true),
//!     Record::new().with("i", 3).with("b", false).with("y", false),
//! ];
//!
//! let tree = gini_tree::train(&data, ["i", "b"], "y").unwrap();
//!
//! let x = Record::new().with("i", 7).with("b", false);
//! assert!(!gini_tree::predict(&tree, &x).unwrap());
//! ```

pub mod error;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod prelude;

mod checker;


pub use error::{Result, TreeError};
pub use sample::{Dataset, PredictorKind, Record, Value};
pub use classifier::Classifier;
pub use decision_tree::{
    ClassificationTree,
    ClassificationTreeBuilder,
    Node,
};


/// Grow a classification tree that predicts the boolean attribute `target`
/// from `predictors` over `records`.
pub fn train<I, T>(records: &[Record], predictors: I, target: &str)
    -> Result<ClassificationTree>
    where I: IntoIterator<Item = T>,
          T: ToString,
{
    ClassificationTreeBuilder::new(records)
        .predictors(predictors)
        .target(target)
        .build()
}


/// Predict the target of `record` with `tree`.
#[inline]
pub fn predict(tree: &ClassificationTree, record: &Record) -> Result<bool> {
    tree.predict(record)
}
