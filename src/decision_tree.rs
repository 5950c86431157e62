/// Class proportion and Gini impurity.
pub mod impurity;
/// Comparison rules and the partition of a group of records.
pub mod splitter;
/// Candidate enumeration and best split selection.
pub mod split_search;
/// Defines the nodes of a classification tree.
pub mod node;
/// Defines the trained classification tree.
pub mod classifier;

mod dtree;
mod builder;


pub use impurity::{proportion, gini_index};
pub use splitter::{compare_op, split, split_quality, CompareOp, LeftRight, Split};
pub use split_search::{
    all_boolean_splits,
    all_numeric_splits,
    best_split_on_var,
    best_split,
    Candidate,
};
pub use node::{isleft, Node};
pub use dtree::build_tree;
pub use builder::ClassificationTreeBuilder;
pub use classifier::ClassificationTree;
