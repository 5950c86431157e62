//! Exports the tree, its builder and the traits.
//! 
pub use crate::decision_tree::{
    ClassificationTree,
    ClassificationTreeBuilder,
    Node,
    Split,
};


pub use crate::sample::{
    Dataset,
    Record,
    Value,
};


pub use crate::classifier::Classifier;


pub use crate::error::{
    Result,
    TreeError,
};
