//! Errors reported by tree induction and prediction.
use polars::prelude::PolarsError;
use thiserror::Error;

/// A shorthand for `Result<T, TreeError>`.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur while growing or querying a classification tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A proportion or an impurity was requested for an empty group,
    /// or training was started on zero records.
    #[error("Cannot compute over an empty group of records")]
    EmptyDataset,

    /// An attribute holds a value of the wrong kind.
    #[error("Attribute `{name}` holds {found}, expected {expected}")]
    AttributeType {
        /// The attribute name.
        name: String,
        /// The kind of value the operation needs.
        expected: &'static str,
        /// The kind of value actually found.
        found: &'static str,
    },

    /// A record has no attribute with the requested name.
    #[error("Record has no attribute named `{0}`")]
    AttributeMissing(String),

    /// The predictor set is empty, so no split can be searched.
    #[error("At least one predictor is required to search for a split")]
    NoPredictors,

    /// No target attribute was given to the builder.
    #[error("A target attribute must be set before building a tree")]
    NoTarget,

    /// A leaf was given where an internal node is required.
    #[error("Expected an internal node, got a leaf")]
    NotInternal,

    /// Failed to read a column of a `DataFrame`.
    #[error("Failed to read dataframe: {0}")]
    Polars(#[from] PolarsError),

    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to (de)serialize a tree.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TreeError {
    pub(crate) fn attribute_type<T>(
        name: T,
        expected: &'static str,
        found: &'static str,
    ) -> Self
        where T: ToString
    {
        Self::AttributeType { name: name.to_string(), expected, found, }
    }
}
