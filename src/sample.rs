//! Records, attribute values and datasets.

// Provides the attribute value type.
pub(crate) mod value;
// Provides the record and dataset structs.
pub(crate) mod record;
// Provides the conversion from `polars::DataFrame`.
pub(crate) mod dataframe;


pub use value::{Value, PredictorKind};
pub use record::{Record, Dataset};
