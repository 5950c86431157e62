//! Conversion from `polars::DataFrame` into [`Dataset`].
use polars::prelude::*;

use crate::error::{Result, TreeError};
use super::record::{Record, Dataset};
use super::value::Value;


impl Dataset {
    /// Convert `polars::DataFrame` into `Dataset`.
    /// Each row becomes a [`Record`] keyed by the column names.
    ///
    /// - `Boolean` columns become `Value::Bool`,
    /// - integer columns become `Value::Int`,
    /// - float columns become `Value::Float`,
    /// - `Utf8` columns become `Value::Text`.
    ///
    /// A null cell leaves the attribute out of its record.
    /// An unsigned integer that does not fit in `i64` is an error.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self> {
        let n_sample = data.height();
        let mut records = vec![Record::new(); n_sample];

        for series in data.get_columns() {
            let name = series.name();
            match series.dtype() {
                DataType::Boolean => {
                    fill(&mut records, name, series.bool()?.into_iter());
                },
                DataType::Utf8 => {
                    let column = series.utf8()?
                        .into_iter()
                        .map(|s| s.map(str::to_string));
                    fill(&mut records, name, column);
                },
                dtype if dtype.is_integer() => {
                    // Fails on `UInt64` values beyond `i64::MAX`.
                    let column = series.strict_cast(&DataType::Int64)?;
                    fill(&mut records, name, column.i64()?.into_iter());
                },
                dtype if dtype.is_float() => {
                    let column = series.strict_cast(&DataType::Float64)?;
                    fill(&mut records, name, column.f64()?.into_iter());
                },
                _ => {
                    return Err(TreeError::attribute_type(
                        name,
                        "a boolean, numeric or text column",
                        "an unsupported column",
                    ));
                },
            }
        }

        Ok(Self::new(records))
    }
}


fn fill<I, V>(records: &mut [Record], name: &str, column: I)
    where I: Iterator<Item = Option<V>>,
          V: Into<Value>,
{
    records.iter_mut()
        .zip(column)
        .for_each(|(record, value)| {
            if let Some(value) = value {
                record.insert(name, value);
            }
        });
}
