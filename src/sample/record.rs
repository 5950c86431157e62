use serde::{Serialize, Deserialize};

use std::ops::{Deref, Index};
use std::collections::BTreeMap;

use crate::error::{Result, TreeError};
use super::value::Value;


/// A record with named attributes.
///
/// The tree only ever reads the attributes named
/// as a predictor or as the target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    attributes: BTreeMap<String, Value>,
}


impl Record {
    /// Construct an empty record.
    pub fn new() -> Self {
        Self::default()
    }


    /// Add (or overwrite) the attribute `name` and return `self`.
    pub fn with<T, V>(mut self, name: T, value: V) -> Self
        where T: ToString,
              V: Into<Value>,
    {
        self.insert(name, value);
        self
    }


    /// Add (or overwrite) the attribute `name`.
    pub fn insert<T, V>(&mut self, name: T, value: V)
        where T: ToString,
              V: Into<Value>,
    {
        self.attributes.insert(name.to_string(), value.into());
    }


    /// Returns the value of attribute `name`.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.attributes.get(name)
            .ok_or_else(|| TreeError::AttributeMissing(name.to_string()))
    }


    /// Returns the value of the boolean attribute `name`.
    pub fn get_bool(&self, name: &str) -> Result<bool> {
        let value = self.get(name)?;
        value.as_bool()
            .ok_or_else(|| {
                TreeError::attribute_type(name, "a boolean", value.type_name())
            })
    }


    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }


    /// Returns `true` if the record has no attribute.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }


    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}


impl<T, V> FromIterator<(T, V)> for Record
    where T: ToString,
          V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = (T, V)>
    {
        let mut record = Self::new();
        iter.into_iter()
            .for_each(|(name, value)| record.insert(name, value));
        record
    }
}


/// An ordered sequence of records.
/// The order is kept by every partition of a `Dataset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}


impl Dataset {
    /// Construct a dataset from records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }


    /// Returns the records as a slice.
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }


    /// Consumes `self` and returns the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}


impl Deref for Dataset {
    type Target = [Record];
    fn deref(&self) -> &Self::Target {
        &self.records[..]
    }
}


impl Index<usize> for Dataset {
    type Output = Record;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.records[idx]
    }
}


impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}


impl FromIterator<Record> for Dataset {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = Record>
    {
        Self::new(iter.into_iter().collect())
    }
}


impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
