//! The prediction interface of a trained classification tree.
use crate::error::Result;
use crate::sample::Record;


/// A trait that defines the behavor of a boolean classifier.
/// You only need to implement `confidence` method.
pub trait Classifier {
    /// Computes the confidence that the target of `record` is `true`.
    /// This code assumes that
    /// `Classifier::confidence` returns a value in `[0.0, 1.0]`.
    fn confidence(&self, record: &Record) -> Result<f64>;


    /// Predicts the target of `record`.
    /// A confidence of exactly `0.5` is predicted as `true`.
    fn predict(&self, record: &Record) -> Result<bool> {
        let conf = self.confidence(record)?;
        Ok(conf >= 0.5)
    }


    /// Computes the confidence of every record in `records`.
    fn confidence_all(&self, records: &[Record]) -> Result<Vec<f64>> {
        records.iter()
            .map(|record| self.confidence(record))
            .collect()
    }


    /// Predicts the targets of `records`.
    fn predict_all(&self, records: &[Record]) -> Result<Vec<bool>> {
        records.iter()
            .map(|record| self.predict(record))
            .collect()
    }
}
