//! Defines the trained classification tree.
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::{BufReader, BufWriter, prelude::*};

use crate::Classifier;
use crate::error::Result;
use crate::sample::Record;
use super::node::{self, Node};


/// A trained classification tree.
/// This struct is a wrapper of the root [`Node`]
/// together with the target it predicts.
/// It is never modified after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationTree {
    root: Node,
    target: String,
    predictors: Vec<String>,
}


impl ClassificationTree {
    #[inline]
    pub(crate) fn new(root: Node, target: String, predictors: Vec<String>)
        -> Self
    {
        Self { root, target, predictors, }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the name of the target attribute.
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }


    /// Returns the predictors the tree was grown with.
    #[inline]
    pub fn predictors(&self) -> &[String] {
        &self.predictors[..]
    }


    /// Write the current classification tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let info = self.root.to_dot_info(0, &self.target)?.0;

        let mut f = BufWriter::new(File::create(path)?);
        f.write_all(b"graph ClassificationTree {\n")?;
        for row in info {
            f.write_all(row.as_bytes())?;
        }
        f.write_all(b"}\n")?;
        f.flush()?;

        Ok(())
    }


    /// Write the current classification tree to a JSON file.
    pub fn to_json_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut f, self)?;
        f.flush()?;
        Ok(())
    }


    /// Read a classification tree written by [`Self::to_json_file`].
    pub fn from_json_file<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let f = BufReader::new(File::open(path)?);
        let tree = serde_json::from_reader(f)?;
        Ok(tree)
    }
}


impl Classifier for ClassificationTree {
    fn confidence(&self, record: &Record) -> Result<f64> {
        node::confidence(&self.root, record, &self.target)
    }


    fn predict(&self, record: &Record) -> Result<bool> {
        node::predict(&self.root, record, &self.target)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClassificationTreeBuilder;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn sample() -> Vec<Record> {
        [(1, true, true), (2, true, true), (3, false, false), (4, false, true)]
            .into_iter()
            .map(|(i, b, y)| Record::new().with("i", i).with("b", b).with("y", y))
            .collect()
    }

    fn tree() -> ClassificationTree {
        ClassificationTreeBuilder::new(&sample())
            .predictors(["i", "b"])
            .target("y")
            .build()
            .unwrap()
    }

    #[test]
    fn test_predict_all_fits_sample() {
        let tree = tree();
        let data = sample();
        let expected = data.iter()
            .map(|x| x.get_bool("y").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(tree.predict_all(&data).unwrap(), expected);

        let confidence = tree.confidence_all(&data).unwrap();
        assert!(
            confidence.iter().all(|c| *c < TEST_TOLERANCE || *c > 1f64 - TEST_TOLERANCE),
            "every leaf is pure, got {confidence:?}"
        );
    }

    #[test]
    fn test_query_needs_only_path_predictors() {
        let tree = tree();
        // `i <= 2` leads straight to a leaf, so neither `b` nor `y` is read.
        let x = Record::new().with("i", 2);
        assert!(tree.predict(&x).unwrap());

        let x = Record::new().with("b", true);
        assert!(matches!(
            tree.predict(&x),
            Err(crate::TreeError::AttributeMissing(name)) if name == "i"
        ));
    }
}
