use tracing::info;

use crate::checker::check_sample;
use crate::error::{Result, TreeError};
use crate::sample::Record;
use super::dtree::grow;
use super::classifier::ClassificationTree;


/// A struct that builds [`ClassificationTree`].
/// `ClassificationTreeBuilder` keeps parameters for growing the tree.
///
/// # Example
///
/// ```
/// use gini_tree::{
///     ClassificationTreeBuilder,
///     Classifier,
///     Record,
/// };
///
/// let data = vec![
///     Record::new().with("i", 0).with("b", true).with("y", false),
///     Record::new().with("i", 1).with("b", true).with("y", false),
///     Record::new().with("i", 2).with("b", true).with("y", false),
///     Record::new().with("i", 3).with("b", false).with("y", true),
/// ];
///
/// let tree = ClassificationTreeBuilder::new(&data)
///     .predictors(["i", "b"])
///     .target("y")
///     .build()
///     .unwrap();
///
/// let x = Record::new().with("i", 5).with("b", false);
/// assert!(tree.predict(&x).unwrap());
/// ```
#[derive(Clone)]
pub struct ClassificationTreeBuilder<'a> {
    data: &'a [Record],
    predictors: Vec<String>,
    target: Option<String>,
    parallel: bool,
}

impl<'a> ClassificationTreeBuilder<'a> {
    /// Construct a new instance of [`ClassificationTreeBuilder`].
    pub fn new(data: &'a [Record]) -> Self {
        Self {
            data,
            predictors: Vec::new(),
            target: None,
            parallel: false,
        }
    }

    /// Set the attributes used as splitting variables.
    /// The order matters only for the enumeration order of splits.
    pub fn predictors<I, T>(mut self, predictors: I) -> Self
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        self.predictors = predictors.into_iter()
            .map(|name| name.to_string())
            .collect();
        self
    }

    /// Set the boolean attribute to predict.
    pub fn target<T>(mut self, target: T) -> Self
        where T: ToString
    {
        self.target = Some(target.to_string());
        self
    }

    /// Grow sibling subtrees and score predictors on the rayon pool.
    /// The resulting tree is identical to the sequential one.
    /// Default value is `false`.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build a `ClassificationTree`.
    /// This method consumes `self`.
    pub fn build(self) -> Result<ClassificationTree> {
        let target = self.target.ok_or(TreeError::NoTarget)?;
        check_sample(self.data, &self.predictors[..], &target)?;

        let group = self.data.iter().collect::<Vec<&Record>>();
        let root = grow(&group, &self.predictors[..], &target, self.parallel, 0)?;

        info!(
            n_sample = self.data.len(),
            n_nodes = root.n_nodes(),
            n_leaves = root.n_leaves(),
            depth = root.depth(),
            "grew a classification tree"
        );

        Ok(ClassificationTree::new(root, target, self.predictors))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn record(i: i64, y: bool) -> Record {
        Record::new().with("i", i).with("y", y)
    }

    #[test]
    fn test_missing_target() {
        let data = vec![record(0, true)];
        let result = ClassificationTreeBuilder::new(&data)
            .predictors(["i"])
            .build();
        assert!(matches!(result, Err(TreeError::NoTarget)));
    }

    #[test]
    fn test_missing_predictors() {
        let data = vec![record(0, true)];
        let result = ClassificationTreeBuilder::new(&data)
            .target("y")
            .build();
        assert!(matches!(result, Err(TreeError::NoPredictors)));
    }

    #[test]
    fn test_build() {
        let data = (0..8).map(|i| record(i, i >= 5)).collect::<Vec<_>>();
        let tree = ClassificationTreeBuilder::new(&data)
            .predictors(["i"])
            .target("y")
            .parallel(true)
            .build()
            .unwrap();

        assert_eq!(tree.target(), "y");
        assert_eq!(tree.predictors(), &["i".to_string()]);
        assert_eq!(tree.root().n_leaves(), 2);
    }
}
