//! A node struct used in the classification tree.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::error::{Result, TreeError};
use crate::sample::{Dataset, Record};
use super::impurity::proportion;
use super::splitter::{LeftRight, Split};


/// A node of the classification tree.
/// Each internal node owns its two children exclusively.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A terminal node that owns the records that reached it.
    Leaf {
        /// The records that reached this leaf.
        data: Dataset,
    },
    /// A branching node.
    Internal {
        /// The splitting rule of this node.
        split: Split,
        /// The child for records that satisfy `split`.
        left: Box<Node>,
        /// The child for the other records.
        right: Box<Node>,
    },
}


impl Node {
    /// Construct a leaf node.
    #[inline]
    pub fn leaf(data: Dataset) -> Self {
        Self::Leaf { data, }
    }


    /// Construct an internal node.
    #[inline]
    pub fn internal(split: Split, left: Box<Node>, right: Box<Node>) -> Self {
        Self::Internal { split, left, right, }
    }


    /// Returns `true` if `self` is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the depth of the subtree rooted at `self`.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => {
                1 + left.depth().max(right.depth())
            },
        }
    }


    /// Returns the number of leaves under `self`.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { left, right, .. } => {
                left.n_leaves() + right.n_leaves()
            },
        }
    }


    /// Returns the number of nodes under `self`, including `self`.
    pub fn n_nodes(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { left, right, .. } => {
                1 + left.n_nodes() + right.n_nodes()
            },
        }
    }


    /// Walk down to the leaf `record` reaches.
    /// Each internal node reapplies its stored comparison rule.
    pub fn reach(&self, record: &Record) -> Result<&Dataset> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { data } => { return Ok(data); },
                Self::Internal { split, left, right } => {
                    node = match split.side(record)? {
                        LeftRight::Left  => &**left,
                        LeftRight::Right => &**right,
                    };
                },
            }
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize, target: &str)
        -> Result<(Vec<String>, usize)>
    {
        match self {
            Node::Internal { split, left, right } => {
                let node = format!(
                    "\tnode_{id} [ label = \"{split} ?\" ];\n",
                    split = split.to_string().replace('"', "\\\""),
                );

                let left_id = id + 1;
                let (     left,  right_id) = left.to_dot_info(left_id, target)?;
                let (mut right, return_id) = right.to_dot_info(right_id, target)?;

                let mut info = left;
                info.push(node);
                info.append(&mut right);

                let left_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                );
                info.push(left_edge);
                let right_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                );
                info.push(right_edge);

                Ok((info, return_id))
            },
            Node::Leaf { data } => {
                let n_sample = data.len();
                let p = proportion(data.records(), target)?;
                let info = format!(
                    "\tnode_{id} [ label = \"n = {n_sample}\\np = {p:.2}\", shape = box ];\n",
                );

                Ok((vec![info], id + 1))
            },
        }
    }
}


/// Returns `true` if `record` goes to the left child of
/// the internal node `node`.
/// A leaf has no children, so asking it is an error.
pub fn isleft(node: &Node, record: &Record) -> Result<bool> {
    match node {
        Node::Internal { split, .. } => split.is_left(record),
        Node::Leaf { .. } => Err(TreeError::NotInternal),
    }
}


/// Returns the proportion of `target` in the leaf `record` reaches.
pub fn confidence(node: &Node, record: &Record, target: &str) -> Result<f64> {
    let data = node.reach(record)?;
    proportion(data.records(), target)
}


/// Predict `target` of `record` by the majority vote
/// at the leaf `record` reaches. Ties go to `true`.
pub fn predict(node: &Node, record: &Record, target: &str) -> Result<bool> {
    let p = confidence(node, record, target)?;
    Ok(p >= 0.5)
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal {
                split,
                left,
                right,
            } => {
                f.debug_struct("Internal")
                    .field("split", &split)
                    .field("left", &left)
                    .field("right", &right)
                    .finish()
            },
            Self::Leaf {
                data,
            } => {
                f.debug_struct("Leaf")
                    .field("n_sample", &data.len())
                    .finish()
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Value;

    fn record(i: i64, b: bool, y: bool) -> Record {
        Record::new().with("i", i).with("b", b).with("y", y)
    }

    fn tree_01() -> Node {
        Node::leaf(Dataset::new(vec![record(1, true, true), record(2, true, true)]))
    }

    fn tree_02() -> Node {
        Node::leaf(Dataset::new(vec![record(3, false, false)]))
    }

    fn tree_03() -> Node {
        let split = Split::new("b", Value::Bool(true));
        Node::internal(split, Box::new(tree_01()), Box::new(tree_02()))
    }

    fn query(b: bool) -> Record {
        Record::new().with("i", 0).with("b", b)
    }

    #[test]
    fn test_isleft() {
        let node = tree_03();
        assert!(isleft(&node, &query(true)).unwrap());
        assert!(!isleft(&node, &query(false)).unwrap());

        let node = Node::internal(
            Split::new("i", Value::Int(2)),
            Box::new(tree_01()),
            Box::new(tree_02()),
        );
        assert!(isleft(&node, &Record::new().with("i", 2)).unwrap());
        assert!(!isleft(&node, &Record::new().with("i", 3)).unwrap());
    }

    #[test]
    fn test_isleft_on_leaf() {
        assert!(matches!(
            isleft(&tree_01(), &query(true)),
            Err(TreeError::NotInternal)
        ));
    }

    #[test]
    fn test_predict() {
        let x = query(false);
        assert!(predict(&tree_01(), &x, "y").unwrap());
        assert!(!predict(&tree_02(), &x, "y").unwrap());
        assert!(!predict(&tree_03(), &x, "y").unwrap());
        assert!(predict(&tree_03(), &query(true), "y").unwrap());
    }

    #[test]
    fn test_predict_tie_is_true() {
        let leaf = Node::leaf(Dataset::new(vec![
            record(1, true, true),
            record(2, true, false),
        ]));
        assert!(predict(&leaf, &query(true), "y").unwrap());
    }

    #[test]
    fn test_traversal_uses_stored_rule() {
        // A threshold split on `i` at 2: `i <= 2` goes left.
        let split = Split::new("i", Value::Int(2));
        let node = Node::internal(split, Box::new(tree_01()), Box::new(tree_02()));

        let x = Record::new().with("i", 2);
        assert!(predict(&node, &x, "y").unwrap());
        let x = Record::new().with("i", 3);
        assert!(!predict(&node, &x, "y").unwrap());
    }

    #[test]
    fn test_shape() {
        let node = tree_03();
        assert_eq!(node.depth(), 1);
        assert_eq!(node.n_leaves(), 2);
        assert_eq!(node.n_nodes(), 3);
        assert!(!node.is_leaf());
        assert!(tree_01().is_leaf());
    }

    #[test]
    fn test_dot_info() {
        let (info, next_id) = tree_03().to_dot_info(0, "y").unwrap();
        assert_eq!(next_id, 3);
        assert_eq!(info.len(), 5);
        assert!(info.iter().any(|row| row.contains("b == true ?")));
    }
}
