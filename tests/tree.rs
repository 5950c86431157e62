use gini_tree::prelude::*;
use polars::prelude::{DataFrame, DataType, NamedFrom, Series};
use rand::prelude::*;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

use std::fs;

// Toy example  (+/- are the pos/neg examples)
// This partition is a classification tree for the sample.
// 
// 15|                     |
//   |                   5 |
//   |                  -  |
//   |                     |         6
//   |                     |        -
// 10|       4             |________________________ 9.5
//   |      -              |             1
//   |                     |            +
//   |                     |
//   |                     |   0
//  5|                     |  +
//   |                     |                 2
//   |                     |                +
//   |            3        |
//   |           -         |
//   |_____________________|____________________
//  0            5         | 10            15
//                         |
//                        9.0
// 
// 

fn toy_dataframe() -> DataFrame {
    let s1 = Series::new("x", &[10.0, 14.0, 15.0, 5.0, 3.0,  8.0, 12.0]);
    let s2 = Series::new("y", &[ 5.0,  8.0,  3.0, 1.0, 9.0, 13.0, 11.0]);
    let target = Series::new(
        "class", &[true, true, true, false, false, false, false]
    );
    DataFrame::new(vec![s1, s2, target]).unwrap()
}


fn toy_tree() -> (Dataset, ClassificationTree) {
    let sample = Dataset::from_dataframe(&toy_dataframe()).unwrap();
    let tree = ClassificationTreeBuilder::new(&sample)
        .predictors(["x", "y"])
        .target("class")
        .build()
        .unwrap();
    (sample, tree)
}


#[test]
fn from_dataframe() {
    let (sample, tree) = toy_tree();
    println!("{tree:?}");

    let expected = sample.iter()
        .map(|x| x.get_bool("class").unwrap())
        .collect::<Vec<_>>();
    let predictions = tree.predict_all(&sample).unwrap();
    assert_eq!(predictions, expected);

    // A strict binary tree whose leaves hold the whole sample.
    let root = tree.root();
    assert_eq!(root.n_nodes(), 2 * root.n_leaves() - 1);
    assert_eq!(leaf_sizes(root).iter().sum::<usize>(), sample.len());
}


#[test]
fn equal_candidates_prefer_greater_name() {
    // `x <= 8` and `y <= 8` cut the sample into the same sizes
    // with the same impurity, so the tie goes to `y`.
    let (_, tree) = toy_tree();
    let Node::Internal { split, .. } = tree.root() else {
        panic!("expected an internal root, got {:?}", tree.root());
    };
    assert_eq!(split.var, "y");
    assert_eq!(split.value, Value::Float(8.0));
}


#[test]
fn unseen_records() {
    let (_, tree) = toy_tree();

    let x = Record::new().with("x", 13.0).with("y", 4.0);
    assert!(tree.predict(&x).unwrap());

    let x = Record::new().with("x", 2.0).with("y", 2.0);
    assert!(!tree.predict(&x).unwrap());

    let x = Record::new().with("x", 13.0).with("y", 14.0);
    assert!(!tree.predict(&x).unwrap());
}


#[test]
fn query_of_wrong_kind() {
    let (_, tree) = toy_tree();
    let x = Record::new().with("x", true).with("y", true);
    assert!(matches!(
        tree.predict(&x),
        Err(TreeError::AttributeType { .. })
    ));
}


#[test]
fn unsupported_column() {
    let s = Series::new("d", &[1_i32, 2])
        .cast(&DataType::Date)
        .unwrap();
    let df = DataFrame::new(vec![s]).unwrap();
    assert!(matches!(
        Dataset::from_dataframe(&df),
        Err(TreeError::AttributeType { .. })
    ));
}


#[test]
fn json_round_trip() {
    let (sample, tree) = toy_tree();

    let file = NamedTempFile::new().unwrap();
    tree.to_json_file(file.path()).unwrap();
    let restored = ClassificationTree::from_json_file(file.path()).unwrap();

    assert_eq!(tree, restored);
    assert_eq!(
        tree.predict_all(&sample).unwrap(),
        restored.predict_all(&sample).unwrap(),
    );
}


#[test]
fn json_round_trip_keeps_float_thresholds() {
    // Reloaded thresholds must keep their exact bits,
    // or a record sitting on a threshold changes sides.
    let mut rng = StdRng::seed_from_u64(7);
    let sample = (0..200)
        .map(|_| {
            Record::new()
                .with("x", rng.gen_range(-1f64..1f64))
                .with("z", rng.gen::<f64>() * 1e6)
                .with("class", rng.gen_bool(0.5))
        })
        .collect::<Vec<_>>();
    let tree = gini_tree::train(&sample, ["x", "z"], "class").unwrap();

    let file = NamedTempFile::new().unwrap();
    tree.to_json_file(file.path()).unwrap();
    let restored = ClassificationTree::from_json_file(file.path()).unwrap();

    assert_eq!(tree, restored);
    assert_eq!(
        tree.predict_all(&sample).unwrap(),
        restored.predict_all(&sample).unwrap(),
    );
}


#[test]
fn dot_file() {
    let (_, tree) = toy_tree();

    let file = NamedTempFile::new().unwrap();
    tree.to_dot_file(file.path()).unwrap();
    let dot = fs::read_to_string(file.path()).unwrap();

    assert!(dot.starts_with("graph ClassificationTree {"));
    assert!(dot.trim_end().ends_with('}'));
    assert_eq!(dot.matches("shape = box").count(), tree.root().n_leaves());
    assert_eq!(dot.matches(" -- ").count(), tree.root().n_nodes() - 1);
}


fn leaf_sizes(node: &Node) -> Vec<usize> {
    match node {
        Node::Leaf { data } => vec![data.len()],
        Node::Internal { left, right, .. } => {
            let mut sizes = leaf_sizes(left);
            sizes.extend(leaf_sizes(right));
            sizes
        },
    }
}
