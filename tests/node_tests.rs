use branchset::model::{Node, TreeBuilder};
use branchset::parse;
use branchset::parser::ParsingErrorType;
use serde_json::json;

// ============= Node Construction Tests =============
#[test]
fn test_new_node_is_empty_leaf() {
    let node = Node::new();
    assert_eq!(node.name(), None);
    assert_eq!(node.length(), None);
    assert_eq!(node.children(), None);
    assert!(node.is_leaf());
    assert!(!node.is_internal());
    assert_eq!(node.num_children(), 0);
}

#[test]
fn test_builder_style_setters() {
    let node = Node::new()
        .with_name("Anser")
        .with_length(0.7)
        .with_children(vec![Node::leaf(Some("A"), None)]);
    assert_eq!(node.name(), Some("Anser"));
    assert_eq!(node.length(), Some(0.7));
    assert_eq!(node.num_children(), 1);
}

#[test]
fn test_empty_branchset_differs_from_leaf() {
    let leaf = Node::leaf(None, None);
    let empty_internal = Node::internal(None, None, Vec::new());

    assert!(leaf.is_leaf());
    assert!(empty_internal.is_internal());
    assert_eq!(empty_internal.children(), Some(&[][..]));
    assert_ne!(leaf, empty_internal);
}

#[test]
fn test_push_and_take_children() {
    let mut node = Node::leaf(Some("X"), None);
    node.push_child(Node::leaf(Some("Y"), Some(1.0)));
    assert!(node.is_internal());
    assert_eq!(node.num_children(), 1);

    node.children_mut().unwrap().push(Node::new());
    assert_eq!(node.num_children(), 2);

    let children = node.take_children().unwrap();
    assert_eq!(children.len(), 2);
    assert!(node.is_leaf());
}

#[test]
fn test_is_empty() {
    assert!(Node::new().is_empty());
    assert!(!Node::leaf(Some("A"), None).is_empty());
    assert!(!Node::leaf(None, Some(f64::NAN)).is_empty());
    assert!(!Node::internal(None, None, Vec::new()).is_empty());
}

#[test]
fn test_set_and_clear_fields() {
    let mut node = Node::leaf(Some("X"), Some(2.0));
    node.set_name(None);
    node.set_length(None);
    assert_eq!(node, Node::new());
}

#[test]
fn test_drop_deep_chain() {
    let mut root = Node::new();
    for _ in 0..200_000 {
        root = Node::new().with_children(vec![root]);
    }
    drop(root);
}

// ============= Serialization Tests =============
#[test]
fn test_json_shape_with_names_and_lengths() {
    let root = parse("(A:0.1,B:0.2,(C:0.3,D:0.4)E:0.5)F;").unwrap();
    let expected = json!({
        "name": "F",
        "branchset": [
            {"name": "A", "length": 0.1},
            {"name": "B", "length": 0.2},
            {
                "name": "E",
                "length": 0.5,
                "branchset": [
                    {"name": "C", "length": 0.3},
                    {"name": "D", "length": 0.4}
                ]
            }
        ]
    });
    assert_eq!(serde_json::to_value(&root).unwrap(), expected);
}

#[test]
fn test_json_shape_without_names_or_lengths() {
    let root = parse("(,,(,));").unwrap();
    let expected = json!({
        "branchset": [{}, {}, {"branchset": [{}, {}]}]
    });
    assert_eq!(serde_json::to_value(&root).unwrap(), expected);
}

#[test]
fn test_json_deserialization() {
    let node: Node = serde_json::from_str(
        r#"{"name":"F","branchset":[{"name":"A","length":0.1},{"branchset":[]}]}"#,
    )
    .unwrap();
    assert_eq!(node.name(), Some("F"));
    assert_eq!(node.num_children(), 2);
    let children = node.children().unwrap();
    assert_eq!(children[0].length(), Some(0.1));
    assert!(children[1].is_internal());
    assert_eq!(children[1].num_children(), 0);
}

// ============= Tree Builder Tests =============
#[test]
fn test_builder_depth_tracking() {
    let mut builder = TreeBuilder::new();
    assert_eq!(builder.depth(), 0);
    builder.open_branchset();
    builder.open_branchset();
    assert_eq!(builder.depth(), 2);
    builder.close_branchset().unwrap();
    assert_eq!(builder.depth(), 1);
    builder.close_branchset().unwrap();
    assert_eq!(builder.depth(), 0);

    let root = builder.finish_tree().unwrap();
    assert_eq!(root.num_children(), 1);
    assert_eq!(root.children().unwrap()[0].num_children(), 1);
}

#[test]
fn test_builder_current_node() {
    let mut builder = TreeBuilder::new();
    builder.open_branchset();
    builder.set_name("A");
    builder.set_length(0.5);
    assert_eq!(builder.current().name(), Some("A"));
    assert_eq!(builder.current().length(), Some(0.5));

    builder.add_sibling().unwrap();
    assert_eq!(*builder.current(), Node::new());
}

#[test]
fn test_builder_empty_name_is_ignored() {
    let mut builder = TreeBuilder::new();
    builder.set_name("");
    assert_eq!(builder.finish_tree().unwrap().name(), None);
}

#[test]
fn test_builder_errors() {
    let mut builder = TreeBuilder::new();
    assert!(matches!(
        builder.add_sibling(),
        Err(ParsingErrorType::StructuralImbalance(_))
    ));
    assert!(matches!(
        builder.close_branchset(),
        Err(ParsingErrorType::StructuralImbalance(_))
    ));

    builder.open_branchset();
    assert!(builder.finish_tree().is_err());
    // Failed finish resets the builder
    assert_eq!(builder.depth(), 0);
    assert_eq!(builder.finish_tree().unwrap(), Node::new());
}

#[test]
fn test_builder_reuse() {
    let mut builder = TreeBuilder::new();
    builder.set_name("first");
    let first = builder.finish_tree().unwrap();

    builder.open_branchset();
    builder.init_next();
    builder.set_name("second");
    let second = builder.finish_tree().unwrap();

    assert_eq!(first.name(), Some("first"));
    assert_eq!(second, Node::leaf(Some("second"), None));
}
