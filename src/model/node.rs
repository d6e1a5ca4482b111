//! Node module for the nested tree representation.

use serde::{Deserialize, Serialize};

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A node of a phylogenetic tree, owning its subtree.
///
/// All three fields are optional, mirroring what the Newick string provided:
/// - `name`: label written after the node (after the `)` for internal nodes)
/// - `length`: branch length written after a `:`
/// - `children`: the branchset, present only for nodes opened with `(`
///
/// A leaf has `children == None`. An internal node has `Some(children)`;
/// an empty branchset `Some(vec![])` is representable and distinct from a leaf.
///
/// # Serialization
/// Absent fields are skipped and children are stored under `branchset`,
/// so `(A:0.1,B:0.2)F;` serializes to
/// `{"name":"F","branchset":[{"name":"A","length":0.1},{"name":"B","length":0.2}]}`.
///
/// # Drop
/// Dropping a node releases its subtree iteratively, so arbitrarily deep
/// trees are freed without exhausting the call stack.
#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    length: Option<f64>,
    #[serde(rename = "branchset", default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Node>>,
}

// ============================================================================
// Construction
// ============================================================================
impl Node {
    /// Creates a new node without name, length or children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new leaf.
    ///
    /// # Arguments
    /// * `name` - Optional label
    /// * `length` - Optional branch length
    pub fn leaf(name: Option<&str>, length: Option<f64>) -> Self {
        Self {
            name: name.map(str::to_string),
            length,
            children: None,
        }
    }

    /// Creates a new internal node with the given branchset.
    ///
    /// # Arguments
    /// * `name` - Optional label
    /// * `length` - Optional branch length
    /// * `children` - Child nodes in order
    pub fn internal(name: Option<&str>, length: Option<f64>, children: Vec<Node>) -> Self {
        Self {
            name: name.map(str::to_string),
            length,
            children: Some(children),
        }
    }

    /// Sets the name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the branch length.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the branchset, making this an internal node.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }
}

// ============================================================================
// Getters & Mutation
// ============================================================================
impl Node {
    /// Returns the label, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the branch length, if one was given.
    ///
    /// A lenient parse stores NaN for length literals without numeric prefix.
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    /// Returns the branchset, or `None` for a leaf.
    pub fn children(&self) -> Option<&[Node]> {
        self.children.as_deref()
    }

    /// Returns the branchset mutably, or `None` for a leaf.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        self.children.as_mut()
    }

    /// Returns `true` if this node has no branchset.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Returns `true` if this node has a branchset (possibly empty).
    pub fn is_internal(&self) -> bool {
        self.children.is_some()
    }

    /// Returns `true` if this node is a leaf without name and length,
    /// as parsed from a bare `;`.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.length.is_none() && self.children.is_none()
    }

    /// Returns the number of direct children (0 for a leaf).
    pub fn num_children(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }

    /// Sets or clears the name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Sets or clears the branch length.
    pub fn set_length(&mut self, length: Option<f64>) {
        self.length = length;
    }

    /// Appends a child, turning a leaf into an internal node if necessary.
    pub fn push_child(&mut self, child: Node) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Removes and returns the branchset, turning this node into a leaf.
    pub fn take_children(&mut self) -> Option<Vec<Node>> {
        self.children.take()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let Some(mut pending) = self.children.take() else {
            return;
        };
        while let Some(mut node) = pending.pop() {
            if let Some(grandchildren) = node.children.take() {
                pending.extend(grandchildren);
            }
        }
    }
}
