//! Stack-based construction of [Node] trees during parsing.
//!
//! The [TreeBuilder] keeps the node currently being populated together with
//! an explicit stack of its open ancestors. Parsers call
//! [`open_branchset`](TreeBuilder::open_branchset),
//! [`add_sibling`](TreeBuilder::add_sibling) and
//! [`close_branchset`](TreeBuilder::close_branchset) as they meet `(`, `,`
//! and `)`, and label the current node in between. Nesting depth is limited
//! by heap memory only, not by the call stack.
//!
//! # Ownership
//! Every open ancestor is owned by the stack. A node is attached to its
//! parent's branchset when the builder leaves it, that is on `,` (next
//! sibling) or `)` (back to the parent). Since nodes are left in input
//! order, branchsets keep the left-to-right order of the input.
//!
//! # Builder lifecycle
//! A builder can construct multiple trees sequentially:
//!
//! ```text
//! Empty ──→ init_next() ──→ Building ──→ open/sibling/close/set_* ──→ finish_tree() ──→ Empty
//!   ↑                                                                                  │
//!   └──────────────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::model::Node;
use crate::parser::ParsingErrorType;
use std::mem;
use tracing::trace;

// =#========================================================================#=
// TREE BUILDER
// =#========================================================================#=
/// Builds a single [Node] tree from structural events.
///
/// # Example
/// ```
/// use branchset::model::TreeBuilder;
///
/// // (A,B)F;
/// let mut builder = TreeBuilder::new();
/// builder.open_branchset();
/// builder.set_name("A");
/// builder.add_sibling().unwrap();
/// builder.set_name("B");
/// builder.close_branchset().unwrap();
/// builder.set_name("F");
///
/// let root = builder.finish_tree().unwrap();
/// assert_eq!(root.name(), Some("F"));
/// assert_eq!(root.num_children(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    current: Node,
    ancestors: Vec<Node>,
}

impl TreeBuilder {
    /// Creates a builder holding a fresh, empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepares the builder for constructing a new tree,
    /// discarding any unfinished state.
    pub fn init_next(&mut self) {
        self.current = Node::new();
        self.ancestors.clear();
    }

    /// Returns the number of currently open branchsets.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Returns the node currently being populated.
    pub fn current(&self) -> &Node {
        &self.current
    }

    /// Opens a new branchset on the current node (`(`).
    ///
    /// The current node gets a fresh branchset, replacing any previous one,
    /// and is pushed onto the ancestor stack. Its first child, a new empty
    /// node, becomes the current node.
    pub fn open_branchset(&mut self) {
        let parent = mem::take(&mut self.current);
        if parent.is_internal() {
            trace!("Reopening branchset, discarding {} children", parent.num_children());
        }
        self.ancestors.push(parent.with_children(Vec::new()));
        trace!(depth = self.ancestors.len(), "Opened branchset");
    }

    /// Starts the next sibling in the innermost open branchset (`,`).
    ///
    /// # Returns
    /// * `Ok(())` - The new sibling is now the current node
    /// * `Err(ParsingErrorType::StructuralImbalance)` - If no branchset is open
    pub fn add_sibling(&mut self) -> Result<(), ParsingErrorType> {
        let Some(parent) = self.ancestors.last_mut() else {
            return Err(ParsingErrorType::StructuralImbalance(
                "',' outside of any branchset".to_string(),
            ));
        };
        parent.push_child(mem::take(&mut self.current));
        Ok(())
    }

    /// Closes the innermost open branchset (`)`).
    ///
    /// The parent becomes the current node again and may then receive
    /// a trailing name and length.
    ///
    /// # Returns
    /// * `Ok(())` - The branchset was closed
    /// * `Err(ParsingErrorType::StructuralImbalance)` - If no branchset is open
    pub fn close_branchset(&mut self) -> Result<(), ParsingErrorType> {
        let Some(mut parent) = self.ancestors.pop() else {
            return Err(ParsingErrorType::StructuralImbalance(
                "')' without matching '('".to_string(),
            ));
        };
        parent.push_child(mem::take(&mut self.current));
        self.current = parent;
        trace!(depth = self.ancestors.len(), "Closed branchset");
        Ok(())
    }

    /// Sets the name of the current node.
    ///
    /// An empty name leaves the node unnamed.
    pub fn set_name(&mut self, name: &str) {
        if !name.is_empty() {
            self.current.set_name(Some(name.to_string()));
        }
    }

    /// Sets the branch length of the current node.
    pub fn set_length(&mut self, length: f64) {
        self.current.set_length(Some(length));
    }

    /// Finalizes the building process and returns the root.
    ///
    /// Leaves the builder in an empty state, ready for the next tree.
    ///
    /// # Returns
    /// * `Ok(Node)` - The root of the completed tree
    /// * `Err(ParsingErrorType::StructuralImbalance)` - If a branchset is still open
    pub fn finish_tree(&mut self) -> Result<Node, ParsingErrorType> {
        if !self.ancestors.is_empty() {
            let unclosed = self.ancestors.len();
            self.init_next();
            return Err(ParsingErrorType::StructuralImbalance(format!(
                "{unclosed} unclosed '('"
            )));
        }
        Ok(mem::take(&mut self.current))
    }
}
