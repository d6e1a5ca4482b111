//! Data model for nested phylogenetic trees.
//!
//! # Tree representation
//! A tree is represented by its root [Node]. Each node owns its branchset
//! (ordered children), so the whole tree is a single owned value that is
//! handed to the caller. Unlike an arena, there are no parent links; the
//! parent of a node is implicit in the nesting.
//!
//! | Field | Leaf | Internal node |
//! |-------|------|---------------|
//! | `name` | optional | optional |
//! | `length` | optional | optional |
//! | `children` | `None` | `Some(branchset)` |
//!
//! # Building trees
//! Trees are constructed during parsing via the [TreeBuilder], which tracks
//! the open branchsets on an explicit stack instead of the call stack.

pub mod node;
pub mod tree_builder;

pub use node::Node;
pub use tree_builder::TreeBuilder;
