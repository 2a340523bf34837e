//! Small shared helpers

pub mod preview;
pub mod symbol_tree;

pub use symbol_tree::{SymbolTree, Visit};
