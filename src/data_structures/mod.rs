//! Wall data structures: blocks and the structures built from them.
//!
//! - `block` is a single building block, either a leaf or a composite of further blocks
//! - `structure` holds the `Structure` queries and the `Wall` that implements them

pub mod block;
pub mod structure;
