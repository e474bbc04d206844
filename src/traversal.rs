//! Pre-order flattening of block trees.
//!
//! Walls are nested trees of blocks. Every query on a wall runs over the same
//! flattened view: parent first, then its children left to right, at every
//! level. Whether composites show up in that view is decided by a [`Policy`].
//!
//! # User-facing types
//!
//! - [`Policy`] selects whether composite nodes are emitted
//! - [`Flatten`] is the lazy iterator produced by [`flatten`]
//!
//! The iterator keeps an explicit stack of sibling slices instead of recursing,
//! so deep trees don't grow the call stack and no intermediate lists are built
//! per level. Nothing is cached between calls: each [`flatten`] walks the tree
//! again.

use crate::data_structures::block::Block;

/// Decides how composite nodes take part in a flattened view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Policy {
    /// A composite counts as itself plus its parts.
    #[default]
    Inclusive,
    /// A composite is only a container: its children are visited, it is never emitted.
    LeavesOnly,
}

impl Policy {
    /// Whether `block` shows up in a flattened view under this policy.
    pub fn emits(&self, block: &Block) -> bool {
        match self {
            Self::Inclusive => true,
            Self::LeavesOnly => !block.is_composite(),
        }
    }
}

/// Lazy pre-order iterator over a block tree, created by [`flatten`].
pub struct Flatten<'a> {
    // each entry is the not yet visited tail of one sibling list
    stack: Vec<std::slice::Iter<'a, Block>>,
    policy: Policy,
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let siblings = self.stack.last_mut()?;
            let Some(block) = siblings.next() else {
                self.stack.pop();
                continue;
            };
            if block.is_composite() {
                self.stack.push(block.children().iter());
            }
            if self.policy.emits(block) {
                log::trace!("flatten emits {}", block);
                return Some(block);
            }
        }
    }
}

/**
 * Flattens `blocks` in pre-order under `policy`.
 *
 * The order of the result follows the order of `blocks` and, inside every
 * composite, the order of its children.
 */
pub fn flatten(blocks: &[Block], policy: Policy) -> Flatten<'_> {
    Flatten {
        stack: vec![blocks.iter()],
        policy,
    }
}
