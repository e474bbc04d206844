//! Structures built from blocks.
//!
//! A [`Structure`] answers color, material and count queries over its blocks.
//! [`Wall`] is the concrete structure: an ordered list of top-level blocks,
//! any of which may be a composite. All queries run over the pre-order
//! flattened view of the wall, so nested blocks are found at any depth.

use crate::{
    data_structures::block::Block,
    traversal::{Flatten, Policy, flatten},
};

pub trait Structure {
    /// Any block of the given color, the first one in pre-order if there are several.
    fn find_block_by_color(&self, color: &str) -> Option<&Block>;

    /// All blocks of the given material in pre-order.
    fn find_blocks_by_material(&self, material: &str) -> Vec<&Block>;

    /// Number of blocks making up the structure.
    fn count(&self) -> usize;
}

/**
 * A wall of blocks.
 *
 * The wall applies one traversal [`Policy`] to every [`Structure`] query. With
 * the default `Policy::Inclusive` a composite matches on its own color and
 * material and is counted next to its parts. The leaf-only tally is always
 * available through [`Wall::count_without_composite`].
 */
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wall {
    blocks: Vec<Block>,
    policy: Policy,
}

impl Wall {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            policy: Policy::default(),
        }
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// The wall's blocks in pre-order under the wall's policy.
    pub fn flatten(&self) -> Flatten<'_> {
        flatten(&self.blocks, self.policy)
    }

    /// Number of leaf blocks; composites are walked through but not counted.
    pub fn count_without_composite(&self) -> usize {
        log::debug!("counting leaves of a wall with {} top-level blocks", self.blocks.len());
        flatten(&self.blocks, Policy::LeavesOnly).count()
    }
}

impl Structure for Wall {
    fn find_block_by_color(&self, color: &str) -> Option<&Block> {
        log::debug!("looking up color {:?} with {:?}", color, self.policy);
        self.flatten().find(|block| block.color() == color)
    }

    fn find_blocks_by_material(&self, material: &str) -> Vec<&Block> {
        log::debug!("collecting material {:?} with {:?}", material, self.policy);
        self.flatten()
            .filter(|block| block.material() == material)
            .collect()
    }

    fn count(&self) -> usize {
        log::debug!("counting blocks with {:?}", self.policy);
        self.flatten().count()
    }
}

impl From<Vec<Block>> for Wall {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}
