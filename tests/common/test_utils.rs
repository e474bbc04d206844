#![allow(dead_code)]

use flow_wall::{Block, Wall};

pub(crate) fn brick(color: &str, material: &str) -> Block {
    Block::leaf(color, material)
}

pub(crate) fn composite(color: &str, material: &str, children: Vec<Block>) -> Block {
    Block::composite(color, material, children)
}

/// `[Brick(red,clay), Composite(blue,stone,[Brick(green,wood)])]`
pub(crate) fn red_blue_green() -> Wall {
    Wall::new(vec![
        brick("red", "clay"),
        composite("blue", "stone", vec![brick("green", "wood")]),
    ])
}

/// A composite inside a composite inside a composite, holding one leaf.
pub(crate) fn nested(depth: usize) -> Block {
    let mut block = brick("white", "marble");
    for level in 0..depth {
        block = composite(&format!("level-{}", level), "steel", vec![block]);
    }
    block
}

/**
 * A wider tree mixing leaves and composites on several levels.
 *
 * Pre-order: red/clay, grey/concrete, red/wood, grey/stone, white/clay,
 * black/clay, yellow/clay
 */
pub(crate) fn mixed() -> Wall {
    Wall::new(vec![
        brick("red", "clay"),
        composite(
            "grey",
            "concrete",
            vec![
                brick("red", "wood"),
                composite("grey", "stone", vec![brick("white", "clay")]),
                brick("black", "clay"),
            ],
        ),
        brick("yellow", "clay"),
    ])
}

pub(crate) fn leaves_in(block: &Block) -> usize {
    if block.is_composite() {
        block.children().iter().map(leaves_in).sum()
    } else {
        1
    }
}

pub(crate) fn init() {
    flow_wall::init_logging();
}
