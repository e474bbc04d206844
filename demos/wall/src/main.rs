use flow_wall::{Block, Policy, Structure, Wall};

fn build_wall() -> anyhow::Result<Wall> {
    let mut window_frame = Block::composite("white", "wood", vec![]);
    window_frame.add_child(Block::leaf("clear", "glass"))?;
    window_frame.add_child(Block::leaf("clear", "glass"))?;

    let mut wall = Wall::new(vec![
        Block::leaf("red", "clay"),
        Block::leaf("red", "clay"),
        Block::composite(
            "grey",
            "concrete",
            vec![Block::leaf("red", "clay"), window_frame],
        ),
    ]);
    wall.add_block(Block::leaf("yellow", "sandstone"));
    Ok(wall)
}

fn main() -> anyhow::Result<()> {
    flow_wall::init_logging();

    let wall = build_wall()?;
    for block in wall.flatten() {
        log::info!("{}", block);
    }

    println!("blocks: {}", wall.count());
    println!("blocks without composites: {}", wall.count_without_composite());
    match wall.find_block_by_color("clear") {
        Some(block) => println!("first clear block: {}", block),
        None => println!("no clear block"),
    }
    println!("clay blocks: {}", wall.find_blocks_by_material("clay").len());

    let containers_only = wall.clone().with_policy(Policy::LeavesOnly);
    println!(
        "wood blocks when frames are containers: {}",
        containers_only.find_blocks_by_material("wood").len()
    );

    // a leaf can't take children
    let mut brick = Block::leaf("red", "clay");
    if let Err(e) = brick.add_child(Block::leaf("green", "moss")) {
        log::warn!("{}", e);
    }

    Ok(())
}
