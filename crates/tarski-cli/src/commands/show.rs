use std::path::Path;

use colored::Colorize;

pub fn run(world_path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    for line in world.describe() {
        println!("{line}");
    }

    for (position, keys) in world.position_collisions() {
        eprintln!(
            "{}: {} share position {position}",
            "warning".yellow().bold(),
            keys.join(", ")
        );
    }

    Ok(())
}
