use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(world_path: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    if world.is_empty() {
        println!("  No objects.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Shape", "Size", "X", "Y"]);

    for entity in world.iter() {
        let pos = entity.position();
        table.add_row(vec![
            entity.key().to_string(),
            entity.shape().to_string(),
            entity.size().to_string(),
            pos.x.to_string(),
            pos.y.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {}", super::plural(world.len(), "object"));

    Ok(())
}
