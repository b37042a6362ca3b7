use std::path::Path;

pub fn run(world_path: Option<&Path>, exprs: &[String]) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    match super::evaluate_all(&world, exprs) {
        0 => Ok(()),
        failed => Err(format!("{failed} of {} queries failed", exprs.len())),
    }
}
