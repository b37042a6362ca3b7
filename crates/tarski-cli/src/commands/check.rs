use std::path::Path;

use colored::Colorize;
use tarski_query::Bindings;

pub fn run(world_path: Option<&Path>, exprs: &[String]) -> Result<(), String> {
    let world = super::load_world(world_path)?;
    let bindings = Bindings::from_world(&world);

    let mut errors = 0;
    let mut warnings = 0;
    for expr in exprs {
        let diagnostics = tarski_query::check(expr, &bindings);
        super::print_diagnostics(expr, &diagnostics);
        let (e, w) = super::count_severities(&diagnostics);
        errors += e;
        warnings += w;
    }

    if errors > 0 {
        return Err(format!(
            "{}, {}",
            super::plural(errors, "error"),
            super::plural(warnings, "warning")
        ));
    }

    if warnings > 0 {
        println!(
            "  {} with {}.",
            "Checks passed".yellow(),
            super::plural(warnings, "warning")
        );
    } else {
        println!("  {}", "All checks passed.".green());
    }
    Ok(())
}
