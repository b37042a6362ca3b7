pub mod ast;
pub mod check;
pub mod demo;
pub mod eval;
pub mod list;
pub mod predicates;
pub mod show;

use std::path::Path;

use tarski_core::{Position, Shape, Size, World};
use tarski_query::diagnostics::{Diagnostic, Severity, render_diagnostics};

/// Load a world file, or the demo world when no path is given.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    let Some(path) = path else {
        return Ok(demo_world());
    };

    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    World::from_json(&source).map_err(|e| format!("{}: {e}", path.display()))
}

/// Six objects: A, B, C on the x axis, D on top of C, and E, F continuing
/// the diagonal from D.
fn demo_world() -> World {
    let mut world = World::new();
    world.add_object("A", Shape::Cube, Size::Small, Position::new(0, 0));
    world.add_object("B", Shape::Tet, Size::Medium, Position::new(1, 0));
    world.add_object("C", Shape::Dodec, Size::Large, Position::new(2, 0));
    world.add_object("D", Shape::Dodec, Size::Large, Position::new(2, 0));
    world.add_object("E", Shape::Dodec, Size::Large, Position::new(3, 1));
    world.add_object("F", Shape::Dodec, Size::Large, Position::new(4, 2));
    world
}

/// Print diagnostics for one query to stderr using ariadne.
fn print_diagnostics(source: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    eprint!("{}", render_diagnostics(source, "<query>", diagnostics));
}

/// Count diagnostics by severity: `(errors, warnings)`.
fn count_severities(diagnostics: &[Diagnostic]) -> (usize, usize) {
    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    (errors, diagnostics.len() - errors)
}

fn plural(n: usize, word: &str) -> String {
    format!("{n} {word}{}", if n == 1 { "" } else { "s" })
}

/// Evaluate each query, printing `"{query} - {result}"` lines.
/// Returns the number of queries that failed.
fn evaluate_all(world: &World, exprs: &[impl AsRef<str>]) -> usize {
    let bindings = tarski_query::Bindings::from_world(world);
    let mut failed = 0;

    for expr in exprs {
        let expr = expr.as_ref();
        match tarski_query::evaluate(expr, &bindings) {
            Ok(result) => println!("{expr} - {result}"),
            Err(err) => {
                log::debug!("query `{expr}` failed: {err}");
                print_diagnostics(expr, &err.to_diagnostics());
                failed += 1;
            }
        }
    }

    failed
}
