use tarski_query::Query;

pub fn run(expr: &str) -> Result<(), String> {
    let query = match Query::parse(expr) {
        Ok(query) => query,
        Err(err) => {
            super::print_diagnostics(expr, &err.to_diagnostics());
            return Err(err.to_string());
        }
    };

    let json = serde_json::to_string_pretty(query.ast())
        .map_err(|e| format!("failed to serialize syntax tree: {e}"))?;
    println!("{json}");
    Ok(())
}
