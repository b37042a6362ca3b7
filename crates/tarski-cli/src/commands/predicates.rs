use comfy_table::{ContentArrangement, Table};
use tarski_core::Predicate;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Predicate", "Arity", "Usage"]);

    for predicate in Predicate::ALL {
        let params = ["a", "b", "c"][..predicate.arity()].join(", ");
        table.add_row(vec![
            predicate.name().to_string(),
            predicate.arity().to_string(),
            format!("{predicate}({params})"),
        ]);
    }

    println!("{table}");
    Ok(())
}
