use colored::Colorize;

const QUERIES: [&str; 15] = [
    "isBetweenOf(B, C, A) && (!isCube(B))",
    "isCube(A)",
    "isTet(A)",
    "isDodec(A)",
    "isCube(B)",
    "isTet(B)",
    "isDodec(B)",
    "isCube(C)",
    "isTet(C)",
    "isDodec(C)",
    "isRightOf(B, A) && isLeftOf(B, C)",
    "isSameRow(A, B) && isSameRow(B, C)",
    "isSameCol(A, B)",
    "isSameShape(A, C)",
    "isBetweenOf(E, D, F) && isBetweenOf(E, F, D) && isSameShape(D, E) && isDodec(F) \
     && isSameShape(F, E) && (!isLeftOf(F, A))",
];

pub fn run() -> Result<(), String> {
    let world = super::demo_world();

    println!("{}", "World".bold().underline());
    for line in world.describe() {
        println!("{line}");
    }
    println!();

    println!("{}", "Queries".bold().underline());
    match super::evaluate_all(&world, &QUERIES[..]) {
        0 => Ok(()),
        failed => Err(format!("{failed} demo queries failed")),
    }
}
