//! End-to-end queries against the six-object demo world.

use tarski_core::{Position, Shape, Size, World};
use tarski_query::{Bindings, EvalError, Query, QueryError, evaluate};

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

fn eval(source: &str) -> bool {
    let world = demo_world();
    evaluate(source, &Bindings::from_world(&world))
        .unwrap_or_else(|e| panic!("`{source}` failed: {e}"))
}

#[test]
fn between_and_not_cube() {
    assert!(eval("isBetweenOf(B, C, A) && (!isCube(B))"));
    assert!(eval("isBetweenOf(B,C,A) && !isCube(B)"));
}

#[test]
fn shape_tests() {
    let expected = [
        ("isCube(A)", true),
        ("isTet(A)", false),
        ("isDodec(A)", false),
        ("isCube(B)", false),
        ("isTet(B)", true),
        ("isDodec(B)", false),
        ("isCube(C)", false),
        ("isTet(C)", false),
        ("isDodec(C)", true),
    ];
    for (source, result) in expected {
        assert_eq!(eval(source), result, "{source}");
    }
}

#[test]
fn horizontal_order() {
    assert!(eval("isRightOf(B, A) && isLeftOf(B, C)"));
    assert!(!eval("isLeftOf(C, A)"));
}

#[test]
fn rows_columns_and_shapes() {
    assert!(eval("isSameRow(A, B) && isSameRow(B, C)"));
    assert!(!eval("isSameCol(A, B)"));
    assert!(eval("isSameCol(C, D)"));
    assert!(!eval("isSameShape(A, C)"));
}

#[test]
fn diagonal_betweenness() {
    assert!(eval(
        "isBetweenOf(E, D, F) && isBetweenOf(E, F, D) && isSameShape(D, E) \
         && isDodec(F) && isSameShape(F, E) && (!isLeftOf(F, A))"
    ));
    // Coincident endpoints leave no interior.
    assert!(!eval("isBetweenOf(E, C, D)"));
}

#[test]
fn sizes_and_adjacency() {
    assert!(eval("isSmaller(A, B) && isLarger(C, B) && isSameSize(C, F)"));
    assert!(eval("isAdjacent(A, B) && !isAdjacent(A, C)"));
    assert!(eval("isSmall(A) && isMedium(B) && isLarge(F)"));
}

#[test]
fn implication_and_biconditional() {
    assert!(eval("isCube(A) -> isSmall(A)"));
    assert!(eval("isTet(C) -> isCube(Nope)"));
    assert!(eval("isDodec(C) <-> isLarge(C)"));
    assert!(!eval("isDodec(A) <-> isSmall(A)"));
}

#[test]
fn unknown_key_is_an_error() {
    let world = demo_world();
    let err = evaluate("isCube(G)", &Bindings::from_world(&world)).unwrap_err();
    assert_eq!(
        err,
        QueryError::Eval(EvalError::UnknownIdentifier {
            name: "G".into(),
            span: 7..8,
        })
    );
}

#[test]
fn malformed_queries_are_syntax_errors() {
    let world = demo_world();
    let bindings = Bindings::from_world(&world);
    for source in ["", "isCube(A", "isCube(A) &&", "isCube(A) & isTet(B)", "isCube(A,)"] {
        assert!(
            matches!(evaluate(source, &bindings), Err(QueryError::Syntax(_))),
            "{source:?} should be a syntax error"
        );
    }
}

#[test]
fn runaway_nesting_is_a_syntax_error() {
    let world = demo_world();
    let bindings = Bindings::from_world(&world);

    let groups = format!("{}isCube(A){}", "(".repeat(10_000), ")".repeat(10_000));
    let negations = format!("{}isCube(A)", "!".repeat(100_000));
    for source in [groups, negations] {
        match evaluate(&source, &bindings) {
            Err(QueryError::Syntax(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].span, 32..33);
                assert!(errors[0].message.contains("nested too deeply"));
            }
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }
}

#[test]
fn parsed_query_is_reused_across_worlds() {
    let query = Query::parse("isLeftOf(A, B)").unwrap();
    let world = demo_world();
    assert!(query.evaluate(&Bindings::from_world(&world)).unwrap());

    let mut mirrored = World::new();
    mirrored.add_object("A", Shape::Cube, Size::Small, Position::new(1, 0));
    mirrored.add_object("B", Shape::Tet, Size::Medium, Position::new(0, 0));
    assert!(!query.evaluate(&Bindings::from_world(&mirrored)).unwrap());
}

#[test]
fn bindings_are_shared_across_threads() {
    let world = demo_world();
    let bindings = Bindings::from_world(&world);
    let query = Query::parse("isTet(B) && isBetweenOf(B, A, C)").unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| query.evaluate(&bindings)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(true));
        }
    });
}
