//! The predicate library.
//!
//! Every predicate is a pure, total function over one, two, or three
//! entities. The free functions can be called directly; [`Predicate`] is the
//! closed set of names the query language binds, each with a fixed arity and
//! typed signature.

use std::fmt;

use crate::entity::{Entity, Position, Shape, Size};
use crate::error::{TarskiError, TarskiResult};

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// `a` and `b` have the same shape.
pub fn same_shape(a: &Entity, b: &Entity) -> bool {
    a.shape() == b.shape()
}

/// `a` is a cube.
pub fn is_cube(a: &Entity) -> bool {
    a.shape() == Shape::Cube
}

/// `a` is a tetrahedron.
pub fn is_tet(a: &Entity) -> bool {
    a.shape() == Shape::Tet
}

/// `a` is a dodecahedron.
pub fn is_dodec(a: &Entity) -> bool {
    a.shape() == Shape::Dodec
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// `a` is small.
pub fn is_small(a: &Entity) -> bool {
    a.size() == Size::Small
}

/// `a` is medium.
pub fn is_medium(a: &Entity) -> bool {
    a.size() == Size::Medium
}

/// `a` is large.
pub fn is_large(a: &Entity) -> bool {
    a.size() == Size::Large
}

/// `a` and `b` have the same size.
pub fn same_size(a: &Entity, b: &Entity) -> bool {
    a.size() == b.size()
}

/// `a` is strictly smaller than `b`.
pub fn smaller(a: &Entity, b: &Entity) -> bool {
    a.size() < b.size()
}

/// `a` is strictly larger than `b`.
pub fn larger(a: &Entity, b: &Entity) -> bool {
    a.size() > b.size()
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// `a` is left of `b` (smaller x).
pub fn left_of(a: &Entity, b: &Entity) -> bool {
    a.position().x < b.position().x
}

/// `a` is right of `b` (larger x).
pub fn right_of(a: &Entity, b: &Entity) -> bool {
    a.position().x > b.position().x
}

/// `a` is in front of `b` (larger y).
pub fn front_of(a: &Entity, b: &Entity) -> bool {
    a.position().y > b.position().y
}

/// `a` is behind `b` (smaller y).
pub fn back_of(a: &Entity, b: &Entity) -> bool {
    a.position().y < b.position().y
}

/// `a` and `b` share a row (same y).
pub fn same_row(a: &Entity, b: &Entity) -> bool {
    a.position().y == b.position().y
}

/// `a` and `b` share a column (same x).
pub fn same_col(a: &Entity, b: &Entity) -> bool {
    a.position().x == b.position().x
}

/// Either axis differs by exactly one. Diagonal neighbours count, and so do
/// objects one step apart on one axis but arbitrarily far on the other.
pub fn adjacent(a: &Entity, b: &Entity) -> bool {
    let (p, q) = (a.position(), b.position());
    p.x.abs_diff(q.x) == 1 || p.y.abs_diff(q.y) == 1
}

/// `t` lies strictly between `a` and `b` on a shared column, row, or 45°
/// diagonal.
///
/// Columns and rows are checked first so the diagonal test never sees a
/// vertical or horizontal segment. Symmetric in `a` and `b`.
pub fn between_of(t: &Entity, a: &Entity, b: &Entity) -> bool {
    let (t, a, b) = (t.position(), a.position(), b.position());

    if t.x == a.x && a.x == b.x {
        strictly_between(t.y, a.y, b.y)
    } else if t.y == a.y && a.y == b.y {
        strictly_between(t.x, a.x, b.x)
    } else if on_diagonal(a, b) && on_diagonal(a, t) {
        // Both axes must be interior, otherwise t sits on the same diagonal
        // line but outside the a-b segment.
        strictly_between(t.x, a.x, b.x) && strictly_between(t.y, a.y, b.y)
    } else {
        false
    }
}

fn strictly_between(v: i64, a: i64, b: i64) -> bool {
    (a < v && v < b) || (b < v && v < a)
}

/// `p` and `q` are distinct points joined by a segment of slope ±1.
fn on_diagonal(p: Position, q: Position) -> bool {
    let dx = p.x.abs_diff(q.x);
    dx != 0 && dx == p.y.abs_diff(q.y)
}

// ---------------------------------------------------------------------------
// Named capability set
// ---------------------------------------------------------------------------

/// A predicate function with its typed signature.
#[derive(Debug, Clone, Copy)]
pub enum PredicateFn {
    /// One entity argument.
    Unary(fn(&Entity) -> bool),
    /// Two entity arguments.
    Binary(fn(&Entity, &Entity) -> bool),
    /// Three entity arguments.
    Ternary(fn(&Entity, &Entity, &Entity) -> bool),
}

impl PredicateFn {
    /// Number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
            Self::Ternary(_) => 3,
        }
    }
}

/// A member of the fixed predicate library, as named in queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `isSameShape(a, b)`
    SameShape,
    /// `isCube(a)`
    IsCube,
    /// `isTet(a)`
    IsTet,
    /// `isDodec(a)`
    IsDodec,
    /// `isSmall(a)`
    IsSmall,
    /// `isMedium(a)`
    IsMedium,
    /// `isLarge(a)`
    IsLarge,
    /// `isSameSize(a, b)`
    SameSize,
    /// `isSmaller(a, b)`
    Smaller,
    /// `isLarger(a, b)`
    Larger,
    /// `isLeftOf(a, b)`
    LeftOf,
    /// `isRightOf(a, b)`
    RightOf,
    /// `isFrontOf(a, b)`
    FrontOf,
    /// `isBackOf(a, b)`
    BackOf,
    /// `isSameRow(a, b)`
    SameRow,
    /// `isSameCol(a, b)`
    SameCol,
    /// `isAdjacent(a, b)`
    Adjacent,
    /// `isBetweenOf(t, a, b)`
    BetweenOf,
}

impl Predicate {
    /// The whole library, in documentation order.
    pub const ALL: [Predicate; 18] = [
        Predicate::SameShape,
        Predicate::IsCube,
        Predicate::IsTet,
        Predicate::IsDodec,
        Predicate::IsSmall,
        Predicate::IsMedium,
        Predicate::IsLarge,
        Predicate::SameSize,
        Predicate::Smaller,
        Predicate::Larger,
        Predicate::LeftOf,
        Predicate::RightOf,
        Predicate::FrontOf,
        Predicate::BackOf,
        Predicate::SameRow,
        Predicate::SameCol,
        Predicate::Adjacent,
        Predicate::BetweenOf,
    ];

    /// The name the query language binds this predicate under.
    pub fn name(self) -> &'static str {
        match self {
            Self::SameShape => "isSameShape",
            Self::IsCube => "isCube",
            Self::IsTet => "isTet",
            Self::IsDodec => "isDodec",
            Self::IsSmall => "isSmall",
            Self::IsMedium => "isMedium",
            Self::IsLarge => "isLarge",
            Self::SameSize => "isSameSize",
            Self::Smaller => "isSmaller",
            Self::Larger => "isLarger",
            Self::LeftOf => "isLeftOf",
            Self::RightOf => "isRightOf",
            Self::FrontOf => "isFrontOf",
            Self::BackOf => "isBackOf",
            Self::SameRow => "isSameRow",
            Self::SameCol => "isSameCol",
            Self::Adjacent => "isAdjacent",
            Self::BetweenOf => "isBetweenOf",
        }
    }

    /// Look a predicate up by its query name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The function implementing this predicate.
    pub fn function(self) -> PredicateFn {
        use PredicateFn::*;
        match self {
            Self::SameShape => Binary(same_shape),
            Self::IsCube => Unary(is_cube),
            Self::IsTet => Unary(is_tet),
            Self::IsDodec => Unary(is_dodec),
            Self::IsSmall => Unary(is_small),
            Self::IsMedium => Unary(is_medium),
            Self::IsLarge => Unary(is_large),
            Self::SameSize => Binary(same_size),
            Self::Smaller => Binary(smaller),
            Self::Larger => Binary(larger),
            Self::LeftOf => Binary(left_of),
            Self::RightOf => Binary(right_of),
            Self::FrontOf => Binary(front_of),
            Self::BackOf => Binary(back_of),
            Self::SameRow => Binary(same_row),
            Self::SameCol => Binary(same_col),
            Self::Adjacent => Binary(adjacent),
            Self::BetweenOf => Ternary(between_of),
        }
    }

    /// Fixed number of arguments.
    pub fn arity(self) -> usize {
        self.function().arity()
    }

    /// Whether the predicate is always false when the same entity is passed
    /// for two of its arguments.
    pub fn is_irreflexive(self) -> bool {
        matches!(
            self,
            Self::Smaller
                | Self::Larger
                | Self::LeftOf
                | Self::RightOf
                | Self::FrontOf
                | Self::BackOf
                | Self::Adjacent
                | Self::BetweenOf
        )
    }

    /// Apply the predicate, checking the argument count first.
    pub fn apply(self, args: &[&Entity]) -> TarskiResult<bool> {
        match (self.function(), args) {
            (PredicateFn::Unary(f), [a]) => Ok(f(a)),
            (PredicateFn::Binary(f), [a, b]) => Ok(f(a, b)),
            (PredicateFn::Ternary(f), [t, a, b]) => Ok(f(t, a, b)),
            (func, _) => Err(TarskiError::Arity {
                predicate: self.name(),
                expected: func.arity(),
                found: args.len(),
            }),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(key: &str, shape: Shape, size: Size, x: i64, y: i64) -> Entity {
        Entity::new(key, shape, size, Position::new(x, y))
    }

    fn at(x: i64, y: i64) -> Entity {
        obj("P", Shape::Cube, Size::Small, x, y)
    }

    #[test]
    fn shape_predicates() {
        let a = obj("A", Shape::Cube, Size::Small, 0, 0);
        let c = obj("C", Shape::Dodec, Size::Large, 2, 0);
        assert!(is_cube(&a));
        assert!(!is_tet(&a));
        assert!(!is_dodec(&a));
        assert!(is_dodec(&c));
        assert!(!same_shape(&a, &c));
        assert!(same_shape(&a, &a));
    }

    #[test]
    fn size_predicates_use_ordering() {
        let small = obj("A", Shape::Cube, Size::Small, 0, 0);
        let large = obj("C", Shape::Dodec, Size::Large, 2, 0);
        assert!(smaller(&small, &large));
        assert!(larger(&large, &small));
        assert!(!same_size(&small, &large));
        assert!(is_small(&small));
        assert!(is_large(&large));
        assert!(!is_medium(&large));
    }

    #[test]
    fn horizontal_and_depth_relations() {
        let a = at(0, 0);
        let b = at(1, 2);
        assert!(left_of(&a, &b));
        assert!(right_of(&b, &a));
        assert!(front_of(&b, &a));
        assert!(back_of(&a, &b));
        assert!(!left_of(&a, &a));
    }

    #[test]
    fn rows_share_y_and_columns_share_x() {
        assert!(same_row(&at(0, 0), &at(5, 0)));
        assert!(!same_row(&at(0, 0), &at(0, 5)));
        assert!(same_col(&at(3, 1), &at(3, 9)));
        assert!(!same_col(&at(3, 1), &at(4, 1)));
    }

    #[test]
    fn adjacency_is_inclusive_or() {
        assert!(adjacent(&at(0, 0), &at(1, 0)));
        assert!(adjacent(&at(0, 0), &at(1, 1)));
        // One step on x is enough, however far apart on y.
        assert!(adjacent(&at(0, 0), &at(1, 7)));
        assert!(!adjacent(&at(0, 0), &at(0, 0)));
        assert!(!adjacent(&at(0, 0), &at(2, 2)));
    }

    #[test]
    fn between_on_row() {
        assert!(between_of(&at(1, 0), &at(2, 0), &at(0, 0)));
        assert!(between_of(&at(1, 0), &at(0, 0), &at(2, 0)));
        assert!(!between_of(&at(3, 0), &at(0, 0), &at(2, 0)));
    }

    #[test]
    fn between_on_column() {
        assert!(between_of(&at(4, 2), &at(4, -1), &at(4, 6)));
        assert!(!between_of(&at(4, -1), &at(4, -1), &at(4, 6)));
    }

    #[test]
    fn between_on_diagonals() {
        assert!(between_of(&at(3, 1), &at(2, 0), &at(4, 2)));
        assert!(between_of(&at(3, 1), &at(4, 2), &at(2, 0)));
        // Anti-diagonal.
        assert!(between_of(&at(1, 1), &at(0, 2), &at(2, 0)));
        assert!(between_of(&at(1, 1), &at(2, 0), &at(0, 2)));
    }

    #[test]
    fn between_rejects_collinear_point_outside_segment() {
        assert!(!between_of(&at(5, 3), &at(2, 0), &at(4, 2)));
        assert!(!between_of(&at(1, -1), &at(2, 0), &at(4, 2)));
    }

    #[test]
    fn between_rejects_endpoints_and_off_line_points() {
        assert!(!between_of(&at(2, 0), &at(2, 0), &at(4, 2)));
        assert!(!between_of(&at(3, 0), &at(2, 0), &at(4, 2)));
        // Shallower slope is not a diagonal.
        assert!(!between_of(&at(2, 1), &at(0, 0), &at(4, 2)));
        // Mixed slopes through a.
        assert!(!between_of(&at(1, -1), &at(0, 0), &at(2, 2)));
    }

    #[test]
    fn between_degenerate_segment() {
        assert!(!between_of(&at(1, 1), &at(0, 0), &at(0, 0)));
        assert!(!between_of(&at(0, 0), &at(0, 0), &at(0, 0)));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let lo = at(i64::MIN, i64::MIN);
        let hi = at(i64::MAX, i64::MAX);
        assert!(!adjacent(&lo, &hi));
        assert!(between_of(&at(0, 0), &lo, &hi) == between_of(&at(0, 0), &hi, &lo));
    }

    #[test]
    fn names_round_trip() {
        for p in Predicate::ALL {
            assert_eq!(Predicate::from_name(p.name()), Some(p));
        }
        assert_eq!(Predicate::from_name("iscube"), None);
        assert_eq!(Predicate::from_name("sameShape"), None);
    }

    #[test]
    fn arities_match_the_library() {
        assert_eq!(Predicate::IsCube.arity(), 1);
        assert_eq!(Predicate::LeftOf.arity(), 2);
        assert_eq!(Predicate::BetweenOf.arity(), 3);
        let unary = Predicate::ALL.iter().filter(|p| p.arity() == 1).count();
        assert_eq!(unary, 6);
    }

    #[test]
    fn apply_checks_arity() {
        let a = at(0, 0);
        let b = at(1, 0);
        assert!(Predicate::LeftOf.apply(&[&a, &b]).unwrap());
        let err = Predicate::LeftOf.apply(&[&a]).unwrap_err();
        assert!(matches!(
            err,
            TarskiError::Arity {
                predicate: "isLeftOf",
                expected: 2,
                found: 1
            }
        ));
        assert_eq!(
            err.to_string(),
            "isLeftOf expects 2 argument(s), got 1"
        );
    }
}
