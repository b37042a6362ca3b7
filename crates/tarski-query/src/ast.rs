use std::fmt;

use serde::Serialize;

/// Source span as a byte range.
pub type Span = std::ops::Range<usize>;

/// An AST node with source location.
///
/// Serializes as the bare node; spans are only used for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Spanned<T> {
    /// The wrapped AST node.
    pub node: T,
    /// The byte range of this node in the source text.
    #[serde(skip)]
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Wrap a node with its span.
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A boolean query expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expr {
    /// `true` or `false`.
    Literal {
        /// The literal's value.
        value: bool,
    },
    /// A bare identifier, resolved against the bindings at evaluation time.
    Ident {
        /// The identifier text.
        name: String,
    },
    /// A predicate call, e.g. `isBetweenOf(B, C, A)`.
    Call {
        /// The predicate name.
        name: Spanned<String>,
        /// Argument identifiers, in order.
        args: Vec<Spanned<String>>,
    },
    /// Negation, `!expr`.
    Not {
        /// The negated expression.
        operand: Box<Spanned<Expr>>,
    },
    /// A binary connective.
    Binary {
        /// The connective.
        op: BinaryOp,
        /// Left operand.
        left: Box<Spanned<Expr>>,
        /// Right operand.
        right: Box<Spanned<Expr>>,
    },
}

/// A binary logical connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `->`
    Implies,
    /// `<->`
    Iff,
}

impl BinaryOp {
    /// The operator as written in source.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Implies => "->",
            Self::Iff => "<->",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            Self::Iff => 1,
            Self::Implies => 2,
            Self::Or => 3,
            Self::And => 4,
        }
    }
}

const NOT_PRECEDENCE: u8 = 5;
const ATOM_PRECEDENCE: u8 = 6;

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Self::Binary { op, .. } => op.precedence(),
            Self::Not { .. } => NOT_PRECEDENCE,
            _ => ATOM_PRECEDENCE,
        }
    }

    fn fmt_at(&self, min: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parens = self.precedence() < min;
        if parens {
            f.write_str("(")?;
        }
        match self {
            Self::Literal { value } => write!(f, "{value}")?,
            Self::Ident { name } => f.write_str(name)?,
            Self::Call { name, args } => {
                write!(f, "{}(", name.node)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(&arg.node)?;
                }
                f.write_str(")")?;
            }
            Self::Not { operand } => {
                f.write_str("!")?;
                operand.node.fmt_at(NOT_PRECEDENCE, f)?;
            }
            Self::Binary { op, left, right } => {
                let p = op.precedence();
                // `->` associates to the right, the others to the left.
                let (lmin, rmin) = match op {
                    BinaryOp::Implies => (p + 1, p),
                    _ => (p, p + 1),
                };
                left.node.fmt_at(lmin, f)?;
                write!(f, " {} ", op.symbol())?;
                right.node.fmt_at(rmin, f)?;
            }
        }
        if parens {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Canonical source form: minimal parentheses, single spaces around
/// connectives. Re-parsing the output yields an equivalent tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(0, f)
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node.fmt(f)
    }
}
