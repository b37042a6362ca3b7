//! Query language for Tarski grid worlds.
//!
//! A query combines predicate calls with `!`, `&&`, `||`, `->`, `<->` and
//! parentheses, e.g. `isBetweenOf(B, C, A) && !isCube(B)`. Queries are lexed
//! with logos, parsed into a typed AST with chumsky, and evaluated by
//! structural recursion against a [`Bindings`] context. No code is ever
//! generated from the query text.
//!
//! ```
//! use tarski_core::{Position, Shape, Size, World};
//! use tarski_query::{Bindings, evaluate};
//!
//! let mut world = World::new();
//! world.add_object("A", Shape::Cube, Size::Small, Position::new(0, 0));
//! world.add_object("B", Shape::Tet, Size::Medium, Position::new(1, 0));
//!
//! let bindings = Bindings::from_world(&world);
//! assert_eq!(evaluate("isLeftOf(A, B) && !isCube(B)", &bindings).unwrap(), true);
//! ```

/// Expression tree types.
pub mod ast;
/// The name → object/predicate binding context.
pub mod bindings;
/// Diagnostics and ariadne rendering.
pub mod diagnostics;
/// Evaluation and query error types.
pub mod error;
/// Tree-walking evaluator.
pub mod eval;
/// Tokenizer.
pub mod lexer;
/// Token stream → AST.
pub mod parser;
/// Static checking of names, arities, and constant calls.
pub mod resolver;

use std::fmt;

pub use ast::{BinaryOp, Expr, Spanned};
pub use bindings::{Binding, Bindings};
pub use diagnostics::Diagnostic;
pub use error::{EvalError, QueryError};
pub use parser::ParseError;

/// A parsed query, ready to be evaluated against any number of contexts.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    source: String,
    ast: Spanned<Expr>,
}

impl Query {
    /// Lex and parse a query.
    ///
    /// If lexing fails, only the lexer errors are reported; the parser never
    /// sees a partial token stream.
    pub fn parse(source: &str) -> Result<Self, QueryError> {
        let (tokens, lex_errors) = lexer::lex(source);
        if !lex_errors.is_empty() {
            return Err(QueryError::Syntax(
                lex_errors
                    .into_iter()
                    .map(|e| ParseError {
                        span: e.span,
                        message: e.message,
                    })
                    .collect(),
            ));
        }

        let ast = parser::parse(&tokens).map_err(QueryError::Syntax)?;
        log::debug!("parsed query `{source}` as `{}`", ast.node);
        Ok(Self {
            source: source.to_string(),
            ast,
        })
    }

    /// The original query text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed expression tree.
    pub fn ast(&self) -> &Spanned<Expr> {
        &self.ast
    }

    /// Evaluate against a context.
    pub fn evaluate(&self, bindings: &Bindings<'_>) -> Result<bool, EvalError> {
        eval::evaluate(&self.ast, bindings)
    }

    /// Check every name and arity without evaluating.
    pub fn check(&self, bindings: &Bindings<'_>) -> Vec<Diagnostic> {
        resolver::check(&self.ast, bindings)
    }
}

/// Canonical source form of the query.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ast.fmt(f)
    }
}

/// Parse and evaluate a query in one step.
pub fn evaluate(source: &str, bindings: &Bindings<'_>) -> Result<bool, QueryError> {
    let query = Query::parse(source)?;
    Ok(query.evaluate(bindings)?)
}

/// Parse and statically check a query, returning syntax errors as
/// diagnostics too.
pub fn check(source: &str, bindings: &Bindings<'_>) -> Vec<Diagnostic> {
    match Query::parse(source) {
        Ok(query) => query.check(bindings),
        Err(err) => err.to_diagnostics(),
    }
}
