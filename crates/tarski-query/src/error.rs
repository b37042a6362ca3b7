use crate::ast::Span;
use crate::diagnostics::Diagnostic;
use crate::parser::ParseError;

/// Errors raised while evaluating a parsed query against a binding context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum EvalError {
    /// A name is bound to neither an object nor a predicate.
    #[error("unknown identifier `{name}`")]
    #[diagnostic(
        code(tarski::unknown_identifier),
        help("object keys and predicate names are case-sensitive")
    )]
    UnknownIdentifier {
        /// The unresolved name.
        name: String,
        /// Where the name appears.
        span: Span,
    },

    /// A predicate was called with the wrong number of arguments.
    #[error("`{predicate}` expects {expected} argument(s), got {found}")]
    #[diagnostic(code(tarski::arity))]
    Arity {
        /// The predicate name.
        predicate: String,
        /// The predicate's fixed arity.
        expected: usize,
        /// Number of arguments in the call.
        found: usize,
        /// The whole call.
        span: Span,
    },

    /// A call names an object instead of a predicate.
    #[error("`{name}` is an object, not a predicate")]
    #[diagnostic(code(tarski::not_a_predicate))]
    NotAPredicate {
        /// The called name.
        name: String,
        /// Where the name appears.
        span: Span,
    },

    /// A predicate name appears in argument position.
    #[error("`{name}` is a predicate, not an object")]
    #[diagnostic(code(tarski::not_an_object))]
    NotAnEntity {
        /// The argument name.
        name: String,
        /// Where the argument appears.
        span: Span,
    },

    /// A bare name appears where a boolean is required.
    #[error("`{name}` is not a boolean")]
    #[diagnostic(
        code(tarski::not_a_boolean),
        help("objects and predicates only produce booleans through a call, e.g. `isCube(A)`")
    )]
    NotABoolean {
        /// The name.
        name: String,
        /// Where the name appears.
        span: Span,
    },

    /// The predicate library rejected a call for a reason other than arity.
    #[error("{message}")]
    #[diagnostic(code(tarski::predicate))]
    Predicate {
        /// The library's error message.
        message: String,
        /// The whole call.
        span: Span,
    },
}

impl EvalError {
    /// The source range the error points at.
    pub fn span(&self) -> &Span {
        match self {
            Self::UnknownIdentifier { span, .. }
            | Self::Arity { span, .. }
            | Self::NotAPredicate { span, .. }
            | Self::NotAnEntity { span, .. }
            | Self::NotABoolean { span, .. }
            | Self::Predicate { span, .. } => span,
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::from_miette(self.span().clone(), self);
        match self {
            Self::UnknownIdentifier { .. } => diag.with_label("not bound in this world"),
            Self::Arity { expected, .. } => {
                diag.with_label(format!("expected {expected} argument(s)"))
            }
            _ => diag,
        }
    }
}

/// Any error from parsing or evaluating a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum QueryError {
    /// The query is not well-formed. Holds every lexer or parser error found.
    #[error("syntax error: {}", summary(.0))]
    #[diagnostic(code(tarski::syntax))]
    Syntax(Vec<ParseError>),

    /// The query parsed but could not be evaluated.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Eval(#[from] EvalError),
}

fn summary(errors: &[ParseError]) -> String {
    match errors {
        [] => "malformed query".to_string(),
        [only] => only.message.clone(),
        [first, rest @ ..] => format!("{} (and {} more)", first.message, rest.len()),
    }
}

impl QueryError {
    /// Convert to renderable diagnostics, one per underlying error.
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Self::Syntax(errors) => errors
                .iter()
                .map(|e| {
                    Diagnostic::error(e.span.clone(), e.message.clone())
                        .with_code("tarski::syntax")
                })
                .collect(),
            Self::Eval(err) => vec![err.to_diagnostic()],
        }
    }
}
