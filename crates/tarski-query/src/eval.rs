//! Structural evaluation of a parsed query.
//!
//! `&&`, `||`, and `->` short-circuit: the right operand is not evaluated
//! when the left one decides the result, so errors in it are not reported.
//! `<->` always evaluates both sides.

use tarski_core::{Entity, Predicate, TarskiError};

use crate::ast::{BinaryOp, Expr, Span, Spanned};
use crate::bindings::{Binding, Bindings};
use crate::error::EvalError;

/// Evaluate an expression against a binding context.
pub fn evaluate(expr: &Spanned<Expr>, bindings: &Bindings<'_>) -> Result<bool, EvalError> {
    match &expr.node {
        Expr::Literal { value } => Ok(*value),
        Expr::Ident { name } => match bindings.get(name) {
            Some(_) => Err(EvalError::NotABoolean {
                name: name.clone(),
                span: expr.span.clone(),
            }),
            None => Err(unknown(name, &expr.span)),
        },
        Expr::Call { name, args } => call(name, args, &expr.span, bindings),
        Expr::Not { operand } => Ok(!evaluate(operand, bindings)?),
        Expr::Binary { op, left, right } => match op {
            BinaryOp::And => Ok(evaluate(left, bindings)? && evaluate(right, bindings)?),
            BinaryOp::Or => Ok(evaluate(left, bindings)? || evaluate(right, bindings)?),
            BinaryOp::Implies => Ok(!evaluate(left, bindings)? || evaluate(right, bindings)?),
            BinaryOp::Iff => {
                let l = evaluate(left, bindings)?;
                let r = evaluate(right, bindings)?;
                Ok(l == r)
            }
        },
    }
}

fn call(
    name: &Spanned<String>,
    args: &[Spanned<String>],
    span: &Span,
    bindings: &Bindings<'_>,
) -> Result<bool, EvalError> {
    let predicate = resolve_predicate(name, bindings)?;
    check_arity(predicate, args.len(), span)?;

    let entities = args
        .iter()
        .map(|arg| resolve_entity(arg, bindings))
        .collect::<Result<Vec<&Entity>, _>>()?;

    let result = predicate
        .apply(&entities)
        .map_err(|err| predicate_error(err, span))?;
    log::trace!("{predicate}({}) = {result}", join_args(args));
    Ok(result)
}

pub(crate) fn resolve_predicate(
    name: &Spanned<String>,
    bindings: &Bindings<'_>,
) -> Result<Predicate, EvalError> {
    match bindings.get(&name.node) {
        Some(Binding::Predicate(p)) => Ok(p),
        Some(Binding::Entity(_)) => Err(EvalError::NotAPredicate {
            name: name.node.clone(),
            span: name.span.clone(),
        }),
        None => Err(unknown(&name.node, &name.span)),
    }
}

pub(crate) fn resolve_entity<'w>(
    arg: &Spanned<String>,
    bindings: &Bindings<'w>,
) -> Result<&'w Entity, EvalError> {
    match bindings.get(&arg.node) {
        Some(Binding::Entity(e)) => Ok(e),
        Some(Binding::Predicate(_)) => Err(EvalError::NotAnEntity {
            name: arg.node.clone(),
            span: arg.span.clone(),
        }),
        None => Err(unknown(&arg.node, &arg.span)),
    }
}

pub(crate) fn check_arity(predicate: Predicate, found: usize, span: &Span) -> Result<(), EvalError> {
    if predicate.arity() == found {
        Ok(())
    } else {
        Err(arity_error(predicate, found, span))
    }
}

fn arity_error(predicate: Predicate, found: usize, span: &Span) -> EvalError {
    EvalError::Arity {
        predicate: predicate.name().to_string(),
        expected: predicate.arity(),
        found,
        span: span.clone(),
    }
}

/// Attach the call's span to an error from the predicate library.
fn predicate_error(err: TarskiError, span: &Span) -> EvalError {
    match err {
        TarskiError::Arity {
            predicate,
            expected,
            found,
        } => EvalError::Arity {
            predicate: predicate.to_string(),
            expected,
            found,
            span: span.clone(),
        },
        other => EvalError::Predicate {
            message: other.to_string(),
            span: span.clone(),
        },
    }
}

fn unknown(name: &str, span: &Span) -> EvalError {
    EvalError::UnknownIdentifier {
        name: name.to_string(),
        span: span.clone(),
    }
}

fn join_args(args: &[Spanned<String>]) -> String {
    args.iter()
        .map(|a| a.node.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
