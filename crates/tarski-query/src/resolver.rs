use crate::ast::{Expr, Span, Spanned};
use crate::bindings::Bindings;
use crate::diagnostics::Diagnostic;
use crate::error::EvalError;
use crate::eval::{check_arity, resolve_entity, resolve_predicate};

/// Static name and arity checker.
///
/// Unlike evaluation, the checker walks every branch (no short-circuiting)
/// and collects all problems instead of stopping at the first. It also warns
/// about calls whose outcome does not depend on the world, such as
/// `isLeftOf(A, A)`.
pub struct Resolver<'b, 'w> {
    bindings: &'b Bindings<'w>,
    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'b, 'w> Resolver<'b, 'w> {
    /// Create a checker for the given context.
    pub fn new(bindings: &'b Bindings<'w>) -> Self {
        Self {
            bindings,
            diagnostics: Vec::new(),
        }
    }

    /// Check an expression tree, appending to [`Resolver::diagnostics`].
    pub fn check(&mut self, expr: &Spanned<Expr>) {
        match &expr.node {
            Expr::Literal { .. } => {}
            Expr::Ident { name } => {
                let err = match self.bindings.get(name) {
                    Some(_) => EvalError::NotABoolean {
                        name: name.clone(),
                        span: expr.span.clone(),
                    },
                    None => EvalError::UnknownIdentifier {
                        name: name.clone(),
                        span: expr.span.clone(),
                    },
                };
                self.report(&err);
            }
            Expr::Call { name, args } => self.check_call(name, args, &expr.span),
            Expr::Not { operand } => self.check(operand),
            Expr::Binary { left, right, .. } => {
                self.check(left);
                self.check(right);
            }
        }
    }

    fn check_call(&mut self, name: &Spanned<String>, args: &[Spanned<String>], span: &Span) {
        let predicate = match resolve_predicate(name, self.bindings) {
            Ok(p) => Some(p),
            Err(err) => {
                self.report(&err);
                None
            }
        };

        let mut args_ok = true;
        for arg in args {
            if let Err(err) = resolve_entity(arg, self.bindings) {
                self.report(&err);
                args_ok = false;
            }
        }

        let Some(predicate) = predicate else {
            return;
        };
        if let Err(err) = check_arity(predicate, args.len(), span) {
            self.report(&err);
            return;
        }
        if !args_ok {
            return;
        }

        if let Some(repeated) = first_repeated(args) {
            let outcome = if predicate.is_irreflexive() {
                "false"
            } else {
                "true"
            };
            self.diagnostics.push(
                Diagnostic::warning(
                    span.clone(),
                    format!("`{predicate}` is always {outcome} when `{repeated}` appears twice"),
                )
                .with_label(format!("always {outcome}"))
                .with_code("tarski::constant_call"),
            );
        }
    }

    fn report(&mut self, err: &EvalError) {
        self.diagnostics.push(err.to_diagnostic());
    }
}

fn first_repeated(args: &[Spanned<String>]) -> Option<&str> {
    args.iter().enumerate().find_map(|(i, a)| {
        args[i + 1..]
            .iter()
            .any(|b| b.node == a.node)
            .then_some(a.node.as_str())
    })
}

/// Check an expression against a context and return every diagnostic.
pub fn check(expr: &Spanned<Expr>, bindings: &Bindings<'_>) -> Vec<Diagnostic> {
    let mut resolver = Resolver::new(bindings);
    resolver.check(expr);
    resolver.diagnostics
}
