use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::ast::*;
use crate::lexer::Token;

type Span = SimpleSpan;

/// Parse error with source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Byte range of the offending token (or end of input).
    pub span: std::ops::Range<usize>,
    /// Human-readable description of what was found and what was expected.
    pub message: String,
}

fn to_ast_span(s: Span) -> crate::ast::Span {
    s.into_range()
}

fn spanned<T>(node: T, span: Span) -> Spanned<T> {
    Spanned {
        node,
        span: to_ast_span(span),
    }
}

fn binary(op: BinaryOp, left: Spanned<Expr>, right: Spanned<Expr>) -> Spanned<Expr> {
    let span = left.span.start..right.span.end;
    Spanned {
        node: Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    }
}

/// Build the query parser.
///
/// Precedence, loosest first: `<->`, `->`, `||`, `&&`, `!`. All binary
/// connectives associate to the left except `->`.
fn query_parser<'a, I>() -> impl Parser<'a, I, Spanned<Expr>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = Span>,
{
    // -- Helpers --

    let kw = |k: &'static str| select! { Token::Ident(ref w) if w.as_str() == k => () }.labelled(k);
    let ident = select! { Token::Ident(ref w) if w.as_str() != "true" && w.as_str() != "false" => w.clone() }
        .labelled("identifier");
    let name = ident.map_with(|w, e| spanned(w, e.span()));

    let expr = recursive(|expr| {
        // -- Atoms --

        let literal = choice((kw("true").to(true), kw("false").to(false)))
            .map(|value| Expr::Literal { value });

        let args = name
            .clone()
            .separated_by(just(Token::Comma))
            .collect::<Vec<Spanned<String>>>()
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .labelled("argument list");

        // <ident> or <ident>(<args>)
        let call_or_ident = name.clone().then(args.or_not()).map(|(name, args)| match args {
            Some(args) => Expr::Call { name, args },
            None => Expr::Ident { name: name.node },
        });

        // Parenthesised sub-expressions keep the span of the parentheses.
        let group = expr
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .map(|inner: Spanned<Expr>| inner.node);

        let atom = choice((literal, call_or_ident, group))
            .map_with(|node, e| spanned(node, e.span()))
            .labelled("operand");

        // -- Prefix --

        let unary = just(Token::Bang)
            .map_with(|_, e| e.span())
            .repeated()
            .foldr(atom, |bang: Span, operand: Spanned<Expr>| {
                let span = bang.start..operand.span.end;
                Spanned {
                    node: Expr::Not {
                        operand: Box::new(operand),
                    },
                    span,
                }
            });

        // -- Binary connectives --

        let conjunction = unary.clone().foldl(
            just(Token::AndAnd).ignore_then(unary).repeated(),
            |l, r| binary(BinaryOp::And, l, r),
        );

        let disjunction = conjunction.clone().foldl(
            just(Token::OrOr).ignore_then(conjunction).repeated(),
            |l, r| binary(BinaryOp::Or, l, r),
        );

        let implication = disjunction
            .clone()
            .then(
                just(Token::Arrow)
                    .ignore_then(disjunction)
                    .repeated()
                    .collect::<Vec<Spanned<Expr>>>(),
            )
            .map(|(first, rest)| {
                match rest
                    .into_iter()
                    .rev()
                    .reduce(|r, l| binary(BinaryOp::Implies, l, r))
                {
                    Some(tail) => binary(BinaryOp::Implies, first, tail),
                    None => first,
                }
            });

        implication.clone().foldl(
            just(Token::DoubleArrow).ignore_then(implication).repeated(),
            |l, r| binary(BinaryOp::Iff, l, r),
        )
    });

    expr.then_ignore(end())
}

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Deepest allowed stack of `!` and parenthesised groups around an operand.
/// Call argument lists do not count.
pub const MAX_NESTING: usize = 32;

/// Most binary connectives allowed in one query.
pub const MAX_CONNECTIVES: usize = 1024;

/// Reject token streams whose tree would be too deep to parse, evaluate,
/// print, or drop without risking the stack.
///
/// `depth` is the nesting of the operand currently being read: the enclosing
/// groups plus any `!` still waiting for their operand.
fn check_limits(tokens: &[(Token, std::ops::Range<usize>)]) -> Result<(), ParseError> {
    let mut frames: Vec<usize> = Vec::new();
    let mut base = 0;
    let mut depth = 0;
    let mut connectives = 0;
    let mut after_name = false;

    for (token, span) in tokens {
        match token {
            Token::Bang => depth += 1,
            Token::LParen => {
                frames.push(base);
                if !after_name {
                    depth += 1;
                }
                base = depth;
            }
            Token::RParen => {
                base = frames.pop().unwrap_or(0);
                depth = base;
            }
            Token::Ident(_) => depth = base,
            Token::AndAnd | Token::OrOr | Token::Arrow | Token::DoubleArrow => {
                connectives += 1;
                if connectives > MAX_CONNECTIVES {
                    return Err(ParseError {
                        span: span.clone(),
                        message: format!(
                            "too many connectives (at most {MAX_CONNECTIVES} per query)"
                        ),
                    });
                }
            }
            Token::Comma => {}
        }

        if depth > MAX_NESTING {
            return Err(ParseError {
                span: span.clone(),
                message: format!("expression nested too deeply (at most {MAX_NESTING} levels)"),
            });
        }
        after_name = matches!(token, Token::Ident(_));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a token stream into an expression tree.
///
/// The whole stream must form one expression; trailing tokens are an error.
/// Streams nested deeper than [`MAX_NESTING`] or with more than
/// [`MAX_CONNECTIVES`] connectives are rejected before parsing.
pub fn parse(tokens: &[(Token, std::ops::Range<usize>)]) -> Result<Spanned<Expr>, Vec<ParseError>> {
    check_limits(tokens).map_err(|e| vec![e])?;

    let token_iter = tokens
        .iter()
        .map(|(tok, span)| (tok.clone(), Span::from(span.clone())));

    let len = tokens.last().map_or(0, |(_, s)| s.end);
    let eoi: Span = (len..len).into();
    let stream = Stream::from_iter(token_iter).map(eoi, |(t, s): (_, _)| (t, s));

    let (output, errors) = query_parser().parse(stream).into_output_errors();

    if let Some(ast) = output
        && errors.is_empty()
    {
        return Ok(ast);
    }

    Err(errors
        .into_iter()
        .map(|e| {
            let span = e.span();
            ParseError {
                span: span.into_range(),
                message: e.to_string(),
            }
        })
        .collect())
}
