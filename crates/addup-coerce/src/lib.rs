//! Integer coercion for Addup
//!
//! Recognizes base-10 integer literals using logos and converts operands
//! to canonical `i64` values. Coercion never substitutes defaults: input
//! that is not exactly one integer literal is an error.

use addup_value::{AddError, Operand, Span};
use logos::Logos;

/// Tokens of an integer operand's text
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Base-10 integer literal with an optional sign
    #[regex(r"[+-]?[0-9]+")]
    Int,

    /// Whitespace around the literal (ignored)
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Whitespace,
}

/// Find the single integer literal in `text`
///
/// Accepts optional leading/trailing whitespace around exactly one literal.
/// Anything else (a second literal, a stray character, a lone sign) is an
/// error pointing at the first offending byte range.
///
/// # Errors
///
/// Returns `AddError::InvalidOperand` for malformed input and
/// `AddError::EmptyOperand` when no literal is present at all.
pub fn scan_literal(text: &str) -> Result<Span, AddError> {
    let mut lexer = Token::lexer(text);
    let mut literal: Option<Span> = None;

    while let Some(result) = lexer.next() {
        let span = Span::new(lexer.span().start, lexer.span().end);
        match result {
            Ok(Token::Int) if literal.is_none() => literal = Some(span),
            // Second literal or unmatched input: the operand is not one integer
            Ok(_) | Err(()) => return Err(AddError::invalid_operand(text, span)),
        }
    }

    literal.ok_or(AddError::EmptyOperand)
}

/// Parse base-10 text into an `i64`
///
/// # Errors
///
/// Returns `AddError::InvalidOperand` or `AddError::EmptyOperand` when the
/// text is not exactly one integer literal, and `AddError::OutOfRange` when
/// the literal does not fit in an `i64`.
pub fn parse_int(text: &str) -> Result<i64, AddError> {
    let span = scan_literal(text)?;
    let literal = &text[span.start..span.end];

    literal
        .parse::<i64>()
        .map_err(|_| AddError::out_of_range(text, span))
}

/// Coerce an operand to an `i64`
///
/// Integer operands pass through unchanged; textual operands are parsed.
///
/// # Errors
///
/// Propagates the parse errors of [`parse_int`] for textual operands.
/// Integer operands never fail.
pub fn as_int(operand: &Operand) -> Result<i64, AddError> {
    match operand {
        Operand::Int(value) => Ok(*value),
        Operand::Text(text) => parse_int(text),
    }
}
