use logos::{ Logos, Span };
use tracing::{ debug, trace };

use crate::{ Error, Result, Token };

/// Parses a composite literal into its raw fields.
///
/// The literal is a parenthesized, comma-separated list of fields such as
/// `(1,"two",thr\,ee)`. Unquoted fields may contain backslash escapes; a
/// field may instead be wrapped in double quotes, in which case `""` stands
/// for one literal quote. The returned fields are unescaped and unquoted and
/// carry no type information.
///
/// Characters before the first `(` are skipped. Anything after the closing
/// `)` is rejected; use [`parse_composite_fields_partial`] to read a literal
/// that is followed by other data.
///
/// # Arguments
///
/// * `src` - A string slice containing one composite literal.
///
/// # Returns
///
/// * `Ok(Vec<String>)` with one entry per field. `()` yields a single empty
///   field.
/// * `Err(Error)` if the input is empty or not a well-formed literal.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for a zero-length input, and
/// [`Error::Syntax`] carrying the character index of the violation
/// otherwise. The index is absent when the input ends before the literal is
/// closed.
///
/// # Example
///
/// ```rust
/// # use composite_literal::parse_composite_fields;
/// let fields = parse_composite_fields(r#"(1,"a ""b""",c\,d)"#).unwrap();
/// assert_eq!(fields, vec!["1", r#"a "b""#, "c,d"]);
/// ```
pub fn parse_composite_fields(src: &str) -> Result<Vec<String>> {
    scan(src, false).map(|(fields, _)| fields)
}

/// Parses a composite literal from the beginning of a string, allowing
/// trailing data.
///
/// Returns the fields and the number of bytes consumed, up to and including
/// the closing `)`.
///
/// # Example
///
/// ```rust
/// # use composite_literal::parse_composite_fields_partial;
/// let (fields, used) = parse_composite_fields_partial("(a,b) rest").unwrap();
/// assert_eq!(fields, vec!["a", "b"]);
/// assert_eq!(used, 5);
/// ```
pub fn parse_composite_fields_partial(src: &str) -> Result<(Vec<String>, usize)> {
    scan(src, true)
}

//
// === Private Functions ===
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before the opening parenthesis.
    Init,
    /// Inside an unquoted field.
    Field,
    /// Inside a double-quoted field.
    Quoted,
}

fn scan(src: &str, partial: bool) -> Result<(Vec<String>, usize)> {
    if src.is_empty() {
        return Err(Error::EmptyInput);
    }
    let result = run(src, partial);
    match &result {
        Ok((fields, used)) => trace!(fields = fields.len(), used, "parsed composite literal"),
        Err(err) => debug!(position = ?err.position(), "rejected composite literal: {err}"),
    }
    result
}

fn run(src: &str, partial: bool) -> Result<(Vec<String>, usize)> {
    let tokens: Vec<(Result<Token>, Span)> = Token::lexer(src).spanned().collect();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut state = State::Init;
    let mut cursor = 0;

    while let Some((token, span)) = tokens.get(cursor) {
        let token = token.clone().map_err(|_| Error::syntax_at(src, span.start))?;
        let next = tokens.get(cursor + 1);
        match state {
            State::Init => {
                if token == Token::ParenthesisOpen {
                    state = State::Field;
                }
            }
            State::Field => match token {
                Token::Quote if field.is_empty() => {
                    state = State::Quoted;
                }
                Token::Quote => match next {
                    Some((Ok(Token::Quote), _)) => {
                        field.push('"');
                        cursor += 1;
                    }
                    _ => return Err(Error::syntax_at(src, span.start)),
                },
                Token::ParenthesisClose => {
                    fields.push(field);
                    return close(src, fields, span.end, partial);
                }
                Token::Comma => {
                    fields.push(std::mem::take(&mut field));
                }
                Token::Backslash => match next {
                    Some((Ok(_), escaped)) => {
                        field.push_str(&src[escaped.clone()]);
                        cursor += 1;
                    }
                    _ => return Err(Error::syntax_at(src, span.start)),
                },
                Token::ParenthesisOpen | Token::Text => {
                    field.push_str(&src[span.clone()]);
                }
            },
            State::Quoted => match token {
                Token::Quote => match next {
                    None => return Err(Error::syntax_at(src, span.start)),
                    Some((Ok(Token::Quote), _)) => {
                        field.push('"');
                        cursor += 1;
                    }
                    Some((Ok(Token::Comma), _)) => {
                        fields.push(std::mem::take(&mut field));
                        state = State::Field;
                        cursor += 1;
                    }
                    Some((Ok(Token::ParenthesisClose), closing)) => {
                        fields.push(field);
                        return close(src, fields, closing.end, partial);
                    }
                    Some(_) => return Err(Error::syntax_at(src, span.start)),
                },
                _ => {
                    field.push_str(&src[span.clone()]);
                }
            },
        }
        cursor += 1;
    }

    Err(Error::Syntax(None))
}

/// Finishes a literal whose closing parenthesis ends at byte offset `end`.
fn close(
    src: &str,
    fields: Vec<String>,
    end: usize,
    partial: bool,
) -> Result<(Vec<String>, usize)> {
    if !partial && end < src.len() {
        return Err(Error::syntax_at(src, end));
    }
    Ok((fields, end))
}
