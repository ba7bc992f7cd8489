use logos::Logos;

use crate::error::Error;

/// Structural tokens of a composite literal.
///
/// Every character of the input belongs to exactly one token, so the lexer
/// never produces an error of its own; whether a token is meaningful depends
/// on the decoder state it is seen in.
#[derive(Debug, Clone, Copy, Logos, PartialEq, Eq)]
#[rustfmt::skip]
#[logos(error = Error)]
pub enum Token {
    #[token("(")]
    ParenthesisOpen,

    #[token(")")]
    ParenthesisClose,

    #[token(",")]
    Comma,

    #[token("\"")]
    Quote,

    #[token("\\")]
    Backslash,

    /// Run of characters with no structural meaning.
    #[regex(r#"[^(),"\\]+"#)]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        Token::lexer(src).map(|token| token.unwrap()).collect()
    }

    #[test]
    fn test_structural_tokens() {
        assert_eq!(
            kinds(r#"(a,"b")"#),
            vec![
                Token::ParenthesisOpen,
                Token::Text,
                Token::Comma,
                Token::Quote,
                Token::Text,
                Token::Quote,
                Token::ParenthesisClose,
            ]
        );
    }

    #[test]
    fn test_text_runs_span_multibyte_characters() {
        let mut lexer = Token::lexer("(héllo wörld\\,)");
        assert_eq!(lexer.next(), Some(Ok(Token::ParenthesisOpen)));
        assert_eq!(lexer.next(), Some(Ok(Token::Text)));
        assert_eq!(lexer.slice(), "héllo wörld");
        assert_eq!(lexer.next(), Some(Ok(Token::Backslash)));
        assert_eq!(lexer.next(), Some(Ok(Token::Comma)));
        assert_eq!(lexer.next(), Some(Ok(Token::ParenthesisClose)));
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_whitespace_is_text() {
        assert_eq!(kinds(" \n\t"), vec![Token::Text]);
    }
}
