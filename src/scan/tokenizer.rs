//! logos-based block tokenizer.
//!
//! Only the tokens that matter for block structure are distinguished: braces
//! and block comments. Everything else collapses into [`Token::Text`] runs and
//! lone slashes, so any input lexes without error tokens.
//!
//! `/*` is two bytes long and so beats the single-byte [`Token::Slash`]. Its
//! callback consumes the comment up to and including `*/`, or the rest of the
//! input when the comment is unterminated.

use std::ops::Range;

use logos::{Lexer, Logos};

/// Block-structure token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `/* ... */`. The flag is `false` when the input ends before `*/`.
    #[token("/*", block_comment)]
    Comment(bool),

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// A `/` that does not open a comment.
    #[token("/")]
    Slash,

    /// Any run of bytes without braces or slashes.
    #[regex(r"[^{}/]+")]
    Text,
}

fn block_comment(lex: &mut Lexer<Token>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

/// Tokenize a string into `(Token, byte range)` pairs.
pub fn tokenize(input: &str) -> impl Iterator<Item = (Token, Range<usize>)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_braces_and_text() {
        assert_eq!(
            tokens(".a { color: red; }"),
            vec![Token::Text, Token::BraceOpen, Token::Text, Token::BraceClose]
        );
    }

    #[test]
    fn test_comment_swallows_braces() {
        assert_eq!(
            tokens("{ /* } { */ }"),
            vec![
                Token::BraceOpen,
                Token::Text,
                Token::Comment(true),
                Token::Text,
                Token::BraceClose,
            ]
        );
    }

    #[test]
    fn test_unterminated_comment_consumes_rest() {
        let toks: Vec<_> = tokenize("a /* never closed }").collect();
        assert_eq!(toks.last().map(|(t, _)| *t), Some(Token::Comment(false)));
        assert_eq!(toks.last().map(|(_, span)| span.end), Some(19));
    }

    #[test]
    fn test_lone_slash_is_not_a_comment() {
        assert_eq!(
            tokens("a/b"),
            vec![Token::Text, Token::Slash, Token::Text]
        );
    }

    #[test]
    fn test_slash_star_slash_is_unterminated() {
        assert_eq!(tokens("/*/"), vec![Token::Comment(false)]);
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let toks: Vec<_> = tokenize("é{}").collect();
        assert_eq!(toks[1], (Token::BraceOpen, 2..3));
        assert_eq!(toks[2], (Token::BraceClose, 3..4));
    }
}
