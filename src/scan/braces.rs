//! Brace matching that treats block comments as opaque.

use super::tokenizer::{tokenize, Token};

/// Find the offset of the `}` that balances the `{` at `open`.
///
/// Braces inside `/* ... */` are not counted. Returns `None` when the block
/// never closes or an unterminated comment is reached first.
pub fn find_matching_close(text: &str, open: usize) -> Option<usize> {
    let rest = text.get(open..)?;
    let mut depth: i64 = 0;

    for (token, span) in tokenize(rest) {
        match token {
            Token::BraceOpen => depth += 1,
            Token::BraceClose => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + span.start);
                }
            }
            Token::Comment(false) => return None,
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_block() {
        let text = ".a { color: red; }";
        assert_eq!(find_matching_close(text, 3), Some(17));
    }

    #[test]
    fn test_nested_blocks() {
        let text = "@media x { .a { b: c; } }";
        assert_eq!(find_matching_close(text, 9), Some(24));
        assert_eq!(find_matching_close(text, 14), Some(22));
    }

    #[test]
    fn test_braces_in_comments_are_ignored() {
        let text = "{ /* } */ }";
        assert_eq!(find_matching_close(text, 0), Some(10));
    }

    #[test]
    fn test_unterminated_comment_is_not_found() {
        assert_eq!(find_matching_close("{ /* } ", 0), None);
    }

    #[test]
    fn test_unbalanced_block_is_not_found() {
        assert_eq!(find_matching_close("{ { }", 0), None);
    }

    #[test]
    fn test_offset_past_end_is_not_found() {
        assert_eq!(find_matching_close("{}", 5), None);
    }
}
