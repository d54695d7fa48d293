//! Line numbers from byte offsets.

/// 1-based line number of `offset`: newlines strictly before it, plus one.
pub fn line_number(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
