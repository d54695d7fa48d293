//! Shared scanners: brace matching, comment location, line numbers,
//! declaration splitting.

pub mod braces;
pub mod comments;
pub mod declarations;
pub mod lines;
pub mod tokenizer;

pub use braces::find_matching_close;
pub use comments::{leading_comments, Adjacency};
pub use lines::line_number;
