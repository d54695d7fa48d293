//! # cssdoc
//!
//! Turns stylesheet text into a structured [`Document`] and back, keeping the
//! source line of every element and the comment blocks written right above it.
//! Built for tooling that inspects or regenerates stylesheets: linters, codegen,
//! migration scripts.
//!
//! ## Core Systems
//!
//! - **[`scan`]**: brace matching (comment-aware), leading-comment location,
//!   line numbers, declaration splitting
//! - **[`recognize`]**: one recognizer per element kind: `@charset`, `@import`,
//!   `@tailwind`, `@config`, `@keyframes`, `@media`, and plain style rules
//! - **[`engine`]**: runs the recognizers in a fixed order, merges their
//!   results, and renders documents back to text
//! - **[`document`]**: the document model, which doubles as the JSON
//!   interchange schema
//!
//! ```
//! let doc = cssdoc::parse("/* brand */\n.logo { color: red; }");
//! let rule = &doc.styles.as_ref().unwrap()[0];
//! assert_eq!(rule.selector, ".logo");
//! assert_eq!(rule.line, 2);
//! assert_eq!(rule.comment, Some(vec!["brand".to_string()]));
//!
//! let css = cssdoc::render(&doc);
//! assert!(css.contains(".logo {\n\tcolor: red;\n}"));
//! ```

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod recognize;
pub mod scan;

pub use config::EngineConfig;
pub use document::{
    Declaration, Directive, Document, KeyframeStep, Keyframes, MediaBlock, MediaRule, RuleBlock,
    StyleRule,
};
pub use engine::Engine;
pub use error::{Error, Result};
pub use scan::comments::{collect_comments, render_comment_list, CommentRecord};

/// Parse stylesheet text with the default engine.
pub fn parse(source: &str) -> Document {
    Engine::default().parse(source)
}

/// Render a document as stylesheet text.
pub fn render(document: &Document) -> String {
    engine::render_document(document)
}

/// Encode a document as pretty-printed JSON.
pub fn to_json(document: &Document) -> Result<String> {
    Engine::default().to_json(document)
}
