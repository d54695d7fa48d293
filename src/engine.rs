//! Engine: runs every recognizer over the source and merges, or replays a
//! document back to text.
//!
//! Every recognizer sees the full, unmodified source, so a truncation in one
//! (say an unterminated `@keyframes`) never affects another's results.

use crate::config::EngineConfig;
use crate::document::Document;
use crate::error::Result;
use crate::recognize::{ParseContext, RECOGNIZERS};

/// The parse/render dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given config.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse stylesheet text into a document. Never fails; malformed input
    /// yields whatever was recognized before each recognizer gave up.
    pub fn parse(&self, source: &str) -> Document {
        self.parse_with(source, &ParseContext::new(self))
    }

    /// Parse a nested at-rule fragment at `depth`, unless the depth cap
    /// forbids it.
    pub(crate) fn parse_nested(&self, fragment: &str, depth: usize) -> Option<Document> {
        if !self.config.allows_depth(depth) {
            tracing::warn!(
                depth,
                max = ?self.config.max_nesting_depth,
                "nested at-rule dropped: depth cap reached"
            );
            return None;
        }
        Some(self.parse_with(fragment, &ParseContext { engine: self, depth }))
    }

    fn parse_with(&self, source: &str, cx: &ParseContext<'_>) -> Document {
        let mut document = Document::default();
        for recognizer in RECOGNIZERS.iter() {
            let partial = recognizer.recognize(source, cx);
            tracing::debug!(
                recognizer = recognizer.name(),
                depth = cx.depth,
                records = partial.len(),
                "recognized"
            );
            document.merge(partial);
        }
        document
    }

    /// Render a document as stylesheet text.
    pub fn render(&self, document: &Document) -> String {
        render_document(document)
    }

    /// Encode a document in the JSON interchange format.
    pub fn to_json(&self, document: &Document) -> Result<String> {
        document.encode(self.config.pretty_json)
    }
}

/// Render every recognizer's slice of `document` in order, each followed by
/// a newline even when empty.
pub fn render_document(document: &Document) -> String {
    let mut out = String::new();
    for recognizer in RECOGNIZERS.iter() {
        out.push_str(&recognizer.render(document));
        out.push('\n');
    }
    out
}
