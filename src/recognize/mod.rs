//! Element recognizers.
//!
//! Each recognizer scans the *whole* source text for one element kind and
//! returns a partial [`Document`] holding only that kind. They share no state;
//! the [`Engine`](crate::Engine) runs them in [`RECOGNIZERS`] order and merges
//! the results, then renders in the same order.

pub mod directive;
pub mod keyframes;
pub mod media;
pub mod style;

use regex::Regex;

use crate::document::{Declaration, Document};
use crate::engine::Engine;

pub use directive::{CharsetRecognizer, ConfigRecognizer, ImportRecognizer, TailwindRecognizer};
pub use keyframes::KeyframesRecognizer;
pub use media::MediaRecognizer;
pub use style::StyleRecognizer;

/// State threaded through one (possibly nested) parse.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub engine: &'a Engine,
    /// 0 for the top-level source, +1 per nested at-rule fragment.
    pub depth: usize,
}

impl<'a> ParseContext<'a> {
    pub fn new(engine: &'a Engine) -> Self {
        Self { engine, depth: 0 }
    }

    /// Parse a synthesized at-rule fragment one level deeper.
    ///
    /// Returns `None` when the engine's depth cap forbids it.
    pub fn parse_nested(&self, fragment: &str) -> Option<Document> {
        self.engine.parse_nested(fragment, self.depth + 1)
    }
}

/// One element kind's scanner and serializer.
pub trait Recognizer: Send + Sync {
    /// Short name, used in log events.
    fn name(&self) -> &'static str;

    /// The pattern locating this kind's elements, if it is pattern-driven.
    fn pattern(&self) -> Option<&'static Regex>;

    /// Scan the full source and return a document holding only this kind.
    fn recognize(&self, source: &str, cx: &ParseContext<'_>) -> Document;

    /// Render this kind's records from `document` as stylesheet text.
    fn render(&self, document: &Document) -> String;
}

/// All recognizers, in parse and render order.
pub static RECOGNIZERS: [&dyn Recognizer; 7] = [
    &CharsetRecognizer,
    &ImportRecognizer,
    &TailwindRecognizer,
    &ConfigRecognizer,
    &KeyframesRecognizer,
    &MediaRecognizer,
    &StyleRecognizer,
];

/// Render leading comments, one `/* ... */` per entry, each on its own line.
pub(crate) fn render_comments(comment: Option<&Vec<String>>) -> String {
    match comment {
        Some(entries) if !entries.is_empty() => {
            let mut out = entries
                .iter()
                .map(|entry| format!("/* {entry} */"))
                .collect::<Vec<_>>()
                .join("\n");
            out.push('\n');
            out
        }
        _ => String::new(),
    }
}

/// Render declarations, one per line, at the given tab depth.
pub(crate) fn render_declarations(declarations: &[Declaration], indent: usize) -> String {
    let tabs = "\t".repeat(indent);
    declarations
        .iter()
        .map(|decl| format!("{tabs}{}: {};\n", decl.property, decl.value))
        .collect()
}
