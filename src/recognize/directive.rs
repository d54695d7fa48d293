//! Single-statement directives: `@charset`, `@import`, `@tailwind`, `@config`.
//!
//! Each is one pattern with a single capture for its value. Line and comments
//! are taken at the start of each match against the full source.

use std::sync::LazyLock;

use regex::Regex;

use super::{render_comments, ParseContext, Recognizer};
use crate::document::{Directive, Document};
use crate::scan::{leading_comments, line_number, Adjacency};

static CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@charset(?-u:\s)+["']([^"']+)["'](?-u:\s)*;"#).expect("charset pattern is valid")
});

static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@import(?-u:\s)*['"]([^'"]+)['"](?-u:\s)*;"#).expect("import pattern is valid")
});

static TAILWIND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@tailwind(?-u:\s)*((?-u:\w)+)(?-u:\s)*;").expect("tailwind pattern is valid")
});

static CONFIG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@config(?-u:\s)*['"]([^'"]+)['"](?-u:\s)*;"#).expect("config pattern is valid")
});

/// Every match of `pattern` as a directive record, in source order.
fn scan_all(pattern: &Regex, source: &str) -> Vec<Directive> {
    pattern
        .captures_iter(source)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();
            let value = caps.get(1)?.as_str().to_string();
            Some(directive_at(source, start, value))
        })
        .collect()
}

fn directive_at(source: &str, start: usize, value: String) -> Directive {
    Directive {
        comment: leading_comments(source, start, Adjacency::Strict),
        line: line_number(source, start),
        value,
    }
}

fn non_empty(records: Vec<Directive>) -> Option<Vec<Directive>> {
    (!records.is_empty()).then_some(records)
}

// ---------------------------------------------------------------------------
// @charset
// ---------------------------------------------------------------------------

/// `@charset "UTF-8";`, any number of occurrences.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharsetRecognizer;

impl Recognizer for CharsetRecognizer {
    fn name(&self) -> &'static str {
        "charset"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        Some(&*CHARSET)
    }

    fn recognize(&self, source: &str, _cx: &ParseContext<'_>) -> Document {
        Document {
            charset: non_empty(scan_all(&CHARSET, source)),
            ..Document::default()
        }
    }

    fn render(&self, document: &Document) -> String {
        document
            .charset
            .iter()
            .flatten()
            .map(|d| {
                format!(
                    "{}@charset \"{}\";\n",
                    render_comments(d.comment.as_ref()),
                    d.value
                )
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// @import
// ---------------------------------------------------------------------------

/// `@import 'path';`. Absent matches leave a `null` placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportRecognizer;

impl Recognizer for ImportRecognizer {
    fn name(&self) -> &'static str {
        "import"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        Some(&*IMPORT)
    }

    fn recognize(&self, source: &str, _cx: &ParseContext<'_>) -> Document {
        Document {
            imports: non_empty(scan_all(&IMPORT, source)),
            ..Document::default()
        }
    }

    fn render(&self, document: &Document) -> String {
        document
            .imports
            .iter()
            .flatten()
            .map(|d| format!("{}@import '{}';", render_comments(d.comment.as_ref()), d.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ---------------------------------------------------------------------------
// @tailwind
// ---------------------------------------------------------------------------

/// `@tailwind base;`. The layer name is not validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindRecognizer;

impl Recognizer for TailwindRecognizer {
    fn name(&self) -> &'static str {
        "tailwind"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        Some(&*TAILWIND)
    }

    fn recognize(&self, source: &str, _cx: &ParseContext<'_>) -> Document {
        Document {
            tailwind: non_empty(scan_all(&TAILWIND, source)),
            ..Document::default()
        }
    }

    fn render(&self, document: &Document) -> String {
        document
            .tailwind
            .iter()
            .flatten()
            .map(|d| format!("{}@tailwind {};", render_comments(d.comment.as_ref()), d.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ---------------------------------------------------------------------------
// @config
// ---------------------------------------------------------------------------

/// `@config './tailwind.config.js';`, first occurrence only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigRecognizer;

impl Recognizer for ConfigRecognizer {
    fn name(&self) -> &'static str {
        "config"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        Some(&*CONFIG)
    }

    fn recognize(&self, source: &str, _cx: &ParseContext<'_>) -> Document {
        let config = CONFIG.captures(source).and_then(|caps| {
            let start = caps.get(0)?.start();
            let value = caps.get(1)?.as_str().to_string();
            Some(directive_at(source, start, value))
        });
        Document {
            config,
            ..Document::default()
        }
    }

    fn render(&self, document: &Document) -> String {
        match &document.config {
            Some(d) => format!("{}@config '{}';", render_comments(d.comment.as_ref()), d.value),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use pretty_assertions::assert_eq;

    fn recognize(recognizer: &dyn Recognizer, source: &str) -> Document {
        let engine = Engine::default();
        recognizer.recognize(source, &ParseContext::new(&engine))
    }

    fn values(records: &Option<Vec<Directive>>) -> Vec<&str> {
        records.iter().flatten().map(|d| d.value.as_str()).collect()
    }

    // ── @charset ─────────────────────────────────────────────────────

    #[test]
    fn test_charset_with_either_quote() {
        let doc = recognize(&CharsetRecognizer, "@charset \"UTF-8\";\n@charset 'latin1' ;");
        assert_eq!(values(&doc.charset), vec!["UTF-8", "latin1"]);
        assert_eq!(doc.charset.as_ref().unwrap()[1].line, 2);
    }

    #[test]
    fn test_charset_requires_whitespace_after_keyword() {
        let doc = recognize(&CharsetRecognizer, "@charset\"UTF-8\";");
        assert_eq!(doc.charset, None);
    }

    #[test]
    fn test_charset_absent_is_omitted() {
        assert_eq!(recognize(&CharsetRecognizer, ".a {}"), Document::default());
    }

    #[test]
    fn test_charset_renders_each_on_its_own_line() {
        let doc = recognize(&CharsetRecognizer, "/* enc */\n@charset \"UTF-8\";");
        assert_eq!(
            CharsetRecognizer.render(&doc),
            "/* enc */\n@charset \"UTF-8\";\n"
        );
    }

    // ── @import ──────────────────────────────────────────────────────

    #[test]
    fn test_imports_in_source_order_with_lines() {
        let source = "@import 'a.css';\n\n@import\"b.css\";";
        let doc = recognize(&ImportRecognizer, source);
        assert_eq!(values(&doc.imports), vec!["a.css", "b.css"]);
        let lines: Vec<_> = doc.imports.iter().flatten().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 3]);
    }

    #[test]
    fn test_import_url_form_is_not_recognized() {
        let doc = recognize(&ImportRecognizer, "@import url(foo.css);");
        assert_eq!(doc.imports, None);
    }

    #[test]
    fn test_imports_render_joined_without_trailing_newline() {
        let doc = recognize(&ImportRecognizer, "/* base */ @import 'a.css'; @import \"b.css\";");
        assert_eq!(
            ImportRecognizer.render(&doc),
            "/* base */\n@import 'a.css';\n@import 'b.css';"
        );
    }

    // ── @tailwind ────────────────────────────────────────────────────

    #[test]
    fn test_tailwind_layers() {
        let source = "@tailwind base;\n@tailwind components;\n@tailwind utilities;";
        let doc = recognize(&TailwindRecognizer, source);
        assert_eq!(values(&doc.tailwind), vec!["base", "components", "utilities"]);
        assert_eq!(
            TailwindRecognizer.render(&doc),
            "@tailwind base;\n@tailwind components;\n@tailwind utilities;"
        );
    }

    #[test]
    fn test_tailwind_comment_is_attached() {
        let doc = recognize(&TailwindRecognizer, "/* layers */\n@tailwind base;");
        let record = &doc.tailwind.unwrap()[0];
        assert_eq!(record.comment, Some(vec!["layers".to_string()]));
        assert_eq!(record.line, 2);
    }

    #[test]
    fn test_tailwind_layer_name_is_ascii_only() {
        assert_eq!(recognize(&TailwindRecognizer, "@tailwind é;").tailwind, None);
        assert_eq!(recognize(&TailwindRecognizer, "@tailwind\u{a0}base;").tailwind, None);
    }

    // ── @config ──────────────────────────────────────────────────────

    #[test]
    fn test_config_first_match_only() {
        let doc = recognize(
            &ConfigRecognizer,
            "@config './one.js';\n@config \"./two.js\";",
        );
        let config = doc.config.unwrap();
        assert_eq!(config.value, "./one.js");
        assert_eq!(config.line, 1);
    }

    #[test]
    fn test_config_render() {
        let doc = recognize(&ConfigRecognizer, "@config \"./tw.js\";");
        assert_eq!(ConfigRecognizer.render(&doc), "@config './tw.js';");
        assert_eq!(ConfigRecognizer.render(&Document::default()), "");
    }
}
