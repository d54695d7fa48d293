//! `@media` blocks, including nested at-rules.
//!
//! A nested at-rule (e.g. `@keyframes` or another `@media` inside a media
//! block) is re-wrapped as a standalone fragment and handed back to the engine,
//! so its document is built by the full recognizer set. Lines inside such a
//! nested document are relative to the fragment.

use std::sync::LazyLock;

use regex::Regex;

use super::{render_comments, render_declarations, ParseContext, Recognizer};
use crate::document::{Document, MediaBlock, MediaRule, RuleBlock};
use crate::engine::render_document;
use crate::scan::declarations::split_declarations;
use crate::scan::{find_matching_close, leading_comments, line_number, Adjacency};

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@media(?-u:\s)+([^{]+)(?-u:\s)*\{").expect("media pattern is valid")
});

/// Either a plain selector up to `{`, or an at-rule header.
static INNER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^{@]+|@(?-u:[\w\s()-])+)(?-u:\s)*\{").expect("media inner pattern is valid")
});

/// Recognizes `@media <query> { ... }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaRecognizer;

impl Recognizer for MediaRecognizer {
    fn name(&self) -> &'static str {
        "media"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        Some(&*HEADER)
    }

    fn recognize(&self, source: &str, cx: &ParseContext<'_>) -> Document {
        let mut blocks = Vec::new();
        let mut cursor = 0;

        while let Some(caps) = HEADER.captures_at(source, cursor) {
            let (Some(header), Some(query)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            let open = header.end() - 1;
            let Some(close) = find_matching_close(source, open) else {
                tracing::trace!(offset = header.start(), "media: unterminated block");
                break;
            };

            blocks.push(MediaBlock {
                comment: leading_comments(source, header.start(), Adjacency::Strict),
                line: line_number(source, header.start()),
                media_query: query.as_str().trim().to_string(),
                rules: parse_rules(&source[open + 1..close], cx),
            });
            cursor = close + 1;
        }

        Document {
            media: (!blocks.is_empty()).then_some(blocks),
            ..Document::default()
        }
    }

    fn render(&self, document: &Document) -> String {
        let mut out = String::new();
        for block in document.media.iter().flatten() {
            let rules: String = block.rules.iter().map(render_rule).collect();
            out.push_str(&format!(
                "{}@media {} {{\n{}\n}}\n",
                render_comments(block.comment.as_ref()),
                block.media_query,
                rules
            ));
        }
        out
    }
}

/// Scan the interior of a media block for selector blocks and at-rules.
fn parse_rules(content: &str, cx: &ParseContext<'_>) -> Vec<MediaRule> {
    let mut rules = Vec::new();
    let mut cursor = 0;

    while let Some(caps) = INNER.captures_at(content, cursor) {
        let (Some(whole), Some(head)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let open = whole.end() - 1;
        let Some(close) = find_matching_close(content, open) else {
            tracing::trace!(offset = whole.start(), "media: unterminated inner block");
            break;
        };
        let body = &content[open + 1..close];
        let selector = head.as_str().trim();

        if selector.starts_with('@') {
            let fragment = format!("{}{}}}", whole.as_str(), body);
            if let Some(at_rule) = cx.parse_nested(&fragment) {
                rules.push(MediaRule::AtRule { at_rule });
            }
        } else if !selector.is_empty() {
            rules.push(MediaRule::Style(RuleBlock {
                selector: selector.to_string(),
                declarations: split_declarations(body),
            }));
        }
        cursor = close + 1;
    }

    rules
}

fn render_rule(rule: &MediaRule) -> String {
    match rule {
        MediaRule::Style(block) => format!(
            "\t{} {{\n{}  }}\n",
            block.selector,
            render_declarations(&block.declarations, 2)
        ),
        MediaRule::AtRule { at_rule } => format!("{}\n", render_document(at_rule)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::document::Declaration;
    use crate::engine::Engine;
    use pretty_assertions::assert_eq;

    fn media_with(engine: &Engine, source: &str) -> Vec<MediaBlock> {
        MediaRecognizer
            .recognize(source, &ParseContext::new(engine))
            .media
            .unwrap_or_default()
    }

    fn media(source: &str) -> Vec<MediaBlock> {
        media_with(&Engine::default(), source)
    }

    #[test]
    fn test_single_rule() {
        let found = media("@media (min-width: 600px) { .a { color: red; } }");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].media_query, "(min-width: 600px)");
        assert_eq!(
            found[0].rules,
            vec![MediaRule::Style(RuleBlock {
                selector: ".a".into(),
                declarations: vec![Declaration::new("color", "red")],
            })]
        );
    }

    #[test]
    fn test_several_rules_and_blocks() {
        let source = "@media print {\n  .a { color: black }\n  .b, .c { display: none; }\n}\n@media screen { .d { x: y } }";
        let found = media(source);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].rules.len(), 2);
        assert_eq!(found[1].line, 5);
        match &found[0].rules[1] {
            MediaRule::Style(block) => assert_eq!(block.selector, ".b, .c"),
            other => panic!("expected style rule, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_keyframes_is_parsed_recursively() {
        let source = "@media (prefers-reduced-motion: no-preference) {\n  @keyframes spin { from { a: b; } }\n}";
        let found = media(source);
        let MediaRule::AtRule { at_rule } = &found[0].rules[0] else {
            panic!("expected nested at-rule");
        };
        let keyframes = at_rule.keyframes.as_ref().unwrap();
        assert_eq!(keyframes[0].name, "spin");
        assert_eq!(keyframes[0].line, 1);
    }

    #[test]
    fn test_nested_media_is_parsed_recursively() {
        let found = media("@media screen { @media (orientation) { .a { b: c; } } }");
        let MediaRule::AtRule { at_rule } = &found[0].rules[0] else {
            panic!("expected nested at-rule");
        };
        let inner = at_rule.media.as_ref().unwrap();
        assert_eq!(inner[0].media_query, "(orientation)");
        assert_eq!(inner[0].rules.len(), 1);
    }

    #[test]
    fn test_at_rule_header_with_colon_reads_as_selector() {
        // `:` is outside the at-rule header class, so the plain-selector
        // branch matches from just after the `@`.
        let found = media("@media screen { @media (min-width: 1px) { .a { b: c; } } }");
        let MediaRule::Style(block) = &found[0].rules[0] else {
            panic!("expected style rule");
        };
        assert_eq!(block.selector, "media (min-width: 1px)");
    }

    #[test]
    fn test_non_ascii_at_rule_header_reads_as_selector() {
        let found = media("@media screen { @keyframes é { to { a: b; } } }");
        let MediaRule::Style(block) = &found[0].rules[0] else {
            panic!("expected style rule");
        };
        assert_eq!(block.selector, "keyframes é");
    }

    #[test]
    fn test_depth_cap_drops_nested_at_rules() {
        let engine = Engine::new(EngineConfig::new().with_max_nesting_depth(0));
        let found = media_with(&engine, "@media screen { @media print { .a { b: c; } } .d { e: f; } }");
        assert_eq!(found[0].rules.len(), 1);
        assert!(matches!(found[0].rules[0], MediaRule::Style(_)));
    }

    #[test]
    fn test_declarations_keep_comments() {
        let found = media("@media print { .a { /* c */ color: red; } }");
        let MediaRule::Style(block) = &found[0].rules[0] else {
            panic!("expected style rule");
        };
        assert_eq!(block.declarations, vec![Declaration::new("/* c */ color", "red")]);
    }

    #[test]
    fn test_unterminated_block_stops_scanning() {
        assert!(media("@media print { .a { color: red; }").is_empty());
    }

    #[test]
    fn test_adjacent_comments_chain() {
        let found = media("/* a */\n/* b */\n@media print { .a { b: c; } }");
        assert_eq!(found[0].comment, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_form_feed_detaches_comment() {
        let found = media("/* a */\x0c@media print { .a { b: c; } }");
        assert_eq!(found[0].comment, None);
    }

    #[test]
    fn test_render_layout() {
        let found = media("/* print */\n@media print { .a { color: black; } }");
        let doc = Document {
            media: Some(found),
            ..Document::default()
        };
        assert_eq!(
            MediaRecognizer.render(&doc),
            "/* print */\n@media print {\n\t.a {\n\t\tcolor: black;\n  }\n\n}\n"
        );
    }
}
