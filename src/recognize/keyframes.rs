//! `@keyframes` blocks and their steps.

use std::sync::LazyLock;

use regex::Regex;

use super::{render_comments, render_declarations, ParseContext, Recognizer};
use crate::document::{Document, KeyframeStep, Keyframes};
use crate::scan::declarations::match_declarations;
use crate::scan::{find_matching_close, leading_comments, line_number, Adjacency};

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@keyframes(?-u:\s)+([a-zA-Z0-9_-]+)(?-u:\s)*\{")
        .expect("keyframes pattern is valid")
});

static STEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)((?-u:[a-zA-Z0-9%,\s])+)(?-u:\s)*\{(.*?)\}")
        .expect("keyframe step pattern is valid")
});

/// Recognizes `@keyframes <name> { <step> { ... } ... }`.
///
/// Headers are matched one at a time from a cursor that skips past each
/// consumed block, so a keyframes block is never scanned twice. A header
/// without a closing brace ends the scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyframesRecognizer;

impl Recognizer for KeyframesRecognizer {
    fn name(&self) -> &'static str {
        "keyframes"
    }

    fn pattern(&self) -> Option<&'static Regex> {
        Some(&*HEADER)
    }

    fn recognize(&self, source: &str, _cx: &ParseContext<'_>) -> Document {
        let mut keyframes = Vec::new();
        let mut cursor = 0;

        while let Some(caps) = HEADER.captures_at(source, cursor) {
            let (Some(header), Some(name)) = (caps.get(0), caps.get(1)) else {
                break;
            };
            let Some(close) = find_matching_close(source, header.end() - 1) else {
                tracing::trace!(offset = header.start(), "keyframes: unterminated block");
                break;
            };

            keyframes.push(Keyframes {
                comment: leading_comments(source, header.start(), Adjacency::Loose),
                line: line_number(source, header.start()),
                name: name.as_str().to_string(),
                steps: parse_steps(&source[header.end()..close]),
            });
            cursor = close + 1;
        }

        Document {
            keyframes: (!keyframes.is_empty()).then_some(keyframes),
            ..Document::default()
        }
    }

    fn render(&self, document: &Document) -> String {
        let mut out = String::new();
        for keyframe in document.keyframes.iter().flatten() {
            let steps: String = keyframe
                .steps
                .iter()
                .map(|step| {
                    format!(
                        "\t{} {{\n{}  }}\n",
                        step.selector,
                        render_declarations(&step.declarations, 2)
                    )
                })
                .collect();
            out.push_str(&format!(
                "{}@keyframes {} {{\n{}\n}}\n",
                render_comments(keyframe.comment.as_ref()),
                keyframe.name,
                steps
            ));
        }
        out
    }
}

fn parse_steps(body: &str) -> Vec<KeyframeStep> {
    STEP.captures_iter(body)
        .map(|caps| KeyframeStep {
            selector: caps[1].trim().to_string(),
            declarations: match_declarations(caps[2].trim()),
        })
        .collect()
}
