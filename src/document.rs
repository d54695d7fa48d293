//! Document model: the structured result of one parse.
//!
//! A [`Document`] is keyed by element kind. Every record carries the 1-based
//! `line` where it starts and the leading `comment` blocks attached to it.
//! Field names are the interchange schema, so `serde_json` output of a
//! Document is the interchange format directly.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    /// Create a new declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A single-value directive: `@charset`, `@import`, `@tailwind` or `@config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Leading comment bodies, in source order.
    pub comment: Option<Vec<String>>,
    /// 1-based line of the `@` keyword.
    pub line: usize,
    /// The captured value (charset name, import target, layer name, config path).
    pub value: String,
}

/// One step of a `@keyframes` block, e.g. `from { opacity: 0; }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyframeStep {
    /// Step selector text (`from`, `to`, `50%`, `0%, 100%`).
    #[serde(rename = "step")]
    pub selector: String,
    #[serde(rename = "rules")]
    pub declarations: Vec<Declaration>,
}

/// A `@keyframes <name> { ... }` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyframes {
    pub comment: Option<Vec<String>>,
    pub line: usize,
    pub name: String,
    pub steps: Vec<KeyframeStep>,
}

/// A selector block nested inside `@media`. Carries no position metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBlock {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// An entry inside a `@media` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaRule {
    /// `selector { declarations }`
    Style(RuleBlock),
    /// A nested at-rule, parsed recursively into its own document.
    AtRule { at_rule: Document },
}

/// A `@media <query> { ... }` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaBlock {
    pub comment: Option<Vec<String>>,
    pub line: usize,
    pub media_query: String,
    pub rules: Vec<MediaRule>,
}

/// A top-level style rule: `selector { declarations }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRule {
    pub comment: Option<Vec<String>>,
    pub line: usize,
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// The full result of one parse, keyed by element kind.
///
/// `imports` and `tailwind` always serialize, as `null` when nothing matched.
/// Every other kind is omitted when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<Vec<Directive>>,
    #[serde(default)]
    pub imports: Option<Vec<Directive>>,
    #[serde(default)]
    pub tailwind: Option<Vec<Directive>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyframes: Option<Vec<Keyframes>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<MediaBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<StyleRule>>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no kind holds a record.
    pub fn is_empty(&self) -> bool {
        fn none_or_empty<T>(kind: &Option<Vec<T>>) -> bool {
            kind.as_ref().is_none_or(|records| records.is_empty())
        }

        none_or_empty(&self.charset)
            && none_or_empty(&self.imports)
            && none_or_empty(&self.tailwind)
            && self.config.is_none()
            && none_or_empty(&self.keyframes)
            && none_or_empty(&self.media)
            && none_or_empty(&self.styles)
    }

    /// Total number of records across all kinds (nested at-rules not counted).
    pub fn len(&self) -> usize {
        fn count<T>(kind: &Option<Vec<T>>) -> usize {
            kind.as_ref().map_or(0, Vec::len)
        }

        count(&self.charset)
            + count(&self.imports)
            + count(&self.tailwind)
            + usize::from(self.config.is_some())
            + count(&self.keyframes)
            + count(&self.media)
            + count(&self.styles)
    }

    /// Merge another partial document into this one.
    ///
    /// Collections append in order. `config` keeps the record already present.
    pub fn merge(&mut self, other: Document) {
        fn append<T>(into: &mut Option<Vec<T>>, from: Option<Vec<T>>) {
            if let Some(records) = from {
                into.get_or_insert_with(Vec::new).extend(records);
            }
        }

        append(&mut self.charset, other.charset);
        append(&mut self.imports, other.imports);
        append(&mut self.tailwind, other.tailwind);
        if self.config.is_none() {
            self.config = other.config;
        }
        append(&mut self.keyframes, other.keyframes);
        append(&mut self.media, other.media);
        append(&mut self.styles, other.styles);
    }

    /// Encode as pretty-printed JSON, the default [`EngineConfig`] layout.
    /// Use [`Engine::to_json`] to follow a config's `pretty_json` choice.
    ///
    /// [`EngineConfig`]: crate::EngineConfig
    /// [`Engine::to_json`]: crate::Engine::to_json
    pub fn to_json(&self) -> Result<String> {
        self.encode(true)
    }

    /// Encode as JSON, pretty-printed or compact.
    pub(crate) fn encode(&self, pretty: bool) -> Result<String> {
        let encoded = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        encoded.map_err(Error::Encode)
    }

    /// Decode a document from JSON, e.g. a hand-built one to render.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Decode)
    }
}
