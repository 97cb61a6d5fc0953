use serde_json::Value;

use super::value::{get_path, is_truthy, truthy_text};

pub const STREAM_EVENT: &str = "stream_event";
pub const ASSISTANT: &str = "assistant";
pub const RESULT: &str = "result";
pub const TEXT_DELTA: &str = "text_delta";

const DEFAULT_TOOL_NAME: &str = "unknown";

/// One content block of an `assistant` message worth rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    ToolUse {
        name: String,
        input: Option<Value>,
        id: Option<String>,
    },
    Text(String),
}

/// A decoded stream-json line, reduced to what the printer cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    TextDelta(String),
    Assistant(Vec<Block>),
    Result { ok: bool, text: String },
    Ignored,
}

impl Record {
    /// Classifies a decoded line by its `type` field.
    ///
    /// Best-effort: wrong shapes at any level fall back to defaults or `Ignored`,
    /// never to an error.
    pub fn from_value(v: &Value) -> Record {
        if !v.is_object() {
            return Record::Ignored;
        }

        match v.get("type").and_then(|x| x.as_str()) {
            Some(STREAM_EVENT) => classify_stream_event(v),
            Some(ASSISTANT) => Record::Assistant(assistant_blocks(v)),
            Some(RESULT) => {
                let ok = !v.get("is_error").map(is_truthy).unwrap_or(false);
                let text = truthy_text(v, "result").unwrap_or_default();
                Record::Result { ok, text }
            }
            _ => Record::Ignored,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Record::Ignored)
    }
}

fn classify_stream_event(v: &Value) -> Record {
    let Some(delta) = get_path(v, &["event", "delta"]) else {
        return Record::Ignored;
    };
    if delta.get("type").and_then(|x| x.as_str()) != Some(TEXT_DELTA) {
        // input_json_delta, thinking_delta, ...
        return Record::Ignored;
    }
    match delta.get("text").and_then(|x| x.as_str()) {
        Some(t) if !t.is_empty() => Record::TextDelta(t.to_string()),
        _ => Record::Ignored,
    }
}

fn assistant_blocks(v: &Value) -> Vec<Block> {
    let Some(items) = get_path(v, &["message", "content"]).and_then(|c| c.as_array()) else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.is_object())
        .filter_map(|item| match item.get("type").and_then(|x| x.as_str()) {
            Some("tool_use") => Some(Block::ToolUse {
                name: truthy_text(item, "name").unwrap_or_else(|| DEFAULT_TOOL_NAME.to_string()),
                input: item.get("input").filter(|x| !x.is_null()).cloned(),
                id: truthy_text(item, "id"),
            }),
            Some("text") => truthy_text(item, "text").map(Block::Text),
            _ => None,
        })
        .collect()
}
