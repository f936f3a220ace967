//! Block Kit layout types and their wire serialization.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Maximum characters in a header block's text (Slack's documented limit).
pub const MAX_HEADER_LEN: usize = 150;

/// Maximum characters in a section block's text (Slack's documented limit).
pub const MAX_SECTION_LEN: usize = 3000;

/// Maximum blocks per message. Blocks beyond the cap are dropped.
pub const MAX_BLOCKS: usize = 50;

/// Maximum data rows kept in a table block.
pub const MAX_TABLE_ROWS: usize = 100;

/// Maximum cells kept per table row, header row included.
pub const MAX_TABLE_COLS: usize = 20;

/// A typed unit of message layout.
///
/// Every variant is subject to a platform ceiling, enforced by the compiler
/// before construction: a block that exists satisfies its own limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Large title text, plain (no mrkdwn).
    Header {
        /// Header text, at most [`MAX_HEADER_LEN`] characters.
        text: String,
    },
    /// A run of mrkdwn body text.
    Section {
        /// Section text, at most [`MAX_SECTION_LEN`] characters.
        text: String,
    },
    /// A horizontal rule.
    Divider,
    /// A rectangular cell grid. Not representable as a top-level block on
    /// Slack; always carried inside an [`Attachment`].
    Table {
        /// Header row cells, at most [`MAX_TABLE_COLS`] entries. Kept apart
        /// from the data rows so its shape is independent of the row cap.
        header: Vec<String>,
        /// Data rows, at most [`MAX_TABLE_ROWS`] × [`MAX_TABLE_COLS`].
        rows: Vec<Vec<String>>,
    },
}

/// Text object wrapper for header blocks.
#[derive(Serialize)]
struct PlainText<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
    emoji: bool,
}

/// Text object wrapper for section blocks.
#[derive(Serialize)]
struct MrkdwnText<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

impl Serialize for Block {
    /// Serialize into the Block Kit wire shape the message API expects.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Header { text } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "header")?;
                map.serialize_entry(
                    "text",
                    &PlainText { kind: "plain_text", text, emoji: true },
                )?;
                map.end()
            }
            Self::Section { text } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "section")?;
                map.serialize_entry("text", &MrkdwnText { kind: "mrkdwn", text })?;
                map.end()
            }
            Self::Divider => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", "divider")?;
                map.end()
            }
            Self::Table { header, rows } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "table")?;
                map.serialize_entry("header", header)?;
                map.serialize_entry("rows", rows)?;
                map.end()
            }
        }
    }
}

/// Secondary block container. Used exclusively for table blocks, which the
/// primary block list cannot hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Attachment-embedded blocks.
    pub blocks: Vec<Block>,
}

/// The compiled message payload, serialized verbatim into the outbound
/// message request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlocksPayload {
    /// Top-level blocks, at most [`MAX_BLOCKS`] entries.
    pub blocks: Vec<Block>,
    /// Attachments carrying table blocks. Empty when the input had no
    /// tables, and omitted from the serialized payload in that case.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl BlocksPayload {
    /// Render the payload to the JSON body of an outbound message request.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// True when compilation produced nothing to send.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.attachments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    static_assertions::assert_impl_all!(Block: Send, Sync);
    static_assertions::assert_impl_all!(BlocksPayload: Send, Sync);

    fn to_value(block: &Block) -> Value {
        serde_json::to_value(block).unwrap()
    }

    #[test]
    fn test_header_wire_shape() {
        let block = Block::Header { text: "Release notes".to_owned() };
        assert_eq!(
            to_value(&block),
            json!({
                "type": "header",
                "text": { "type": "plain_text", "text": "Release notes", "emoji": true }
            })
        );
    }

    #[test]
    fn test_section_wire_shape() {
        let block = Block::Section { text: "shipped *v2*".to_owned() };
        assert_eq!(
            to_value(&block),
            json!({
                "type": "section",
                "text": { "type": "mrkdwn", "text": "shipped *v2*" }
            })
        );
    }

    #[test]
    fn test_divider_wire_shape() {
        assert_eq!(to_value(&Block::Divider), json!({ "type": "divider" }));
    }

    #[test]
    fn test_table_wire_shape() {
        let block = Block::Table {
            header: vec!["name".to_owned(), "state".to_owned()],
            rows: vec![vec!["api".to_owned(), "up".to_owned()]],
        };
        assert_eq!(
            to_value(&block),
            json!({
                "type": "table",
                "header": ["name", "state"],
                "rows": [["api", "up"]]
            })
        );
    }

    #[test]
    fn test_payload_omits_empty_attachments() {
        let payload = BlocksPayload {
            blocks: vec![Block::Divider],
            attachments: Vec::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({ "blocks": [{ "type": "divider" }] }));
    }

    #[test]
    fn test_payload_with_attachment() {
        let payload = BlocksPayload {
            blocks: Vec::new(),
            attachments: vec![Attachment {
                blocks: vec![Block::Table { header: vec!["h".to_owned()], rows: Vec::new() }],
            }],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "blocks": [],
                "attachments": [
                    { "blocks": [{ "type": "table", "header": ["h"], "rows": [] }] }
                ]
            })
        );
    }

    #[test]
    fn test_to_json_round_trips_through_value() {
        let payload = BlocksPayload {
            blocks: vec![Block::Header { text: "t".to_owned() }],
            attachments: Vec::new(),
        };
        let parsed: Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(parsed, serde_json::to_value(&payload).unwrap());
    }

    #[test]
    fn test_is_empty() {
        assert!(BlocksPayload::default().is_empty());
        let payload = BlocksPayload { blocks: vec![Block::Divider], attachments: Vec::new() };
        assert!(!payload.is_empty());
    }
}
