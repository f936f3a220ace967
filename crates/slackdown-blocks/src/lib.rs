//! Markdown to Slack Block Kit compiler.
//!
//! Takes lightweight markdown and produces the `{blocks, attachments}`
//! payload Slack's message API accepts, with every platform ceiling
//! enforced: header text is capped at 150 characters (overflow relocated
//! into a trailing section, never dropped), section text is chunked at
//! 3000 characters, tables are clamped to 100 × 20 cells and routed into a
//! single attachment (Slack has no top-level table block), and the block
//! list itself is cut at 50 entries.
//!
//! Compilation is total: malformed markdown is never an error. Anything the
//! classifier cannot place falls through to the section path, so every
//! input string yields a structurally valid payload.
//!
//! # Architecture
//!
//! - [`Block`], [`Attachment`], [`BlocksPayload`]: the typed layout model,
//!   serializing straight into the Block Kit wire shape.
//! - [`render_table`]: caps and shapes tokenized pipe tables.
//! - [`compile`]: classifies markdown into logical units and renders each,
//!   delegating inline text to `slackdown-mrkdwn`.
//!
//! # Example
//!
//! ```
//! use slackdown_blocks::{Block, compile};
//!
//! let payload = compile("# Release\n\nShipped **v2** today");
//! assert_eq!(payload.blocks.len(), 2);
//! assert_eq!(payload.blocks[0], Block::Header { text: "Release".to_owned() });
//! assert_eq!(payload.blocks[1], Block::Section { text: "Shipped *v2* today".to_owned() });
//! assert!(payload.attachments.is_empty());
//! ```

mod block;
mod compile;
mod table;

pub use block::{
    Attachment, Block, BlocksPayload, MAX_BLOCKS, MAX_HEADER_LEN, MAX_SECTION_LEN, MAX_TABLE_COLS,
    MAX_TABLE_ROWS,
};
pub use compile::compile;
pub use table::render_table;
