//! Markdown to Slack mrkdwn inline conversion.
//!
//! Slack's mrkdwn dialect differs from standard markdown in two ways this
//! crate handles: bold uses single asterisks (`*bold*`), and links are
//! written as `<url|label>`. Everything inside backticks — fenced blocks and
//! inline spans — is code and must reach Slack byte-for-byte, so conversion
//! is built on a segmentation pass that walls code off before any
//! substitution runs.
//!
//! # Architecture
//!
//! - [`segment`]: splits input into preserve (code) and transform (text)
//!   segments. Lossless — concatenating the segments reproduces the input.
//! - [`convert_inline`]: applies bold and link substitution to transform
//!   segments only.
//!
//! # Example
//!
//! ```
//! use slackdown_mrkdwn::convert_inline;
//!
//! let out = convert_inline("deploy **done**, see [docs](https://example.com)");
//! assert_eq!(out, "deploy *done*, see <https://example.com|docs>");
//! ```

mod inline;
mod segment;

pub use inline::convert_inline;
pub use segment::{Segment, segment};
