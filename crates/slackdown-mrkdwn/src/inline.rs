//! Inline markdown to mrkdwn substitution.

use std::sync::LazyLock;

use regex::Regex;

use crate::segment::segment;

/// `**bold**` spans: non-greedy, single line. The non-greedy inner match
/// stops at the first closing `**`, so the inner text can never contain a
/// double asterisk of its own.
static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\n]+?)\*\*").unwrap());

/// `[label](url)` links. Only http/https schemes qualify, and the URL run
/// stops at whitespace or a closing paren, so a link missing its `)` never
/// matches.
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\((https?://[^\s)]+)\)").unwrap());

/// Convert markdown `input` to Slack mrkdwn.
///
/// Code is never touched: fenced blocks and inline spans pass through
/// byte-for-byte. In the remaining text, `**bold**` becomes `*bold*` and
/// `[label](https://url)` becomes `<https://url|label>`. Anything that does
/// not match exactly — an unpaired `**`, a link missing its closing paren,
/// a non-http scheme — is left as written.
///
/// Pure and deterministic; identical input always yields identical output.
#[must_use]
pub fn convert_inline(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for seg in segment(input) {
        if seg.preserve {
            output.push_str(seg.value);
        } else {
            let bolded = BOLD_PATTERN.replace_all(seg.value, "*${1}*");
            output.push_str(&LINK_PATTERN.replace_all(&bolded, "<${2}|${1}>"));
        }
    }
    output
}
