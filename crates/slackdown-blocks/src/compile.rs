//! Markdown to Block Kit compilation.

use slackdown_mrkdwn::convert_inline;

use crate::block::{Attachment, Block, BlocksPayload, MAX_BLOCKS, MAX_HEADER_LEN, MAX_SECTION_LEN};
use crate::table::render_table;

/// A logical unit of source markdown, produced by the classification pass.
#[derive(Debug, PartialEq, Eq)]
enum Unit<'a> {
    /// A single `#`-prefixed line, marker stripped.
    Heading(&'a str),
    /// A contiguous run of plain lines.
    Paragraph(Vec<&'a str>),
    /// A pipe table: header row plus data rows. The divider row is
    /// structural and already consumed.
    Table { header: &'a str, rows: Vec<&'a str> },
    /// A thematic break line.
    Rule,
}

/// Compile markdown into a Block Kit payload.
///
/// Classification splits the input into logical units on blank-line
/// boundaries and structural markers; rendering converts each unit in
/// source order, enforcing every platform ceiling:
///
/// - heading text over [`MAX_HEADER_LEN`] characters is truncated and the
///   remainder relocated into a section block inserted immediately after —
///   overflow is moved, never dropped;
/// - paragraph text is inline-converted, then chunked into consecutive
///   section blocks of at most [`MAX_SECTION_LEN`] characters each, split
///   on char boundaries;
/// - tables are capped by the table renderer and routed into a single
///   shared attachment (Slack has no top-level table block);
/// - the final block list is cut at [`MAX_BLOCKS`] entries, applied last so
///   leading content always wins over tail content.
///
/// Compilation is total. Malformed markdown is never an error: anything the
/// classifier cannot place falls through to the paragraph path, and empty
/// input yields an empty payload.
#[must_use]
pub fn compile(markdown: &str) -> BlocksPayload {
    let mut blocks = Vec::new();
    let mut table_blocks = Vec::new();

    for unit in classify(markdown) {
        match unit {
            Unit::Heading(text) => render_heading(text, &mut blocks),
            Unit::Paragraph(lines) => render_paragraph(&lines.join("\n"), &mut blocks),
            Unit::Rule => blocks.push(Block::Divider),
            Unit::Table { header, rows } => {
                let header_cells = split_row(header);
                let body = rows.into_iter().map(split_row).collect();
                table_blocks.push(render_table(header_cells, body));
            }
        }
    }

    if blocks.len() > MAX_BLOCKS {
        tracing::debug!(
            dropped = blocks.len() - MAX_BLOCKS,
            "Message exceeds block cap, dropping trailing blocks"
        );
        blocks.truncate(MAX_BLOCKS);
    }

    let attachments = if table_blocks.is_empty() {
        Vec::new()
    } else {
        vec![Attachment { blocks: table_blocks }]
    };

    BlocksPayload { blocks, attachments }
}

/// Split the input into logical units line by line.
fn classify(markdown: &str) -> Vec<Unit<'_>> {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut units = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let trimmed = lines[i].trim();
        if trimmed.is_empty() {
            i += 1;
        } else if let Some(text) = heading_text(trimmed) {
            units.push(Unit::Heading(text));
            i += 1;
        } else if is_thematic_break(trimmed) {
            units.push(Unit::Rule);
            i += 1;
        } else if is_table_start(&lines[i..]) {
            let header = lines[i];
            // Skip the divider row; it carries no content.
            let mut end = i + 2;
            while end < lines.len() && is_table_row(lines[end]) {
                end += 1;
            }
            units.push(Unit::Table { header, rows: lines[i + 2..end].to_vec() });
            i = end;
        } else {
            let mut end = i + 1;
            while end < lines.len() && continues_paragraph(&lines[end..]) {
                end += 1;
            }
            units.push(Unit::Paragraph(lines[i..end].to_vec()));
            i = end;
        }
    }

    units
}

/// Whether the next line extends the current paragraph rather than opening
/// a new unit.
fn continues_paragraph(rest: &[&str]) -> bool {
    let trimmed = rest[0].trim();
    !trimmed.is_empty()
        && heading_text(trimmed).is_none()
        && !is_thematic_break(trimmed)
        && !is_table_start(rest)
}

/// Heading marker: one to six `#` characters followed by a space. Returns
/// the line's remaining text.
fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) {
        line[hashes..].strip_prefix(' ').map(str::trim)
    } else {
        None
    }
}

/// Thematic break: a line of three or more dashes, asterisks, or
/// underscores and nothing else.
fn is_thematic_break(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next().is_some_and(|first| {
        matches!(first, '-' | '*' | '_') && line.len() >= 3 && chars.all(|c| c == first)
    })
}

/// Whether `rest` opens a pipe table: a pipe row followed by a divider row.
fn is_table_start(rest: &[&str]) -> bool {
    rest.len() >= 2 && is_table_row(rest[0]) && is_table_divider(rest[1])
}

fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.contains('|')
}

/// Divider row of a pipe table: pipe-separated cells of dashes, with
/// optional alignment colons.
fn is_table_divider(line: &str) -> bool {
    let trimmed = line.trim();
    if !trimmed.contains('|') {
        return false;
    }
    strip_outer_pipes(trimmed).split('|').all(|cell| {
        let cell = cell.trim();
        !cell.is_empty()
            && cell.contains('-')
            && cell.chars().all(|c| matches!(c, '-' | ':'))
    })
}

/// Tokenize a table row on `|`, dropping one leading and one trailing pipe
/// and trimming cell whitespace.
fn split_row(line: &str) -> Vec<String> {
    strip_outer_pipes(line.trim())
        .split('|')
        .map(|cell| cell.trim().to_owned())
        .collect()
}

fn strip_outer_pipes(row: &str) -> &str {
    let row = row.strip_prefix('|').unwrap_or(row);
    row.strip_suffix('|').unwrap_or(row)
}

/// Emit a header block, relocating any text past the length cap into a
/// section block placed immediately after it.
fn render_heading(text: &str, blocks: &mut Vec<Block>) {
    let (kept, overflow) = split_at_char_cap(text, MAX_HEADER_LEN);
    blocks.push(Block::Header { text: kept.to_owned() });
    if !overflow.is_empty() {
        tracing::debug!(
            overflow_chars = overflow.chars().count(),
            "Header exceeds length cap, relocating overflow to a section"
        );
        blocks.push(Block::Section { text: convert_inline(overflow) });
    }
}

/// Inline-convert a paragraph and emit it as one or more section blocks,
/// each within the section length cap.
fn render_paragraph(text: &str, blocks: &mut Vec<Block>) {
    let converted = convert_inline(text);
    let mut rest = converted.as_str();
    loop {
        let (chunk, tail) = split_at_char_cap(rest, MAX_SECTION_LEN);
        blocks.push(Block::Section { text: chunk.to_owned() });
        if tail.is_empty() {
            break;
        }
        rest = tail;
    }
}

/// Split `text` after at most `cap` characters, on a char boundary.
fn split_at_char_cap(text: &str, cap: usize) -> (&str, &str) {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => text.split_at(idx),
        None => (text, ""),
    }
}
