//! Backtick-aware segmentation of markdown text.

/// Triple-backtick code fence delimiter.
const FENCE: &str = "```";

/// A run of input text, tagged by whether it may be rewritten.
///
/// Segments borrow from the input and live only for the duration of one
/// conversion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The exact substring of the input covered by this segment.
    pub value: &'a str,
    /// True for code (fenced blocks and inline spans), which must pass
    /// through untouched. False for text eligible for substitution.
    pub preserve: bool,
}

/// Split `input` into an ordered sequence of preserve/transform segments.
///
/// A single left-to-right scan. Triple-backtick fences and single-backtick
/// spans are tagged preserve, delimiters included; everything between them
/// is tagged transform. An unterminated fence or span runs to the end of
/// the input and is still preserved — over-preserving beats corrupting code.
///
/// Concatenating the segment values in order reproduces `input` exactly,
/// and no segment is empty.
#[must_use]
pub fn segment(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        let (len, preserve) = if let Some(after_fence) = rest.strip_prefix(FENCE) {
            let len = after_fence
                .find(FENCE)
                .map_or(rest.len(), |pos| FENCE.len() + pos + FENCE.len());
            (len, true)
        } else if let Some(after_tick) = rest.strip_prefix('`') {
            let len = after_tick.find('`').map_or(rest.len(), |pos| 1 + pos + 1);
            (len, true)
        } else {
            (rest.find('`').unwrap_or(rest.len()), false)
        };

        let (value, tail) = rest.split_at(len);
        segments.push(Segment { value, preserve });
        rest = tail;
    }

    segments
}
