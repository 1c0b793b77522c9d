//! Fence-aware text chunker for length-limited chat transports.
//!
//! Splits a generated response into [`Chunk`]s no longer than a hard
//! ceiling (2000 characters for Discord) so each fits in one message.
//!
//! # Algorithm
//!
//! 1. Split the text at every fence delimiter into alternating plain and
//!    fenced segments ([`fence::segment`]).
//! 2. Emit a segment that fits as one chunk. Otherwise carve it at the last
//!    `"\n\n"`, then `"\n"`, then `" "` within the ceiling, or hard-cut
//!    ([`splitter::carve`]). Fenced content is carved with room for two
//!    delimiters and every piece is re-wrapped, so each chunk of a code
//!    block is a complete block on its own.
//! 3. Chunks keep segment order, then carve order.
//!
//! # Example
//!
//! ```rust
//! use courier_core::chunking::{reassemble, split};
//!
//! let text = "See:\n```\nlet x = 1;\n```";
//! let chunks = split(Some(text), 2000);
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(reassemble(&chunks), text);
//! ```

pub mod fence;
pub mod splitter;

use courier_types::chunk::{Chunk, FENCE, FENCE_LEN, SegmentKind};

pub use fence::segment;
pub use splitter::{carve, truncate_chars};

/// Split `text` into ordered chunks of at most `max` characters.
///
/// Empty or absent text yields no chunks. A `max` of 0 is treated as 1.
/// When `max` leaves no room for content between two delimiters, fenced
/// segments are carved like plain text, delimiters included.
pub fn split(text: Option<&str>, max: usize) -> Vec<Chunk> {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };
    let max = max.max(1);

    let mut chunks = Vec::new();
    for seg in segment(text) {
        match seg.kind {
            SegmentKind::Plain => {
                chunks.extend(
                    carve(seg.content, max)
                        .into_iter()
                        .map(|p| Chunk::plain(seg.index, p)),
                );
            }
            SegmentKind::Fenced { terminated } if max > 2 * FENCE_LEN => {
                let pieces = if seg.content.is_empty() {
                    vec![""]
                } else {
                    carve(seg.content, max - 2 * FENCE_LEN)
                };
                chunks.extend(
                    pieces
                        .into_iter()
                        .map(|p| Chunk::fenced(seg.index, SegmentKind::Fenced { terminated }, p)),
                );
            }
            SegmentKind::Fenced { terminated } => {
                let raw = if terminated {
                    seg.render()
                } else {
                    format!("{FENCE}{}", seg.content)
                };
                chunks.extend(
                    carve(&raw, max)
                        .into_iter()
                        .map(|p| Chunk::fenced_raw(seg.index, seg.kind, p)),
                );
            }
        }
    }
    chunks
}

/// Like [`split`], returning only the text of each chunk.
pub fn split_text(text: &str, max: usize) -> Vec<String> {
    split(Some(text), max).into_iter().map(|c| c.text).collect()
}

/// Rebuild the original text from a chunk sequence produced by [`split`].
///
/// Per-chunk fence pairs are stripped and each fenced segment gets its
/// original delimiters back: an opening and closing pair, or only the
/// opening delimiter for an unterminated block.
pub fn reassemble(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    for group in chunks.chunk_by(|a, b| a.segment == b.segment) {
        let first = &group[0];
        match first.kind {
            SegmentKind::Fenced { terminated } if first.wrapped => {
                out.push_str(FENCE);
                group.iter().for_each(|c| out.push_str(c.body()));
                if terminated {
                    out.push_str(FENCE);
                }
            }
            _ => group.iter().for_each(|c| out.push_str(&c.text)),
        }
    }
    out
}
