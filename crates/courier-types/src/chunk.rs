//! Segment and chunk types produced by the chunking engine.
//!
//! A [`Segment`] is a maximal run of the input that is either entirely
//! outside a code fence or entirely inside one. A [`Chunk`] is a bounded
//! piece of a segment, ready for one delivery call.

use serde::{Deserialize, Serialize};

/// The code fence delimiter.
pub const FENCE: &str = "```";

/// Length of [`FENCE`] in characters.
pub const FENCE_LEN: usize = 3;

/// Whether a segment lies outside or inside a code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SegmentKind {
    /// Text outside any code fence.
    Plain,
    /// Text inside a code fence.
    ///
    /// `terminated` is false for a trailing block opened by an unmatched
    /// delimiter. Such a block is still closed on every chunk it produces.
    Fenced { terminated: bool },
}

impl SegmentKind {
    pub fn is_fenced(&self) -> bool {
        matches!(self, SegmentKind::Fenced { .. })
    }
}

/// A contiguous run of the input text, borrowed from it.
///
/// For fenced segments `content` excludes the delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Position of this segment among the segments of its document.
    pub index: usize,
    pub kind: SegmentKind,
    pub content: &'a str,
}

impl Segment<'_> {
    /// Segment text with its fence delimiters restored.
    ///
    /// Unterminated fenced segments get a closing delimiter too.
    pub fn render(&self) -> String {
        match self.kind {
            SegmentKind::Plain => self.content.to_string(),
            SegmentKind::Fenced { .. } => format!("{FENCE}{}{FENCE}", self.content),
        }
    }
}

/// A bounded piece of text ready for one delivery call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Index of the originating [`Segment`].
    pub segment: usize,
    /// Kind of the originating segment.
    pub kind: SegmentKind,
    /// Text handed to the delivery sink.
    pub text: String,
    /// True when `text` is the segment piece wrapped in a fence pair.
    pub wrapped: bool,
}

impl Chunk {
    /// A chunk carved from a plain segment.
    pub fn plain(segment: usize, text: &str) -> Self {
        Self {
            segment,
            kind: SegmentKind::Plain,
            text: text.to_string(),
            wrapped: false,
        }
    }

    /// A chunk carved from a fenced segment, wrapped in its own fence pair.
    pub fn fenced(segment: usize, kind: SegmentKind, body: &str) -> Self {
        Self {
            segment,
            kind,
            text: format!("{FENCE}{body}{FENCE}"),
            wrapped: true,
        }
    }

    /// A raw slice of a fenced segment that could not be re-wrapped
    /// because the length ceiling leaves no room for two delimiters.
    pub fn fenced_raw(segment: usize, kind: SegmentKind, text: &str) -> Self {
        Self {
            segment,
            kind,
            text: text.to_string(),
            wrapped: false,
        }
    }

    /// Length of the delivered text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The chunk text without its per-chunk fence pair.
    pub fn body(&self) -> &str {
        if self.wrapped {
            self.text
                .strip_prefix(FENCE)
                .and_then(|t| t.strip_suffix(FENCE))
                .unwrap_or(&self.text)
        } else {
            &self.text
        }
    }
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
