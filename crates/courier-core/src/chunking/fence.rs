//! Fence-aware segmentation.
//!
//! Splits text at every fence delimiter into alternating plain and fenced
//! segments. Pieces at even positions are plain, odd positions are fenced.
//! Empty plain pieces are dropped; empty fenced pieces are kept so an empty
//! code block still produces a chunk.

use courier_types::chunk::{FENCE, Segment, SegmentKind};

/// Partition `text` into ordered segments.
///
/// An odd number of delimiters leaves the last fenced segment unterminated;
/// it runs to the end of the text.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let pieces: Vec<&str> = text.split(FENCE).collect();
    let last = pieces.len() - 1;

    let mut segments = Vec::with_capacity(pieces.len());
    for (i, content) in pieces.into_iter().enumerate() {
        let kind = if i % 2 == 1 {
            SegmentKind::Fenced {
                terminated: i < last,
            }
        } else if content.is_empty() {
            continue;
        } else {
            SegmentKind::Plain
        };
        segments.push(Segment {
            index: segments.len(),
            kind,
            content,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(SegmentKind, &str)> {
        segment(text)
            .into_iter()
            .map(|s| (s.kind, s.content))
            .collect()
    }

    const CLOSED: SegmentKind = SegmentKind::Fenced { terminated: true };
    const OPEN: SegmentKind = SegmentKind::Fenced { terminated: false };

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(kinds("hello world"), vec![(SegmentKind::Plain, "hello world")]);
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn fenced_block_between_plain_text() {
        assert_eq!(
            kinds("prefix ```code``` suffix"),
            vec![
                (SegmentKind::Plain, "prefix "),
                (CLOSED, "code"),
                (SegmentKind::Plain, " suffix"),
            ]
        );
    }

    #[test]
    fn leading_and_trailing_fences_drop_empty_plain() {
        assert_eq!(kinds("```a```"), vec![(CLOSED, "a")]);
    }

    #[test]
    fn empty_fenced_block_is_kept() {
        assert_eq!(
            kinds("x``````y"),
            vec![
                (SegmentKind::Plain, "x"),
                (CLOSED, ""),
                (SegmentKind::Plain, "y"),
            ]
        );
    }

    #[test]
    fn unmatched_fence_opens_trailing_block() {
        assert_eq!(
            kinds("intro ```rust\nfn main() {}"),
            vec![(SegmentKind::Plain, "intro "), (OPEN, "rust\nfn main() {}")]
        );
        assert_eq!(kinds("text```"), vec![(SegmentKind::Plain, "text"), (OPEN, "")]);
    }

    #[test]
    fn indices_are_contiguous_after_dropping_empties() {
        let segs = segment("```a``````b```");
        let indices: Vec<usize> = segs.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert!(segs.iter().all(|s| s.kind == CLOSED));
    }
}
