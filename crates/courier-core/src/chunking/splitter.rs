//! Separator-preferring carving of oversized text.
//!
//! Lengths and cut positions are counted in characters so a cut never lands
//! inside a multi-byte sequence.

/// Preferred break points, strongest first.
pub const SEPARATORS: [&str; 3] = ["\n\n", "\n", " "];

/// Carve `text` into pieces of at most `budget` characters.
///
/// While the remainder is too long, cut right after the last occurrence of
/// the strongest separator that lies entirely within the first `budget`
/// characters, or hard-cut at `budget` when none does. The separator stays
/// with the emitted piece. Every carve consumes at least one character.
///
/// Returns no pieces for empty text. A `budget` of 0 is treated as 1.
pub fn carve(text: &str, budget: usize) -> Vec<&str> {
    let budget = budget.max(1);
    let mut pieces = Vec::new();
    let mut rest = text;

    // `nth(budget)` exists only when the remainder is longer than `budget`;
    // its byte offset is where the window ends.
    while let Some((window_end, _)) = rest.char_indices().nth(budget) {
        let window = &rest[..window_end];
        let cut = SEPARATORS
            .iter()
            .find_map(|sep| window.rfind(sep).map(|idx| idx + sep.len()))
            .unwrap_or(window_end);

        let (piece, tail) = rest.split_at(cut);
        pieces.push(piece);
        rest = tail;
    }

    if !rest.is_empty() {
        pieces.push(rest);
    }
    pieces
}

/// Truncate `text` to at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
