use crate::state::TextSegment;

/// Segments shorter than this (trimmed, in characters) are not sent.
pub const MIN_CHARACTERS: usize = 3;

/// One entry of a batch `TextList`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Document {
    pub segment: usize,
    /// Character offset of `text` inside its segment.
    pub char_offset: usize,
    pub text: String,
}

pub(crate) fn build_documents(segments: &[TextSegment], max_bytes: usize) -> Vec<Document> {
    let mut documents = Vec::new();
    for (segment, TextSegment { text, .. }) in segments.iter().enumerate() {
        if text.trim().chars().count() < MIN_CHARACTERS {
            crate::trace!("Skipping segment {segment}: too short");
            continue;
        }
        for (char_offset, piece) in split_text(text, max_bytes) {
            if piece.trim().is_empty() {
                continue;
            }
            documents.push(Document {
                segment,
                char_offset,
                text: piece.to_string(),
            });
        }
    }
    documents
}

/// Splits `text` into pieces of at most `max_bytes`, cutting after the last
/// whitespace before the limit when there is one.
///
/// Returns each piece with its character offset in `text`.
pub(crate) fn split_text(text: &str, max_bytes: usize) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut rest = text;
    let mut char_offset = 0;

    while rest.len() > max_bytes {
        let mut end = max_bytes;
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        if end == 0 {
            // A single character wider than the limit.
            end = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        let cut = match rest[..end].char_indices().rev().find(|(_, c)| c.is_whitespace()) {
            Some((i, c)) if i > 0 => i + c.len_utf8(),
            _ => end,
        };
        let (piece, tail) = rest.split_at(cut);
        pieces.push((char_offset, piece));
        char_offset += piece.chars().count();
        rest = tail;
    }
    if !rest.is_empty() {
        pieces.push((char_offset, rest));
    }
    pieces
}
