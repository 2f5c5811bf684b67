//! Cursor ↔ slide mapping.
//!
//! These walk the same tagged lines as the splitter, so a slide index from
//! here always indexes into the slides of the deck parsed from the same text.
//! A separator only counts as a boundary when the slide it opens survives the
//! splitter's empty-slide rule.

use super::{
    scan::{LineTag, TaggedLines},
    text::normalize,
};

/// Returns the index of the slide containing a cursor at the start of
/// `line` (zero-based).
///
/// Only lines before `line` are inspected for separators, so a cursor on a
/// separator belongs to the slide before it. Lines past the end map to the
/// last slide.
pub fn slide_index_at_line(markdown: &str, line: usize) -> usize {
    let text = normalize(markdown);
    let mut index = 0;
    // A separator before the cursor whose slide has shown no content yet.
    let mut pending = false;

    for tl in TaggedLines::document(&text) {
        let past_cursor = tl.number >= line;
        if past_cursor && !pending {
            break;
        }
        match tl.tag {
            LineTag::Separator if past_cursor => break,
            LineTag::Separator => pending = true,
            _ if tl.is_content() && pending => {
                pending = false;
                index += 1;
            }
            _ => {}
        }
    }

    index
}

/// A separator line that opens a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideBoundary {
    /// Zero-based line number of the separator.
    pub line: usize,
    /// Index of the slide the separator opens (always >= 1).
    pub index: usize,
}

/// Lists every separator that opens a slide of the parsed deck.
///
/// The deck has exactly `1 + boundaries.len()` slides.
pub fn slide_boundaries(markdown: &str) -> Vec<SlideBoundary> {
    let text = normalize(markdown);
    let mut out = Vec::new();
    let mut pending = None;

    for tl in TaggedLines::document(&text) {
        match tl.tag {
            LineTag::Separator => pending = Some(tl.number),
            _ if tl.is_content() => {
                if let Some(line) = pending.take() {
                    out.push(SlideBoundary {
                        line,
                        index: out.len() + 1,
                    });
                }
            }
            _ => {}
        }
    }

    out
}

/// Returns the line a cursor should jump to for slide `index`: the line
/// after its separator, or the first line after the global frontmatter for
/// slide 0. `None` when the deck has no such slide.
pub fn slide_start_line(markdown: &str, index: usize) -> Option<usize> {
    if index == 0 {
        let text = normalize(markdown);
        let start = TaggedLines::document(&text)
            .filter(|tl| tl.tag == LineTag::GlobalDelimiter)
            .last()
            .map_or(0, |tl| tl.number + 1);
        return Some(start);
    }

    slide_boundaries(markdown)
        .get(index - 1)
        .map(|boundary| boundary.line + 1)
}
