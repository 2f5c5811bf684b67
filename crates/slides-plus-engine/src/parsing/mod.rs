//! Markdown deck parsing.
//!
//! Every function here is total: malformed input falls back to a sensible
//! reading instead of failing. Input is normalized first (BOM stripped,
//! CRLF folded to LF) so line numbers match what an editor shows.

pub mod classify;
pub mod code_blocks;
pub mod code_meta;
pub mod frontmatter;
pub mod navigation;
pub mod notes;
pub mod scan;
pub mod splitter;
pub mod text;
pub mod yaml;

pub use code_blocks::{CodeBlock, code_blocks};
pub use code_meta::{CodeFenceMeta, CodeMeta, FenceMeta, HighlightLine, extract_code_fence_meta};
pub use frontmatter::{GlobalFrontmatter, extract_frontmatter, is_slides_file};
pub use navigation::{SlideBoundary, slide_boundaries, slide_index_at_line, slide_start_line};
pub use notes::{ExtractedNotes, extract_notes};
pub use splitter::{RawSlide, split_slides};
pub use yaml::{Frontmatter, ScalarValue, parse_scalar_yaml};

use crate::deck::{Deck, DeckConfig};
use frontmatter::split_frontmatter;
use scan::TaggedLines;
use splitter::split_tagged;
use text::normalize;

/// Parses a deck with the built-in default configuration.
pub fn parse_deck(markdown: &str) -> Deck {
    parse_deck_with_defaults(markdown, &DeckConfig::default())
}

/// Parses a deck, filling unset global keys from `baseline`.
pub fn parse_deck_with_defaults(markdown: &str, baseline: &DeckConfig) -> Deck {
    let text = normalize(markdown);
    let global = split_frontmatter(&text)
        .map(|(frontmatter, _)| frontmatter)
        .unwrap_or_default();

    // Splitting the whole document (not just the body) keeps slide line
    // ranges in document coordinates.
    let raw = split_tagged(TaggedLines::document(&text));
    log::debug!("parsed deck with {} slides", raw.len());

    Deck::assemble(&global, raw, baseline)
}
