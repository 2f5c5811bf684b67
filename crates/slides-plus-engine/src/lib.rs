pub mod deck;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use deck::*;
pub use io::*;
pub use parsing::{
    CodeBlock, CodeMeta, Frontmatter, HighlightLine, ScalarValue, SlideBoundary, code_blocks,
    extract_code_fence_meta, extract_frontmatter, extract_notes, is_slides_file, parse_deck,
    parse_deck_with_defaults, parse_scalar_yaml, slide_boundaries, slide_index_at_line,
    slide_start_line, split_slides,
};
