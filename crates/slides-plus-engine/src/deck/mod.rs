pub mod config;
pub mod slots;
pub mod style;

pub use config::*;
pub use slots::*;
pub use style::*;

use std::ops::Range;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use serde::Serialize;

use crate::parsing::{
    code_blocks::{CodeBlock, code_blocks},
    notes::{ExtractedNotes, extract_notes},
    splitter::RawSlide,
    yaml::Frontmatter,
};

/// One presentation slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub index: usize,
    /// Body markdown, notes removed, trimmed.
    pub content: String,
    pub notes: String,
    pub frontmatter: Frontmatter,
    /// The slide as written, including its separator and frontmatter.
    pub raw: String,
    /// Document lines a cursor can be on while inside this slide.
    pub lines: Range<usize>,
}

impl Slide {
    /// Text of the first heading in the content, if any.
    pub fn title(&self) -> Option<String> {
        let mut title: Option<String> = None;
        for event in Parser::new(&self.content) {
            match event {
                Event::Start(Tag::Heading { .. }) => title = Some(String::new()),
                Event::Text(text) | Event::Code(text) => {
                    if let Some(t) = title.as_mut() {
                        t.push_str(&text);
                    }
                }
                Event::End(TagEnd::Heading(_)) => break,
                _ => {}
            }
        }
        title.filter(|t| !t.trim().is_empty())
    }

    pub fn slots(&self) -> Vec<ContentSlot> {
        split_slots(&self.content, &self.frontmatter.layout())
    }

    pub fn code_blocks(&self) -> Vec<CodeBlock> {
        code_blocks(&self.content)
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }
}

/// A parsed presentation. Always holds at least one slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub global_config: DeckConfig,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Builds the deck from split slides: notes are pulled out of each body
    /// and slides are numbered in order.
    pub fn assemble(global: &Frontmatter, raw: Vec<RawSlide>, baseline: &DeckConfig) -> Self {
        let mut slides: Vec<Slide> = raw
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let ExtractedNotes { content, notes } = extract_notes(&raw.content);
                Slide {
                    index,
                    content: content.trim().to_string(),
                    notes,
                    frontmatter: raw.frontmatter,
                    raw: raw.raw,
                    lines: raw.lines,
                }
            })
            .collect();

        if slides.is_empty() {
            slides.push(Slide {
                index: 0,
                content: String::new(),
                notes: String::new(),
                frontmatter: Frontmatter::new(),
                raw: String::new(),
                lines: 0..0,
            });
        }

        Self {
            global_config: DeckConfig::from_frontmatter(global, baseline),
            slides,
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// The slide whose cursor range holds `line`; lines past the end belong
    /// to the last slide.
    pub fn slide_for_line(&self, line: usize) -> &Slide {
        let last = self.slides.len().saturating_sub(1);
        let index = self
            .slides
            .iter()
            .position(|s| s.lines.contains(&line))
            .unwrap_or(last);
        &self.slides[index]
    }

    /// Transition into `slide`: its own override, else the deck's.
    pub fn transition_for(&self, slide: &Slide) -> Transition {
        slide
            .frontmatter
            .transition()
            .unwrap_or(self.global_config.transition)
    }
}
