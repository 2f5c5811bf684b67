use std::ops::Range;

use super::{
    scan::{LineTag, TaggedLines},
    yaml::{Frontmatter, parse_scalar_yaml},
};

/// One slide as cut out of the document, before notes are extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSlide {
    pub frontmatter: Frontmatter,
    /// Body lines joined by `\n`, frontmatter excluded.
    pub content: String,
    /// The separator, frontmatter and body lines as written.
    pub raw: String,
    /// Lines a cursor can sit on and be inside this slide.
    pub lines: Range<usize>,
}

/// Splits post-frontmatter body text into raw slides.
pub fn split_slides(body: &str) -> Vec<RawSlide> {
    split_tagged(TaggedLines::body(body))
}

/// Folds tagged lines into slides.
///
/// A separator closes the slide being accumulated. Slides with a blank body
/// are dropped unless nothing has been emitted yet, so the result is never
/// empty; a dropped slide's lines are absorbed by the slide before it.
pub(crate) fn split_tagged(lines: TaggedLines<'_>) -> Vec<RawSlide> {
    let line_count = lines.line_count();
    let mut slides = Vec::new();
    let mut current = SlideBuilder::starting_at(0);

    for line in lines {
        match line.tag {
            LineTag::Leading | LineTag::GlobalDelimiter | LineTag::GlobalFrontmatter => {}
            LineTag::Separator => {
                let next = SlideBuilder::starting_at(line.number + 1).with_raw(line.text);
                let done = std::mem::replace(&mut current, next);
                done.finish(line.number + 1, &mut slides);
            }
            LineTag::SlideFrontmatter => {
                current.raw.push(line.text);
                current.frontmatter.push(line.text);
            }
            LineTag::SlideFrontmatterDelimiter => current.raw.push(line.text),
            LineTag::FenceDelimiter | LineTag::Code | LineTag::Text => {
                current.raw.push(line.text);
                current.content.push(line.text);
            }
        }
    }

    current.finish(line_count, &mut slides);
    slides
}

struct SlideBuilder<'a> {
    start: usize,
    frontmatter: Vec<&'a str>,
    content: Vec<&'a str>,
    raw: Vec<&'a str>,
}

impl<'a> SlideBuilder<'a> {
    fn starting_at(start: usize) -> Self {
        Self {
            start,
            frontmatter: vec![],
            content: vec![],
            raw: vec![],
        }
    }

    fn with_raw(mut self, line: &'a str) -> Self {
        self.raw.push(line);
        self
    }

    fn finish(self, end: usize, out: &mut Vec<RawSlide>) {
        let content = self.content.join("\n");

        if content.trim().is_empty()
            && let Some(prev) = out.last_mut()
        {
            prev.lines.end = end;
            log::debug!(
                "dropping empty slide at lines {}..{end}; merged into slide {}",
                self.start,
                out.len() - 1
            );
            return;
        }

        out.push(RawSlide {
            frontmatter: parse_scalar_yaml(&self.frontmatter.join("\n")),
            content,
            raw: self.raw.join("\n"),
            lines: self.start..end,
        });
    }
}
