//! The deck line state machine.
//!
//! [`TaggedLines`] walks normalized text and tags every line with the role it
//! plays in the deck. The splitter, the cursor mapper and the boundary
//! helpers are all folds over this one iterator.
//!
//! ## States
//!
//! ```text
//! BeforeContent --open delimiter--> InGlobalFrontmatter --close--> BeforeContent
//! BeforeContent --content--> InBody
//! InBody --fence--> InFence --fence--> InBody
//! InBody --separator + frontmatter probe--> InSlideFrontmatter --close--> InBody
//! ```
//!
//! A separator can only be produced from `BeforeContent` or `InBody`; inside
//! a fence every line is code.

use super::{
    classify::{DeckLineClassifier, LineClass, YamlShape, is_separator},
    text::{is_blank, split_lines},
};

/// The role of one line in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    /// Blank line before the first content. Belongs to no slide body.
    Leading,
    /// Opening or closing `---` of the global frontmatter.
    GlobalDelimiter,
    /// Line between the global frontmatter delimiters.
    GlobalFrontmatter,
    /// Slide boundary.
    Separator,
    /// Closing `---` of a per-slide frontmatter block.
    SlideFrontmatterDelimiter,
    /// Line inside a per-slide frontmatter block.
    SlideFrontmatter,
    /// Line that opens or closes a fenced code block.
    FenceDelimiter,
    /// Line inside a fenced code block.
    Code,
    /// Ordinary slide text.
    Text,
}

impl LineTag {
    /// Whether the line is part of a slide's body content.
    pub fn is_body(self) -> bool {
        matches!(self, Self::FenceDelimiter | Self::Code | Self::Text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedLine<'a> {
    /// Zero-based line number.
    pub number: usize,
    pub text: &'a str,
    pub tag: LineTag,
}

impl TaggedLine<'_> {
    /// Body line with non-whitespace text. Only these keep a slide alive.
    pub fn is_content(&self) -> bool {
        self.tag.is_body() && !is_blank(self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeContent,
    InGlobalFrontmatter { close: usize },
    InBody,
    InSlideFrontmatter { close: usize },
    InFence,
}

/// Iterator over the tagged lines of a deck.
pub struct TaggedLines<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    state: ScanState,
    global_open: Option<(usize, usize)>,
    classifier: DeckLineClassifier,
}

impl<'a> TaggedLines<'a> {
    /// Scans a whole document, recognising a leading global frontmatter block.
    pub fn document(text: &'a str) -> Self {
        let lines = split_lines(text);
        let global_open = probe_global_frontmatter(&lines);
        Self::with_lines(lines, global_open)
    }

    /// Scans text that has already had its global frontmatter removed.
    pub fn body(text: &'a str) -> Self {
        Self::with_lines(split_lines(text), None)
    }

    fn with_lines(lines: Vec<&'a str>, global_open: Option<(usize, usize)>) -> Self {
        Self {
            lines,
            pos: 0,
            state: ScanState::BeforeContent,
            global_open,
            classifier: DeckLineClassifier,
        }
    }

    /// Total number of lines in the scanned text.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn tag(&mut self, number: usize, class: LineClass) -> LineTag {
        match self.state {
            ScanState::BeforeContent => {
                if let Some((open, close)) = self.global_open
                    && number == open
                {
                    self.state = ScanState::InGlobalFrontmatter { close };
                    LineTag::GlobalDelimiter
                } else if class.is_blank {
                    LineTag::Leading
                } else {
                    self.tag_body(number, class)
                }
            }
            ScanState::InGlobalFrontmatter { close } => {
                if number == close {
                    self.state = ScanState::BeforeContent;
                    LineTag::GlobalDelimiter
                } else {
                    LineTag::GlobalFrontmatter
                }
            }
            ScanState::InSlideFrontmatter { close } => {
                if number == close {
                    self.state = ScanState::InBody;
                    LineTag::SlideFrontmatterDelimiter
                } else {
                    LineTag::SlideFrontmatter
                }
            }
            ScanState::InFence => {
                if class.fence_sig.is_some() {
                    self.state = ScanState::InBody;
                    LineTag::FenceDelimiter
                } else {
                    LineTag::Code
                }
            }
            ScanState::InBody => self.tag_body(number, class),
        }
    }

    fn tag_body(&mut self, number: usize, class: LineClass) -> LineTag {
        if class.fence_sig.is_some() {
            self.state = ScanState::InFence;
            return LineTag::FenceDelimiter;
        }
        if class.is_separator {
            self.state = match probe_slide_frontmatter(&self.lines, number + 1) {
                Some(close) => ScanState::InSlideFrontmatter { close },
                None => ScanState::InBody,
            };
            return LineTag::Separator;
        }
        self.state = ScanState::InBody;
        LineTag::Text
    }
}

impl<'a> Iterator for TaggedLines<'a> {
    type Item = TaggedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = *self.lines.get(self.pos)?;
        let number = self.pos;
        self.pos += 1;

        let class = self.classifier.classify(text);
        let tag = self.tag(number, class);
        Some(TaggedLine { number, text, tag })
    }
}

/// Locates a leading global frontmatter block.
///
/// Leading blank lines are skipped; the first non-blank line must be a
/// separator and a later separator must close it. Returns the line numbers
/// of the opening and closing delimiters. An unclosed block is not
/// frontmatter.
pub fn probe_global_frontmatter(lines: &[&str]) -> Option<(usize, usize)> {
    let open = lines.iter().position(|l| !is_blank(l))?;
    if !is_separator(lines[open]) {
        return None;
    }
    match lines[open + 1..].iter().position(|l| is_separator(l)) {
        Some(offset) => Some((open, open + 1 + offset)),
        None => {
            log::debug!("global frontmatter opened on line {open} is never closed; treating as content");
            None
        }
    }
}

/// Probes for a per-slide frontmatter block starting at line `start` (the
/// line after a separator).
///
/// Blank and comment lines may appear anywhere in the block; at least one
/// `key: value` line is required. Returns the line number of the closing
/// separator, or `None` if a disqualifying line or the end of input comes
/// first.
pub fn probe_slide_frontmatter(lines: &[&str], start: usize) -> Option<usize> {
    let classifier = DeckLineClassifier;
    let mut saw_pair = false;

    for (number, line) in lines.iter().enumerate().skip(start) {
        let class = classifier.classify(line);
        if class.is_separator {
            return saw_pair.then_some(number);
        }
        if class.is_blank {
            continue;
        }
        match class.yaml {
            Some(YamlShape::KeyValue) => saw_pair = true,
            Some(YamlShape::Comment) => {}
            None => return None,
        }
    }

    None
}
