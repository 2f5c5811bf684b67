use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

use super::code_meta::{CodeMeta, extract_code_fence_meta};

/// A fenced code block in a slide body, with its annotation if it had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Zero-based line of the opening fence.
    pub line: usize,
    pub language: Option<String>,
    pub code: String,
    pub meta: Option<CodeMeta>,
}

impl CodeBlock {
    /// Number of code lines, not counting a trailing newline.
    pub fn line_count(&self) -> usize {
        let n = self.code.split('\n').count();
        if n > 1 && self.code.ends_with('\n') {
            n - 1
        } else {
            n
        }
    }

    pub fn shows_line_numbers(&self) -> bool {
        self.meta.as_ref().is_some_and(|m| m.lines)
    }

    pub fn highlighted_lines(&self) -> Vec<u32> {
        self.meta
            .as_ref()
            .map(|m| m.resolved_highlights(self.line_count()))
            .unwrap_or_default()
    }

    pub fn steps(&self) -> Vec<Vec<u32>> {
        self.meta
            .as_ref()
            .map(|m| m.resolved_steps(self.line_count()))
            .unwrap_or_default()
    }
}

/// Finds the fenced code blocks in a markdown fragment.
///
/// Annotations are paired with blocks by the line of their opening fence, so
/// a block without an annotation never picks up a neighbour's.
pub fn code_blocks(markdown: &str) -> Vec<CodeBlock> {
    let extracted = extract_code_fence_meta(markdown);
    let text = extracted.cleaned.as_str();
    let mut metas = extracted.fences;

    let line_starts: Vec<usize> = std::iter::once(0)
        .chain(text.match_indices('\n').map(|(i, _)| i + 1))
        .collect();
    let line_of = |offset: usize| line_starts.partition_point(|&s| s <= offset) - 1;

    let mut out = Vec::new();
    let mut current: Option<CodeBlock> = None;

    for (event, range) in Parser::new(text).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let line = line_of(range.start);
                let meta = metas
                    .iter()
                    .position(|m| m.line == line)
                    .map(|i| metas.swap_remove(i).meta);
                current = Some(CodeBlock {
                    line,
                    language: info.split_whitespace().next().map(str::to_string),
                    code: String::new(),
                    meta,
                });
            }
            Event::Text(chunk) => {
                if let Some(block) = current.as_mut() {
                    block.code.push_str(&chunk);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = current.take() {
                    out.push(block);
                }
            }
            _ => {}
        }
    }

    if !metas.is_empty() {
        log::debug!("{} code annotations matched no fenced block", metas.len());
    }
    out
}
