//! Code-fence annotations: the `{…}` block after a fence's language tag.
//!
//! ```text
//! ```rust {lines,1-3|5|*}
//! ```
//!
//! Comma-separated tokens. `lines` turns on line numbers, a token holding `|`
//! is a sequence of highlight steps, anything else is a static highlight.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;

/// Widest range a single `a-b` spec expands to.
pub const MAX_RANGE_SPAN: u32 = 10_000;

/// A one-based line reference, or `*` for every line of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightLine {
    Line(u32),
    All,
}

impl Serialize for HighlightLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Line(n) => serializer.serialize_u32(*n),
            Self::All => serializer.serialize_str("*"),
        }
    }
}

/// Parsed annotation block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeMeta {
    pub lines: bool,
    pub highlights: Vec<HighlightLine>,
    pub steps: Vec<Vec<HighlightLine>>,
}

impl CodeMeta {
    /// Parses an annotation block, with or without its braces.
    pub fn parse(block: &str) -> Self {
        let block = block.trim();
        let inner = block.strip_prefix('{').unwrap_or(block);
        let inner = inner.strip_suffix('}').unwrap_or(inner);

        let mut meta = Self::default();
        for token in inner.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if token == "lines" {
                meta.lines = true;
            } else if token.contains('|') {
                meta.steps
                    .extend(token.split('|').map(|s| parse_line_spec(s.trim())));
            } else {
                meta.highlights.extend(parse_line_spec(token));
            }
        }
        meta
    }

    /// Static highlights as concrete line numbers, sorted and deduplicated.
    pub fn resolved_highlights(&self, line_count: usize) -> Vec<u32> {
        let mut out = resolve(&self.highlights, line_count);
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Steps with `*` expanded to `1..=line_count`.
    pub fn resolved_steps(&self, line_count: usize) -> Vec<Vec<u32>> {
        self.steps
            .iter()
            .map(|step| resolve(step, line_count))
            .collect()
    }
}

fn resolve(group: &[HighlightLine], line_count: usize) -> Vec<u32> {
    if group.contains(&HighlightLine::All) {
        let last = u32::try_from(line_count).unwrap_or(u32::MAX);
        return (1..=last).collect();
    }
    group
        .iter()
        .filter_map(|l| match l {
            HighlightLine::Line(n) => Some(*n),
            HighlightLine::All => None,
        })
        .collect()
}

/// Parses a single line spec: `*`, `N` or `A-B`.
///
/// Reversed ranges expand to nothing and wide ranges are capped at
/// [`MAX_RANGE_SPAN`] lines. Unrecognised specs yield an empty list.
pub fn parse_line_spec(spec: &str) -> Vec<HighlightLine> {
    let spec = spec.trim();
    if spec == "*" {
        return vec![HighlightLine::All];
    }

    if let Some((start, end)) = spec.split_once('-')
        && let (Ok(start), Ok(end)) = (start.parse::<u32>(), end.parse::<u32>())
    {
        if start > end {
            return vec![];
        }
        let capped = end.min(start.saturating_add(MAX_RANGE_SPAN - 1));
        if capped < end {
            log::debug!("line range {spec} capped at {capped}");
        }
        return (start..=capped).map(HighlightLine::Line).collect();
    }

    match spec.parse::<u32>() {
        Ok(n) => vec![HighlightLine::Line(n)],
        Err(_) => {
            log::trace!("ignoring line spec {spec:?}");
            vec![]
        }
    }
}

/// An annotation found on a fence opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceMeta {
    /// Zero-based line of the fence opener in the input text.
    pub line: usize,
    pub language: String,
    pub meta: CodeMeta,
}

/// Markdown with annotation blocks removed, and what was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFenceMeta {
    pub cleaned: String,
    pub fences: Vec<FenceMeta>,
}

fn fence_meta_regex() -> &'static Regex {
    static FENCE_META_REGEX: OnceLock<Regex> = OnceLock::new();
    FENCE_META_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^(`{3,}|~{3,})([A-Za-z0-9_+-]*)[ \t]*(\{[^}\n]*\})[ \t]*$")
            .expect("Invalid fence meta regex")
    })
}

/// Strips `{…}` annotations from fence openers so a markdown renderer sees a
/// plain language tag. Line numbers are unchanged by the rewrite.
pub fn extract_code_fence_meta(markdown: &str) -> CodeFenceMeta {
    let mut cleaned = String::with_capacity(markdown.len());
    let mut fences = Vec::new();
    let mut last = 0;
    let mut line = 0;

    for caps in fence_meta_regex().captures_iter(markdown) {
        let (Some(whole), Some(fence), Some(block)) = (caps.get(0), caps.get(1), caps.get(3))
        else {
            continue;
        };
        let language = caps.get(2).map_or("", |m| m.as_str());

        let skipped = &markdown[last..whole.start()];
        line += skipped.matches('\n').count();
        cleaned.push_str(skipped);
        cleaned.push_str(fence.as_str());
        cleaned.push_str(language);

        fences.push(FenceMeta {
            line,
            language: language.to_string(),
            meta: CodeMeta::parse(block.as_str()),
        });
        last = whole.end();
    }

    cleaned.push_str(&markdown[last..]);
    CodeFenceMeta { cleaned, fences }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::HighlightLine::{All, Line};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn lines(ns: impl IntoIterator<Item = u32>) -> Vec<HighlightLine> {
        ns.into_iter().map(Line).collect()
    }

    #[test]
    fn lines_and_steps() {
        let meta = CodeMeta::parse("{lines,1-3|5-7|*}");
        assert!(meta.lines);
        assert!(meta.highlights.is_empty());
        assert_eq!(
            meta.steps,
            vec![lines(1..=3), lines(5..=7), vec![All]]
        );
        assert_eq!(
            meta.resolved_steps(10),
            vec![vec![1, 2, 3], vec![5, 6, 7], (1..=10).collect::<Vec<_>>()]
        );
    }

    #[test]
    fn static_highlights_accumulate() {
        let meta = CodeMeta::parse("{1,3-4, 2}");
        assert!(!meta.lines);
        assert_eq!(meta.highlights, lines([1, 3, 4, 2]));
        assert_eq!(meta.resolved_highlights(10), vec![1, 2, 3, 4]);
        assert!(meta.steps.is_empty());
    }

    #[test]
    fn static_wildcard_covers_every_line() {
        let meta = CodeMeta::parse("{*}");
        assert_eq!(meta.resolved_highlights(3), vec![1, 2, 3]);
    }

    #[test]
    fn step_tokens_accumulate_in_order() {
        let meta = CodeMeta::parse("{1|2,3|4}");
        assert_eq!(
            meta.steps,
            vec![lines([1]), lines([2]), lines([3]), lines([4])]
        );
        assert!(meta.highlights.is_empty());
    }

    #[test]
    fn steps_and_static_highlights_mix() {
        let meta = CodeMeta::parse("{2,1|3,5-6}");
        assert_eq!(meta.highlights, lines([2, 5, 6]));
        assert_eq!(meta.resolved_steps(8), vec![vec![1], vec![3]]);
    }

    #[test]
    fn empty_block() {
        assert_eq!(CodeMeta::parse("{}"), CodeMeta::default());
        assert_eq!(CodeMeta::parse("{ , ,}"), CodeMeta::default());
    }

    #[rstest]
    #[case("*", vec![All])]
    #[case("7", lines([7]))]
    #[case("2-4", lines([2, 3, 4]))]
    #[case("4-4", lines([4]))]
    #[case("5-2", vec![])]
    #[case("abc", vec![])]
    #[case("1-x", vec![])]
    #[case("", vec![])]
    fn line_specs(#[case] spec: &str, #[case] expected: Vec<HighlightLine>) {
        assert_eq!(parse_line_spec(spec), expected);
    }

    #[test]
    fn wide_ranges_are_capped() {
        let out = parse_line_spec("1-4000000000");
        assert_eq!(out.len(), MAX_RANGE_SPAN as usize);
        assert_eq!(out.last(), Some(&Line(MAX_RANGE_SPAN)));
    }

    #[test]
    fn wildcard_serializes_as_star() {
        let meta = CodeMeta::parse("{lines,1|*}");
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(
            json,
            r#"{"lines":true,"highlights":[],"steps":[[1],["*"]]}"#
        );
    }

    #[test]
    fn strips_annotations_and_records_lines() {
        let md = "# Code\n\n```rust {lines,2}\nfn main() {}\n```\n\n~~~ {1|2}\na\nb\n~~~";
        let out = extract_code_fence_meta(md);
        assert_eq!(
            out.cleaned,
            "# Code\n\n```rust\nfn main() {}\n```\n\n~~~\na\nb\n~~~"
        );
        assert_eq!(out.fences.len(), 2);
        assert_eq!(out.fences[0].line, 2);
        assert_eq!(out.fences[0].language, "rust");
        assert!(out.fences[0].meta.lines);
        assert_eq!(out.fences[1].line, 6);
        assert_eq!(out.fences[1].language, "");
        assert_eq!(out.fences[1].meta.steps, vec![lines([1]), lines([2])]);
    }

    #[test]
    fn annotation_must_end_the_line() {
        let md = "```js {1} trailing\ncode\n```";
        let out = extract_code_fence_meta(md);
        assert!(out.fences.is_empty());
        assert_eq!(out.cleaned, md);
    }

    #[test]
    fn annotation_does_not_cross_lines() {
        let md = "```\n{1}\n```";
        let out = extract_code_fence_meta(md);
        assert!(out.fences.is_empty());
    }

    #[test]
    fn language_may_contain_symbols() {
        let out = extract_code_fence_meta("```c++ {1}\nint x;\n```");
        assert_eq!(out.fences[0].language, "c++");
    }
}
