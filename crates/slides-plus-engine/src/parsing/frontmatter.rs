use super::{
    scan::probe_global_frontmatter,
    text::{normalize, split_lines},
    yaml::{Frontmatter, ScalarValue, parse_scalar_yaml},
};

/// The document-level configuration block and the text that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalFrontmatter {
    pub frontmatter: Frontmatter,
    /// Everything after the closing delimiter line, or the whole normalized
    /// text when there is no frontmatter.
    pub body: String,
}

/// Detects and strips a leading `---` … `---` block.
///
/// Missing or unclosed blocks yield an empty mapping and the text unchanged.
pub fn extract_frontmatter(text: &str) -> GlobalFrontmatter {
    let text = normalize(text);
    match split_frontmatter(&text) {
        Some((frontmatter, body)) => GlobalFrontmatter {
            frontmatter,
            body: body.to_string(),
        },
        None => GlobalFrontmatter {
            frontmatter: Frontmatter::new(),
            body: text.into_owned(),
        },
    }
}

/// Splits normalized text into its frontmatter mapping and body.
pub(crate) fn split_frontmatter(text: &str) -> Option<(Frontmatter, &str)> {
    let lines = split_lines(text);
    let (open, close) = probe_global_frontmatter(&lines)?;

    let block = lines[open + 1..close].join("\n");
    let body_start: usize = lines[..=close].iter().map(|l| l.len() + 1).sum();
    let body = text.get(body_start..).unwrap_or_default();

    Some((parse_scalar_yaml(&block), body))
}

/// Whether the document opts in to slide rendering with `slides: true`.
///
/// The string `"true"` is accepted as well as the boolean.
pub fn is_slides_file(text: &str) -> bool {
    let text = normalize(text);
    let Some((frontmatter, _)) = split_frontmatter(&text) else {
        return false;
    };
    match frontmatter.get("slides") {
        Some(ScalarValue::Bool(b)) => *b,
        Some(ScalarValue::String(s)) => s == "true",
        _ => false,
    }
}
