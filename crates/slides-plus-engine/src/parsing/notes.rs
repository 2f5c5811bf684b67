use regex::Regex;
use std::sync::OnceLock;

/// Slide body with speaker notes removed, plus the collected notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedNotes {
    pub content: String,
    /// Note blocks in document order, joined by a blank line.
    pub notes: String,
}

fn note_regex() -> &'static Regex {
    // Non-greedy so adjacent comments stay separate notes.
    static NOTE_REGEX: OnceLock<Regex> = OnceLock::new();
    NOTE_REGEX.get_or_init(|| Regex::new(r"(?s)<!--\s*(.*?)\s*-->").expect("Invalid note regex"))
}

/// Removes every `<!-- … -->` span from a slide body and collects the inner
/// text as speaker notes.
pub fn extract_notes(body: &str) -> ExtractedNotes {
    let re = note_regex();
    let notes: Vec<&str> = re
        .captures_iter(body)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .collect();

    if notes.is_empty() {
        return ExtractedNotes {
            content: body.to_string(),
            notes: String::new(),
        };
    }

    ExtractedNotes {
        content: re.replace_all(body, "").into_owned(),
        notes: notes.join("\n\n"),
    }
}
