use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use super::style::Layout;

pub const DEFAULT_SLOT: &str = "default";

/// A named region of slide content, e.g. the `right` column of `two-cols`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSlot {
    pub name: String,
    pub content: String,
}

fn slot_marker_regex() -> &'static Regex {
    static SLOT_MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    SLOT_MARKER_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^::([A-Za-z0-9_]+)::[ \t]*$").expect("Invalid slot marker regex")
    })
}

/// Splits content at `::name::` marker lines.
///
/// Text before the first marker belongs to [`DEFAULT_SLOT`]. Slots are
/// trimmed and blank ones dropped. Layouts without slots, and content that
/// yields no non-blank slot, come back as a single default slot.
pub fn split_slots(content: &str, layout: &Layout) -> Vec<ContentSlot> {
    let whole = || {
        vec![ContentSlot {
            name: DEFAULT_SLOT.to_string(),
            content: content.trim().to_string(),
        }]
    };
    if !layout.has_slots() {
        return whole();
    }

    let mut slots = Vec::new();
    let mut name = DEFAULT_SLOT;
    let mut start = 0;

    let mut push = |name: &str, text: &str| {
        let text = text.trim();
        if !text.is_empty() {
            slots.push(ContentSlot {
                name: name.to_string(),
                content: text.to_string(),
            });
        }
    };

    for caps in slot_marker_regex().captures_iter(content) {
        let (Some(marker), Some(next)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push(name, &content[start..marker.start()]);
        name = next.as_str();
        start = marker.end();
    }
    push(name, &content[start..]);

    if slots.is_empty() { whole() } else { slots }
}
