//! Line-local facts shared by every scanner.
//!
//! Nothing in here looks at neighbouring lines: the splitter, the cursor
//! mapper and the boundary helpers all derive their decisions from the same
//! [`LineClass`], so they cannot disagree about what a separator is.

/// The slide separator token. A line is a separator when its trimmed text
/// is exactly this.
pub const SEPARATOR: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence delimiter. Backtick and tilde fences both toggle fence
    /// state; their kinds and lengths are not matched against each other.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }
}

/// How a line reads as flat YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YamlShape {
    /// Starts with `#`.
    Comment,
    /// `identifier: rest`, identifier drawn from `[A-Za-z0-9_-]`.
    KeyValue,
}

impl YamlShape {
    pub fn of(line: &str) -> Option<Self> {
        let t = line.trim();
        if t.starts_with('#') {
            return Some(Self::Comment);
        }
        let colon = t.find(':')?;
        if colon == 0 {
            return None;
        }
        let key = t[..colon].trim();
        let is_identifier = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        is_identifier.then_some(Self::KeyValue)
    }
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass {
    pub is_blank: bool,
    pub is_separator: bool,
    pub fence_sig: Option<FenceSig>,
    pub yaml: Option<YamlShape>,
}

/// Classifies individual deck lines.
pub struct DeckLineClassifier;

impl DeckLineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();
        LineClass {
            is_blank: trimmed.is_empty(),
            is_separator: trimmed == SEPARATOR,
            fence_sig: CodeFence::sig(trimmed),
            yaml: YamlShape::of(trimmed),
        }
    }
}

/// Returns true if the line is a bare separator.
pub fn is_separator(line: &str) -> bool {
    line.trim() == SEPARATOR
}
