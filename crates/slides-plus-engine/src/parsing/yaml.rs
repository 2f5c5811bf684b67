//! A reader for the flat, scalar-only YAML used in deck frontmatter.
//!
//! Supported: `key: value` lines, `#` comments, blank lines, quoted strings,
//! `true`/`false` and numbers. Anything else is skipped line by line; the
//! reader never fails.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A single frontmatter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl ScalarValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for ScalarValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A key → scalar mapping read from a frontmatter block, in file order.
///
/// A repeated key keeps its first position and takes the later value. Keys
/// are unconstrained: recognised slide keys have typed accessors
/// elsewhere, everything else is carried through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter {
    entries: IndexMap<String, ScalarValue>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ScalarValue> {
        self.entries.get(key)
    }

    /// The value under `key` if it is a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ScalarValue::as_str)
    }

    /// The value under `key` if it is a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ScalarValue::as_bool)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts a value, replacing any earlier value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ScalarValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses a flat YAML block into a [`Frontmatter`] mapping.
///
/// Later occurrences of a key overwrite earlier ones.
pub fn parse_scalar_yaml(block: &str) -> Frontmatter {
    let mut out = Frontmatter::new();

    for line in block.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            log::trace!("skipping frontmatter line without a key: {trimmed:?}");
            continue;
        }

        out.insert(key, coerce(value.trim()));
    }

    out
}

fn coerce(value: &str) -> ScalarValue {
    if let Some(inner) = strip_quotes(value) {
        return ScalarValue::String(inner.to_string());
    }
    match value {
        "true" => return ScalarValue::Bool(true),
        "false" => return ScalarValue::Bool(false),
        _ => {}
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => ScalarValue::Number(n),
        _ => ScalarValue::String(value.to_string()),
    }
}

fn strip_quotes(value: &str) -> Option<&str> {
    if value.len() < 2 {
        return None;
    }
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
}
