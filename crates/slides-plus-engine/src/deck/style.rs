//! Typed views over the per-slide frontmatter keys the renderer understands.

use serde::Serialize;

use super::config::Transition;
use crate::parsing::yaml::{Frontmatter, ScalarValue};

/// Slide layout named by the `layout` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Layout {
    #[default]
    Default,
    Cover,
    Center,
    TwoCols,
    ImageRight,
    ImageLeft,
    Section,
    Quote,
    Full,
    /// A theme-provided layout this crate knows nothing about.
    Custom(String),
}

impl Layout {
    const BUILT_IN: [Layout; 9] = [
        Self::Default,
        Self::Cover,
        Self::Center,
        Self::TwoCols,
        Self::ImageRight,
        Self::ImageLeft,
        Self::Section,
        Self::Quote,
        Self::Full,
    ];

    /// Never fails: unknown names become [`Layout::Custom`], blank ones
    /// [`Layout::Default`].
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return Self::Default;
        }
        Self::BUILT_IN
            .into_iter()
            .find(|l| l.as_str() == name)
            .unwrap_or_else(|| Self::Custom(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Cover => "cover",
            Self::Center => "center",
            Self::TwoCols => "two-cols",
            Self::ImageRight => "image-right",
            Self::ImageLeft => "image-left",
            Self::Section => "section",
            Self::Quote => "quote",
            Self::Full => "full",
            Self::Custom(name) => name,
        }
    }

    /// Whether `::name::` markers split content into slots for this layout.
    pub fn has_slots(&self) -> bool {
        matches!(self, Self::TwoCols | Self::ImageRight | Self::ImageLeft)
    }

    pub fn css_class(&self) -> String {
        format!("sp-layout-{}", self.as_str())
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.as_str().to_string()
    }
}

/// A slide background: an image to load or a raw CSS value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Background {
    Image(String),
    Css(String),
}

impl Background {
    /// Values starting with `http`, `/` or `./` are images, anything else is
    /// CSS. Blank values are no background.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let is_image = ["http", "/", "./"].iter().any(|p| value.starts_with(p));
        Some(if is_image {
            Self::Image(value.to_string())
        } else {
            Self::Css(value.to_string())
        })
    }
}

impl Frontmatter {
    pub fn layout(&self) -> Layout {
        self.get_str("layout").map(Layout::parse).unwrap_or_default()
    }

    pub fn background(&self) -> Option<Background> {
        self.get_str("background").and_then(Background::parse)
    }

    pub fn image(&self) -> Option<&str> {
        self.get_str("image")
    }

    /// Whether list items reveal one at a time.
    pub fn fragments(&self) -> bool {
        self.get_bool("fragments").unwrap_or(false)
    }

    pub fn class(&self) -> Option<&str> {
        self.get_str("class")
    }

    /// Per-slide transition override. Unknown names are ignored.
    pub fn transition(&self) -> Option<Transition> {
        self.get_str("transition")?.parse().ok()
    }

    /// Column weights from `cols`, e.g. `"2 1"` or `"1 1 1"`.
    ///
    /// A lone number is accepted as a single weight. Any non-positive or
    /// unparsable weight makes the whole value unusable.
    pub fn column_ratio(&self) -> Option<Vec<f64>> {
        let weights: Vec<f64> = match self.get("cols")? {
            ScalarValue::Number(n) => vec![*n],
            ScalarValue::String(s) => s
                .split_whitespace()
                .map(|w| w.parse::<f64>().ok())
                .collect::<Option<_>>()?,
            ScalarValue::Bool(_) => return None,
        };

        let usable = !weights.is_empty() && weights.iter().all(|w| w.is_finite() && *w > 0.0);
        usable.then_some(weights)
    }

    pub fn custom_css(&self) -> Option<&str> {
        self.get_str("custom-css")
    }
}
