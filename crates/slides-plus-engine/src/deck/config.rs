use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parsing::yaml::Frontmatter;

/// How one slide replaces the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    #[default]
    Slide,
    Fade,
    SlideUp,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transition: {0:?}")]
pub struct UnknownTransition(pub String);

impl Transition {
    pub const ALL: [Transition; 4] = [Self::Slide, Self::Fade, Self::SlideUp, Self::None];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slide => "slide",
            Self::Fade => "fade",
            Self::SlideUp => "slide-up",
            Self::None => "none",
        }
    }
}

impl FromStr for Transition {
    type Err = UnknownTransition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTransition(s.to_string()))
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deck-wide presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckConfig {
    pub theme: String,
    pub transition: Transition,
    pub aspect_ratio: String,
    pub highlight_style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            theme: "academic".to_string(),
            transition: Transition::Slide,
            aspect_ratio: "16/9".to_string(),
            highlight_style: "github".to_string(),
            header: None,
            footer: None,
        }
    }
}

impl DeckConfig {
    /// Overlays the recognised global frontmatter keys onto `baseline`.
    ///
    /// Only string values are taken. A `transition` that names no known
    /// transition keeps the baseline's.
    pub fn from_frontmatter(frontmatter: &Frontmatter, baseline: &DeckConfig) -> Self {
        let string = |key: &str| frontmatter.get_str(key).map(str::to_string);

        let transition = match frontmatter.get_str("transition") {
            Some(name) => name.parse::<Transition>().unwrap_or_else(|e: UnknownTransition| {
                log::warn!("{e}; using {}", baseline.transition);
                baseline.transition
            }),
            None => baseline.transition,
        };

        Self {
            theme: string("theme").unwrap_or_else(|| baseline.theme.clone()),
            transition,
            aspect_ratio: string("aspectRatio").unwrap_or_else(|| baseline.aspect_ratio.clone()),
            highlight_style: string("highlightStyle")
                .unwrap_or_else(|| baseline.highlight_style.clone()),
            header: string("header").or_else(|| baseline.header.clone()),
            footer: string("footer").or_else(|| baseline.footer.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::yaml::parse_scalar_yaml;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_frontmatter_gives_baseline() {
        let config = DeckConfig::from_frontmatter(&Frontmatter::new(), &DeckConfig::default());
        assert_eq!(config, DeckConfig::default());
        assert_eq!(config.theme, "academic");
        assert_eq!(config.aspect_ratio, "16/9");
        assert_eq!(config.highlight_style, "github");
    }

    #[test]
    fn frontmatter_overrides_baseline() {
        let fm = parse_scalar_yaml(
            "theme: dark\ntransition: fade\naspectRatio: 4/3\nheader: Talk\nunknown: 1",
        );
        let config = DeckConfig::from_frontmatter(&fm, &DeckConfig::default());
        assert_eq!(config.theme, "dark");
        assert_eq!(config.transition, Transition::Fade);
        assert_eq!(config.aspect_ratio, "4/3");
        assert_eq!(config.header.as_deref(), Some("Talk"));
        assert_eq!(config.footer, None);
        assert_eq!(config.highlight_style, "github");
    }

    #[test]
    fn non_string_values_are_ignored() {
        let fm = parse_scalar_yaml("theme: 42\nheader: true");
        let config = DeckConfig::from_frontmatter(&fm, &DeckConfig::default());
        assert_eq!(config.theme, "academic");
        assert_eq!(config.header, None);
    }

    #[test]
    fn unknown_transition_keeps_baseline() {
        let baseline = DeckConfig {
            transition: Transition::None,
            ..DeckConfig::default()
        };
        let fm = parse_scalar_yaml("transition: spin");
        assert_eq!(
            DeckConfig::from_frontmatter(&fm, &baseline).transition,
            Transition::None
        );
    }

    #[rstest]
    #[case("slide", Transition::Slide)]
    #[case("fade", Transition::Fade)]
    #[case("slide-up", Transition::SlideUp)]
    #[case("none", Transition::None)]
    fn transition_names(#[case] name: &str, #[case] expected: Transition) {
        assert_eq!(name.parse::<Transition>(), Ok(expected));
        assert_eq!(expected.to_string(), name);
    }

    #[test]
    fn transition_parse_is_case_sensitive() {
        assert_eq!(
            "Fade".parse::<Transition>(),
            Err(UnknownTransition("Fade".to_string()))
        );
    }

    #[test]
    fn serializes_camel_case_without_absent_fields() {
        let json = serde_json::to_string(&DeckConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"theme":"academic","transition":"slide","aspectRatio":"16/9","highlightStyle":"github"}"#
        );
    }
}
