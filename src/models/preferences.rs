use serde::{Deserialize, Serialize};
use crate::models::domain::{Style, UserProfile};

/// Preferred style as supplied by the caller
///
/// Anything outside the style vocabulary is kept as `Unrecognized` and never
/// matches an item, so an unknown value empties the result instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StyleConstraint {
    Known(Style),
    Unrecognized(String),
}

impl StyleConstraint {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<Style>() {
            Ok(style) => StyleConstraint::Known(style),
            Err(_) => StyleConstraint::Unrecognized(raw.to_string()),
        }
    }

    #[inline]
    pub fn matches(&self, style: Style) -> bool {
        match self {
            StyleConstraint::Known(preferred) => *preferred == style,
            StyleConstraint::Unrecognized(_) => false,
        }
    }
}

impl From<Style> for StyleConstraint {
    fn from(style: Style) -> Self {
        StyleConstraint::Known(style)
    }
}

impl From<String> for StyleConstraint {
    fn from(raw: String) -> Self {
        StyleConstraint::parse(&raw)
    }
}

impl From<&str> for StyleConstraint {
    fn from(raw: &str) -> Self {
        StyleConstraint::parse(raw)
    }
}

impl From<StyleConstraint> for String {
    fn from(constraint: StyleConstraint) -> Self {
        match constraint {
            StyleConstraint::Known(style) => style.as_str().to_string(),
            StyleConstraint::Unrecognized(raw) => raw,
        }
    }
}

/// Per-request outfit constraints
///
/// An absent dimension imposes no restriction. A present but empty color list
/// allows no color at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleConstraint>,
}

impl PreferenceSet {
    /// Preferences that accept every item
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_style(mut self, style: impl Into<StyleConstraint>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.colors.is_none() && self.style.is_none()
    }

    /// Check a color against the allow-list (exact, case-sensitive match)
    #[inline]
    pub fn allows_color(&self, color: &str) -> bool {
        match &self.colors {
            Some(colors) => colors.iter().any(|allowed| allowed == color),
            None => true,
        }
    }

    #[inline]
    pub fn allows_style(&self, style: Style) -> bool {
        match &self.style {
            Some(constraint) => constraint.matches(style),
            None => true,
        }
    }

    /// Derive preferences from a stored profile
    ///
    /// Favorite colors become the allow-list when there are any, and the first
    /// listed style preference becomes the preferred style.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let colors = if profile.favorite_colors.is_empty() {
            None
        } else {
            Some(profile.favorite_colors.clone())
        };

        Self {
            colors,
            style: profile.style_preferences.first().copied().map(StyleConstraint::Known),
        }
    }
}
