//! Theme identifiers

use crate::error::UnknownTheme;
use crate::logo;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The closed set of storefront themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Light,
    Dark,
    Blue,
}

impl ThemeId {
    /// Stable id used for the `data-theme` attribute and storage.
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Blue => "blue",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Blue => "Blue",
        }
    }

    /// Full theme list, in switcher order.
    pub fn all() -> &'static [ThemeId] {
        const THEMES: [ThemeId; 3] = [ThemeId::Light, ThemeId::Dark, ThemeId::Blue];
        &THEMES
    }

    /// Parse `value`, falling back to the default theme for anything
    /// outside the set.
    pub fn normalize(value: &str) -> ThemeId {
        value.parse().unwrap_or_default()
    }

    /// Light/dark toggle target. `Blue` goes to `Light`.
    pub fn toggled(self) -> ThemeId {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
            Self::Blue => Self::Light,
        }
    }

    /// Inline SVG logo for this theme.
    pub fn logo(self) -> &'static str {
        logo::logo_svg(self)
    }
}

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::all()
            .iter()
            .copied()
            .find(|t| t.id() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_ids_only() {
        assert_eq!("dark".parse::<ThemeId>(), Ok(ThemeId::Dark));
        assert_eq!("blue".parse::<ThemeId>(), Ok(ThemeId::Blue));
        assert_eq!(
            "Dark".parse::<ThemeId>(),
            Err(UnknownTheme("Dark".to_string()))
        );
        assert!(" light".parse::<ThemeId>().is_err());
    }

    #[test]
    fn normalize_falls_back_to_light() {
        for bad in ["", "sepia", "DARK", "null", "light "] {
            assert_eq!(ThemeId::normalize(bad), ThemeId::Light, "input {bad:?}");
        }
        assert_eq!(ThemeId::normalize("blue"), ThemeId::Blue);
    }

    #[test]
    fn toggle_only_flips_light_and_dark() {
        assert_eq!(ThemeId::Light.toggled(), ThemeId::Dark);
        assert_eq!(ThemeId::Dark.toggled(), ThemeId::Light);
        assert_eq!(ThemeId::Blue.toggled(), ThemeId::Light);
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        assert_eq!(serde_json::to_string(&ThemeId::Blue).unwrap(), "\"blue\"");
        let t: ThemeId = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(t, ThemeId::Dark);
    }

    #[test]
    fn ids_round_trip_through_display() {
        for theme in ThemeId::all() {
            assert_eq!(ThemeId::normalize(&theme.to_string()), *theme);
        }
    }
}
