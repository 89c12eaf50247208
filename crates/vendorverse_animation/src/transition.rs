//! CSS transition descriptors
//!
//! Values for the inline `transition` property, e.g.
//! `background-color 300ms ease, color 300ms ease`.

use crate::easing::Easing;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One `<single-transition>`: property, duration and easing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CssTransition {
    pub property: String,
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
}

impl CssTransition {
    pub fn new(property: impl Into<String>, duration: Duration, easing: Easing) -> Self {
        Self {
            property: property.into(),
            duration_ms: duration.as_millis() as u64,
            easing,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl fmt::Display for CssTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}ms {}", self.property, self.duration_ms, self.easing)
    }
}

/// Render a comma-separated `transition` value. Empty input renders empty.
pub fn transition_list(transitions: &[CssTransition]) -> String {
    transitions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Longest duration in a list (how long the browser keeps animating)
pub fn longest(transitions: &[CssTransition]) -> Duration {
    transitions
        .iter()
        .map(CssTransition::duration)
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn renders_single_and_list() {
        let bg = CssTransition::new("background-color", ms(300), Easing::Ease);
        let color = CssTransition::new("color", ms(300), Easing::Ease);

        assert_eq!(bg.to_string(), "background-color 300ms ease");
        assert_eq!(
            transition_list(&[bg, color]),
            "background-color 300ms ease, color 300ms ease"
        );
        assert_eq!(transition_list(&[]), "");
    }

    #[test]
    fn longest_duration() {
        let list = [
            CssTransition::new("opacity", ms(200), Easing::Ease),
            CssTransition::new("color", ms(300), Easing::Linear),
        ];
        assert_eq!(longest(&list), ms(300));
        assert_eq!(longest(&[]), Duration::ZERO);
    }

    #[test]
    fn easing_defaults_when_omitted() {
        let t: CssTransition = toml::from_str("property = \"opacity\"\nduration_ms = 200").unwrap();
        assert_eq!(t.to_string(), "opacity 200ms ease");
    }
}
