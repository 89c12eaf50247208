//! Theme manager configuration
//!
//! Every DOM hook, the storage key and the transition timings live here so a
//! page can rename its elements without touching the manager. All fields
//! have defaults; an empty TOML document yields the stock setup.

use crate::error::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use vendorverse_animation::transition::longest;
use vendorverse_animation::{CssTransition, Easing};
use vendorverse_core::ElementRef;

/// Element that carries the theme attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeTarget {
    /// `<html>`
    #[default]
    Root,
    /// `<body>`
    Body,
}

impl ThemeTarget {
    pub fn element(self) -> ElementRef<'static> {
        match self {
            ThemeTarget::Root => ElementRef::Root,
            ThemeTarget::Body => ElementRef::Body,
        }
    }
}

/// Top-level theme configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Local-storage key holding the preference
    pub storage_key: String,
    /// Attribute written on the target (read by CSS)
    pub theme_attribute: String,
    pub target: ThemeTarget,
    /// Id of the optional single-choice switcher
    pub switcher_id: String,
    /// Attribute tagging discrete theme buttons with their theme id
    pub button_attribute: String,
    /// Class marking the button of the active theme
    pub active_class: String,
    /// Id of the optional logo container
    pub logo_id: String,
    pub timing: TransitionTiming,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "vendorverse_theme".to_string(),
            theme_attribute: "data-theme".to_string(),
            target: ThemeTarget::Root,
            switcher_id: "theme-switcher".to_string(),
            button_attribute: "data-theme-btn".to_string(),
            active_class: "active".to_string(),
            logo_id: "dynamic-logo".to_string(),
            timing: TransitionTiming::default(),
        }
    }
}

/// Delays and CSS transitions of an animated theme switch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTiming {
    /// Fade-out time before the new theme is committed
    pub commit_delay_ms: u64,
    /// Delay after commit before the logo fades back in
    pub fade_in_delay_ms: u64,
    /// Delay after commit before transition styling is cleared
    pub settle_delay_ms: u64,
    /// `transition` applied to the theme target while switching
    pub target_transitions: Vec<CssTransition>,
    /// `transition` applied to the logo container while switching
    pub logo_transitions: Vec<CssTransition>,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        let ms = Duration::from_millis;
        Self {
            commit_delay_ms: 100,
            fade_in_delay_ms: 50,
            settle_delay_ms: 300,
            target_transitions: vec![
                CssTransition::new("background-color", ms(300), Easing::Ease),
                CssTransition::new("color", ms(300), Easing::Ease),
            ],
            logo_transitions: vec![CssTransition::new("opacity", ms(200), Easing::Ease)],
        }
    }
}

impl TransitionTiming {
    pub fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }

    pub fn fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.fade_in_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Time from request until the transition is fully settled
    pub fn total(&self) -> Duration {
        self.commit_delay() + self.settle_delay()
    }
}

impl ThemeConfig {
    /// Parse from TOML and validate
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: ThemeConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject configs the manager cannot honor
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("button_attribute", &self.button_attribute),
            ("active_class", &self.active_class),
        ] {
            if value.trim().is_empty() {
                return Err(ThemeError::InvalidConfig(format!("`{name}` must not be empty")));
            }
        }

        // Clearing styles mid-fade would snap the logo to full opacity.
        let t = &self.timing;
        if t.fade_in_delay() + longest(&t.logo_transitions) > t.settle_delay() {
            return Err(ThemeError::InvalidConfig(format!(
                "settle_delay_ms ({}) ends before the logo fade-in completes",
                t.settle_delay_ms
            )));
        }
        Ok(())
    }
}
