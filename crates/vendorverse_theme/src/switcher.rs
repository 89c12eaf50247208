//! Switcher controls: discovery and synchronization

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::id::ThemeId;
use vendorverse_core::ThemeDocument;

/// Switcher controls found in the document, for the host to attach
/// listeners to
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwitcherBindings {
    /// A single-choice switcher exists (listen for `change`)
    pub select: bool,
    /// Raw tags of the discrete buttons, in document order (listen for
    /// `click`)
    pub buttons: Vec<String>,
}

impl SwitcherBindings {
    pub fn is_empty(&self) -> bool {
        !self.select && self.buttons.is_empty()
    }
}

pub(crate) fn discover<D: ThemeDocument>(document: &D, config: &ThemeConfig) -> SwitcherBindings {
    SwitcherBindings {
        select: document.select_value(&config.switcher_id).is_some(),
        buttons: document.tagged_values(&config.button_attribute),
    }
}

/// Make every switcher control reflect `theme`.
///
/// The select is only written when its value differs, so hosts that echo
/// writes back as `change` events do not loop.
pub(crate) fn sync<D: ThemeDocument>(
    document: &mut D,
    config: &ThemeConfig,
    theme: ThemeId,
) -> Result<()> {
    if let Some(value) = document.select_value(&config.switcher_id) {
        if value != theme.id() {
            document.set_select_value(&config.switcher_id, theme.id())?;
        }
    }

    let tags = document.tagged_values(&config.button_attribute);
    for (index, tag) in tags.iter().enumerate() {
        document.set_tagged_class(
            &config.button_attribute,
            index,
            &config.active_class,
            tag == theme.id(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendorverse_core::MemoryDocument;

    #[test]
    fn select_written_only_on_change() {
        let config = ThemeConfig::default();
        let mut doc = MemoryDocument::new().with_select("theme-switcher", "dark");

        sync(&mut doc, &config, ThemeId::Dark).unwrap();
        assert_eq!(doc.select_writes(), 0);

        sync(&mut doc, &config, ThemeId::Blue).unwrap();
        assert_eq!(doc.select_writes(), 1);
        assert_eq!(doc.select_value("theme-switcher").as_deref(), Some("blue"));
    }

    #[test]
    fn exactly_matching_buttons_are_active() {
        let config = ThemeConfig::default();
        let mut doc = MemoryDocument::new()
            .with_tagged("data-theme-btn", "light")
            .with_tagged("data-theme-btn", "dark")
            .with_tagged("data-theme-btn", "neon");

        sync(&mut doc, &config, ThemeId::Dark).unwrap();
        let active: Vec<bool> = doc
            .tagged()
            .iter()
            .map(|el| el.classes.contains("active"))
            .collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn discover_reports_present_controls() {
        let config = ThemeConfig::default();
        assert!(discover(&MemoryDocument::new(), &config).is_empty());

        let doc = MemoryDocument::new()
            .with_select("theme-switcher", "light")
            .with_tagged("data-theme-btn", "blue");
        let bindings = discover(&doc, &config);
        assert!(bindings.select);
        assert_eq!(bindings.buttons, vec!["blue".to_string()]);
    }
}
