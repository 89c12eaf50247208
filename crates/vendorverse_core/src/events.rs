//! Switcher control events
//!
//! Hosts translate their native DOM events into [`ControlEvent`]s so theme
//! logic never touches a concrete event type.

/// Native event names the switcher controls listen for
pub mod event_names {
    /// Fired by the single-choice switcher when its value changes
    pub const CHANGE: &str = "change";
    /// Fired by a discrete theme button when activated
    pub const CLICK: &str = "click";
    /// Fired once the document structure is parsed
    pub const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";
}

/// An event raised by a theme switcher control
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// The single-choice switcher now holds this value
    SelectChanged(String),
    /// A discrete button tagged with this value was activated
    ButtonActivated(String),
}

impl ControlEvent {
    /// The raw theme value carried by the event (not yet validated)
    pub fn value(&self) -> &str {
        match self {
            ControlEvent::SelectChanged(v) | ControlEvent::ButtonActivated(v) => v,
        }
    }

    /// Name of the native event that produces this control event
    pub fn native_name(&self) -> &'static str {
        match self {
            ControlEvent::SelectChanged(_) => event_names::CHANGE,
            ControlEvent::ButtonActivated(_) => event_names::CLICK,
        }
    }
}

/// Readiness of the document as reported by the host (`document.readyState`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Parse a `readyState` string. Unknown values count as ready.
    pub fn parse(s: &str) -> Self {
        match s {
            "loading" => ReadyState::Loading,
            "interactive" => ReadyState::Interactive,
            _ => ReadyState::Complete,
        }
    }

    /// Whether initialization must wait for `DOMContentLoaded`
    pub fn must_defer(self) -> bool {
        self == ReadyState::Loading
    }
}
