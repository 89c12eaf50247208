//! VendorVerse Theme System
//!
//! Theme switching for the storefront: a `data-theme` attribute for CSS to
//! key palettes on, a matching inline logo, a persisted preference, and
//! switcher controls kept in sync.
//!
//! # Overview
//!
//! - **Closed theme set**: [`ThemeId`] is `light`, `dark` or `blue`; anything
//!   else is coerced to `light`
//! - **Logo variants**: one SVG per theme, mapped exhaustively
//! - **Animated switching**: logo fade-out, commit, fade-in, settle; a newer
//!   request cancels an in-flight one
//! - **Injected host**: storage and document are traits from
//!   `vendorverse_core`, so the manager runs headless
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use vendorverse_core::{MemoryDocument, MemoryStore};
//! use vendorverse_theme::{ThemeId, ThemeManager};
//!
//! let doc = MemoryDocument::new().with_element("dynamic-logo");
//! let mut themes = ThemeManager::new(MemoryStore::new(), doc);
//!
//! themes.initialize(Duration::ZERO);
//! assert_eq!(themes.current_theme(), ThemeId::Light);
//!
//! themes.apply_theme("dark", true, Duration::ZERO);
//! themes.tick(Duration::from_millis(400));
//! assert_eq!(themes.current_theme(), ThemeId::Dark);
//! ```

pub mod config;
pub mod error;
pub mod id;
pub mod logo;
pub mod state;
pub mod switcher;
pub mod transition;

pub use config::{ThemeConfig, ThemeTarget, TransitionTiming};
pub use error::{Result, ThemeError, UnknownTheme};
pub use id::ThemeId;
pub use state::ThemeManager;
pub use switcher::SwitcherBindings;
pub use transition::{ActiveTransition, TransitionEvent, TransitionPhase, TransitionToken};
