//! VendorVerse Web
//!
//! Browser host for `vendorverse_theme`: a `localStorage` preference store, a
//! live-DOM [`ThemeDocument`](vendorverse_core::ThemeDocument), switcher
//! listeners, a `setTimeout` driver for animated switches, and the
//! `applyTheme` / `getCurrentTheme` / `toggleTheme` globals.
//!
//! Everything that touches the browser is compiled on `wasm32` only; the
//! console logging bridge and the bootstrap helpers are portable.
//!
//! A page may override the theme config with a TOML block:
//!
//! ```html
//! <script type="application/toml" id="vendorverse-theme-config">
//! target = "body"
//! </script>
//! ```

pub mod bootstrap;
pub mod console;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{apply_theme, get_current_theme, toggle_theme, LocalStore, WebDocument};
