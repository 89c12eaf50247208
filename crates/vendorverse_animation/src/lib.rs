//! VendorVerse Animation Support
//!
//! Fixed-delay sequencing for UI transitions.
//!
//! # Features
//!
//! - **Timer queue**: host-clocked, grouped steps with cancellation
//! - **CSS transitions**: typed `transition` property values and easings

pub mod easing;
pub mod scheduler;
pub mod transition;

pub use easing::Easing;
pub use scheduler::{Due, TimerGroup, TimerId, TimerQueue};
pub use transition::{transition_list, CssTransition};
