//! VendorVerse Core Runtime
//!
//! Foundational pieces shared by the storefront's client-side crates:
//!
//! - **Host seams**: [`PreferenceStore`] and [`ThemeDocument`] abstract
//!   client-local storage and the document, so UI logic can run headless
//! - **Control events**: host-neutral switcher events ([`ControlEvent`])
//! - **State machines**: small typed FSMs for timed UI sequences
//! - **Memory host**: in-memory store and document for tests and embedders
//!
//! # Example
//!
//! ```rust
//! use vendorverse_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Door { Open, Closed }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Push { Open, Close }
//!
//! let mut door = StateMachine::builder(Door::Closed)
//!     .on(Door::Closed, Push::Open, Door::Open)
//!     .on(Door::Open, Push::Close, Door::Closed)
//!     .build();
//!
//! assert_eq!(door.send(Push::Open), Door::Open);
//! ```

pub mod error;
pub mod events;
pub mod fsm;
pub mod host;
pub mod memory;

pub use error::{HostError, StorageError};
pub use events::{ControlEvent, ReadyState};
pub use fsm::{StateMachine, Transition};
pub use host::{ElementRef, PreferenceStore, ThemeDocument};
pub use memory::{MemoryDocument, MemoryElement, MemoryStore};
