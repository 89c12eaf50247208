//! Host capability seams
//!
//! Theme logic reaches the outside world only through these traits, so it
//! runs the same against a real browser document and an in-memory one.

use crate::error::{Result, StorageError};
use std::fmt;

/// Reference to an element the theme layer manipulates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRef<'a> {
    /// The document root (`<html>`)
    Root,
    /// The `<body>` element
    Body,
    /// Element looked up by id
    Id(&'a str),
}

impl fmt::Display for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::Root => f.write_str(":root"),
            ElementRef::Body => f.write_str("body"),
            ElementRef::Id(id) => write!(f, "#{id}"),
        }
    }
}

/// Client-local key/value storage that survives across sessions
pub trait PreferenceStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn load(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn save(&mut self, key: &str, value: &str) -> std::result::Result<(), StorageError>;
}

/// The slice of a document the theme layer reads and writes
pub trait ThemeDocument {
    /// Whether the element exists
    fn contains(&self, element: ElementRef<'_>) -> bool;

    /// Read an attribute; `None` if the element or attribute is missing
    fn attribute(&self, element: ElementRef<'_>, name: &str) -> Option<String>;

    /// Set an attribute
    fn set_attribute(&mut self, element: ElementRef<'_>, name: &str, value: &str) -> Result<()>;

    /// Set an inline style property, or remove it with `None`
    fn set_style(&mut self, element: ElementRef<'_>, property: &str, value: Option<&str>)
        -> Result<()>;

    /// Replace the element's children with parsed markup
    fn set_inner_html(&mut self, element: ElementRef<'_>, html: &str) -> Result<()>;

    /// Current value of a single-choice control; `None` if absent
    fn select_value(&self, id: &str) -> Option<String>;

    /// Set the value of a single-choice control
    fn set_select_value(&mut self, id: &str, value: &str) -> Result<()>;

    /// Values of `attribute` on every element carrying it, in document order
    fn tagged_values(&self, attribute: &str) -> Vec<String>;

    /// Add (`on = true`) or remove a class on the `index`-th element tagged
    /// with `attribute`
    fn set_tagged_class(&mut self, attribute: &str, index: usize, class: &str, on: bool)
        -> Result<()>;
}
