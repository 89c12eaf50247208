//! In-memory host implementations
//!
//! Headless stand-ins for browser storage and the document, used by tests
//! and by non-browser embedders.

use crate::error::{HostError, Result, StorageError};
use crate::host::{ElementRef, PreferenceStore, ThemeDocument};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Key/value store backed by a map, with switchable failure modes
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every read fail
    pub fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every write fail
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Peek at a stored value without going through the trait
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Read {
                key: key.to_string(),
                reason: "reads disabled".to_string(),
            });
        }
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "writes disabled".to_string(),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// A single element's observable state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryElement {
    pub attributes: FxHashMap<String, String>,
    pub styles: FxHashMap<String, String>,
    pub classes: BTreeSet<String>,
    pub inner_html: String,
}

/// Document model holding root, body, id-addressed elements, selects and
/// attribute-tagged buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    root: MemoryElement,
    body: MemoryElement,
    by_id: FxHashMap<String, MemoryElement>,
    selects: FxHashMap<String, String>,
    select_writes: usize,
    tagged: Vec<MemoryElement>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// An empty document: root and body only
    pub fn new() -> Self {
        Self {
            root: MemoryElement::default(),
            body: MemoryElement::default(),
            by_id: FxHashMap::default(),
            selects: FxHashMap::default(),
            select_writes: 0,
            tagged: Vec::new(),
        }
    }

    /// Add an empty element with the given id
    pub fn with_element(mut self, id: &str) -> Self {
        self.by_id.insert(id.to_string(), MemoryElement::default());
        self
    }

    /// Add a single-choice control with an initial value
    pub fn with_select(mut self, id: &str, value: &str) -> Self {
        self.selects.insert(id.to_string(), value.to_string());
        self
    }

    /// Add an element tagged with `attribute = value`
    pub fn with_tagged(mut self, attribute: &str, value: &str) -> Self {
        let mut el = MemoryElement::default();
        el.attributes.insert(attribute.to_string(), value.to_string());
        self.tagged.push(el);
        self
    }

    /// Inspect an element
    pub fn element(&self, element: ElementRef<'_>) -> Option<&MemoryElement> {
        match element {
            ElementRef::Root => Some(&self.root),
            ElementRef::Body => Some(&self.body),
            ElementRef::Id(id) => self.by_id.get(id),
        }
    }

    fn element_mut(&mut self, element: ElementRef<'_>) -> Result<&mut MemoryElement> {
        match element {
            ElementRef::Root => Ok(&mut self.root),
            ElementRef::Body => Ok(&mut self.body),
            ElementRef::Id(id) => self
                .by_id
                .get_mut(id)
                .ok_or_else(|| HostError::MissingElement(element.to_string())),
        }
    }

    /// Inline style value of an element
    pub fn style(&self, element: ElementRef<'_>, property: &str) -> Option<&str> {
        self.element(element)?
            .styles
            .get(property)
            .map(String::as_str)
    }

    /// Markup last written into an element
    pub fn inner_html(&self, element: ElementRef<'_>) -> Option<&str> {
        self.element(element).map(|el| el.inner_html.as_str())
    }

    /// Number of times any select value was written
    pub fn select_writes(&self) -> usize {
        self.select_writes
    }

    /// Tagged elements in document order
    pub fn tagged(&self) -> &[MemoryElement] {
        &self.tagged
    }
}

impl ThemeDocument for MemoryDocument {
    fn contains(&self, element: ElementRef<'_>) -> bool {
        self.element(element).is_some()
    }

    fn attribute(&self, element: ElementRef<'_>, name: &str) -> Option<String> {
        self.element(element)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, element: ElementRef<'_>, name: &str, value: &str) -> Result<()> {
        self.element_mut(element)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_style(
        &mut self,
        element: ElementRef<'_>,
        property: &str,
        value: Option<&str>,
    ) -> Result<()> {
        let styles = &mut self.element_mut(element)?.styles;
        match value {
            Some(v) => {
                styles.insert(property.to_string(), v.to_string());
            }
            None => {
                styles.remove(property);
            }
        }
        Ok(())
    }

    fn set_inner_html(&mut self, element: ElementRef<'_>, html: &str) -> Result<()> {
        self.element_mut(element)?.inner_html = html.to_string();
        Ok(())
    }

    fn select_value(&self, id: &str) -> Option<String> {
        self.selects.get(id).cloned()
    }

    fn set_select_value(&mut self, id: &str, value: &str) -> Result<()> {
        let slot = self
            .selects
            .get_mut(id)
            .ok_or_else(|| HostError::MissingElement(format!("#{id}")))?;
        *slot = value.to_string();
        self.select_writes += 1;
        Ok(())
    }

    fn tagged_values(&self, attribute: &str) -> Vec<String> {
        self.tagged
            .iter()
            .filter_map(|el| el.attributes.get(attribute).cloned())
            .collect()
    }

    fn set_tagged_class(
        &mut self,
        attribute: &str,
        index: usize,
        class: &str,
        on: bool,
    ) -> Result<()> {
        let el = self
            .tagged
            .iter_mut()
            .filter(|el| el.attributes.contains_key(attribute))
            .nth(index)
            .ok_or_else(|| HostError::MissingElement(format!("[{attribute}]#{index}")))?;

        if on {
            el.classes.insert(class.to_string());
        } else {
            el.classes.remove(class);
        }
        Ok(())
    }
}
