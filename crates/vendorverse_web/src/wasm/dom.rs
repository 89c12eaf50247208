use super::storage::describe;
use vendorverse_core::error::Result;
use vendorverse_core::{ElementRef, HostError, ThemeDocument};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlSelectElement};

/// [`ThemeDocument`] over the live browser document
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The page's document, if running in a window
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }

    pub fn inner(&self) -> &Document {
        &self.document
    }

    fn find(&self, element: ElementRef<'_>) -> Option<Element> {
        match element {
            ElementRef::Root => self.document.document_element(),
            ElementRef::Body => self.document.body().map(Into::into),
            ElementRef::Id(id) => self.document.get_element_by_id(id),
        }
    }

    fn require(&self, element: ElementRef<'_>) -> Result<Element> {
        self.find(element)
            .ok_or_else(|| HostError::MissingElement(element.to_string()))
    }

    fn select(&self, id: &str) -> Option<HtmlSelectElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
    }

    /// Every element carrying `attribute`, in document order
    pub fn tagged(&self, attribute: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(&format!("[{attribute}]")) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl ThemeDocument for WebDocument {
    fn contains(&self, element: ElementRef<'_>) -> bool {
        self.find(element).is_some()
    }

    fn attribute(&self, element: ElementRef<'_>, name: &str) -> Option<String> {
        self.find(element)?.get_attribute(name)
    }

    fn set_attribute(&mut self, element: ElementRef<'_>, name: &str, value: &str) -> Result<()> {
        self.require(element)?
            .set_attribute(name, value)
            .map_err(|e| HostError::Dom(describe(&e)))
    }

    fn set_style(
        &mut self,
        element: ElementRef<'_>,
        property: &str,
        value: Option<&str>,
    ) -> Result<()> {
        let el = self
            .require(element)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| HostError::Dom(format!("{element} has no inline style")))?;
        let style = el.style();
        let res = match value {
            Some(v) => style.set_property(property, v),
            None => style.remove_property(property).map(|_| ()),
        };
        res.map_err(|e| HostError::Dom(describe(&e)))
    }

    fn set_inner_html(&mut self, element: ElementRef<'_>, html: &str) -> Result<()> {
        self.require(element)?.set_inner_html(html);
        Ok(())
    }

    fn select_value(&self, id: &str) -> Option<String> {
        self.select(id).map(|s| s.value())
    }

    fn set_select_value(&mut self, id: &str, value: &str) -> Result<()> {
        let select = self
            .select(id)
            .ok_or_else(|| HostError::MissingElement(format!("#{id}")))?;
        select.set_value(value);
        Ok(())
    }

    fn tagged_values(&self, attribute: &str) -> Vec<String> {
        self.tagged(attribute)
            .iter()
            .map(|e| e.get_attribute(attribute).unwrap_or_default())
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
            .tagged(attribute)
            .into_iter()
            .nth(index)
            .ok_or_else(|| HostError::MissingElement(format!("[{attribute}] #{index}")))?;
        let classes = el.class_list();
        let res = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        res.map_err(|e| HostError::Dom(describe(&e)))
    }
}
