//! Single-threaded runtime tying one document to one registry.
//!
//! Each [`Runtime`] owns its own [`Document`] and
//! [`CustomElementRegistry`]; two runtimes share nothing. The facade keeps
//! the lookup contract in one place: element construction folds the tag
//! name before consulting the registry, while the registry itself stays
//! case-sensitive.

use custom_elements::{CustomElementRegistry, WhenDefined};
use dom::{Document, NodeId};

pub struct Runtime {
    document: Document,
    custom_elements: CustomElementRegistry,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            custom_elements: CustomElementRegistry::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn custom_elements(&self) -> &CustomElementRegistry {
        &self.custom_elements
    }

    pub fn custom_elements_mut(&mut self) -> &mut CustomElementRegistry {
        &mut self.custom_elements
    }

    /// Construct an element in this runtime's document, resolving custom
    /// element definitions against this runtime's registry.
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.document.create_element(&self.custom_elements, tag_name)
    }

    /// Future that resolves once `name` is defined in this runtime.
    pub fn when_defined(&mut self, name: &str) -> WhenDefined {
        self.custom_elements.when_defined(name)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
