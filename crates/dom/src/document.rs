//! Arena-backed document and element construction.

use std::collections::HashMap;
use std::rc::Rc;

use custom_elements::{CustomElementRegistry, is_valid_custom_element_name};

use crate::tag::fold_tag_name;
use crate::types::{CustomState, NodeData, NodeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentError {
    /// The id does not belong to this document.
    UnknownNode(NodeId),
    /// The node cannot carry children.
    InvalidParent(NodeId),
    /// The operation needs a different node kind (e.g. an element).
    WrongNodeKind(NodeId),
    /// The node is already attached; there is no reparenting.
    AlreadyAttached(NodeId),
    /// Appending would make a node its own ancestor.
    CycleDetected { parent: NodeId, child: NodeId },
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::UnknownNode(id) => write!(f, "unknown node: {id:?}"),
            DocumentError::InvalidParent(id) => write!(f, "node cannot carry children: {id:?}"),
            DocumentError::WrongNodeKind(id) => write!(f, "wrong node kind: {id:?}"),
            DocumentError::AlreadyAttached(id) => write!(f, "node is already attached: {id:?}"),
            DocumentError::CycleDetected { parent, child } => {
                write!(f, "appending {child:?} under {parent:?} would form a cycle")
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// One document tree.
///
/// Nodes live in an arena indexed by [`NodeId`]; the root document node is
/// created up front and never moves. Element construction resolves custom
/// element definitions through the registry passed by the caller; the
/// document itself holds no registry state.
pub struct Document {
    nodes: Vec<NodeData>,
    parents: Vec<Option<NodeId>>,
    /// Interned local names; elements with the same tag share one string.
    local_names: HashMap<String, Rc<str>>,
}

impl Document {
    const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::Document {
                children: Vec::new(),
            }],
            parents: vec![None],
            local_names: HashMap::new(),
        }
    }

    /// The document node.
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0 as usize)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(id.0 as usize).copied().flatten()
    }

    pub fn children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.node(id).and_then(NodeData::children)
    }

    /// Element local name, or `None` for non-elements.
    pub fn local_name(&self, id: NodeId) -> Option<&str> {
        match self.node(id)? {
            NodeData::Element { local_name, .. } => Some(local_name),
            _ => None,
        }
    }

    /// Element custom state, or `None` for non-elements.
    pub fn custom_state(&self, id: NodeId) -> Option<&CustomState> {
        match self.node(id)? {
            NodeData::Element { custom_state, .. } => Some(custom_state),
            _ => None,
        }
    }

    /// Construct an element for `tag_name`.
    ///
    /// The tag is folded (ASCII-lowercase, non-ASCII untouched) before the
    /// registry lookup, which is case-sensitive on the registry side. A
    /// missing definition is not an error: a valid custom name without one
    /// yields an upgrade candidate, anything else an ordinary element.
    pub fn create_element(
        &mut self,
        registry: &CustomElementRegistry,
        tag_name: &str,
    ) -> NodeId {
        let folded = fold_tag_name(tag_name);
        let custom_state = match registry.definition(&folded) {
            Some(definition) => CustomState::Custom {
                name: self.intern_local_name(definition.name()),
            },
            None if is_valid_custom_element_name(&folded) => CustomState::Undefined,
            None => CustomState::Uncustomized,
        };
        log::trace!(
            target: "dom.document",
            "create element '{folded}' ({custom_state:?})"
        );
        let local_name = self.intern_local_name(&folded);
        self.push(NodeData::Element {
            local_name,
            attributes: Vec::new(),
            children: Vec::new(),
            custom_state,
        })
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Text { text: text.into() })
    }

    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Comment { text: text.into() })
    }

    /// Append a detached node under `parent`.
    ///
    /// There is no reparenting and no document-node nesting; appending an
    /// ancestor under its own descendant is refused.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.check_node(parent)?;
        self.check_node(child)?;
        if matches!(self.nodes[child.0 as usize], NodeData::Document { .. }) {
            return Err(DocumentError::WrongNodeKind(child));
        }
        if self.parent(child).is_some() {
            return Err(DocumentError::AlreadyAttached(child));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(DocumentError::CycleDetected { parent, child });
        }
        let Some(children) = self.nodes[parent.0 as usize].children_mut() else {
            return Err(DocumentError::InvalidParent(parent));
        };
        children.push(child);
        self.parents[child.0 as usize] = Some(parent);
        Ok(())
    }

    /// Set an attribute, replacing any existing value under the folded name.
    pub fn set_attribute(
        &mut self,
        element: NodeId,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), DocumentError> {
        self.check_node(element)?;
        let folded = fold_tag_name(name).into_owned();
        let NodeData::Element { attributes, .. } = &mut self.nodes[element.0 as usize] else {
            return Err(DocumentError::WrongNodeKind(element));
        };
        let value = value.map(str::to_string);
        match attributes.iter().position(|(existing, _)| *existing == folded) {
            Some(index) => attributes[index].1 = value,
            None => attributes.push((folded, value)),
        }
        Ok(())
    }

    /// Attribute value under the folded name; `None` for a missing or
    /// valueless attribute (see [`has_attribute`](Self::has_attribute)).
    pub fn attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        let NodeData::Element { attributes, .. } = self.node(element)? else {
            return None;
        };
        let folded = fold_tag_name(name);
        attributes
            .iter()
            .find(|(existing, _)| *existing == folded.as_ref())
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn has_attribute(&self, element: NodeId, name: &str) -> bool {
        let Some(NodeData::Element { attributes, .. }) = self.node(element) else {
            return false;
        };
        let folded = fold_tag_name(name);
        attributes
            .iter()
            .any(|(existing, _)| *existing == folded.as_ref())
    }

    fn check_node(&self, id: NodeId) -> Result<(), DocumentError> {
        if (id.0 as usize) < self.nodes.len() {
            Ok(())
        } else {
            Err(DocumentError::UnknownNode(id))
        }
    }

    /// Whether `node` is `candidate` or one of its ancestors.
    fn is_ancestor_or_self(&self, node: NodeId, candidate: NodeId) -> bool {
        let mut current = Some(candidate);
        while let Some(id) = current {
            if id == node {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn push(&mut self, node: NodeData) -> NodeId {
        let index: u32 = self.nodes.len().try_into().expect("node arena exhausted");
        self.nodes.push(node);
        self.parents.push(None);
        NodeId(index)
    }

    fn intern_local_name(&mut self, name: &str) -> Rc<str> {
        if let Some(interned) = self.local_names.get(name) {
            return Rc::clone(interned);
        }
        let interned: Rc<str> = Rc::from(name);
        self.local_names
            .insert(name.to_string(), Rc::clone(&interned));
        interned
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use custom_elements::{DefineOptions, ElementClass};

    use super::*;

    struct Plain;

    impl ElementClass for Plain {}

    fn define(registry: &mut CustomElementRegistry, name: &str) {
        registry
            .define(name, Rc::new(Plain), DefineOptions::default())
            .unwrap();
    }

    #[test]
    fn create_element_folds_ascii_only() {
        let registry = CustomElementRegistry::new();
        let mut document = Document::new();
        let div = document.create_element(&registry, "DIV");
        assert_eq!(document.local_name(div), Some("div"));
        let exotic = document.create_element(&registry, "A-ÖA");
        assert_eq!(document.local_name(exotic), Some("a-Öa"));
    }

    #[test]
    fn create_element_marks_custom_states() {
        let mut registry = CustomElementRegistry::new();
        define(&mut registry, "x-defined");
        let mut document = Document::new();

        let defined = document.create_element(&registry, "x-defined");
        assert_eq!(
            document.custom_state(defined),
            Some(&CustomState::Custom {
                name: Rc::from("x-defined")
            })
        );

        let undefined = document.create_element(&registry, "x-later");
        assert_eq!(document.custom_state(undefined), Some(&CustomState::Undefined));

        let plain = document.create_element(&registry, "div");
        assert_eq!(document.custom_state(plain), Some(&CustomState::Uncustomized));
    }

    #[test]
    fn interned_local_names_are_shared() {
        let registry = CustomElementRegistry::new();
        let mut document = Document::new();
        let first = document.create_element(&registry, "div");
        let second = document.create_element(&registry, "DIV");
        let (a, b) = match (
            document.node(first).unwrap(),
            document.node(second).unwrap(),
        ) {
            (
                NodeData::Element { local_name: a, .. },
                NodeData::Element { local_name: b, .. },
            ) => (Rc::clone(a), Rc::clone(b)),
            other => panic!("expected two elements, got {other:?}"),
        };
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn append_child_builds_a_tree() {
        let registry = CustomElementRegistry::new();
        let mut document = Document::new();
        let root = document.root();
        let section = document.create_element(&registry, "section");
        let text = document.create_text("hello");
        let comment = document.create_comment("marker");

        document.append_child(root, section).unwrap();
        document.append_child(section, text).unwrap();
        document.append_child(section, comment).unwrap();

        assert_eq!(document.children(root), Some(&[section][..]));
        assert_eq!(document.children(section), Some(&[text, comment][..]));
        assert_eq!(document.parent(text), Some(section));
        assert_eq!(document.parent(comment), Some(section));
        assert!(
            matches!(document.node(comment), Some(NodeData::Comment { text }) if text == "marker")
        );
        assert_eq!(document.node_count(), 4);
    }

    #[test]
    fn append_child_refuses_bad_shapes() {
        let registry = CustomElementRegistry::new();
        let mut document = Document::new();
        let root = document.root();
        let section = document.create_element(&registry, "section");
        let text = document.create_text("hello");
        document.append_child(root, section).unwrap();

        assert_eq!(
            document.append_child(text, section),
            Err(DocumentError::AlreadyAttached(section))
        );
        assert_eq!(
            document.append_child(section, root),
            Err(DocumentError::WrongNodeKind(root))
        );
        assert_eq!(
            document.append_child(NodeId(99), text),
            Err(DocumentError::UnknownNode(NodeId(99)))
        );
        document.append_child(section, text).unwrap();
        assert_eq!(
            document.append_child(text, text),
            Err(DocumentError::AlreadyAttached(text))
        );
    }

    #[test]
    fn append_child_refuses_leaf_parents() {
        let registry = CustomElementRegistry::new();
        let mut document = Document::new();
        let text = document.create_text("hello");
        let comment = document.create_comment("note");
        let detached = document.create_element(&registry, "div");

        assert_eq!(
            document.append_child(text, detached),
            Err(DocumentError::InvalidParent(text))
        );
        assert_eq!(
            document.append_child(comment, detached),
            Err(DocumentError::InvalidParent(comment))
        );
        // The refused child is still free to attach elsewhere.
        assert!(document.parent(detached).is_none());
    }

    #[test]
    fn append_child_detects_cycles() {
        let registry = CustomElementRegistry::new();
        let mut document = Document::new();
        let outer = document.create_element(&registry, "div");
        let inner = document.create_element(&registry, "span");
        document.append_child(outer, inner).unwrap();

        // `outer` is detached but contains `inner`.
        assert_eq!(
            document.append_child(inner, outer),
            Err(DocumentError::CycleDetected {
                parent: inner,
                child: outer
            })
        );
    }

    #[test]
    fn attributes_fold_names_and_replace_values() {
        let registry = CustomElementRegistry::new();
        let mut document = Document::new();
        let element = document.create_element(&registry, "input");
        let text = document.create_text("x");

        document.set_attribute(element, "TYPE", Some("text")).unwrap();
        assert_eq!(document.attribute(element, "type"), Some("text"));
        document.set_attribute(element, "type", Some("number")).unwrap();
        assert_eq!(document.attribute(element, "Type"), Some("number"));

        document.set_attribute(element, "disabled", None).unwrap();
        assert!(document.has_attribute(element, "DISABLED"));
        assert_eq!(document.attribute(element, "disabled"), None);

        assert_eq!(
            document.set_attribute(text, "type", Some("text")),
            Err(DocumentError::WrongNodeKind(text))
        );
    }
}
