//! Node model for the headless document tree.

use std::rc::Rc;

/// Index of a node in its document's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// How an element relates to the custom element registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustomState {
    /// Ordinary tag with no custom element meaning.
    Uncustomized,
    /// Valid custom element name with no definition at construction time;
    /// a candidate for upgrade once one lands.
    Undefined,
    /// Constructed against a definition.
    Custom { name: Rc<str> },
}

/// Arena node payload.
#[derive(Clone, Debug)]
pub enum NodeData {
    Document {
        children: Vec<NodeId>,
    },
    Element {
        local_name: Rc<str>,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<NodeId>,
        custom_state: CustomState,
    },
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}

impl NodeData {
    pub fn children(&self) -> Option<&[NodeId]> {
        match self {
            NodeData::Document { children } | NodeData::Element { children, .. } => {
                Some(children)
            }
            NodeData::Text { .. } | NodeData::Comment { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            NodeData::Document { children } | NodeData::Element { children, .. } => {
                Some(children)
            }
            NodeData::Text { .. } | NodeData::Comment { .. } => None,
        }
    }
}
