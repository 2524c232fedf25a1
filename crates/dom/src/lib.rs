//! Minimal document tree for the runtime.
//!
//! The crate owns the arena node model and element construction. Elements
//! are created against a [`custom_elements::CustomElementRegistry`] so that
//! a defined name yields a customized element and a valid-but-undefined
//! name is remembered as an upgrade candidate.
//!
//! Tag and attribute names fold ASCII letters only; non-ASCII characters
//! pass through untouched, so `A-ÖA` becomes `a-Öa`.

mod document;
mod tag;
mod types;

pub use crate::document::{Document, DocumentError};
pub use crate::tag::fold_tag_name;
pub use crate::types::{CustomState, NodeData, NodeId};
