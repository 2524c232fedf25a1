//! Custom element registry for a headless DOM runtime.
//!
//! Binds tag names to caller-supplied element classes: validates the name
//! grammar, refuses double registration in either direction, resolves
//! names for the element-construction layer, and lets callers await names
//! that are not defined yet. One registry per runtime instance; there is
//! no process-wide state.

mod error;
mod name;
mod registry;
mod when_defined;

pub use crate::error::CustomElementError;
pub use crate::name::is_valid_custom_element_name;
pub use crate::registry::{CustomElementRegistry, DefineOptions, Definition, ElementClass};
pub use crate::when_defined::WhenDefined;
