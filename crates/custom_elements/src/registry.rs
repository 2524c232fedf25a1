//! Tag name to element class bindings for one runtime instance.
//!
//! The registry owns three growing maps: definitions by name, the inverse
//! name-by-class index, and the queue of awaiters for names that are not
//! defined yet. Definitions are write-once; nothing is ever unregistered.

use std::collections::HashMap;
use std::rc::Rc;

use tokio::sync::oneshot;

use crate::error::CustomElementError;
use crate::name::is_valid_custom_element_name;
use crate::when_defined::{DefinedSender, WhenDefined};

/// Caller-supplied element implementation.
///
/// The registry treats the handle as opaque: it only invokes the
/// observed-attributes accessor (once, at definition time) and otherwise
/// tracks identity. Element construction and lifecycle behavior live with
/// the caller.
pub trait ElementClass {
    /// Attribute names whose changes the element wants reported.
    ///
    /// Invoked exactly once per definition; the registry caches the result
    /// and never calls this again for the same class.
    fn observed_attributes(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Options accepted by [`CustomElementRegistry::define`].
#[derive(Clone, Debug, Default)]
pub struct DefineOptions {
    /// Tag name of the built-in element this definition customizes.
    /// `None` is an autonomous custom element. Stored verbatim.
    pub extends: Option<String>,
}

/// Identity key for a registered class.
///
/// Two handles compare equal iff they share an allocation. Every
/// definition keeps its class `Rc` alive, so a key cannot be reused while
/// the registry holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct ClassKey(usize);

impl ClassKey {
    fn of(class: &Rc<dyn ElementClass>) -> Self {
        Self(Rc::as_ptr(class) as *const () as usize)
    }
}

/// Immutable record created by a successful [`CustomElementRegistry::define`].
#[derive(Clone)]
pub struct Definition {
    name: Rc<str>,
    class: Rc<dyn ElementClass>,
    observed_attributes: Vec<String>,
    extends: Option<String>,
}

impl Definition {
    /// The exact name passed to `define`, case preserved.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &Rc<dyn ElementClass> {
        &self.class
    }

    /// Observed-attribute list captured when the definition was created.
    pub fn observed_attributes(&self) -> &[String] {
        &self.observed_attributes
    }

    /// Base tag this definition customizes, if any.
    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    /// Whether the definition is a standalone custom element rather than a
    /// customized built-in.
    pub fn is_autonomous(&self) -> bool {
        self.extends.is_none()
    }
}

impl std::fmt::Debug for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Definition")
            .field("name", &self.name)
            .field("observed_attributes", &self.observed_attributes)
            .field("extends", &self.extends)
            .finish_non_exhaustive()
    }
}

/// Per-runtime custom element registry.
///
/// One instance per runtime; instances never share state. All mutation
/// happens inside `&mut self` calls that run to completion, so a reader
/// can never observe one index updated without the other.
#[derive(Default)]
pub struct CustomElementRegistry {
    by_name: HashMap<String, Definition>,
    by_class: HashMap<ClassKey, String>,
    /// Side table standing in for a cached static property on the class:
    /// repeated observed-attribute queries never re-invoke the accessor.
    observed_cache: HashMap<ClassKey, Vec<String>>,
    pending: HashMap<String, Vec<DefinedSender>>,
}

impl CustomElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `class`.
    ///
    /// Preconditions run in order and the first failure wins: the name
    /// grammar, then a `by_name` collision, then a `by_class` collision.
    /// A failed define never invokes the class's accessor. On success both
    /// indexes are updated in the same mutation step and every awaiter
    /// queued for `name` is completed.
    pub fn define(
        &mut self,
        name: &str,
        class: Rc<dyn ElementClass>,
        options: DefineOptions,
    ) -> Result<(), CustomElementError> {
        if !is_valid_custom_element_name(name) {
            return Err(CustomElementError::InvalidName {
                name: name.to_string(),
            });
        }
        if self.by_name.contains_key(name) {
            return Err(CustomElementError::AlreadyDefined {
                name: name.to_string(),
            });
        }
        let key = ClassKey::of(&class);
        if let Some(bound) = self.by_class.get(&key) {
            return Err(CustomElementError::ImplementationAlreadyUsed {
                name: bound.clone(),
            });
        }

        let observed = class.observed_attributes();
        self.observed_cache.insert(key, observed.clone());

        let definition = Definition {
            name: Rc::from(name),
            class,
            observed_attributes: observed,
            extends: options.extends,
        };
        self.by_name.insert(name.to_string(), definition);
        self.by_class.insert(key, name.to_string());
        log::debug!(target: "dom.custom_elements", "defined '{name}'");

        if let Some(waiters) = self.pending.remove(name) {
            log::debug!(
                target: "dom.custom_elements",
                "completing {} awaiter(s) for '{name}'",
                waiters.len()
            );
            for waiter in waiters {
                // A closed channel means the awaiter lost interest.
                let _ = waiter.send(Ok(()));
            }
        }
        Ok(())
    }

    /// The class registered under the exact string `name`.
    ///
    /// Case-sensitive, no normalization; callers resolving markup tag
    /// names fold them first.
    pub fn get(&self, name: &str) -> Option<Rc<dyn ElementClass>> {
        self.by_name
            .get(name)
            .map(|definition| Rc::clone(&definition.class))
    }

    /// The name `class` is bound to, if it was ever defined.
    pub fn get_name(&self, class: &Rc<dyn ElementClass>) -> Option<&str> {
        self.by_class
            .get(&ClassKey::of(class))
            .map(String::as_str)
    }

    /// Full definition record for `name`.
    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.by_name.get(name)
    }

    /// Cached observed-attribute list for `class`.
    ///
    /// Served from the capture made at definition time; the accessor is
    /// never re-invoked.
    pub fn observed_attributes(&self, class: &Rc<dyn ElementClass>) -> Option<&[String]> {
        self.observed_cache
            .get(&ClassKey::of(class))
            .map(Vec::as_slice)
    }

    /// Future that resolves once `name` has a definition.
    ///
    /// An invalid name resolves with `InvalidName`; an already-defined one
    /// resolves immediately at the caller's next poll. Otherwise the
    /// awaiter is queued until the matching [`define`](Self::define),
    /// which completes every awaiter for the name, strictly after its own
    /// state mutation has committed.
    pub fn when_defined(&mut self, name: &str) -> WhenDefined {
        let (sender, receiver) = oneshot::channel();
        if !is_valid_custom_element_name(name) {
            let _ = sender.send(Err(CustomElementError::InvalidName {
                name: name.to_string(),
            }));
        } else if self.by_name.contains_key(name) {
            let _ = sender.send(Ok(()));
        } else {
            log::trace!(target: "dom.custom_elements", "queued awaiter for '{name}'");
            self.pending.entry(name.to_string()).or_default().push(sender);
        }
        WhenDefined::new(receiver)
    }

    /// Names with a definition, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }
}
