//! Element classes with test instrumentation.

use std::cell::Cell;
use std::rc::Rc;

use custom_elements::ElementClass;

/// Element class whose observed-attributes accessor counts invocations.
///
/// Keep a concrete `Rc<CountingClass>` around and pass coerced clones to
/// the registry; the counter is shared.
pub struct CountingClass {
    observed: Vec<String>,
    calls: Cell<usize>,
}

impl CountingClass {
    pub fn new<I, S>(observed: I) -> Rc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rc::new(Self {
            observed: observed.into_iter().map(Into::into).collect(),
            calls: Cell::new(0),
        })
    }

    /// How many times the registry invoked the accessor.
    pub fn observed_calls(&self) -> usize {
        self.calls.get()
    }
}

impl ElementClass for CountingClass {
    fn observed_attributes(&self) -> Vec<String> {
        self.calls.set(self.calls.get() + 1);
        self.observed.clone()
    }
}

/// Minimal class with the default (absent) observed-attributes accessor.
pub struct MarkerClass;

impl ElementClass for MarkerClass {}

/// A fresh marker class; every call is a distinct identity.
pub fn marker_class() -> Rc<dyn ElementClass> {
    Rc::new(MarkerClass)
}
