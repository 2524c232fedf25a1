//! Registration errors.

/// Why a registry operation was refused.
///
/// All variants are ordinary recoverable results; none of them poison the
/// registry or the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CustomElementError {
    /// The tag name fails the custom element name grammar or is reserved.
    InvalidName { name: String },
    /// The tag name already has a definition.
    AlreadyDefined { name: String },
    /// The element class is already bound to `name`.
    ImplementationAlreadyUsed { name: String },
}

impl std::fmt::Display for CustomElementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomElementError::InvalidName { name } => {
                write!(f, "'{name}' is not a valid custom element name")
            }
            CustomElementError::AlreadyDefined { name } => {
                write!(f, "'{name}' has already been defined")
            }
            CustomElementError::ImplementationAlreadyUsed { name } => {
                write!(f, "element class is already registered as '{name}'")
            }
        }
    }
}

impl std::error::Error for CustomElementError {}
