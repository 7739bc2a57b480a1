//! Code generation errors.
//!
//! Every error is fatal: the pass stops at the first one and no output is
//! kept.

/// A fatal code generation error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CodegenError {
    /// A class was reached again while its own dependencies were still being
    /// ordered.
    #[error("circular dependency for class {class}")]
    CircularDependency { class: String },

    /// An inline array initialized with something other than `null`, zero or
    /// `false`.
    #[error("unsupported initializer for array storage `{name}`: only null, zero and false are supported")]
    UnsupportedArrayInit { name: String },

    /// An IR shape this backend does not map.
    #[error("unsupported by the C++ backend: {what}")]
    Unsupported { what: String },
}

impl CodegenError {
    pub(crate) fn unsupported(what: impl Into<String>) -> Self {
        CodegenError::Unsupported { what: what.into() }
    }
}
