/// Convenience result type used across varscope.
pub type VarScopeResult<T> = Result<T, VarScopeError>;

/// Top-level error taxonomy used by layout APIs.
#[derive(thiserror::Error, Debug)]
pub enum VarScopeError {
    /// Invalid user-provided configuration or script data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Addressing contract violations while placing entries.
    #[error("layout error: {0}")]
    Layout(String),

    /// Invalid operations on the scope stack.
    #[error("scope error: {0}")]
    Scope(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VarScopeError {
    /// Build a [`VarScopeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VarScopeError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`VarScopeError::Scope`] value.
    pub fn scope(msg: impl Into<String>) -> Self {
        Self::Scope(msg.into())
    }

    /// Build a [`VarScopeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Prefix the message with `what`, keeping the variant.
    pub fn context(self, what: impl std::fmt::Display) -> Self {
        match self {
            Self::Validation(m) => Self::Validation(format!("{what}: {m}")),
            Self::Layout(m) => Self::Layout(format!("{what}: {m}")),
            Self::Scope(m) => Self::Scope(format!("{what}: {m}")),
            Self::Serde(m) => Self::Serde(format!("{what}: {m}")),
            Self::Other(e) => Self::Other(e.context(what.to_string())),
        }
    }
}

impl From<serde_json::Error> for VarScopeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
