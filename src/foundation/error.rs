/// Crate-wide result alias.
pub type FramemorphResult<T> = Result<T, FramemorphError>;

/// Error taxonomy for frame resolution and interpolation.
///
/// `Constraint` and `Layout` are configuration errors: they mean the constraint description cannot
/// be resolved and are never retried. Out-of-range progress is not an error; it is clamped.
#[derive(thiserror::Error, Debug)]
pub enum FramemorphError {
    /// The constraint description is over- or under-constrained, or carries invalid values.
    #[error("constraint error: {0}")]
    Constraint(String),

    /// The layout solver rejected the scene.
    #[error("layout error: {0}")]
    Layout(String),

    /// Invalid caller input (bounds, options, scripts).
    #[error("validation error: {0}")]
    Validation(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramemorphError {
    /// Build a [`FramemorphError::Constraint`].
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Build a [`FramemorphError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`FramemorphError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramemorphError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for errors that indicate a broken constraint configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Constraint(_) | Self::Layout(_))
    }
}

impl From<taffy::TaffyError> for FramemorphError {
    fn from(value: taffy::TaffyError) -> Self {
        Self::Layout(value.to_string())
    }
}

impl From<serde_json::Error> for FramemorphError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
