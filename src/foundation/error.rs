/// Convenience result type used across gridfeed.
pub type GridfeedResult<T> = Result<T, GridfeedError>;

/// Top-level error taxonomy for the fallible surfaces around the layout core.
///
/// The layout pass itself never fails; these errors come from configuration, post
/// validation and (de)serialization at the crate boundary.
#[derive(thiserror::Error, Debug)]
pub enum GridfeedError {
    /// Invalid user-provided configuration or post data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridfeedError {
    /// Build a [`GridfeedError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GridfeedError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for GridfeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
