//! Error types for serp-lint-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when loading product content.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The input was not valid product JSON.
    #[error("invalid product JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A catalog export contained no products.
    #[error("catalog contains no products")]
    EmptyCatalog,
}

/// Result type alias using [`ContentError`].
pub type ContentResult<T> = Result<T, ContentError>;
