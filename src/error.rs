//! Error types for chantier-ciment

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// A rejected entry form.
///
/// Both variants display the same blocking notice; the variant records
/// which rule failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `date` is empty or not a calendar date
    #[error("Veuillez remplir la date et une quantité valide.")]
    Date,

    /// `quantity` is missing, unparseable, non-finite or not positive
    #[error("Veuillez remplir la date et une quantité valide.")]
    Quantity,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No entry at row {0}")]
    RowNotFound(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
