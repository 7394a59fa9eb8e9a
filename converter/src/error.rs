//! Error types for the repeater conversion pipeline.
//!
//! One enum per layer:
//!
//! - [`DeriveError`] - Per-field derivation failures (band, call sign, tone)
//! - [`CatalogError`] - Reading and decoding the JSON catalog
//! - [`ConfigError`] - Invalid configuration values
//! - [`ConvertError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Derivation Errors
// =============================================================================

/// Errors while deriving output fields from one catalog record.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeriveError {
    /// Transmit frequency outside every known D-STAR band.
    #[error("Unknown frequency {0}")]
    UnknownFrequency(f64),

    /// Call sign does not fit the 8-character D-STAR field.
    #[error("callsign '{0}' too long")]
    CallsignTooLong(String),

    /// Tone value of a type that cannot be printed as a frequency.
    #[error("Invalid tone value: {0}")]
    InvalidTone(String),

    /// Numeric field that cannot be read as a float. Only reachable when
    /// `serde_json` is built with `arbitrary_precision`, where `Number::as_f64`
    /// can return `None`.
    #[error("Field '{field}' is not a usable number")]
    InvalidNumber { field: String },
}

// =============================================================================
// Catalog Errors
// =============================================================================

/// Errors while loading the JSON catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read file.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not valid JSON.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level `repeaters` object is missing.
    #[error("Catalog has no 'repeaters' object")]
    MissingRepeaters,

    /// A record lacks a used field or has the wrong type.
    #[error("Invalid record '{name}': {source}")]
    InvalidRecord {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Invalid configuration values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Unknown row ordering name.
    #[error("Unknown row order '{0}' (expected 'insertion' or 'name')")]
    InvalidOrder(String),
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A record failed field derivation.
    #[error("Repeater '{name}': {source}")]
    Record {
        name: String,
        #[source]
        source: DeriveError,
    },

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Attach the record name to a derivation failure.
    pub fn record(name: impl Into<String>, source: DeriveError) -> Self {
        Self::Record {
            name: name.into(),
            source,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for field derivation.
pub type DeriveResult<T> = Result<T, DeriveError>;

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type for a whole conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let catalog_err = CatalogError::MissingRepeaters;
        let convert_err: ConvertError = catalog_err.into();
        assert!(convert_err.to_string().contains("repeaters"));

        let config_err = ConfigError::InvalidOrder("random".into());
        let convert_err: ConvertError = config_err.into();
        assert!(convert_err.to_string().contains("random"));
    }

    #[test]
    fn test_record_error_names_offender() {
        let err = ConvertError::record("Vitosha", DeriveError::UnknownFrequency(100.0));
        let msg = err.to_string();
        assert!(msg.contains("Vitosha"));
        assert!(msg.contains("Unknown frequency 100"));

        let err = DeriveError::CallsignTooLong("LZ0ABCDEF".into());
        assert!(err.to_string().contains("LZ0ABCDEF"));
    }
}
