//! # Repeaters - repeater catalog to radio memory CSV
//!
//! Converts a JSON catalog of amateur-radio repeaters into the CSV memory
//! format read by D-STAR radio programming software.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  reps.json  │────▶│   Catalog   │────▶│  Transform  │────▶│  CSV (17    │
//! │ (name→rec)  │     │ (doc order) │     │ (per record)│     │   columns)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use repeaters::{convert_file, write_csv, ConvertOptions};
//!
//! fn main() -> Result<(), repeaters::ConvertError> {
//!     let options = ConvertOptions::default();
//!     let conversion = convert_file(&options)?;
//!     write_csv(std::io::stdout(), &conversion.rows, &options.profile)
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Catalog record and output row
//! - [`catalog`] - JSON catalog loading
//! - [`transform`] - D-STAR rules, transliteration, pipeline
//! - [`output`] - CSV writer
//! - [`config`] - Options and environment overrides
//! - [`logs`] - Progress log on stderr

pub mod error;
pub mod models;

pub mod catalog;
pub mod transform;

pub mod output;

pub mod config;
pub mod logs;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, ConfigError, ConvertError, DeriveError};

pub use models::{OperatingMode, RepeaterEntry, RepeaterRow, ShiftDirection, ToneUse};

pub use catalog::{load_catalog, parse_catalog_str, Catalog, CatalogRecord};

pub use transform::{
    convert_catalog, convert_file, derive_row, dstar_callsign, dstar_freq_suffix, order_rows,
    tone_fields, transliterate, Conversion, DstarBand,
};

pub use output::{to_csv_string, write_csv, CSV_HEADER};

pub use config::{ConvertOptions, CsvProfile, RowOrder};
