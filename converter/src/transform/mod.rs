//! Transformation module.
//!
//! - D-STAR: band letters and call sign padding
//! - Translit: Cyrillic location names to Latin
//! - Pipeline: catalog records to radio memories

pub mod dstar;
pub mod pipeline;
pub mod translit;

pub use dstar::{dstar_callsign, dstar_freq_suffix, DstarBand};
pub use pipeline::*;
pub use translit::transliterate;
