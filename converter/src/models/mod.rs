//! Domain models for the repeater conversion pipeline.
//!
//! - [`RepeaterEntry`] - One catalog record as found in the JSON input
//! - [`RepeaterRow`] - The derived radio memory, one CSV row
//! - [`OperatingMode`] - FM or D-STAR digital voice
//! - [`ShiftDirection`] - Duplex direction
//! - [`ToneUse`] - Tone squelch on or off

use serde::Deserialize;
use serde_json::{Map, Number, Value};

use crate::error::{DeriveError, DeriveResult};

/// Catalog mode keys that produce an output row.
pub const SELECT_MODES: [&str; 2] = ["analog", "dstar"];

/// Catalog mode key for D-STAR repeaters.
pub const DSTAR_MODE: &str = "dstar";

// =============================================================================
// Catalog Record
// =============================================================================

/// A repeater as described in the catalog.
///
/// Numbers are kept as [`Number`] so they are echoed back exactly as written
/// in the input (`145.0` stays `145.0`, `42` stays `42`).
#[derive(Debug, Clone, Deserialize)]
pub struct RepeaterEntry {
    /// Station call sign, at most 8 characters.
    pub callsign: String,
    /// Supported modes; only the keys matter.
    pub mode: Map<String, Value>,
    /// Repeater transmit frequency in MHz.
    pub tx: Number,
    /// Repeater receive frequency in MHz.
    pub rx: Number,
    /// CTCSS tone in Hz.
    #[serde(default)]
    pub tone: Option<Value>,
    /// Free-text location, often Cyrillic.
    pub loc: String,
    pub lat: Number,
    pub lon: Number,
}

impl RepeaterEntry {
    /// Whether the catalog lists `mode` for this repeater.
    pub fn has_mode(&self, mode: &str) -> bool {
        self.mode.contains_key(mode)
    }

    /// Whether this record produces an output row at all.
    pub fn is_selected(&self) -> bool {
        selects_modes(&self.mode)
    }

    pub fn is_dstar(&self) -> bool {
        self.has_mode(DSTAR_MODE)
    }

    pub fn tx_mhz(&self) -> DeriveResult<f64> {
        number_as_f64(&self.tx, "tx")
    }

    pub fn rx_mhz(&self) -> DeriveResult<f64> {
        number_as_f64(&self.rx, "rx")
    }
}

/// Whether a catalog mode set contains any of [`SELECT_MODES`].
pub fn selects_modes(modes: &Map<String, Value>) -> bool {
    SELECT_MODES.iter().any(|mode| modes.contains_key(*mode))
}

// `as_f64` is infallible unless serde_json's `arbitrary_precision` is enabled.
fn number_as_f64(number: &Number, field: &str) -> DeriveResult<f64> {
    number.as_f64().ok_or_else(|| DeriveError::InvalidNumber {
        field: field.to_string(),
    })
}

// =============================================================================
// Value Enums
// =============================================================================

/// Operating mode of the radio memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    /// Analog FM.
    Fm,
    /// D-STAR digital voice.
    Dv,
}

impl OperatingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fm => "FM",
            Self::Dv => "DV",
        }
    }

    /// Value of the `RPT1USE` column.
    pub fn rpt1use(&self) -> &'static str {
        match self {
            Self::Fm => "NO",
            Self::Dv => "YES",
        }
    }
}

/// Duplex direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Plus,
    Minus,
}

impl ShiftDirection {
    /// `DUP-` when the repeater receives above its transmit frequency.
    pub fn between(tx: f64, rx: f64) -> Self {
        if rx > tx {
            Self::Minus
        } else {
            Self::Plus
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "DUP+",
            Self::Minus => "DUP-",
        }
    }
}

/// Tone squelch setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneUse {
    Tsql,
    Off,
}

impl ToneUse {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tsql => "TSQL",
            Self::Off => "OFF",
        }
    }
}

// =============================================================================
// Output Row
// =============================================================================

/// A derived radio memory.
///
/// Constant columns (group, position, UTC offset) are not stored here; they
/// come from [`crate::config::CsvProfile`] when the row is written.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeaterRow {
    pub name: String,
    /// Transliterated location.
    pub subname: String,
    pub callsign: String,
    /// Empty for FM memories.
    pub gw_callsign: String,
    pub rx_freq: Number,
    pub shift_dir: ShiftDirection,
    /// Absolute duplex offset in MHz.
    pub shift_freq: f64,
    pub mode: OperatingMode,
    pub tone_use: ToneUse,
    /// Tone with `Hz` suffix, or empty.
    pub tone_freq: String,
    pub latitude: Number,
    pub longitude: Number,
}

impl RepeaterRow {
    /// Offset formatted with exactly 6 decimals.
    pub fn shift_freq_text(&self) -> String {
        format!("{:.6}", self.shift_freq)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(modes: Value) -> RepeaterEntry {
        serde_json::from_value(json!({
            "callsign": "LZ0BOT",
            "mode": modes,
            "tx": 145.6,
            "rx": 145,
            "loc": "ВИТОША",
            "lat": 42.5,
            "lon": 23.25
        }))
        .unwrap()
    }

    #[test]
    fn test_selection_by_mode() {
        assert!(entry(json!({ "analog": {} })).is_selected());
        assert!(entry(json!({ "dstar": {}, "dmr": {} })).is_selected());
        assert!(!entry(json!({ "dmr": {}, "fusion": {} })).is_selected());
        assert!(!entry(json!({})).is_selected());
    }

    #[test]
    fn test_dstar_detection() {
        assert!(entry(json!({ "analog": {}, "dstar": {} })).is_dstar());
        assert!(!entry(json!({ "analog": {} })).is_dstar());
    }

    #[test]
    fn test_tone_defaults_to_none() {
        let e = entry(json!({ "analog": {} }));
        assert!(e.tone.is_none());
        assert_eq!(e.tx_mhz().unwrap(), 145.6);
        assert_eq!(e.rx_mhz().unwrap(), 145.0);
        assert_eq!(e.rx.to_string(), "145");
    }

    #[test]
    fn test_shift_direction() {
        assert_eq!(ShiftDirection::between(145.0, 145.6), ShiftDirection::Minus);
        assert_eq!(ShiftDirection::between(145.6, 145.0), ShiftDirection::Plus);
        assert_eq!(ShiftDirection::between(438.0, 438.0), ShiftDirection::Plus);
        assert_eq!(ShiftDirection::Minus.as_str(), "DUP-");
    }

    #[test]
    fn test_mode_columns() {
        assert_eq!(OperatingMode::Dv.as_str(), "DV");
        assert_eq!(OperatingMode::Dv.rpt1use(), "YES");
        assert_eq!(OperatingMode::Fm.as_str(), "FM");
        assert_eq!(OperatingMode::Fm.rpt1use(), "NO");
    }
}
