//! Catalog to radio-memory conversion.
//!
//! Each selected catalog record is turned into one [`RepeaterRow`]:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  reps.json   │────▶│   Catalog    │────▶│  derive_row  │────▶│  order_rows  │
//! │ (name→record)│     │ (doc order)  │     │ (per record) │     │ (insert/name)│
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Records without analog or D-STAR service are skipped. Any derivation error
//! aborts the whole conversion; nothing is returned for the records that did
//! succeed.
//!
//! # Example
//!
//! ```rust,ignore
//! use repeaters::{convert_file, write_csv, ConvertOptions};
//!
//! let options = ConvertOptions::default();
//! let conversion = convert_file(&options)?;
//! write_csv(std::io::stdout(), &conversion.rows, &options.profile)?;
//! ```

use serde_json::Value;

use crate::catalog::{load_catalog, Catalog};
use crate::config::{ConvertOptions, RowOrder};
use crate::error::{ConvertError, ConvertResult, DeriveError, DeriveResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::{OperatingMode, RepeaterEntry, RepeaterRow, ShiftDirection, ToneUse};
use crate::transform::dstar::{dstar_callsign, dstar_freq_suffix, GATEWAY_SUFFIX};
use crate::transform::translit::transliterate;

/// Rows produced from one catalog, plus what was left out.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Rows in output order
    pub rows: Vec<RepeaterRow>,

    /// Names of records without analog or D-STAR service
    pub skipped: Vec<String>,

    /// Number of records in the catalog
    pub total: usize,
}

/// Load the configured catalog and convert it.
pub fn convert_file(options: &ConvertOptions) -> ConvertResult<Conversion> {
    log_info(format!("📖 Reading catalog: {}", options.input.display()));
    let catalog = load_catalog(&options.input)?;
    log_success(format!("Read {} records", catalog.len()));

    let conversion = convert_catalog(&catalog, options.order)?;
    if conversion.rows.is_empty() {
        log_warning("No analog or D-STAR repeaters in catalog");
    }
    log_success(format!(
        "{} rows, {} skipped",
        conversion.rows.len(),
        conversion.skipped.len()
    ));
    Ok(conversion)
}

/// Convert every selected record of `catalog`.
pub fn convert_catalog(catalog: &Catalog, order: RowOrder) -> ConvertResult<Conversion> {
    let mut rows = Vec::with_capacity(catalog.len());
    let mut skipped = Vec::new();

    for record in &catalog.records {
        if !record.is_selected()? {
            log_info_indent(
                format!("Skipping {} ({})", record.name, record.mode_names().join(", ")),
                1,
            );
            skipped.push(record.name.clone());
            continue;
        }

        let entry = record.decode()?;
        let row = derive_row(&record.name, &entry)
            .map_err(|source| ConvertError::record(&record.name, source))?;
        rows.push(row);
    }

    order_rows(&mut rows, order);

    Ok(Conversion {
        rows,
        skipped,
        total: catalog.len(),
    })
}

/// Put rows in the requested order. Sorting is stable.
pub fn order_rows(rows: &mut [RepeaterRow], order: RowOrder) {
    match order {
        RowOrder::Insertion => {}
        RowOrder::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}

/// Derive the radio memory for one catalog record.
pub fn derive_row(name: &str, entry: &RepeaterEntry) -> DeriveResult<RepeaterRow> {
    let tx = entry.tx_mhz()?;
    let rx = entry.rx_mhz()?;

    let (mode, callsign, gw_callsign) = if entry.is_dstar() {
        (
            OperatingMode::Dv,
            dstar_callsign(&entry.callsign, dstar_freq_suffix(tx)?)?,
            dstar_callsign(&entry.callsign, GATEWAY_SUFFIX)?,
        )
    } else {
        (OperatingMode::Fm, entry.callsign.clone(), String::new())
    };

    let (tone_use, tone_freq) = tone_fields(entry.tone.as_ref())?;

    Ok(RepeaterRow {
        name: name.to_string(),
        subname: transliterate(&entry.loc),
        callsign,
        gw_callsign,
        rx_freq: entry.rx.clone(),
        shift_dir: ShiftDirection::between(tx, rx),
        shift_freq: (tx - rx).abs(),
        mode,
        tone_use,
        tone_freq,
        latitude: entry.lat.clone(),
        longitude: entry.lon.clone(),
    })
}

/// Tone squelch columns. Missing, null, zero and empty tones mean no squelch.
pub fn tone_fields(tone: Option<&Value>) -> DeriveResult<(ToneUse, String)> {
    let text = match tone {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => return Err(DeriveError::InvalidTone(other.to_string())),
    };

    Ok(match text {
        Some(text) => (ToneUse::Tsql, format!("{}Hz", text)),
        None => (ToneUse::Off, String::new()),
    })
}
