//! Radio-programming CSV output.
//!
//! Column layout follows the D-STAR memory import format: 17 columns, comma
//! separated, `\n` terminated. Fields are quoted only when they contain a
//! delimiter, quote or line break.

use std::io::Write;

use crate::config::CsvProfile;
use crate::error::ConvertResult;
use crate::models::RepeaterRow;

/// Header line columns.
pub const CSV_HEADER: [&str; 17] = [
    "Group No",
    "Group Name",
    "Name",
    "Sub Name",
    "Repeater Call Sign",
    "Gateway Call Sign",
    "Frequency",
    "Dup",
    "Offset",
    "Mode",
    "TONE",
    "Repeater Tone",
    "RPT1USE",
    "Position",
    "Latitude",
    "Longitude",
    "UTC Offset",
];

/// Column values of one row, in header order.
pub fn row_record(row: &RepeaterRow, profile: &CsvProfile) -> [String; 17] {
    [
        profile.group_no.to_string(),
        profile.group_name.clone(),
        row.name.clone(),
        row.subname.clone(),
        row.callsign.clone(),
        row.gw_callsign.clone(),
        row.rx_freq.to_string(),
        row.shift_dir.as_str().to_string(),
        row.shift_freq_text(),
        row.mode.as_str().to_string(),
        row.tone_use.as_str().to_string(),
        row.tone_freq.clone(),
        row.mode.rpt1use().to_string(),
        profile.position.clone(),
        row.latitude.to_string(),
        row.longitude.to_string(),
        profile.utc_offset.clone(),
    ]
}

/// Write the header and every row to `writer`.
pub fn write_csv<W: Write>(writer: W, rows: &[RepeaterRow], profile: &CsvProfile) -> ConvertResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record(row_record(row, profile))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render the CSV document as a string.
pub fn to_csv_string(rows: &[RepeaterRow], profile: &CsvProfile) -> ConvertResult<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows, profile)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog_str;
    use crate::config::RowOrder;
    use crate::transform::pipeline::{convert_catalog, derive_row};
    use serde_json::json;

    const HEADER_LINE: &str = "Group No,Group Name,Name,Sub Name,Repeater Call Sign,Gateway Call Sign,Frequency,Dup,Offset,Mode,TONE,Repeater Tone,RPT1USE,Position,Latitude,Longitude,UTC Offset";

    fn pretoria() -> RepeaterRow {
        let entry = serde_json::from_value(json!({
            "callsign": "ZS6PTA", "mode": { "dstar": {} },
            "tx": 145.1125, "rx": 145.7125, "tone": 88.5,
            "loc": "ПРЕТОРИЯ", "lat": -25.692333, "lon": 28.242333
        }))
        .unwrap();
        derive_row("Pretoria", &entry).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_input() {
        let out = to_csv_string(&[], &CsvProfile::default()).unwrap();
        assert_eq!(out, format!("{}\n", HEADER_LINE));
    }

    #[test]
    fn test_dstar_line() {
        let out = to_csv_string(&[pretoria()], &CsvProfile::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER_LINE);
        assert_eq!(
            lines[1],
            "1,LZ,Pretoria,PRETORIA,ZS6PTA C,ZS6PTA G,145.7125,DUP-,0.600000,DV,TSQL,88.5Hz,YES,Approximate,-25.692333,28.242333,+3:00"
        );
    }

    #[test]
    fn test_fm_line_has_empty_fields() {
        let catalog = parse_catalog_str(
            r#"{ "repeaters": { "Vitosha": { "callsign": "LZ0BOT", "mode": { "analog": {} },
                 "tx": 145.6, "rx": 145.0, "loc": "Витоша", "lat": 42.56, "lon": 23 } } }"#,
        )
        .unwrap();
        let conversion = convert_catalog(&catalog, RowOrder::Insertion).unwrap();
        let out = to_csv_string(&conversion.rows, &CsvProfile::default()).unwrap();

        assert_eq!(
            out.lines().nth(1).unwrap(),
            "1,LZ,Vitosha,VITOSHA,LZ0BOT,,145.0,DUP+,0.600000,FM,OFF,,NO,Approximate,42.56,23,+3:00"
        );
    }

    #[test]
    fn test_every_line_has_seventeen_columns() {
        let out = to_csv_string(&[pretoria(), pretoria()], &CsvProfile::default()).unwrap();
        let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(out.as_bytes());
        for record in reader.records() {
            assert_eq!(record.unwrap().len(), 17);
        }
    }

    #[test]
    fn test_comma_in_name_is_quoted() {
        let mut row = pretoria();
        row.name = "Sofia, Kopitoto".into();
        let out = to_csv_string(&[row], &CsvProfile::default()).unwrap();
        assert!(out.contains("\"Sofia, Kopitoto\""));
    }

    #[test]
    fn test_custom_profile() {
        let profile = CsvProfile {
            group_no: 7,
            group_name: "ZS".into(),
            position: "Exact".into(),
            utc_offset: "+2:00".into(),
        };
        let record = row_record(&pretoria(), &profile);
        assert_eq!(record[0], "7");
        assert_eq!(record[1], "ZS");
        assert_eq!(record[13], "Exact");
        assert_eq!(record[16], "+2:00");
    }
}
