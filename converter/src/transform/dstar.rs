//! D-STAR call sign rules.
//!
//! A D-STAR memory carries two 8-character call signs: the repeater module
//! (call sign padded to 7 characters plus the band letter) and the gateway
//! (same padding, suffix `G`).

use crate::error::{DeriveError, DeriveResult};

/// Width of a D-STAR call sign field.
pub const DSTAR_CALLSIGN_LEN: usize = 8;

/// Module suffix of the internet gateway.
pub const GATEWAY_SUFFIX: char = 'G';

/// D-STAR repeater module, identified by band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DstarBand {
    /// 23cm
    A,
    /// 70cm
    B,
    /// 2m
    C,
}

impl DstarBand {
    /// Band for a transmit frequency in MHz. Range bounds are inclusive.
    pub fn from_mhz(freq_mhz: f64) -> Option<Self> {
        match freq_mhz {
            f if (1240.0..=1300.0).contains(&f) => Some(Self::A),
            f if (430.0..=440.0).contains(&f) => Some(Self::B),
            f if (144.0..=146.0).contains(&f) => Some(Self::C),
            _ => None,
        }
    }

    pub fn suffix(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
        }
    }
}

/// Module letter for a transmit frequency in MHz.
pub fn dstar_freq_suffix(freq_mhz: f64) -> DeriveResult<char> {
    DstarBand::from_mhz(freq_mhz)
        .map(|band| band.suffix())
        .ok_or(DeriveError::UnknownFrequency(freq_mhz))
}

/// Pad a call sign to the D-STAR field with `suffix` in the last position.
///
/// Full-width call signs are returned as-is. Length is counted in characters.
pub fn dstar_callsign(callsign: &str, suffix: char) -> DeriveResult<String> {
    let len = callsign.chars().count();
    if len > DSTAR_CALLSIGN_LEN {
        return Err(DeriveError::CallsignTooLong(callsign.to_string()));
    }
    if len == DSTAR_CALLSIGN_LEN {
        return Ok(callsign.to_string());
    }
    Ok(format!(
        "{callsign:<width$}{suffix}",
        width = DSTAR_CALLSIGN_LEN - 1
    ))
}
