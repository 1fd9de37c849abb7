//! Versioned JSON records of a match, for the storage layer to round-trip.
//!
//! A record is `{"format_version": 1, "match": {...}}`. The board inside lists exactly
//! the 32 dark squares (`null` for empty ones) and the selected piece's moves keep their
//! generation order, so decoding an encoded match gives back an equal value.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::game::Match;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct RecordOut<'a> {
    format_version: u32,
    #[serde(rename = "match")]
    state: &'a Match,
}

#[derive(Deserialize)]
struct RecordIn {
    format_version: u32,
    #[serde(rename = "match")]
    state: serde_json::Value,
}

pub fn encode(m: &Match) -> Result<String, EngineError> {
    let out = RecordOut {
        format_version: FORMAT_VERSION,
        state: m,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

pub fn decode(text: &str) -> Result<Match, EngineError> {
    let rec: RecordIn = serde_json::from_str(text)?;
    if rec.format_version != FORMAT_VERSION {
        return Err(EngineError::UnsupportedFormat {
            found: rec.format_version,
        });
    }
    Ok(serde_json::from_value(rec.state)?)
}
