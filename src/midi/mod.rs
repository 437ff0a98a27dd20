/// MIDI timing module: turn decoded note events into centisecond durations.
///
/// This module provides functionality to:
/// - Classify decoded comma-separated event rows into a closed set of kinds
/// - Decode Standard MIDI Files into the same row stream
/// - Extract ticks-per-quarter, tempo and note on/off pairs from the rows
/// - Convert the pairs into karaoke display durations with remainder carry
///   and short-gap absorption
mod decode;
mod extract;
mod rows;
mod timing;
mod types;

use std::fs;
use std::path::Path;

pub use decode::rows_from_midi;
pub use extract::extract_score;
pub use rows::{classify, rows_from_csv, RowKind};
pub use timing::DurationCalculator;
pub use types::{Centiseconds, DurationSlot, NotePair, Score, Tick};

/// Errors that can occur while reading and decoding MIDI input
#[derive(Debug, thiserror::Error)]
pub enum MidiError {
    /// IO errors when reading input files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors during MIDI file parsing
    #[error("MIDI parsing error: {0}")]
    MidiParse(String),

    /// SMPTE-timed files carry no tick-per-quarter resolution
    #[error("Unsupported timing format")]
    UnsupportedTiming,
}

/// Read a score from a file path.
///
/// A `.csv` extension selects the decoded-row reader; anything else is
/// parsed as a Standard MIDI File.
pub fn process_midi(path: &str) -> Result<Score, MidiError> {
    let is_csv = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let rows = if is_csv {
        rows_from_csv(&fs::read_to_string(path)?)
    } else {
        rows_from_midi(&fs::read(path)?)?
    };

    Ok(extract_score(rows))
}
