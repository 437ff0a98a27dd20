//! midi2ass: karaoke subtitle timing derived from MIDI note events.
//!
//! The pipeline reads a single-voice MIDI performance (a `.mid` file or a
//! decoded comma-separated event dump), converts each note into an integer
//! centisecond display duration, pairs the durations with syllables from a
//! `|`-delimited lyrics file, and renders the result as an ASS karaoke
//! script.

pub mod config;
pub mod lyrics;
pub mod midi;
pub mod subtitle;
