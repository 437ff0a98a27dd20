use midly::{MetaMessage, MidiMessage, Smf, TrackEventKind};
use tracing::debug;

use super::rows::RowKind;
use super::MidiError;

/// Decode a Standard MIDI File into the same classified row stream the CSV
/// reader produces, so one extractor serves both inputs.
///
/// All tracks are merged into a single voice: events are collected with
/// absolute tick timestamps and sorted. Only metrical timing is supported.
pub fn rows_from_midi(midi_data: &[u8]) -> Result<Vec<RowKind>, MidiError> {
    let smf = Smf::parse(midi_data).map_err(|e| MidiError::MidiParse(e.to_string()))?;

    let ticks_per_quarter = match smf.header.timing {
        midly::Timing::Metrical(ticks) => ticks.as_int() as u32,
        _ => return Err(MidiError::UnsupportedTiming),
    };

    let mut tempo: Option<u32> = None;
    let mut note_events = Vec::new();

    for track in smf.tracks.iter() {
        let mut track_time: u64 = 0;
        for event in track {
            track_time += u64::from(event.delta.as_int());
            match event.kind {
                TrackEventKind::Midi { message, .. } => match message {
                    MidiMessage::NoteOn { vel, .. } => {
                        // Velocity 0 is a note-off in disguise
                        note_events.push((track_time, vel.as_int() > 0));
                    }
                    MidiMessage::NoteOff { .. } => {
                        note_events.push((track_time, false));
                    }
                    _ => {}
                },
                TrackEventKind::Meta(MetaMessage::Tempo(tempo_val)) => {
                    tempo = Some(tempo_val.as_int());
                }
                _ => {}
            }
        }
    }

    note_events.sort_by_key(|(time, _)| *time);
    debug!(
        ticks_per_quarter,
        events = note_events.len(),
        "decoded MIDI file"
    );

    let mut rows = vec![RowKind::Header { ticks_per_quarter }];
    if let Some(us_per_quarter) = tempo {
        rows.push(RowKind::Tempo { us_per_quarter });
    }
    rows.extend(note_events.into_iter().map(|(tick, on)| {
        if on {
            RowKind::NoteOn { tick }
        } else {
            RowKind::NoteOff { tick }
        }
    }));

    Ok(rows)
}
