use super::types::Tick;

/// A classified event row.
///
/// Decoded MIDI comes in as comma-separated rows in the midicsv layout:
/// `track, time, marker, params...`. Only four markers matter here; anything
/// else, including rows that fail to parse, is `Other` and gets dropped by
/// the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header { ticks_per_quarter: u32 },
    Tempo { us_per_quarter: u32 },
    NoteOn { tick: Tick },
    NoteOff { tick: Tick },
    Other,
}

/// Classify a single decoded event row.
///
/// A `Note_on_c` with velocity 0 is a note-off in disguise and is classified
/// as one.
pub fn classify(line: &str) -> RowKind {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let marker = match fields.get(2) {
        Some(m) => *m,
        None => return RowKind::Other,
    };

    match marker {
        // track, 0, Header, format, ntracks, division
        "Header" => match fields.get(5).and_then(|f| f.parse().ok()) {
            Some(ticks_per_quarter) => RowKind::Header { ticks_per_quarter },
            None => RowKind::Other,
        },
        // track, time, Tempo, microseconds-per-quarter
        "Tempo" => match fields.get(3).and_then(|f| f.parse().ok()) {
            Some(us_per_quarter) => RowKind::Tempo { us_per_quarter },
            None => RowKind::Other,
        },
        // track, time, Note_on_c, channel, note, velocity
        "Note_on_c" | "Note_off_c" => {
            let tick = match fields.get(1).and_then(|f| f.parse().ok()) {
                Some(t) => t,
                None => return RowKind::Other,
            };
            let velocity: u32 = fields
                .get(5)
                .and_then(|f| f.parse().ok())
                .unwrap_or_default();
            if marker == "Note_on_c" && velocity > 0 {
                RowKind::NoteOn { tick }
            } else {
                RowKind::NoteOff { tick }
            }
        }
        _ => RowKind::Other,
    }
}

/// Classify every line of a decoded CSV event dump.
pub fn rows_from_csv(text: &str) -> Vec<RowKind> {
    text.lines().map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_header() {
        assert_eq!(
            classify("0, 0, Header, 1, 2, 480"),
            RowKind::Header {
                ticks_per_quarter: 480
            }
        );
    }

    #[test]
    fn test_classify_tempo() {
        assert_eq!(
            classify("1, 0, Tempo, 500000"),
            RowKind::Tempo {
                us_per_quarter: 500000
            }
        );
    }

    #[test]
    fn test_classify_note_events() {
        assert_eq!(
            classify("1, 240, Note_on_c, 0, 60, 81"),
            RowKind::NoteOn { tick: 240 }
        );
        assert_eq!(
            classify("1, 480, Note_off_c, 0, 60, 0"),
            RowKind::NoteOff { tick: 480 }
        );
    }

    #[test]
    fn test_velocity_zero_note_on_is_off() {
        assert_eq!(
            classify("1, 480, Note_on_c, 0, 60, 0"),
            RowKind::NoteOff { tick: 480 }
        );
    }

    #[test]
    fn test_unrecognized_rows_are_other() {
        assert_eq!(classify("1, 0, Start_track"), RowKind::Other);
        assert_eq!(classify("1, 0, Title_t, \"song\""), RowKind::Other);
        assert_eq!(classify(""), RowKind::Other);
        assert_eq!(classify("garbage"), RowKind::Other);
        // Malformed numeric fields fall through to Other as well
        assert_eq!(classify("0, 0, Header, 1, 2, x"), RowKind::Other);
    }
}
