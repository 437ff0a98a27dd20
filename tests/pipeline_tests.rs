// Integration tests for the MIDI-to-ASS conversion pipeline
//
// These tests verify the end-to-end flow: classifying decoded event rows,
// extracting the score, computing durations, pairing them with lyrics, and
// rendering timed dialogue lines with karaoke tags.

use midi2ass::config::SubtitleConfig;
use midi2ass::lyrics;
use midi2ass::midi::{self, DurationCalculator, DurationSlot};
use midi2ass::subtitle;

use test_utils::SAMPLE_CSV;

fn sample_durations() -> Vec<DurationSlot> {
    let score = midi::extract_score(midi::rows_from_csv(SAMPLE_CSV));
    DurationCalculator::for_score(&score).durations(&score.notes)
}

/// Test duration derivation from a decoded CSV dump.
///
/// This test verifies:
/// - Row classification and score extraction from midicsv-style text
/// - Two back-to-back eighth notes, a standalone rest, and a quarter note
#[test]
fn test_sample_csv_durations() {
    assert_eq!(
        sample_durations(),
        vec![
            DurationSlot::Note(25),
            DurationSlot::Note(25),
            DurationSlot::Rest(50),
            DurationSlot::Note(50),
        ]
    );
}

/// Test composing subtitle lines against the sample score.
///
/// This test verifies:
/// - Sung syllables and the blank line each consume one duration slot
/// - Line start/end offsets chain through the blank line's rest
/// - Blank lines are flagged for post-hoc filtering
#[test]
fn test_compose_lines() {
    let durations = sample_durations();
    let lines = lyrics::parse_lyrics("Hel|lo\n\nworld", false);
    assert_eq!(lyrics::slot_count(&lines), durations.len());

    let composed = subtitle::compose_lines(&lines, &durations, 0, "Karaoke");
    assert_eq!(composed.len(), 3);

    assert_eq!(composed[0].start, 0);
    assert_eq!(composed[0].end, 50);
    assert_eq!(composed[0].text, "{\\k25}Hel{\\k25}lo");
    assert!(!composed[0].is_blank());

    // The blank lyric line soaks up the rest and advances the clock
    assert_eq!(composed[1].start, 50);
    assert_eq!(composed[1].end, 100);
    assert!(composed[1].is_blank());

    assert_eq!(composed[2].start, 100);
    assert_eq!(composed[2].end, 150);
    assert_eq!(composed[2].text, "{\\k50}world");
}

/// Test punctuation splitting through the whole pipeline.
///
/// This test verifies:
/// - Trailing punctuation becomes a zero-length karaoke tag
/// - The zero-duration piece consumes no duration slot
#[test]
fn test_punctuation_pieces_consume_no_time() {
    let durations = sample_durations();
    let lines = lyrics::parse_lyrics("Hel|lo,\n\nworld", true);
    assert_eq!(lyrics::slot_count(&lines), durations.len());

    let composed = subtitle::compose_lines(&lines, &durations, 0, "Karaoke");
    assert_eq!(composed[0].text, "{\\k25}Hel{\\k25}lo{\\k0},");
    assert_eq!(composed[0].end, 50);
    // "world" still gets the quarter note, unshifted
    assert_eq!(composed[2].text, "{\\k50}world");
}

/// Test the start offset and timestamp formatting.
///
/// This test verifies:
/// - The caller-supplied start offset shifts every line
/// - Timestamps render as H:MM:SS.CC, truncated centiseconds
#[test]
fn test_dialogue_timestamps() {
    let durations = sample_durations();
    let lines = lyrics::parse_lyrics("Hel|lo\n\nworld", false);
    let composed = subtitle::compose_lines(&lines, &durations, 150, "Lead");

    assert_eq!(
        composed[0].to_dialogue_line(),
        "Dialogue: 0,0:00:01.50,0:00:02.00,Lead,,0,0,0,,{\\k25}Hel{\\k25}lo"
    );
    assert_eq!(
        composed[2].to_dialogue_line(),
        "Dialogue: 0,0:00:02.50,0:00:03.00,Lead,,0,0,0,,{\\k50}world"
    );
}

/// Test full script rendering.
///
/// This test verifies:
/// - The script carries the configured style and play resolution
/// - Filtered rendering drops blank lines but keeps their time
#[test]
fn test_render_script() {
    let durations = sample_durations();
    let lines = lyrics::parse_lyrics("Hel|lo\n\nworld", false);
    let composed = subtitle::compose_lines(&lines, &durations, 0, "Karaoke");
    let visible: Vec<_> = composed.into_iter().filter(|l| !l.is_blank()).collect();

    let config = SubtitleConfig::default();
    let script = subtitle::render_script(&visible, &config).expect("failed to render script");

    assert!(script.contains("[Script Info]"));
    assert!(script.contains("PlayResX: 1280"));
    assert!(script.contains("Style: Karaoke,Arial,48,"));
    assert!(script.contains("[Events]"));
    assert_eq!(script.matches("Dialogue:").count(), 2);
    // The gap left by the filtered blank line is still there
    assert!(script.contains("Dialogue: 0,0:00:01.00,0:00:01.50,Karaoke,,0,0,0,,{\\k50}world"));
}

/// Test slot starvation.
///
/// This test verifies:
/// - Extra syllables beyond the available notes get zero durations rather
///   than panicking (garbage in, garbage out)
#[test]
fn test_more_syllables_than_notes() {
    let durations = vec![DurationSlot::Note(25)];
    let lines = lyrics::parse_lyrics("one|two|three", false);
    let composed = subtitle::compose_lines(&lines, &durations, 0, "Karaoke");
    assert_eq!(composed[0].text, "{\\k25}one{\\k0}two{\\k0}three");
    assert_eq!(composed[0].end, 25);
}
