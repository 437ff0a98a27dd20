use crate::lyrics::{LyricLine, SyllablePiece};
use crate::midi::{Centiseconds, DurationSlot};

use super::ass;

/// One display piece with the centiseconds its highlight lasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedSyllable {
    pub duration: Centiseconds,
    pub text: String,
}

/// One timed dialogue entry, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleLine {
    pub start: Centiseconds,
    pub end: Centiseconds,
    pub style: String,
    /// Karaoke-tagged text, e.g. `{\k25}Hel{\k30}lo`
    pub text: String,
}

impl SubtitleLine {
    /// Render as an `[Events]` dialogue row.
    pub fn to_dialogue_line(&self) -> String {
        format!(
            "Dialogue: 0,{},{},{},,0,0,0,,{}",
            ass::format_ass_time(self.start),
            ass::format_ass_time(self.end),
            self.style,
            self.text
        )
    }

    /// True when nothing visible remains once karaoke tags are stripped.
    pub fn is_blank(&self) -> bool {
        ass::strip_karaoke_tags(&self.text).trim().is_empty()
    }
}

/// Pair duration slots with syllable pieces and fold them into timed lines.
///
/// The two sequences are merged by position: every sung piece takes the next
/// duration slot, a blank lyric line takes one slot as a rest, and silent
/// pieces take none. Each line starts where the previous one ended; the
/// initial offset is supplied by the caller.
///
/// Blank lines still produce an entry (its tag-only text advances the clock);
/// callers that do not want them filter with [`SubtitleLine::is_blank`].
pub fn compose_lines(
    lines: &[LyricLine],
    durations: &[DurationSlot],
    start: Centiseconds,
    style: &str,
) -> Vec<SubtitleLine> {
    let mut slots = durations.iter().map(DurationSlot::centiseconds);
    let mut start = start;
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        let mut pieces = Vec::with_capacity(line.pieces.len().max(1));
        if line.is_blank() {
            pieces.push(TimedSyllable {
                duration: slots.next().unwrap_or(0),
                text: String::new(),
            });
        } else {
            for piece in &line.pieces {
                match piece {
                    SyllablePiece::Sung(text) => pieces.push(TimedSyllable {
                        duration: slots.next().unwrap_or(0),
                        text: text.clone(),
                    }),
                    SyllablePiece::Silent(text) => pieces.push(TimedSyllable {
                        duration: 0,
                        text: text.clone(),
                    }),
                }
            }
        }

        let total: Centiseconds = pieces.iter().map(|p| p.duration).sum();
        out.push(SubtitleLine {
            start,
            end: start + total,
            style: style.to_string(),
            text: ass::karaoke_text(&pieces),
        });
        start += total;
    }

    out
}
