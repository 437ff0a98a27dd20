use std::fmt::Write;

use crate::config::SubtitleConfig;
use crate::midi::Centiseconds;

use super::compose::{SubtitleLine, TimedSyllable};

/// Errors that can occur while rendering the subtitle script
#[derive(Debug, thiserror::Error)]
pub enum SubtitleError {
    /// String formatting errors
    #[error("format error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Build the karaoke-tagged text for one line: `{\k<cs>}` before each piece.
///
/// Zero-duration pieces come out as `{\k0}`, marking text that is shown but
/// never holds the highlight.
pub fn karaoke_text(syllables: &[TimedSyllable]) -> String {
    let mut text = String::new();
    for syl in syllables {
        text.push_str(&format!("{{\\k{}}}", syl.duration));
        text.push_str(&syl.text);
    }
    text
}

/// Format a running centisecond offset as `H:MM:SS.CC`.
///
/// The fractional part is truncated from the running total, never rounded,
/// so consecutive line boundaries stay consistent with each other.
pub fn format_ass_time(cs: Centiseconds) -> String {
    let cs = cs.max(0);
    let total_seconds = cs / 100;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;
    format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, cs % 100)
}

/// Remove `{\k<digits>}` tags, leaving only the visible text.
pub fn strip_karaoke_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find("{\\k") {
        let after = &rest[open + 3..];
        match after.find('}') {
            Some(close) if after[..close].bytes().all(|b| b.is_ascii_digit()) => {
                out.push_str(&rest[..open]);
                rest = &after[close + 1..];
            }
            _ => {
                out.push_str(&rest[..open + 3]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Render a complete ASS script: script info, the configured style, and one
/// dialogue event per line.
pub fn render_script(
    lines: &[SubtitleLine],
    config: &SubtitleConfig,
) -> Result<String, SubtitleError> {
    let mut script = String::with_capacity(lines.len() * 120 + 1024);

    writeln!(script, "[Script Info]")?;
    writeln!(script, "ScriptType: v4.00+")?;
    writeln!(script, "PlayResX: {}", config.play_res_x)?;
    writeln!(script, "PlayResY: {}", config.play_res_y)?;
    writeln!(script)?;

    writeln!(script, "[V4+ Styles]")?;
    writeln!(
        script,
        "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding"
    )?;
    writeln!(
        script,
        "Style: {},{},{},&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,1,2,10,10,10,1",
        config.style, config.font, config.font_size
    )?;
    writeln!(script)?;

    writeln!(script, "[Events]")?;
    writeln!(
        script,
        "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text"
    )?;
    for line in lines {
        writeln!(script, "{}", line.to_dialogue_line())?;
    }

    Ok(script)
}
