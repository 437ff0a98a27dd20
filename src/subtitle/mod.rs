/// Subtitle assembly: pair computed durations with lyrics and render ASS.
mod ass;
mod compose;

pub use ass::{format_ass_time, karaoke_text, render_script, strip_karaoke_tags, SubtitleError};
pub use compose::{compose_lines, SubtitleLine, TimedSyllable};
