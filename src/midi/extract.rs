use tracing::debug;

use super::rows::RowKind;
use super::types::{NotePair, Score, Tick};

// 120 BPM, the usual fallback when no tempo row is present
const DEFAULT_TEMPO: u32 = 500_000;
const DEFAULT_TICKS_PER_QUARTER: u32 = 480;

/// Fold a classified row stream into a [`Score`].
///
/// Rows are assumed to describe a single voice whose note events alternate
/// on/off; this is not validated. A note-on opens a pair, the next note-off
/// closes it, and events that do not fit that shape are dropped. A later
/// tempo row silently overrides an earlier one.
pub fn extract_score<I>(rows: I) -> Score
where
    I: IntoIterator<Item = RowKind>,
{
    let mut ticks_per_quarter = DEFAULT_TICKS_PER_QUARTER;
    let mut tempo = DEFAULT_TEMPO;
    let mut notes = Vec::new();
    let mut open: Option<Tick> = None;

    for row in rows {
        match row {
            RowKind::Header { ticks_per_quarter: t } => ticks_per_quarter = t,
            RowKind::Tempo { us_per_quarter } => tempo = us_per_quarter,
            RowKind::NoteOn { tick } => {
                if open.is_none() {
                    open = Some(tick);
                }
            }
            RowKind::NoteOff { tick } => {
                if let Some(on) = open.take() {
                    notes.push(NotePair { on, off: tick });
                }
            }
            RowKind::Other => {}
        }
    }

    debug!(
        ticks_per_quarter,
        tempo,
        notes = notes.len(),
        "extracted score"
    );

    Score {
        ticks_per_quarter,
        tempo,
        notes,
    }
}
