pub type Tick = u64;
pub type Centiseconds = i64;

/// One sung note: the absolute ticks of its note-on and note-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotePair {
    pub on: Tick,
    pub off: Tick,
}

/// Timing information extracted from a decoded event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Ticks per quarter note from the header row
    pub ticks_per_quarter: u32,
    /// Microseconds per quarter note from the tempo row
    pub tempo: u32,
    /// Note on/off pairs in playback order
    pub notes: Vec<NotePair>,
}

impl Score {
    /// Length of one tick in centiseconds.
    pub fn cs_per_tick(&self) -> f64 {
        self.tempo as f64 / (10_000.0 * self.ticks_per_quarter as f64)
    }
}

/// One emitted duration value, in playback order.
///
/// Each `Note` covers one on/off pair; a `Rest` is a silence long enough to
/// stand on its own. Consumers pair slots with syllable tokens by position
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSlot {
    Note(Centiseconds),
    Rest(Centiseconds),
}

impl DurationSlot {
    pub fn centiseconds(&self) -> Centiseconds {
        match *self {
            DurationSlot::Note(cs) | DurationSlot::Rest(cs) => cs,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, DurationSlot::Rest(_))
    }
}
