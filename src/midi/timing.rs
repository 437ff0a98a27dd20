use tracing::debug;

use super::types::{Centiseconds, DurationSlot, NotePair, Score, Tick};

/// Converts note on/off tick pairs into integer centisecond durations.
///
/// A span of `t` ticks lasts `t * tempo / (10000 * ticks_per_quarter)`
/// centiseconds. The division is carried out in integer arithmetic with the
/// remainder held between spans, so the emitted total never drifts from the
/// true elapsed time by more than one centisecond, no matter how long the
/// piece runs. Silent gaps up to 1.5x a 32nd note are folded into the
/// preceding note's duration; longer gaps come out as standalone
/// [`DurationSlot::Rest`] entries.
///
/// One calculator drives one pass; state is not shared between invocations.
pub struct DurationCalculator {
    tempo: u128,
    /// A duration in numerator units divided by this yields centiseconds
    denom: u128,
    /// 16x the absorption threshold, in numerator units
    threshold_num16: u128,
    remainder_num: u128,
}

impl DurationCalculator {
    pub fn new(ticks_per_quarter: u32, tempo: u32) -> Self {
        // A zero resolution would divide by zero below
        let ticks_per_quarter = ticks_per_quarter.max(1);
        let denom = 10_000u128 * ticks_per_quarter as u128;
        // 1.5x a 32nd note; anything shorter is timing jitter, not a rest
        let threshold_num16 = 3 * ticks_per_quarter as u128 * tempo as u128;
        debug!(
            cs_per_tick = tempo as f64 / denom as f64,
            gap_threshold_cs = threshold_num16 as f64 / 16.0 / denom as f64,
            "duration calculator ready"
        );
        DurationCalculator {
            tempo: tempo as u128,
            denom,
            threshold_num16,
            remainder_num: 0,
        }
    }

    pub fn for_score(score: &Score) -> Self {
        Self::new(score.ticks_per_quarter, score.tempo)
    }

    /// Convert on/off tick pairs into emitted duration slots, in order.
    ///
    /// Every pair yields exactly one `Note` slot; `Rest` slots are inserted
    /// where a gap exceeds the absorption threshold. A note's duration is
    /// only emitted once the following gap is known, so the last note is
    /// flushed at end of input.
    pub fn durations(&mut self, notes: &[NotePair]) -> Vec<DurationSlot> {
        let mut slots = Vec::with_capacity(notes.len());
        let mut pending: Option<Centiseconds> = None;
        let mut lead_in: Centiseconds = 0;
        let mut prev_off: Tick = 0;

        for pair in notes {
            let gap_ticks = pair.on.saturating_sub(prev_off);
            let gap_num = gap_ticks as u128 * self.tempo + self.remainder_num;

            if 16 * gap_num <= self.threshold_num16 {
                // Too short to read as a pause: extend the previous note.
                // Before the first note there is nothing to extend, so the
                // gap rides on the upcoming note instead.
                let gap = self.quantize(gap_ticks);
                match pending.take() {
                    Some(prev) => slots.push(DurationSlot::Note(prev + gap)),
                    None => lead_in += gap,
                }
            } else {
                if let Some(prev) = pending.take() {
                    slots.push(DurationSlot::Note(prev));
                }
                slots.push(DurationSlot::Rest(self.quantize(gap_ticks)));
            }

            let note_ticks = pair.off.saturating_sub(pair.on);
            pending = Some(self.quantize(note_ticks) + std::mem::take(&mut lead_in));
            prev_off = pair.off;
        }

        if let Some(prev) = pending {
            slots.push(DurationSlot::Note(prev));
        }
        slots
    }

    /// Fractional centiseconds still carried after the last emitted slot.
    pub fn remainder(&self) -> f64 {
        self.remainder_num as f64 / self.denom as f64
    }

    /// Centisecond gap above which a silence becomes its own rest slot.
    pub fn gap_threshold(&self) -> f64 {
        self.threshold_num16 as f64 / 16.0 / self.denom as f64
    }

    fn quantize(&mut self, ticks: Tick) -> Centiseconds {
        let total = ticks as u128 * self.tempo + self.remainder_num;
        self.remainder_num = total % self.denom;
        (total / self.denom) as Centiseconds
    }
}
