//! Lyrics-file splitting: one subtitle line per text line, syllables
//! separated by `|`.

/// One syllable-sized piece of display text.
///
/// `Sung` pieces each consume one note duration; `Silent` pieces (split-off
/// punctuation) are rendered with a zero-length highlight and consume no
/// time at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyllablePiece {
    Sung(String),
    Silent(String),
}

/// One line of the lyrics file, already split into pieces.
///
/// A line that is empty after trimming carries no pieces and acts as a rest
/// marker: it still consumes one duration slot when lines are composed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricLine {
    pub pieces: Vec<SyllablePiece>,
}

impl LyricLine {
    pub fn is_blank(&self) -> bool {
        self.pieces.is_empty()
    }
}

/// Split a lyrics file into lines of syllable pieces.
///
/// With `split_punctuation` set, trailing punctuation of each syllable is
/// moved into its own `Silent` piece so the highlight sweep ends with the
/// last letter rather than lingering on a comma.
pub fn parse_lyrics(text: &str, split_punctuation: bool) -> Vec<LyricLine> {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                return LyricLine { pieces: Vec::new() };
            }
            let mut pieces = Vec::new();
            for token in line.split('|').filter(|t| !t.is_empty()) {
                if split_punctuation {
                    pieces.extend(split_token(token));
                } else {
                    pieces.push(SyllablePiece::Sung(token.to_string()));
                }
            }
            LyricLine { pieces }
        })
        .collect()
}

/// Number of duration slots a lyrics sheet consumes: one per sung piece,
/// plus one per blank line.
pub fn slot_count(lines: &[LyricLine]) -> usize {
    lines
        .iter()
        .map(|line| {
            if line.is_blank() {
                1
            } else {
                line.pieces
                    .iter()
                    .filter(|p| matches!(p, SyllablePiece::Sung(_)))
                    .count()
            }
        })
        .sum()
}

fn split_token(token: &str) -> Vec<SyllablePiece> {
    let trimmed = token.trim_end();
    let sung_len = trimmed
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .len();

    if sung_len == trimmed.len() {
        return vec![SyllablePiece::Sung(token.to_string())];
    }
    let (sung, silent) = token.split_at(sung_len);
    if sung.is_empty() {
        return vec![SyllablePiece::Silent(silent.to_string())];
    }
    vec![
        SyllablePiece::Sung(sung.to_string()),
        SyllablePiece::Silent(silent.to_string()),
    ]
}
