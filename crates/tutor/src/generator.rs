use tracing::debug;

use eardrill_domain::{ChordType, IntervalLabel, Pitch, PitchAlphabet, RandomSource, ScaleType};

use crate::challenge::{Challenge, Mode};
use crate::error::TutorError;

/// Root margins `(low, high)` keep most challenges clear of the alphabet
/// edges. Clamping can still occur for wide chords and scales.
pub const INTERVAL_ROOT_MARGINS: (usize, usize) = (6, 6);
pub const CHORD_ROOT_MARGINS: (usize, usize) = (6, 8);
pub const SCALE_ROOT_MARGINS: (usize, usize) = (6, 8);

#[derive(Clone, Debug, Default)]
pub struct ChallengeGenerator {
    alphabet: PitchAlphabet,
}

impl ChallengeGenerator {
    pub fn new(alphabet: PitchAlphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &PitchAlphabet {
        &self.alphabet
    }

    pub fn generate(&self, mode: Mode, rng: &mut dyn RandomSource) -> Result<Challenge, TutorError> {
        let challenge = match mode {
            Mode::Interval => {
                let (low, high) = INTERVAL_ROOT_MARGINS;
                let root = self.alphabet.random_root_in_range(low, high, rng)?;
                self.interval(root, IntervalLabel::random(rng))
            }
            Mode::Chord => {
                let (low, high) = CHORD_ROOT_MARGINS;
                let root = self.alphabet.random_root_in_range(low, high, rng)?;
                self.chord(root, ChordType::random(rng))
            }
            Mode::Scale => {
                let (low, high) = SCALE_ROOT_MARGINS;
                let root = self.alphabet.random_root_in_range(low, high, rng)?;
                self.scale(root, ScaleType::random(rng))
            }
        };
        debug!(%mode, answer = %challenge.correct_label(), "generated challenge");
        Ok(challenge)
    }

    pub fn interval(&self, root: Pitch, label: IntervalLabel) -> Challenge {
        Challenge::Interval {
            root,
            label,
            second: self.alphabet.transpose(root, label.semitones() as i32),
        }
    }

    pub fn chord(&self, root: Pitch, chord_type: ChordType) -> Challenge {
        let notes = chord_type
            .offsets()
            .iter()
            .map(|offset| self.alphabet.transpose(root, *offset as i32))
            .collect();
        Challenge::Chord {
            root,
            chord_type,
            notes,
        }
    }

    pub fn scale(&self, root: Pitch, scale_type: ScaleType) -> Challenge {
        let notes = scale_type
            .degree_offsets()
            .iter()
            .map(|offset| self.alphabet.transpose(root, *offset as i32))
            .collect();
        Challenge::Scale {
            root,
            scale_type,
            notes,
        }
    }
}
