use std::fmt;

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::DomainError;

pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A single tone in a [`PitchAlphabet`], identified by its position.
///
/// Only an alphabet hands these out, so there is no `Deserialize`.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pitch {
    index: usize,
    midi: u8,
}

impl Pitch {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn midi(&self) -> u8 {
        self.midi
    }

    /// Pitch class name without octave, e.g. `C#`.
    pub fn pitch_class(&self) -> &'static str {
        PITCH_CLASS_NAMES[(self.midi % 12) as usize]
    }

    /// Scientific pitch notation octave (MIDI 60 is C4).
    pub fn octave(&self) -> i8 {
        (self.midi / 12) as i8 - 1
    }

    pub fn name(&self) -> String {
        format!("{}{}", self.pitch_class(), self.octave())
    }

    /// Equal-tempered frequency with A4 at 440 Hz.
    pub fn frequency_hz(&self) -> f64 {
        440.0 * 2f64.powf((self.midi as f64 - 69.0) / 12.0)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}

/// Parses a sharp-spelled pitch name such as `"F#4"` into its MIDI note.
pub fn midi_from_name(name: &str) -> Result<u8, DomainError> {
    let unknown = || DomainError::unknown_label("pitch", name);
    let split = name
        .find(|c: char| c.is_ascii_digit() || c == '-')
        .ok_or_else(unknown)?;
    let (class, octave) = name.split_at(split);
    let class = PITCH_CLASS_NAMES
        .iter()
        .position(|candidate| *candidate == class)
        .ok_or_else(unknown)? as i32;
    let octave: i32 = octave.parse().map_err(|_| unknown())?;
    let midi = (octave + 1) * 12 + class;
    u8::try_from(midi)
        .ok()
        .filter(|midi| *midi <= 127)
        .ok_or_else(unknown)
}

/// Contiguous chromatic run of pitches, ascending by one semitone per index.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "AlphabetBounds")]
pub struct PitchAlphabet {
    lowest_midi: u8,
    len: usize,
}

#[derive(Deserialize)]
struct AlphabetBounds {
    lowest_midi: u8,
    len: usize,
}

impl TryFrom<AlphabetBounds> for PitchAlphabet {
    type Error = DomainError;

    fn try_from(bounds: AlphabetBounds) -> Result<Self, Self::Error> {
        PitchAlphabet::new(bounds.lowest_midi, bounds.len)
    }
}

impl PitchAlphabet {
    /// C3 (MIDI 48) through D#5 (MIDI 75).
    pub const STANDARD: PitchAlphabet = PitchAlphabet {
        lowest_midi: 48,
        len: 28,
    };

    pub fn new(lowest_midi: u8, len: usize) -> Result<Self, DomainError> {
        if len == 0 {
            return Err(DomainError::invalid_range("pitch alphabet cannot be empty"));
        }
        if lowest_midi as usize + len - 1 > 127 {
            return Err(DomainError::invalid_range(
                "pitch alphabet must stay within MIDI note 127",
            ));
        }
        Ok(Self { lowest_midi, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last_index(&self) -> usize {
        self.len - 1
    }

    pub fn get(&self, index: usize) -> Option<Pitch> {
        (index < self.len).then(|| self.pitch_unchecked(index))
    }

    pub fn first(&self) -> Pitch {
        self.pitch_unchecked(0)
    }

    pub fn last(&self) -> Pitch {
        self.pitch_unchecked(self.last_index())
    }

    pub fn iter(&self) -> impl Iterator<Item = Pitch> + '_ {
        (0..self.len).map(move |index| self.pitch_unchecked(index))
    }

    /// Looks up a pitch by its name, e.g. `"F#4"`.
    pub fn find(&self, name: &str) -> Result<Pitch, DomainError> {
        let midi = midi_from_name(name)?;
        midi.checked_sub(self.lowest_midi)
            .and_then(|index| self.get(index as usize))
            .ok_or_else(|| DomainError::unknown_label("pitch", name))
    }

    /// Maps any signed index onto the alphabet, pinning it to the nearest
    /// boundary when it falls outside. Every transposition goes through here.
    pub fn clamp_index(&self, index: i64) -> Pitch {
        let clamped = index.clamp(0, self.last_index() as i64) as usize;
        self.pitch_unchecked(clamped)
    }

    /// Moves `base` by `semitones`, clamping at the alphabet edges rather
    /// than failing. Near the edges the result may be musically wrong.
    pub fn transpose(&self, base: Pitch, semitones: i32) -> Pitch {
        self.clamp_index(base.index as i64 + semitones as i64)
    }

    /// Uniformly picks a pitch, skipping `margin_low` entries at the bottom
    /// and `margin_high` at the top.
    pub fn random_root_in_range(
        &self,
        margin_low: usize,
        margin_high: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Pitch, DomainError> {
        let excluded = margin_low.saturating_add(margin_high);
        if excluded >= self.len {
            return Err(DomainError::invalid_range(format!(
                "margins {margin_low}/{margin_high} leave no candidates in a {}-pitch alphabet",
                self.len
            )));
        }
        let candidates = self.len - excluded;
        Ok(self.pitch_unchecked(margin_low + rng.choose_index(candidates)))
    }

    fn pitch_unchecked(&self, index: usize) -> Pitch {
        Pitch {
            index,
            midi: self.lowest_midi + index as u8,
        }
    }
}

impl Default for PitchAlphabet {
    fn default() -> Self {
        Self::STANDARD
    }
}
