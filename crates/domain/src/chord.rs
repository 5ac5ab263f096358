use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::DomainError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Dominant7,
    Major7,
    Minor7,
}

impl ChordType {
    pub const ALL: [ChordType; 7] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Dominant7,
        ChordType::Major7,
        ChordType::Minor7,
    ];

    /// Semitone offsets from the root; the first entry is always the root.
    pub fn offsets(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChordType::Major => "maj",
            ChordType::Minor => "min",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Dominant7 => "7",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "m7",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            ChordType::Major => "major triad",
            ChordType::Minor => "minor triad",
            ChordType::Diminished => "diminished triad",
            ChordType::Augmented => "augmented triad",
            ChordType::Dominant7 => "dominant seventh",
            ChordType::Major7 => "major seventh",
            ChordType::Minor7 => "minor seventh",
        }
    }

    pub fn random(rng: &mut dyn RandomSource) -> Self {
        Self::ALL[rng.choose_index(Self::ALL.len())]
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|chord| chord.label() == s)
            .ok_or_else(|| DomainError::unknown_label("chord", s))
    }
}
