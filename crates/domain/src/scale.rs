use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::DomainError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScaleType {
    Major,
    /// Natural minor (aeolian).
    Minor,
    Dorian,
}

impl ScaleType {
    pub const ALL: [ScaleType; 3] = [ScaleType::Major, ScaleType::Minor, ScaleType::Dorian];

    /// Seven step sizes in semitones; they always sum to an octave.
    pub fn steps(self) -> [u8; 7] {
        match self {
            ScaleType::Major => [2, 2, 1, 2, 2, 2, 1],
            ScaleType::Minor => [2, 1, 2, 2, 1, 2, 2],
            ScaleType::Dorian => [2, 1, 2, 2, 2, 1, 2],
        }
    }

    /// Cumulative offsets of degrees 1 through 8 from the root.
    pub fn degree_offsets(self) -> [u8; 8] {
        let mut offsets = [0u8; 8];
        for (degree, step) in self.steps().into_iter().enumerate() {
            offsets[degree + 1] = offsets[degree] + step;
        }
        offsets
    }

    pub fn label(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
            ScaleType::Dorian => "dorian",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            ScaleType::Major => "major (ionian)",
            ScaleType::Minor => "natural minor (aeolian)",
            ScaleType::Dorian => "dorian mode",
        }
    }

    pub fn random(rng: &mut dyn RandomSource) -> Self {
        Self::ALL[rng.choose_index(Self::ALL.len())]
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScaleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scale| scale.label() == s)
            .ok_or_else(|| DomainError::unknown_label("scale", s))
    }
}
