use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use eardrill_domain::{ChordType, IntervalLabel, Pitch, ScaleType};

use crate::error::TutorError;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Interval,
    Chord,
    Scale,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Interval, Mode::Chord, Mode::Scale];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Interval => "interval",
            Mode::Chord => "chord",
            Mode::Scale => "scale",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = TutorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.label() == s)
            .ok_or_else(|| TutorError::UnknownMode(s.to_string()))
    }
}

/// One generated drill round. Replaced wholesale for the next round.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum Challenge {
    Interval {
        root: Pitch,
        label: IntervalLabel,
        second: Pitch,
    },
    Chord {
        root: Pitch,
        chord_type: ChordType,
        notes: Vec<Pitch>,
    },
    Scale {
        root: Pitch,
        scale_type: ScaleType,
        /// Degrees 1 through 8.
        notes: Vec<Pitch>,
    },
}

impl Challenge {
    pub fn mode(&self) -> Mode {
        match self {
            Challenge::Interval { .. } => Mode::Interval,
            Challenge::Chord { .. } => Mode::Chord,
            Challenge::Scale { .. } => Mode::Scale,
        }
    }

    pub fn root(&self) -> Pitch {
        match self {
            Challenge::Interval { root, .. }
            | Challenge::Chord { root, .. }
            | Challenge::Scale { root, .. } => *root,
        }
    }

    /// Every pitch the challenge sounds, in playing order.
    pub fn pitches(&self) -> Vec<Pitch> {
        match self {
            Challenge::Interval { root, second, .. } => vec![*root, *second],
            Challenge::Chord { notes, .. } | Challenge::Scale { notes, .. } => notes.clone(),
        }
    }

    /// The exact answer string that scores as correct.
    pub fn correct_label(&self) -> String {
        match self {
            Challenge::Interval { label, .. } => label.label().to_string(),
            Challenge::Chord {
                root, chord_type, ..
            } => chord_answer(*root, *chord_type),
            Challenge::Scale { scale_type, .. } => scale_type.label().to_string(),
        }
    }

    /// Correct answer spelled out for feedback, e.g. `M3: major third`.
    pub fn describe_answer(&self) -> String {
        let long_name = match self {
            Challenge::Interval { label, .. } => label.long_name(),
            Challenge::Chord { chord_type, .. } => chord_type.long_name(),
            Challenge::Scale { scale_type, .. } => scale_type.long_name(),
        };
        format!("{}: {long_name}", self.correct_label())
    }

    pub fn prompt(&self) -> String {
        match self {
            Challenge::Interval { root, .. } => {
                format!("Name the interval above {root}")
            }
            Challenge::Chord { .. } => "Name the root and quality of the chord".to_string(),
            Challenge::Scale { root, .. } => format!("Name the scale starting on {root}"),
        }
    }

    /// Every answer the UI should offer for this challenge.
    pub fn answer_choices(&self) -> Vec<String> {
        match self {
            Challenge::Interval { .. } => IntervalLabel::ALL
                .iter()
                .map(|label| label.label().to_string())
                .collect(),
            Challenge::Chord { root, .. } => ChordType::ALL
                .iter()
                .map(|chord_type| chord_answer(*root, *chord_type))
                .collect(),
            Challenge::Scale { .. } => ScaleType::ALL
                .iter()
                .map(|scale| scale.label().to_string())
                .collect(),
        }
    }
}

/// `"<root name> <chord label>"`, separated by exactly one space.
pub fn chord_answer(root: Pitch, chord_type: ChordType) -> String {
    format!("{} {}", root.name(), chord_type.label())
}
