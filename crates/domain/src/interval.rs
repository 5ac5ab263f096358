use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;
use crate::DomainError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IntervalLabel {
    PerfectUnison,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    Tritone,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
    PerfectOctave,
}

impl IntervalLabel {
    /// Every label, ordered by semitone distance.
    pub const ALL: [IntervalLabel; 13] = [
        IntervalLabel::PerfectUnison,
        IntervalLabel::MinorSecond,
        IntervalLabel::MajorSecond,
        IntervalLabel::MinorThird,
        IntervalLabel::MajorThird,
        IntervalLabel::PerfectFourth,
        IntervalLabel::Tritone,
        IntervalLabel::PerfectFifth,
        IntervalLabel::MinorSixth,
        IntervalLabel::MajorSixth,
        IntervalLabel::MinorSeventh,
        IntervalLabel::MajorSeventh,
        IntervalLabel::PerfectOctave,
    ];

    pub fn semitones(self) -> u8 {
        match self {
            IntervalLabel::PerfectUnison => 0,
            IntervalLabel::MinorSecond => 1,
            IntervalLabel::MajorSecond => 2,
            IntervalLabel::MinorThird => 3,
            IntervalLabel::MajorThird => 4,
            IntervalLabel::PerfectFourth => 5,
            IntervalLabel::Tritone => 6,
            IntervalLabel::PerfectFifth => 7,
            IntervalLabel::MinorSixth => 8,
            IntervalLabel::MajorSixth => 9,
            IntervalLabel::MinorSeventh => 10,
            IntervalLabel::MajorSeventh => 11,
            IntervalLabel::PerfectOctave => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IntervalLabel::PerfectUnison => "P1",
            IntervalLabel::MinorSecond => "m2",
            IntervalLabel::MajorSecond => "M2",
            IntervalLabel::MinorThird => "m3",
            IntervalLabel::MajorThird => "M3",
            IntervalLabel::PerfectFourth => "P4",
            IntervalLabel::Tritone => "TT",
            IntervalLabel::PerfectFifth => "P5",
            IntervalLabel::MinorSixth => "m6",
            IntervalLabel::MajorSixth => "M6",
            IntervalLabel::MinorSeventh => "m7",
            IntervalLabel::MajorSeventh => "M7",
            IntervalLabel::PerfectOctave => "P8",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            IntervalLabel::PerfectUnison => "perfect unison",
            IntervalLabel::MinorSecond => "minor second",
            IntervalLabel::MajorSecond => "major second",
            IntervalLabel::MinorThird => "minor third",
            IntervalLabel::MajorThird => "major third",
            IntervalLabel::PerfectFourth => "perfect fourth",
            IntervalLabel::Tritone => "tritone",
            IntervalLabel::PerfectFifth => "perfect fifth",
            IntervalLabel::MinorSixth => "minor sixth",
            IntervalLabel::MajorSixth => "major sixth",
            IntervalLabel::MinorSeventh => "minor seventh",
            IntervalLabel::MajorSeventh => "major seventh",
            IntervalLabel::PerfectOctave => "perfect octave",
        }
    }

    pub fn random(rng: &mut dyn RandomSource) -> Self {
        Self::ALL[rng.choose_index(Self::ALL.len())]
    }
}

impl fmt::Display for IntervalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IntervalLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.label() == s)
            .ok_or_else(|| DomainError::unknown_label("interval", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;
    use std::collections::HashSet;

    #[test]
    fn semitone_table_is_total_and_injective() {
        let values: HashSet<u8> = IntervalLabel::ALL.iter().map(|l| l.semitones()).collect();
        assert_eq!(values.len(), 13);
        assert!(values.iter().all(|s| *s <= 12));
    }

    #[test]
    fn labels_parse_case_sensitively() {
        assert_eq!("M3".parse::<IntervalLabel>().unwrap(), IntervalLabel::MajorThird);
        assert_eq!("m3".parse::<IntervalLabel>().unwrap(), IntervalLabel::MinorThird);
        assert_eq!("TT".parse::<IntervalLabel>().unwrap().semitones(), 6);
        assert!("M4".parse::<IntervalLabel>().is_err());
    }

    #[test]
    fn display_round_trips_every_label() {
        for label in IntervalLabel::ALL {
            assert_eq!(label.to_string().parse::<IntervalLabel>().unwrap(), label);
        }
    }

    #[test]
    fn random_uses_injected_source() {
        let mut rng = SequenceRandom::from_picks(&[(0, 13), (12, 13)]);
        assert_eq!(IntervalLabel::random(&mut rng), IntervalLabel::PerfectUnison);
        assert_eq!(IntervalLabel::random(&mut rng), IntervalLabel::PerfectOctave);
    }
}
