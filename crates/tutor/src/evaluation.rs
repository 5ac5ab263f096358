use serde::{Deserialize, Serialize};

use eardrill_domain::{midi_from_name, ChordType, DomainError, IntervalLabel, ScaleType};

use crate::challenge::{Challenge, Mode};
use crate::error::TutorError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
    pub is_correct: bool,
    pub correct_label: String,
}

/// Stateless: everything needed to judge an answer lives in the challenge.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnswerEvaluator;

impl AnswerEvaluator {
    /// Scores `answer` against the active challenge by exact string match.
    /// Answers that are not drawn from the mode's label set are rejected
    /// rather than scored as wrong.
    pub fn evaluate(
        &self,
        challenge: Option<&Challenge>,
        answer: &str,
    ) -> Result<Verdict, TutorError> {
        let challenge =
            challenge.ok_or_else(|| TutorError::invalid_state("no active challenge to answer"))?;
        validate(challenge.mode(), answer)?;
        let correct_label = challenge.correct_label();
        Ok(Verdict {
            is_correct: answer == correct_label,
            correct_label,
        })
    }
}

/// Checks the answer is spelled from the mode's label set. Chord roots only
/// need to be well-formed pitch names, whatever alphabet built the challenge.
fn validate(mode: Mode, answer: &str) -> Result<(), DomainError> {
    match mode {
        Mode::Interval => answer.parse::<IntervalLabel>().map(drop),
        Mode::Scale => answer.parse::<ScaleType>().map(drop),
        Mode::Chord => {
            let (root, quality) = answer
                .split_once(' ')
                .ok_or_else(|| DomainError::unknown_label("chord answer", answer))?;
            midi_from_name(root)?;
            quality.parse::<ChordType>().map(drop)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ChallengeGenerator;
    use eardrill_domain::{PitchAlphabet, SeededRandom};

    #[test]
    fn generated_answer_always_round_trips() {
        let generator = ChallengeGenerator::default();
        let evaluator = AnswerEvaluator;
        let mut rng = SeededRandom::new(99);
        for mode in Mode::ALL {
            for _ in 0..50 {
                let challenge = generator.generate(mode, &mut rng).unwrap();
                let expected = challenge.correct_label();
                let verdict = evaluator.evaluate(Some(&challenge), &expected).unwrap();
                assert!(verdict.is_correct, "{mode}: {expected}");
                assert_eq!(verdict.correct_label, expected);
            }
        }
    }

    #[test]
    fn round_trip_holds_on_a_lower_alphabet() {
        let generator = ChallengeGenerator::new(PitchAlphabet::new(36, 28).unwrap());
        let root = generator.alphabet().find("C2").unwrap();
        let challenge = generator.chord(root, ChordType::Major);
        let verdict = AnswerEvaluator.evaluate(Some(&challenge), "C2 maj").unwrap();
        assert!(verdict.is_correct);

        let mut rng = SeededRandom::new(17);
        for mode in Mode::ALL {
            for _ in 0..30 {
                let challenge = generator.generate(mode, &mut rng).unwrap();
                let answer = challenge.correct_label();
                assert!(AnswerEvaluator.evaluate(Some(&challenge), &answer).unwrap().is_correct);
            }
        }
    }

    #[test]
    fn wrong_interval_reports_correct_label() {
        let generator = ChallengeGenerator::default();
        let root = generator.alphabet().find("D4").unwrap();
        let challenge = generator.interval(root, IntervalLabel::MajorThird);
        let verdict = AnswerEvaluator::default()
            .evaluate(Some(&challenge), "m3")
            .unwrap();
        assert_eq!(
            verdict,
            Verdict {
                is_correct: false,
                correct_label: "M3".into()
            }
        );
    }

    #[test]
    fn chord_answer_needs_root_and_quality() {
        let generator = ChallengeGenerator::default();
        let evaluator = AnswerEvaluator::default();
        let root = generator.alphabet().find("A3").unwrap();
        let challenge = generator.chord(root, ChordType::Augmented);

        assert!(evaluator.evaluate(Some(&challenge), "A3 aug").unwrap().is_correct);
        assert!(!evaluator.evaluate(Some(&challenge), "A3 maj").unwrap().is_correct);
        assert!(!evaluator.evaluate(Some(&challenge), "C4 aug").unwrap().is_correct);
        assert!(evaluator.evaluate(Some(&challenge), "aug").is_err());
        assert!(evaluator.evaluate(Some(&challenge), "A3  aug").is_err());
        assert!(!evaluator.evaluate(Some(&challenge), "A7 aug").unwrap().is_correct);
        assert!(evaluator.evaluate(Some(&challenge), "H3 aug").is_err());
    }

    #[test]
    fn scale_answer_outside_label_set_is_rejected() {
        let generator = ChallengeGenerator::default();
        let root = generator.alphabet().find("E3").unwrap();
        let challenge = generator.scale(root, ScaleType::Dorian);
        let evaluator = AnswerEvaluator::default();
        assert!(evaluator.evaluate(Some(&challenge), "dorian").unwrap().is_correct);
        assert_eq!(
            evaluator.evaluate(Some(&challenge), "Dorian").unwrap_err(),
            TutorError::Domain(DomainError::unknown_label("scale", "Dorian"))
        );
    }

    #[test]
    fn missing_challenge_is_invalid_state() {
        let err = AnswerEvaluator::default().evaluate(None, "P5").unwrap_err();
        assert!(matches!(err, TutorError::InvalidState(_)));
    }
}
