use tracing::info;

use eardrill_audio::PlaybackPlan;
use eardrill_domain::{PitchAlphabet, RandomSource};

use crate::challenge::{Challenge, Mode};
use crate::error::TutorError;
use crate::evaluation::{AnswerEvaluator, Verdict};
use crate::generator::ChallengeGenerator;
use crate::playback::{PlaybackConfig, PlaybackSequencer};
use crate::scoring::{Score, ScoreTracker};

#[derive(Debug, Clone)]
struct ActiveChallenge {
    round: u64,
    challenge: Challenge,
    answered: bool,
}

/// Owns the current mode, challenge and score for one practice session and
/// threads them through the generator, sequencer and evaluator.
pub struct DrillSession {
    generator: ChallengeGenerator,
    evaluator: AnswerEvaluator,
    sequencer: PlaybackSequencer,
    rng: Box<dyn RandomSource + Send>,
    mode: Mode,
    active: Option<ActiveChallenge>,
    rounds: u64,
    score: ScoreTracker,
}

impl DrillSession {
    pub fn new(mode: Mode, rng: Box<dyn RandomSource + Send>) -> Self {
        Self {
            generator: ChallengeGenerator::new(PitchAlphabet::STANDARD),
            evaluator: AnswerEvaluator,
            sequencer: PlaybackSequencer::default(),
            rng,
            mode,
            active: None,
            rounds: 0,
            score: ScoreTracker::new(),
        }
    }

    pub fn with_playback_config(mut self, config: PlaybackConfig) -> Self {
        self.sequencer = PlaybackSequencer::new(config);
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switching modes drops the current challenge; it belongs to the old mode.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            self.mode = mode;
            self.active = None;
        }
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        self.active.as_ref().map(|active| &active.challenge)
    }

    /// Number of the current round, starting at 1. Zero before the first.
    pub fn round(&self) -> u64 {
        self.active.as_ref().map(|active| active.round).unwrap_or(0)
    }

    pub fn score(&self) -> Score {
        self.score.score()
    }

    /// Replaces the current challenge with a fresh one for the active mode.
    pub fn next_challenge(&mut self) -> Result<&Challenge, TutorError> {
        let challenge = self.generator.generate(self.mode, self.rng.as_mut())?;
        self.rounds += 1;
        let active = self.active.insert(ActiveChallenge {
            round: self.rounds,
            challenge,
            answered: false,
        });
        Ok(&active.challenge)
    }

    /// Plan for the current challenge; usable for replays.
    pub fn playback_plan(&self) -> Result<PlaybackPlan, TutorError> {
        self.challenge()
            .map(|challenge| self.sequencer.plan(challenge))
            .ok_or_else(|| TutorError::invalid_state("no active challenge to play"))
    }

    /// Scores one answer for the current challenge and records it. Each
    /// challenge counts toward the score once.
    pub fn submit(&mut self, answer: &str) -> Result<Verdict, TutorError> {
        if self.active.as_ref().is_some_and(|active| active.answered) {
            return Err(TutorError::invalid_state("challenge already answered"));
        }
        let verdict = self.evaluator.evaluate(self.challenge(), answer)?;
        if let Some(active) = self.active.as_mut() {
            active.answered = true;
        }
        let score = self.score.record(verdict.is_correct);
        info!(
            round = self.round(),
            correct = verdict.is_correct,
            expected = %verdict.correct_label,
            score.correct = score.correct,
            score.total = score.total,
            "answer scored"
        );
        Ok(verdict)
    }

    pub fn reset_score(&mut self) -> Score {
        self.score.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eardrill_domain::{SeededRandom, SequenceRandom};

    #[test]
    fn answering_requires_a_challenge() {
        let mut session = DrillSession::new(Mode::Scale, Box::new(SeededRandom::new(3)));
        assert!(matches!(
            session.submit("major"),
            Err(TutorError::InvalidState(_))
        ));
        assert!(session.playback_plan().is_err());
        assert_eq!(session.score(), Score::empty());
    }

    #[test]
    fn session_scores_each_round_once() {
        let mut session = DrillSession::new(Mode::Interval, Box::new(SeededRandom::new(11)));
        let expected = session.next_challenge().unwrap().correct_label();
        assert_eq!(session.round(), 1);
        assert!(session.submit(&expected).unwrap().is_correct);
        assert!(matches!(
            session.submit(&expected),
            Err(TutorError::InvalidState(_))
        ));
        assert_eq!(session.score(), Score { correct: 1, total: 1 });

        session.next_challenge().unwrap();
        assert_eq!(session.round(), 2);
        let wrong = session
            .challenge()
            .unwrap()
            .answer_choices()
            .into_iter()
            .find(|choice| *choice != session.challenge().unwrap().correct_label())
            .unwrap();
        assert!(!session.submit(&wrong).unwrap().is_correct);
        assert_eq!(session.score(), Score { correct: 1, total: 2 });
        assert_eq!(session.reset_score(), Score::empty());
    }

    #[test]
    fn unknown_answer_does_not_consume_the_round() {
        // root pick, then chord type pick
        let rng = SequenceRandom::from_picks(&[(0, 14), (1, 7)]);
        let mut session = DrillSession::new(Mode::Chord, Box::new(rng));
        assert_eq!(session.next_challenge().unwrap().correct_label(), "F#3 min");
        assert!(matches!(session.submit("F#3 minor"), Err(TutorError::Domain(_))));
        assert!(session.submit("F#3 min").unwrap().is_correct);
        assert_eq!(session.score(), Score { correct: 1, total: 1 });
    }

    #[test]
    fn changing_mode_clears_the_challenge() {
        let mut session = DrillSession::new(Mode::Interval, Box::new(SeededRandom::new(5)));
        session.next_challenge().unwrap();
        session.set_mode(Mode::Scale);
        assert!(session.challenge().is_none());
        assert_eq!(session.next_challenge().unwrap().mode(), Mode::Scale);
    }

    #[test]
    fn playback_plan_honours_config() {
        let config = PlaybackConfig {
            interval_gap_ms: 400,
            ..PlaybackConfig::default()
        };
        let mut session =
            DrillSession::new(Mode::Interval, Box::new(SeededRandom::new(8))).with_playback_config(config);
        session.next_challenge().unwrap();
        let plan = session.playback_plan().unwrap();
        assert_eq!(plan.steps()[0].delay_after_ms, 400);
    }
}
