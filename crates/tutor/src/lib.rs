pub mod challenge;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod playback;
pub mod scoring;
pub mod session;

pub use challenge::{chord_answer, Challenge, Mode};
pub use error::TutorError;
pub use evaluation::{AnswerEvaluator, Verdict};
pub use generator::ChallengeGenerator;
pub use playback::{PlaybackConfig, PlaybackSequencer};
pub use scoring::{Score, ScoreTracker};
pub use session::DrillSession;
