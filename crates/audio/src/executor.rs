use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crate::error::PlaybackError;
use crate::plan::PlaybackPlan;
use crate::player::PitchPlayer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed,
    Cancelled,
}

/// Cancellation side of a running plan. Dropping it does not cancel.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn new() -> (Self, watch::Receiver<bool>) {
        let (sender, receiver) = watch::channel(false);
        (Self { sender }, receiver)
    }

    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

/// Plays the plan step by step, waiting out each gap. Stops between or
/// during steps as soon as `cancel` flips, without touching the player again.
#[instrument(skip_all, fields(steps = plan.len()))]
pub async fn execute_plan<P>(
    player: &P,
    plan: &PlaybackPlan,
    mut cancel: watch::Receiver<bool>,
) -> Result<PlaybackOutcome, PlaybackError>
where
    P: PitchPlayer + ?Sized,
{
    for (index, step) in plan.steps().iter().enumerate() {
        tokio::select! {
            biased;
            _ = cancelled(&mut cancel) => {
                debug!(index, "playback cancelled before note");
                return Ok(PlaybackOutcome::Cancelled);
            }
            result = player.play_pitch(&step.pitch, step.length) => result?,
        }
        if step.delay_after_ms == 0 {
            continue;
        }
        tokio::select! {
            biased;
            _ = cancelled(&mut cancel) => {
                debug!(index, "playback cancelled during gap");
                return Ok(PlaybackOutcome::Cancelled);
            }
            _ = tokio::time::sleep(step.delay_after()) => {}
        }
    }
    Ok(PlaybackOutcome::Completed)
}

async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    loop {
        let flagged = *cancel.borrow_and_update();
        if flagged {
            return;
        }
        if cancel.changed().await.is_err() {
            // sender gone: nobody can cancel any more
            std::future::pending::<()>().await;
        }
    }
}

struct ActivePlayback {
    cancel: CancelHandle,
    task: JoinHandle<Result<PlaybackOutcome, PlaybackError>>,
}

/// Runs at most one plan at a time. Starting a new plan abandons the one in
/// flight; an abandoned plan never calls the player again.
pub struct PlaybackRunner {
    player: Arc<dyn PitchPlayer>,
    active: Option<ActivePlayback>,
}

impl PlaybackRunner {
    pub fn new(player: Arc<dyn PitchPlayer>) -> Self {
        Self {
            player,
            active: None,
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, plan: PlaybackPlan) {
        self.cancel();
        let (cancel, receiver) = CancelHandle::new();
        let player = Arc::clone(&self.player);
        let task = tokio::spawn(async move { execute_plan(player.as_ref(), &plan, receiver).await });
        self.active = Some(ActivePlayback { cancel, task });
    }

    /// Returns true if a plan was still running.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                let running = !active.task.is_finished();
                active.cancel.cancel();
                if running {
                    debug!("abandoning in-flight playback");
                }
                running
            }
            None => false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.active
            .as_ref()
            .map(|active| !active.task.is_finished())
            .unwrap_or(false)
    }

    /// Waits for the current plan. With nothing running this is immediate.
    pub async fn wait(&mut self) -> Result<PlaybackOutcome, PlaybackError> {
        match self.active.take() {
            Some(active) => active
                .task
                .await
                .map_err(|err| PlaybackError::Task(err.to_string()))?,
            None => Ok(PlaybackOutcome::Completed),
        }
    }
}

impl Drop for PlaybackRunner {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use eardrill_domain::{Pitch, PitchAlphabet};

    use crate::plan::{NoteLength, PlaybackStep};

    #[derive(Default)]
    struct RecordingPlayer {
        played: Mutex<Vec<(String, NoteLength)>>,
    }

    impl RecordingPlayer {
        fn names(&self) -> Vec<String> {
            self.played
                .lock()
                .unwrap()
                .iter()
                .map(|(name, _)| name.clone())
                .collect()
        }
    }

    #[async_trait]
    impl PitchPlayer for RecordingPlayer {
        async fn play_pitch(&self, pitch: &Pitch, length: NoteLength) -> Result<(), PlaybackError> {
            self.played.lock().unwrap().push((pitch.name(), length));
            Ok(())
        }
    }

    struct FailingPlayer;

    #[async_trait]
    impl PitchPlayer for FailingPlayer {
        async fn play_pitch(&self, _pitch: &Pitch, _length: NoteLength) -> Result<(), PlaybackError> {
            Err(PlaybackError::player("device locked"))
        }
    }

    fn plan(names: &[&str], stagger_ms: u64) -> PlaybackPlan {
        let alphabet = PitchAlphabet::STANDARD;
        let pitches: Vec<Pitch> = names.iter().map(|n| alphabet.find(n).unwrap()).collect();
        PlaybackPlan::staggered(&pitches, stagger_ms, NoteLength::Eighth)
    }

    #[tokio::test(start_paused = true)]
    async fn executes_every_step_in_order() {
        let player = RecordingPlayer::default();
        let (_cancel, receiver) = CancelHandle::new();
        let outcome = execute_plan(&player, &plan(&["C4", "E4", "G4"], 120), receiver)
            .await
            .unwrap();
        assert_eq!(outcome, PlaybackOutcome::Completed);
        assert_eq!(player.names(), vec!["C4", "E4", "G4"]);
    }

    #[tokio::test(start_paused = true)]
    async fn gaps_are_waited_out() {
        let player = RecordingPlayer::default();
        let (_cancel, receiver) = CancelHandle::new();
        let start = tokio::time::Instant::now();
        execute_plan(&player, &plan(&["C4", "G4"], 250), receiver)
            .await
            .unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_before_start_plays_nothing() {
        let player = RecordingPlayer::default();
        let (cancel, receiver) = CancelHandle::new();
        cancel.cancel();
        let outcome = execute_plan(&player, &plan(&["C4", "E4"], 100), receiver)
            .await
            .unwrap();
        assert_eq!(outcome, PlaybackOutcome::Cancelled);
        assert!(player.names().is_empty());
    }

    #[tokio::test]
    async fn player_errors_propagate() {
        let (_cancel, receiver) = CancelHandle::new();
        let result = execute_plan(&FailingPlayer, &plan(&["C4"], 0), receiver).await;
        assert!(matches!(result, Err(PlaybackError::Player(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn starting_a_new_plan_abandons_the_old_one() {
        let player = Arc::new(RecordingPlayer::default());
        let mut runner = PlaybackRunner::new(player.clone());

        runner.start(plan(&["C3", "D3", "E3", "F3"], 500));
        // let the first note sound, then interrupt during the first gap
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(runner.is_playing());

        runner.start(PlaybackPlan::new(vec![PlaybackStep::new(
            PitchAlphabet::STANDARD.find("A4").unwrap(),
            0,
            NoteLength::Sixteenth,
        )]));
        assert_eq!(runner.wait().await.unwrap(), PlaybackOutcome::Completed);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(player.names(), vec!["C3", "A4"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_reports_whether_anything_was_running() {
        let player = Arc::new(RecordingPlayer::default());
        let mut runner = PlaybackRunner::new(player);
        assert!(!runner.cancel());
        runner.start(plan(&["C4", "D4"], 1_000));
        tokio::task::yield_now().await;
        assert!(runner.cancel());
        assert!(!runner.is_playing());
    }
}
