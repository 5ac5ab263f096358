use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("player failed: {0}")]
    Player(String),
    #[error("playback task failed: {0}")]
    Task(String),
}

impl PlaybackError {
    pub fn player<T: Into<String>>(message: T) -> Self {
        Self::Player(message.into())
    }
}
