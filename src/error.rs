use thiserror::Error;

/// Failures reported by a media engine.
///
/// These arrive asynchronously through the engine's event subscription,
/// never as the return value of `play`/`pause`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Could not load `{locator}`: {reason}")]
    MediaLoadFailure { locator: String, reason: String },

    #[error("Playback was rejected: {reason}")]
    PlayRejected { reason: String },
}

impl PlaybackError {
    pub fn load_failure(locator: &str, reason: impl ToString) -> Self {
        PlaybackError::MediaLoadFailure {
            locator: locator.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn rejected(reason: impl ToString) -> Self {
        PlaybackError::PlayRejected {
            reason: reason.to_string(),
        }
    }
}
