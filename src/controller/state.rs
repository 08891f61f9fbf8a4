#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackState::Paused => write!(f, "paused"),
            PlaybackState::Playing => write!(f, "playing"),
        }
    }
}
