use crate::{MediaEngine, PlaybackController, scheduler::FrameScheduler};

/// What the widget needs from a control for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub title: String,
    pub is_playing: bool,
    pub time: String,
    pub error: Option<String>,
}

impl<E: MediaEngine, S: FrameScheduler> From<&PlaybackController<E, S>> for PlayerSnapshot {
    fn from(control: &PlaybackController<E, S>) -> Self {
        PlayerSnapshot {
            title: control.title().to_string(),
            is_playing: control.is_playing(),
            time: control.display_time(),
            error: control.error().map(|e| e.to_string()),
        }
    }
}
