mod state;

pub use state::PlaybackState;

use crate::{
    MediaEngine, MediaEvent, PlaybackError, PlayerConfig, format_time,
    engine::Subscription,
    scheduler::{FrameScheduler, FrameToken},
};
use tracing::{debug, info, warn};

/// Drives one media engine on behalf of one rendered control.
///
/// While playing, exactly one frame request is outstanding; each fired
/// frame samples the engine position into `current_time` and requests
/// the next one. Pausing cancels the outstanding request before
/// returning, so no sample can land after a pause.
pub struct PlaybackController<E: MediaEngine, S: FrameScheduler> {
    title: String,
    source: String,

    engine: E,
    scheduler: S,
    subscription: Option<Subscription>,

    state: PlaybackState,
    duration: f64,
    metadata_loaded: bool,
    current_time: f64,
    loop_handle: Option<FrameToken>,

    error: Option<PlaybackError>,
    end_reported: bool,
}

impl<E: MediaEngine, S: FrameScheduler> PlaybackController<E, S> {
    pub fn new(config: PlayerConfig, mut engine: E, scheduler: S) -> Self {
        // Subscribe before loading so a fast metadata report is not lost
        let subscription = engine.subscribe();
        engine.load(&config.source);

        debug!(title = %config.title, source = %config.source, "control created");

        PlaybackController {
            title: config.title,
            source: config.source,

            engine,
            scheduler,
            subscription: Some(subscription),

            state: PlaybackState::Paused,
            duration: 0.0,
            metadata_loaded: false,
            current_time: 0.0,
            loop_handle: None,

            error: None,
            end_reported: false,
        }
    }

    pub fn toggle_play(&mut self) {
        match self.state {
            PlaybackState::Paused => self.start(),
            PlaybackState::Playing => self.stop(),
        }
    }

    /// Hand a fired frame to the control. Returns `false` when the token
    /// is not the one this control is waiting on.
    pub fn on_frame(&mut self, token: FrameToken) -> bool {
        if !self.is_playing() || self.loop_handle != Some(token) {
            return false;
        }
        self.increment_time();
        true
    }

    /// Record the media duration. Only the first report is kept.
    pub fn on_metadata_ready(&mut self, duration: f64) {
        if self.metadata_loaded {
            debug!(duration, "ignoring repeated metadata report");
            return;
        }
        self.metadata_loaded = true;
        self.duration = duration;

        info!(title = %self.title, duration, "metadata ready");
    }

    /// Drain pending engine events.
    pub fn pump_events(&mut self) {
        let events = match &self.subscription {
            Some(sub) => sub.poll_events(),
            None => return,
        };

        for event in events {
            match event {
                MediaEvent::MetadataReady { duration } => self.on_metadata_ready(duration),
                MediaEvent::Failed(e) => self.on_engine_failure(e),
            }
        }
    }

    /// Pause if needed, then drop the engine subscription.
    /// Runs on drop as well; calling it twice is harmless.
    pub fn teardown(&mut self) {
        if self.is_playing() {
            self.stop();
        }
        if let Some(sub) = self.subscription.take() {
            self.engine.unsubscribe(sub.id());
        }
    }
}

// =====================
//    STATE MACHINE
// =====================
impl<E: MediaEngine, S: FrameScheduler> PlaybackController<E, S> {
    fn start(&mut self) {
        self.engine.play();
        self.state = PlaybackState::Playing;
        self.error = None;

        info!(title = %self.title, state = %self.state, "transition");
        self.increment_time();
    }

    fn stop(&mut self) {
        self.engine.pause();
        self.state = PlaybackState::Paused;
        if let Some(token) = self.loop_handle.take() {
            self.scheduler.cancel_frame(token);
        }

        info!(
            title = %self.title,
            state = %self.state,
            elapsed = self.current_time,
            "transition"
        );
    }

    fn increment_time(&mut self) {
        self.current_time = self.engine.position();
        self.loop_handle = Some(self.scheduler.request_frame());

        // No ended transition: the loop keeps sampling past the end
        if self.metadata_loaded && !self.end_reported && self.current_time >= self.duration {
            self.end_reported = true;
            debug!(title = %self.title, "position reached media duration");
        }
    }

    fn on_engine_failure(&mut self, error: PlaybackError) {
        warn!(title = %self.title, "media engine failure: {error}");

        if self.is_playing() {
            self.stop();
        }
        self.error = Some(error);
    }
}

// ===============
//    ACCESSORS
// ===============
impl<E: MediaEngine, S: FrameScheduler> PlaybackController<E, S> {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn loop_handle(&self) -> Option<FrameToken> {
        self.loop_handle
    }

    pub fn error(&self) -> Option<&PlaybackError> {
        self.error.as_ref()
    }

    pub fn formatted_elapsed(&self) -> String {
        format_time(self.current_time)
    }

    pub fn formatted_duration(&self) -> String {
        format_time(self.duration)
    }

    /// `elapsed/duration`, as shown next to the play button.
    pub fn display_time(&self) -> String {
        format!("{}/{}", self.formatted_elapsed(), self.formatted_duration())
    }
}

impl<E: MediaEngine, S: FrameScheduler> Drop for PlaybackController<E, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
