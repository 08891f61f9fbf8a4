use super::{EventHub, MediaEngine, MediaEvent, Subscription, SubscriptionId};
use crate::PlaybackError;
use std::{cell::RefCell, rc::Rc};

#[derive(Default)]
struct ScriptState {
    source: Option<String>,
    playing: bool,
    position: f64,
    play_calls: usize,
    pause_calls: usize,
    hub: EventHub,
}

/// An engine whose behaviour is dictated by its `ScriptedEngineHandle`.
///
/// Used for headless hosts and tests: nothing is decoded, the position
/// only moves when the handle says so.
pub struct ScriptedEngine {
    state: Rc<RefCell<ScriptState>>,
}

/// Caller-side view of a `ScriptedEngine`. Cloneable, and stays valid
/// after the engine has been moved into a controller.
#[derive(Clone)]
pub struct ScriptedEngineHandle {
    state: Rc<RefCell<ScriptState>>,
}

impl ScriptedEngine {
    pub fn new() -> (Self, ScriptedEngineHandle) {
        let state = Rc::new(RefCell::new(ScriptState::default()));
        let handle = ScriptedEngineHandle {
            state: Rc::clone(&state),
        };
        (ScriptedEngine { state }, handle)
    }
}

impl MediaEngine for ScriptedEngine {
    fn load(&mut self, source: &str) {
        self.state.borrow_mut().source = Some(source.to_string());
    }

    fn play(&mut self) {
        let mut state = self.state.borrow_mut();
        state.play_calls += 1;
        state.playing = true;
    }

    fn pause(&mut self) {
        let mut state = self.state.borrow_mut();
        state.pause_calls += 1;
        state.playing = false;
    }

    fn position(&self) -> f64 {
        self.state.borrow().position
    }

    fn subscribe(&mut self) -> Subscription {
        self.state.borrow_mut().hub.subscribe()
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.state.borrow_mut().hub.unsubscribe(id)
    }
}

impl ScriptedEngineHandle {
    pub fn set_position(&self, seconds: f64) {
        self.state.borrow_mut().position = seconds;
    }

    pub fn advance(&self, seconds: f64) {
        let mut state = self.state.borrow_mut();
        if state.playing {
            state.position += seconds;
        }
    }

    pub fn finish_metadata(&self, duration: f64) {
        self.state
            .borrow_mut()
            .hub
            .broadcast(MediaEvent::MetadataReady { duration });
    }

    /// Emit a failure and stop "playing", as a real engine would.
    pub fn fail(&self, error: PlaybackError) {
        let mut state = self.state.borrow_mut();
        state.playing = false;
        state.hub.broadcast(MediaEvent::Failed(error));
    }

    pub fn source(&self) -> Option<String> {
        self.state.borrow().source.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.state.borrow().playing
    }

    pub fn play_calls(&self) -> usize {
        self.state.borrow().play_calls
    }

    pub fn pause_calls(&self) -> usize {
        self.state.borrow().pause_calls
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().hub.subscriber_count()
    }
}
