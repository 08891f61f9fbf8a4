mod backend_rodio;
mod event_hub;
mod scripted;

use crate::PlaybackError;
use crossbeam_channel::Receiver;

pub use backend_rodio::RodioEngine;
pub use event_hub::EventHub;
pub use scripted::{ScriptedEngine, ScriptedEngineHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Duration (seconds) became known. Sent once per load.
    MetadataReady { duration: f64 },
    Failed(PlaybackError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Receiving end of an engine's event stream.
pub struct Subscription {
    id: SubscriptionId,
    events: Receiver<MediaEvent>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn poll_events(&self) -> Vec<MediaEvent> {
        self.events.try_iter().collect()
    }
}

/// The capability a playback controller drives.
///
/// `play` and `load` report failures only through `MediaEvent::Failed`;
/// from the caller's side every method returns immediately.
pub trait MediaEngine {
    fn load(&mut self, source: &str);
    fn play(&mut self);
    fn pause(&mut self);

    /// Seconds elapsed in the loaded media.
    fn position(&self) -> f64;

    fn subscribe(&mut self) -> Subscription;
    fn unsubscribe(&mut self, id: SubscriptionId);
}

impl<E: MediaEngine + ?Sized> MediaEngine for Box<E> {
    fn load(&mut self, source: &str) {
        (**self).load(source)
    }

    fn play(&mut self) {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn position(&self) -> f64 {
        (**self).position()
    }

    fn subscribe(&mut self) -> Subscription {
        (**self).subscribe()
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        (**self).unsubscribe(id)
    }
}
