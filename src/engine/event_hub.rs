use super::{MediaEvent, Subscription, SubscriptionId};
use crossbeam_channel::{Sender, unbounded};

/// Subscriber registry shared by engine implementations.
#[derive(Default)]
pub struct EventHub {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<MediaEvent>)>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let (tx, rx) = unbounded();
        self.subscribers.push((id, tx));

        Subscription { id, events: rx }
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub, _)| *sub != id);
    }

    /// Deliver `event` to every live subscriber. Subscribers whose receiver
    /// has been dropped are pruned.
    pub fn broadcast(&mut self, event: MediaEvent) {
        self.subscribers
            .retain(|(_, tx)| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
