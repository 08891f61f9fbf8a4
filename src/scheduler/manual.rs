use super::{FrameScheduler, FrameToken};
use std::{
    cell::{Cell, RefCell},
    collections::BTreeSet,
};

/// A virtual frame source. Nothing fires until `advance_frame` is called.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: Cell<u64>,
    frame: Cell<u64>,
    pending: RefCell<BTreeSet<FrameToken>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step one frame forward, returning every token that was waiting on it.
    /// Tokens requested while handling these belong to the following frame.
    pub fn advance_frame(&self) -> Vec<FrameToken> {
        self.frame.set(self.frame.get() + 1);
        std::mem::take(&mut *self.pending.borrow_mut())
            .into_iter()
            .collect()
    }

    pub fn frame(&self) -> u64 {
        self.frame.get()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_pending(&self, token: FrameToken) -> bool {
        self.pending.borrow().contains(&token)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self) -> FrameToken {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let token = FrameToken(id);
        self.pending.borrow_mut().insert(token);
        token
    }

    fn cancel_frame(&self, token: FrameToken) {
        self.pending.borrow_mut().remove(&token);
    }
}
