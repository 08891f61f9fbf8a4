mod frame_clock;
mod manual;

use std::rc::Rc;

pub use frame_clock::FrameClock;
pub use manual::ManualScheduler;

/// Identifies one requested frame callback. Tokens are never reused by a
/// scheduler, so a stale token can always be told apart from a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameToken(u64);

/// Per-frame scheduling primitive.
///
/// `request_frame` asks for a single callback on the next rendered frame.
/// Whoever drives the scheduler hands fired tokens back to their owner;
/// the scheduler itself holds no callbacks.
pub trait FrameScheduler {
    fn request_frame(&self) -> FrameToken;
    fn cancel_frame(&self, token: FrameToken);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Rc<S> {
    fn request_frame(&self) -> FrameToken {
        (**self).request_frame()
    }

    fn cancel_frame(&self, token: FrameToken) {
        (**self).cancel_frame(token)
    }
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &S {
    fn request_frame(&self) -> FrameToken {
        (**self).request_frame()
    }

    fn cancel_frame(&self, token: FrameToken) {
        (**self).cancel_frame(token)
    }
}
