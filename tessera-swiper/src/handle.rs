//! Shared handle to a swiper controller.
//!
//! ## Usage
//!
//! Hand clones to the host's event callbacks and to the frame driver so both
//! reach the same controller.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    args::SwiperArgs,
    controller::SwiperController,
    swiper::{SwiperFrame, swiper},
};

/// Cloneable, lock-protected [`SwiperController`].
///
/// # Examples
///
/// ```
/// use tessera_swiper::{SwiperArgs, SwiperHandle};
///
/// let handle = SwiperHandle::new(SwiperArgs::default(), 4);
/// let for_events = handle.clone();
/// for_events.with_mut(|c| c.on_scroll_begin_drag(&Default::default()));
/// assert!(handle.with(|c| c.is_scrolling()));
/// ```
#[derive(Clone)]
pub struct SwiperHandle {
    inner: Arc<RwLock<SwiperController>>,
}

impl SwiperHandle {
    /// Creates a controller for `slide_count` slides and wraps it.
    pub fn new(args: SwiperArgs, slide_count: usize) -> Self {
        Self::from_controller(SwiperController::new(args, slide_count))
    }

    /// Wraps an existing controller.
    pub fn from_controller(controller: SwiperController) -> Self {
        Self {
            inner: Arc::new(RwLock::new(controller)),
        }
    }

    /// Execute a closure with a shared reference to the controller.
    pub fn with<R>(&self, f: impl FnOnce(&SwiperController) -> R) -> R {
        f(&self.inner.read())
    }

    /// Execute a closure with a mutable reference to the controller.
    ///
    /// Passthrough callbacks triggered by the closure run after the lock is
    /// released, so they may use the handle themselves.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut SwiperController) -> R) -> R {
        let (result, pending) = {
            let mut controller = self.inner.write();
            controller.defer_callbacks();
            let result = f(&mut controller);
            (result, controller.take_deferred())
        };
        for callback in pending {
            callback.run();
        }
        result
    }

    /// Renders the current frame.
    pub fn frame(&self) -> SwiperFrame {
        self.with(swiper)
    }
}
