use std::cell::Cell;
use std::sync::Arc;

use winit::window::Window as WinitWindow;

use crate::traits::FrameScheduler;

/// Wrapper around winit Window; schedules frames through redraw requests
#[derive(Clone)]
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    pub fn inner_size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.inner.inner_size()
    }
}

impl FrameScheduler for Window {
    fn request_frame(&self) {
        self.inner.request_redraw();
    }
}

/// Scheduler for runs without a window: remembers that a frame was asked for
#[derive(Debug, Default)]
pub struct HeadlessScheduler {
    pending: Cell<bool>,
    requests: Cell<u64>,
}

impl HeadlessScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear and return the pending flag
    pub fn take_pending(&self) -> bool {
        self.pending.replace(false)
    }

    pub fn requests(&self) -> u64 {
        self.requests.get()
    }
}

impl FrameScheduler for HeadlessScheduler {
    fn request_frame(&self) {
        self.pending.set(true);
        self.requests.set(self.requests.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_pending_is_consumed() {
        let scheduler = HeadlessScheduler::new();
        assert!(!scheduler.take_pending());

        scheduler.request_frame();
        scheduler.request_frame();
        assert!(scheduler.take_pending());
        assert!(!scheduler.take_pending());
        assert_eq!(scheduler.requests(), 2);
    }
}
