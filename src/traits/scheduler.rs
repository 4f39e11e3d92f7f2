/// Host hook that asks for the frame loop to run again before the next repaint
pub trait FrameScheduler {
    /// Must return immediately; the host invokes the loop later
    fn request_frame(&self);
}
