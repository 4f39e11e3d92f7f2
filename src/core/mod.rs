pub mod clock;
pub mod frame;
pub mod frame_loop;
pub mod stats;

pub use clock::{Clock, FixedStepClock};
pub use frame::FrameInfo;
pub use frame_loop::{FrameLoop, FrameLoopBuilder, SceneState};
pub use stats::FrameStats;
