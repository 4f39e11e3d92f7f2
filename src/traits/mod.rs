pub mod clock;
pub mod renderer;
pub mod scheduler;

pub use clock::*;
pub use renderer::*;
pub use scheduler::*;
