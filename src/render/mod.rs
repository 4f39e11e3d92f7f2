pub mod gpu;
pub mod headless;

pub use gpu::GpuRenderer;
pub use headless::HeadlessRenderer;
