pub mod bootstrap;
pub mod camera;
pub mod cli;
pub mod config;
pub mod control;
pub mod core;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod particles;
pub mod render;
pub mod scene;
pub mod traits;
pub mod types;
pub mod ui;
pub mod window;

pub use bootstrap::{build_camera, build_control, build_scene};
pub use config::SceneConfig;
pub use control::{command_channel, Control, ControlCommand};
pub use error::{InitError, RenderError};
