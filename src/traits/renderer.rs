use crate::camera::PerspectiveCamera;
use crate::control::Control;
use crate::core::FrameInfo;
use crate::error::RenderError;
use crate::scene::Scene;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub scene: &'a Scene,
    pub camera: &'a PerspectiveCamera,
    /// Current control values for the overlay panel
    pub control: &'a Control,
    pub info: FrameInfo,
    pub fps: f32,
}

/// Draws the scene from the camera's viewpoint
pub trait SceneRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<(), RenderError>;
}
