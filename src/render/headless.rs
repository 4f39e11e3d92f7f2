use crate::error::RenderError;
use crate::math::Transform;
use crate::traits::{RenderFrame, SceneRenderer};

/// Renderer for runs without a display: draws nothing, remembers what it saw
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last_tower: Option<Transform>,
    lowest_particle: Option<f32>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Tower transform as of the last rendered frame
    pub fn last_tower(&self) -> Option<Transform> {
        self.last_tower
    }

    /// Lowest particle height in the last rendered frame
    pub fn lowest_particle(&self) -> Option<f32> {
        self.lowest_particle
    }
}

impl SceneRenderer for HeadlessRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<(), RenderError> {
        self.frames += 1;
        self.last_tower = Some(frame.scene.tower.transform);
        self.lowest_particle = frame
            .scene
            .snow
            .particles
            .positions()
            .iter()
            .map(|p| p.y)
            .reduce(f32::min);
        Ok(())
    }
}
