//! Scene configuration.
//!
//! Every field has a default matching the stock scene, so a config file only
//! needs the values it changes:
//!
//! ```json
//! { "particles": { "count": 5000 }, "control": { "rotation_speed": -0.2 } }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR};
use crate::cli::Cli;
use crate::control::Control;
use crate::error::InitError;
use crate::math::Color;
use crate::particles::{ParticleBounds, DEFAULT_PARTICLE_COUNT};
use crate::types::MAX_POINT_LIGHTS;

pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;
/// Units the tower sinks per frame while `go_down` is set
pub const DEFAULT_TOWER_DROP_STEP: f32 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub clear_color: Color,
    pub camera: CameraConfig,
    pub control: Control,
    pub particles: ParticleConfig,
    pub tower: TowerConfig,
    pub ground: GroundConfig,
    pub lights: Vec<LightConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub bounds: ParticleBounds,
    pub color: Color,
    /// Sprite edge length in world units
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerConfig {
    /// Width, height, depth
    pub size: [f32; 3],
    pub position: [f32; 3],
    pub color: Color,
    pub drop_step: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    /// Width, depth
    pub size: [f32; 2],
    pub color: Color,
    /// Length of the axes helper drawn on the ground; `null` hides it
    pub axes_size: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LightConfig {
    Point { position: [f32; 3], color: Color },
    Ambient { color: Color },
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            clear_color: Color::from_hex(0x404040),
            camera: CameraConfig::default(),
            control: Control::default(),
            particles: ParticleConfig::default(),
            tower: TowerConfig::default(),
            ground: GroundConfig::default(),
            lights: vec![LightConfig::Point {
                position: [-4.0, 6.0, -4.0],
                color: Color::WHITE,
            }],
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: INITIAL_WINDOW_WIDTH,
            height: INITIAL_WINDOW_HEIGHT,
            title: "Snowfall".to_string(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            position: [15.3, 18.5, -28.7],
            target: [0.0, 0.0, 0.0],
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            bounds: ParticleBounds::default(),
            color: Color::WHITE,
            size: 2.0,
        }
    }
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            size: [2.0, 10.0, 2.0],
            position: [0.0, 5.0, 0.0],
            color: Color::from_hex(0xc9c9c9),
            drop_step: DEFAULT_TOWER_DROP_STEP,
        }
    }
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            size: [16.0, 16.0],
            color: Color::from_hex(0xe75d14),
            axes_size: Some(30.0),
        }
    }
}

impl SceneConfig {
    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Command-line values win over the file
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(count) = cli.particles {
            self.particles.count = count;
        }
    }

    /// Reject configs the scene cannot start with
    pub fn validate(&self) -> Result<(), InitError> {
        if self.particles.count == 0 {
            return Err(InitError::EmptyParticlePool);
        }
        self.particles.bounds.validate()?;

        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid(format!(
                "window size {}x{} must be non-zero",
                self.window.width, self.window.height
            )));
        }

        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.near < camera.far) {
            return Err(invalid(format!(
                "camera clip range {}..{} must satisfy 0 < near < far",
                camera.near, camera.far
            )));
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(invalid(format!(
                "camera fov {} must be between 0 and 180 degrees",
                camera.fov_degrees
            )));
        }

        if !(self.particles.size > 0.0) {
            return Err(invalid(format!(
                "particle size {} must be positive",
                self.particles.size
            )));
        }
        if self.tower.size.iter().any(|s| !(*s > 0.0)) {
            return Err(invalid(format!("tower size {:?} must be positive", self.tower.size)));
        }
        if self.ground.size.iter().any(|s| !(*s > 0.0)) {
            return Err(invalid(format!("ground size {:?} must be positive", self.ground.size)));
        }

        let point_lights = self
            .lights
            .iter()
            .filter(|l| matches!(l, LightConfig::Point { .. }))
            .count();
        if point_lights > MAX_POINT_LIGHTS {
            return Err(invalid(format!(
                "{} point lights configured, at most {} supported",
                point_lights, MAX_POINT_LIGHTS
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> InitError {
    InitError::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        SceneConfig::default().validate().unwrap();
    }

    #[test]
    fn test_zero_particles_is_empty_pool() {
        let mut config = SceneConfig::default();
        config.particles.count = 0;
        assert!(matches!(config.validate(), Err(InitError::EmptyParticlePool)));
    }

    #[test]
    fn test_bad_clip_range() {
        let mut config = SceneConfig::default();
        config.camera.near = 200.0;
        assert!(matches!(config.validate(), Err(InitError::InvalidConfig(_))));
    }

    #[test]
    fn test_too_many_point_lights() {
        let mut config = SceneConfig::default();
        config.lights = vec![
            LightConfig::Point {
                position: [0.0; 3],
                color: Color::WHITE
            };
            MAX_POINT_LIGHTS + 1
        ];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serializes_to_json_and_back() {
        let config = SceneConfig::default();
        let text = serde_json::to_string_pretty(&config).unwrap();
        assert!(text.contains("\"#e75d14\""));
        assert_eq!(SceneConfig::from_json(&text).unwrap(), config);
    }
}
