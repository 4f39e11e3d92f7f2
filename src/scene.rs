use glam::{Mat4, Vec3};

use crate::math::{Color, Transform};
use crate::particles::ParticlePool;

/// Shape of a mesh, in local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Box { width: f32, height: f32, depth: f32 },
    /// Lies in local XY, facing +Z
    Plane { width: f32, height: f32 },
}

/// Lambert material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub name: String,
    pub transform: Transform,
    pub geometry: Geometry,
    pub material: Material,
}

impl Mesh {
    pub fn new(name: impl Into<String>, geometry: Geometry, color: Color) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            geometry,
            material: Material { color },
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// Axis lines drawn in the ground's local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxesHelper {
    pub size: f32,
    pub transform: Transform,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point { position: Vec3, color: Color },
    Ambient { color: Color },
}

/// Falling snow: particle pool drawn as additive sprites
#[derive(Debug, Clone)]
pub struct Snow {
    pub particles: ParticlePool,
    pub transform: Transform,
    pub color: Color,
    pub size: f32,
}

/// Everything drawn each frame. The frame loop is the only writer of
/// `tower.transform` and `snow.particles` once the loop is running.
#[derive(Debug, Clone)]
pub struct Scene {
    pub tower: Mesh,
    pub ground: Mesh,
    pub axes: Option<AxesHelper>,
    pub lights: Vec<Light>,
    pub snow: Snow,
    pub clear_color: Color,
}

impl Scene {
    pub fn meshes(&self) -> [&Mesh; 2] {
        [&self.tower, &self.ground]
    }

    /// Axes helper world matrix, composed under the ground node
    pub fn axes_matrix(&self) -> Option<Mat4> {
        self.axes
            .map(|axes| self.ground.transform.matrix() * axes.transform.matrix())
    }

    pub fn point_lights(&self) -> impl Iterator<Item = (Vec3, Color)> + '_ {
        self.lights.iter().filter_map(|light| match *light {
            Light::Point { position, color } => Some((position, color)),
            Light::Ambient { .. } => None,
        })
    }

    /// Sum of ambient lights in linear space
    pub fn ambient_linear(&self) -> [f32; 3] {
        self.lights
            .iter()
            .filter_map(|light| match *light {
                Light::Ambient { color } => Some(color.to_linear()),
                Light::Point { .. } => None,
            })
            .fold([0.0; 3], |acc, c| [acc[0] + c[0], acc[1] + c[1], acc[2] + c[2]])
    }
}
