//! One-time construction of the scene, camera and control record.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use log::info;
use rand::Rng;

use crate::camera::PerspectiveCamera;
use crate::config::{LightConfig, SceneConfig};
use crate::control::Control;
use crate::error::InitError;
use crate::math::Transform;
use crate::particles::ParticlePool;
use crate::scene::{AxesHelper, Geometry, Light, Mesh, Scene, Snow};

pub fn build_scene<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Scene, InitError> {
    config.validate()?;

    let lights: Vec<Light> = config
        .lights
        .iter()
        .map(|light| match *light {
            LightConfig::Point { position, color } => Light::Point {
                position: Vec3::from_array(position),
                color,
            },
            LightConfig::Ambient { color } => Light::Ambient { color },
        })
        .collect();
    for light in &lights {
        match light {
            Light::Point { position, .. } => info!("Added point light at {} to scene", position),
            Light::Ambient { color } => info!("Added ambient light {} to scene", color),
        }
    }

    let [width, height, depth] = config.tower.size;
    let tower = Mesh::new(
        "tower",
        Geometry::Box {
            width,
            height,
            depth,
        },
        config.tower.color,
    )
    .with_transform(Transform::from_position(Vec3::from_array(config.tower.position)));
    info!("Added tower to scene");

    let [width, height] = config.ground.size;
    let ground = Mesh::new("ground", Geometry::Plane { width, height }, config.ground.color)
        .with_transform(Transform::IDENTITY.with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)));
    info!("Added ground to scene");

    let particles = ParticlePool::spawn(config.particles.count, config.particles.bounds, rng)?;
    info!("Added {} snow particles to scene", particles.len());
    let snow = Snow {
        particles,
        transform: Transform::IDENTITY,
        color: config.particles.color,
        size: config.particles.size,
    };

    let axes = config.ground.axes_size.map(|size| {
        info!("Added axes helper to the ground");
        AxesHelper {
            size,
            transform: Transform::IDENTITY,
        }
    });

    Ok(Scene {
        tower,
        ground,
        axes,
        lights,
        snow,
        clear_color: config.clear_color,
    })
}

pub fn build_camera(config: &SceneConfig, width: u32, height: u32) -> PerspectiveCamera {
    let camera_config = &config.camera;
    let mut camera = PerspectiveCamera::new(
        camera_config.fov_degrees,
        1.0,
        camera_config.near,
        camera_config.far,
    )
    .look_at(
        Vec3::from_array(camera_config.position),
        Vec3::from_array(camera_config.target),
    );
    camera.set_viewport(width, height);
    info!("Finished setting up camera");
    camera
}

pub fn build_control(config: &SceneConfig) -> Control {
    config.control
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.particles.count = 64;
        config
    }

    #[test]
    fn builds_stock_scene() {
        let scene = build_scene(&small_config(), &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(scene.tower.transform.position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(scene.tower.transform.rotation, Vec3::ZERO);
        assert_eq!(scene.ground.transform.rotation.x, -FRAC_PI_2);
        assert_eq!(scene.snow.particles.len(), 64);
        assert_eq!(scene.point_lights().count(), 1);
        assert_eq!(scene.ambient_linear(), [0.0; 3]);
        assert!(scene.axes.is_some());
    }

    #[test]
    fn axes_follow_ground_rotation() {
        let scene = build_scene(&small_config(), &mut StdRng::seed_from_u64(1)).unwrap();
        let m = scene.axes_matrix().unwrap();
        // local Z of the ground points up in world space
        let up = m.transform_vector3(Vec3::Z);
        assert!((up - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn axes_can_be_hidden() {
        let mut config = small_config();
        config.ground.axes_size = None;
        let scene = build_scene(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(scene.axes_matrix().is_none());
    }

    #[test]
    fn ambient_lights_sum() {
        let mut config = small_config();
        config.lights.push(LightConfig::Ambient {
            color: crate::math::Color::WHITE,
        });
        let scene = build_scene(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(scene.ambient_linear(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn empty_pool_fails_fast() {
        let mut config = small_config();
        config.particles.count = 0;
        let err = build_scene(&config, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, InitError::EmptyParticlePool));
    }

    #[test]
    fn camera_matches_window() {
        let camera = build_camera(&SceneConfig::default(), 800, 600);
        assert_eq!(camera.position, Vec3::new(15.3, 18.5, -28.7));
        assert_eq!(camera.target, Vec3::ZERO);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert_eq!(camera.fov_y_degrees, 35.0);
    }
}
