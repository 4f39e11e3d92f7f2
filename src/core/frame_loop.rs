//! Per-frame scene update.
//!
//! Each `tick` reads the clock, applies queued control commands, spins and
//! optionally lowers the tower, lets the snow fall, asks the host for the next
//! frame and hands the scene to the renderer.
//!
//! Tower rotation and descent are applied per tick and are not scaled by delta
//! time, so their on-screen speed follows the display refresh rate. Snow fall
//! is scaled by delta time.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::frame::FrameInfo;
use super::stats::FrameStats;
use crate::camera::PerspectiveCamera;
use crate::config::DEFAULT_TOWER_DROP_STEP;
use crate::control::{Control, ControlReceiver};
use crate::error::{InitError, RenderError};
use crate::scene::Scene;
use crate::traits::{DeltaClock, FrameScheduler, RenderFrame, SceneRenderer};

/// State the loop advances. Writers:
/// - `scene.tower` and `scene.snow`: the loop only
/// - `control`: the loop, applying UI commands
/// - `camera`: the host, on viewport resize
#[derive(Debug, Clone)]
pub struct SceneState {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub control: Control,
}

pub struct FrameLoop<R, S, C> {
    state: SceneState,
    renderer: R,
    scheduler: S,
    clock: C,
    rng: StdRng,
    commands: Option<ControlReceiver>,
    drop_step: f32,
    stats: FrameStats,
    frame_number: u64,
    time: f32,
}

impl<R, S, C> FrameLoop<R, S, C>
where
    R: SceneRenderer,
    S: FrameScheduler,
    C: DeltaClock,
{
    pub fn builder(clock: C) -> FrameLoopBuilder<R, S, C> {
        FrameLoopBuilder::new(clock)
    }

    /// Run one frame: update, schedule the next one, render
    pub fn tick(&mut self) -> Result<FrameInfo, RenderError> {
        let delta = self.clock.delta().max(0.0);

        if let Some(commands) = &self.commands {
            let applied = commands.drain_into(&mut self.state.control);
            if applied > 0 {
                trace!("applied {} control commands", applied);
            }
        }

        self.advance(delta);

        self.scheduler.request_frame();

        let info = FrameInfo::new(self.frame_number, self.time, delta);
        self.frame_number += 1;
        if let Some(fps) = self.stats.record(delta) {
            debug!("FPS: {:.1}", fps);
        }

        self.renderer.render(&RenderFrame {
            scene: &self.state.scene,
            camera: &self.state.camera,
            control: &self.state.control,
            info,
            fps: self.stats.fps(),
        })?;

        Ok(info)
    }

    fn advance(&mut self, delta: f32) {
        let control = self.state.control;
        let tower = &mut self.state.scene.tower.transform;

        tower.rotation.y += control.rotation_speed;
        if control.go_down {
            tower.position.y -= self.drop_step;
        }

        let recycled = self.state.scene.snow.particles.advance(delta, &mut self.rng);
        self.time += delta;
        trace!("frame {}: dt={:.4} recycled={}", self.frame_number, delta, recycled);
    }

    /// Match the camera projection to a resized surface
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.state.camera.set_viewport(width, height);
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Frames completed so far
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn fps(&self) -> f32 {
        self.stats.fps()
    }
}

/// Collects the loop's collaborators and checks they are all present
pub struct FrameLoopBuilder<R, S, C> {
    scene: Option<Scene>,
    camera: Option<PerspectiveCamera>,
    control: Control,
    renderer: Option<R>,
    scheduler: Option<S>,
    clock: C,
    commands: Option<ControlReceiver>,
    rng: Option<StdRng>,
    drop_step: f32,
}

impl<R, S, C> FrameLoopBuilder<R, S, C>
where
    R: SceneRenderer,
    S: FrameScheduler,
    C: DeltaClock,
{
    pub fn new(clock: C) -> Self {
        Self {
            scene: None,
            camera: None,
            control: Control::default(),
            renderer: None,
            scheduler: None,
            clock,
            commands: None,
            rng: None,
            drop_step: DEFAULT_TOWER_DROP_STEP,
        }
    }

    pub fn scene(mut self, scene: Scene) -> Self {
        self.scene = Some(scene);
        self
    }

    pub fn camera(mut self, camera: PerspectiveCamera) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn control(mut self, control: Control) -> Self {
        self.control = control;
        self
    }

    pub fn renderer(mut self, renderer: R) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn scheduler(mut self, scheduler: S) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Queue the UI feeds; without one the control only changes at build time
    pub fn commands(mut self, commands: ControlReceiver) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Random source for particle recycling; seeded from entropy if unset
    pub fn rng(mut self, rng: StdRng) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn tower_drop_step(mut self, step: f32) -> Self {
        self.drop_step = step;
        self
    }

    pub fn build(self) -> Result<FrameLoop<R, S, C>, InitError> {
        let scene = self.scene.ok_or(InitError::MissingScene)?;
        if scene.snow.particles.is_empty() {
            return Err(InitError::EmptyParticlePool);
        }
        let camera = self.camera.ok_or(InitError::MissingCamera)?;
        let renderer = self.renderer.ok_or(InitError::MissingRenderer)?;
        let scheduler = self.scheduler.ok_or(InitError::MissingScheduler)?;

        debug!(
            "frame loop ready: {} particles, rotation_speed={}, go_down={}",
            scene.snow.particles.len(),
            self.control.rotation_speed,
            self.control.go_down
        );

        Ok(FrameLoop {
            state: SceneState {
                scene,
                camera,
                control: self.control,
            },
            renderer,
            scheduler,
            clock: self.clock,
            rng: self.rng.unwrap_or_else(StdRng::from_entropy),
            commands: self.commands,
            drop_step: self.drop_step,
            stats: FrameStats::default(),
            frame_number: 0,
            time: 0.0,
        })
    }
}
