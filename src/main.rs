use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use snowfall::cli::Cli;
use snowfall::config::SceneConfig;
use snowfall::control::command_channel;
use snowfall::core::{Clock, FixedStepClock, FrameLoop};
use snowfall::render::{GpuRenderer, HeadlessRenderer};
use snowfall::scene::Scene;
use snowfall::ui::ControlPanel;
use snowfall::window::{HeadlessScheduler, Window};
use snowfall::{build_camera, build_control, build_scene, logging};

type WindowedLoop = FrameLoop<GpuRenderer, Window, Clock>;

struct App {
    config: SceneConfig,
    show_ui: bool,
    // handed to the frame loop once the window exists
    startup: Option<(Scene, StdRng)>,
    frame_loop: Option<WindowedLoop>,
}

impl App {
    fn new(config: SceneConfig, show_ui: bool, scene: Scene, rng: StdRng) -> Self {
        Self {
            config,
            show_ui,
            startup: Some((scene, rng)),
            frame_loop: None,
        }
    }

    fn create_loop(&mut self, event_loop: &ActiveEventLoop) -> Result<Option<WindowedLoop>> {
        let Some((scene, rng)) = self.startup.take() else {
            return Ok(None);
        };

        let window_config = &self.config.window;
        let window = Arc::new(
            event_loop
                .create_window(
                    WinitWindow::default_attributes()
                        .with_title(window_config.title.clone())
                        .with_inner_size(winit::dpi::LogicalSize::new(
                            window_config.width,
                            window_config.height,
                        )),
                )
                .context("Failed to create window")?,
        );
        let size = window.inner_size();

        let (commands_tx, commands_rx) = command_channel();
        let panel = self.show_ui.then(|| ControlPanel::new(commands_tx));

        let renderer = pollster::block_on(GpuRenderer::new(window.clone(), &scene, panel))
            .context("Failed to initialize renderer")?;

        let frame_loop = FrameLoop::builder(Clock::new())
            .camera(build_camera(&self.config, size.width, size.height))
            .control(build_control(&self.config))
            .scene(scene)
            .renderer(renderer)
            .scheduler(Window::new(window.clone()))
            .commands(commands_rx)
            .rng(rng)
            .tower_drop_step(self.config.tower.drop_step)
            .build()?;

        window.request_redraw();
        Ok(Some(frame_loop))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.is_some() {
            return;
        }

        match self.create_loop(event_loop) {
            Ok(Some(frame_loop)) => self.frame_loop = Some(frame_loop),
            Ok(None) => {}
            Err(e) => {
                error!("{:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(frame_loop) = &mut self.frame_loop else {
            return;
        };

        // Let egui handle the event first
        if frame_loop.renderer_mut().handle_event(&event) {
            return;
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                frame_loop.renderer_mut().resize(size.width, size.height);
                frame_loop.set_viewport(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = frame_loop.tick() {
                    if e.needs_reconfigure() {
                        warn!("{}; reconfiguring surface", e);
                        frame_loop.renderer_mut().reconfigure();
                    } else {
                        error!("Render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Drive the loop with a fixed step and no window until `frames` have run
fn run_headless(config: &SceneConfig, scene: Scene, rng: StdRng, frames: u64, step: f32) -> Result<()> {
    let mut frame_loop = FrameLoop::builder(FixedStepClock::new(step))
        .camera(build_camera(config, config.window.width, config.window.height))
        .control(build_control(config))
        .scene(scene)
        .renderer(HeadlessRenderer::new())
        .scheduler(HeadlessScheduler::new())
        .rng(rng)
        .tower_drop_step(config.tower.drop_step)
        .build()?;

    info!("Running {} headless frames at {:.4}s per frame", frames, step);

    // the first frame is not requested by anyone
    let mut pending = true;
    while pending && frame_loop.frame_number() < frames {
        frame_loop.tick()?;
        pending = frame_loop.scheduler().take_pending();
    }

    let renderer = frame_loop.renderer();
    let tower = renderer.last_tower().unwrap_or_default();
    info!(
        "Rendered {} frames; tower rotation.y = {:.3}, position.y = {:.3}; lowest particle y = {:.3}",
        renderer.frames(),
        tower.rotation.y,
        tower.position.y,
        renderer.lowest_particle().unwrap_or_default()
    );

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    config.apply_cli(&cli);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = build_scene(&config, &mut rng)?;

    if let Some(frames) = cli.headless {
        return run_headless(&config, scene, rng, frames, cli.fixed_delta);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, !cli.no_ui, scene, rng);

    info!("Snowfall - Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
