//! Brickball - a paddle, a ball and a block in a walled arena
//!
//! Moves the paddle with the arrow keys; Escape or closing the window quits.

use std::process::ExitCode;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use brickball::config::AppConfig;
use brickball::input::{InputAction, InputMapper};
use brickball::lifecycle::{GamePhase, InitError};
use brickball::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use brickball_core::{ArenaLayout, GameSession, WorldBuilder};
use brickball_input::PaddleController;
use brickball_render::DebugLineRenderer;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    phase: GamePhase,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    session: Option<GameSession>,
    /// Present only when shapes are drawn
    debug_lines: Option<DebugLineRenderer>,
    controller: PaddleController,
    simulation: SimulationSystem,
    collisions: u64,
    /// Set when initialization or the frame loop hit a fatal error
    failed: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let controller = PaddleController::new().with_move_speed(config.paddle.speed);

        Self {
            config,
            phase: GamePhase::Initializing,
            window: None,
            render: None,
            session: None,
            debug_lines: None,
            controller,
            simulation: SimulationSystem::new(),
            collisions: 0,
            failed: false,
        }
    }

    /// Create window, renderer, world and debug sink, in that order
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let settings = self.config.session_settings()?;

        let window = WindowSystem::create(event_loop, &self.config.window)?;

        let render = RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            (self.config.window.width, self.config.window.height),
            self.config.window.vsync,
        )?;
        let (width, height) = render.size();
        log::info!("Renderer ready at {}x{}", width, height);

        let layout = ArenaLayout::default();
        let session = WorldBuilder::new(&layout, settings).build()?;

        if self.config.debug.draw_shapes {
            self.debug_lines = Some(DebugLineRenderer::new(session.scale()));
        }

        window.update_title(self.collisions);
        window.request_redraw();

        self.window = Some(window);
        self.render = Some(render);
        self.session = Some(session);
        Ok(())
    }

    fn enter_phase(&mut self, next: GamePhase) {
        if let Err(e) = self.phase.transition_to(next) {
            log::warn!("{}", e);
        }
    }

    /// Release the world and leave the event loop
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if self.phase != GamePhase::ShuttingDown {
            self.enter_phase(GamePhase::ShuttingDown);
        }
        self.debug_lines = None;
        if let Some(session) = self.session.take() {
            session.shutdown();
        }
        event_loop.exit();
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(session), Some(render)) = (&mut self.session, &mut self.render) else {
            return;
        };

        let result = self.simulation.update(session, &self.controller);
        if result.collisions > 0 {
            self.collisions += result.collisions as u64;
            if let Some(window) = &self.window {
                window.update_title(self.collisions);
            }
        }

        match render.render_frame(session, self.debug_lines.as_mut()) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.reconfigure(),
            Err(RenderError::OutOfMemory) => {
                log::error!("{}", RenderError::OutOfMemory);
                self.failed = true;
                self.shutdown(event_loop);
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.phase != GamePhase::Initializing {
            return;
        }

        match self.initialize(event_loop) {
            Ok(()) => {
                self.simulation.reset_clock();
                self.enter_phase(GamePhase::Running);
            }
            Err(e) => {
                log::error!("Initialization failed: {}", e);
                self.failed = true;
                self.shutdown(event_loop);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.controller.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(InputAction::Quit) = InputMapper::map_keyboard(key, event.state) {
                        self.shutdown(event_loop);
                        return;
                    }
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.phase == GamePhase::Running {
                    self.frame(event_loop);
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(session) = self.session.take() {
            session.shutdown();
        }
    }
}

fn main() -> ExitCode {
    let config = AppConfig::load();

    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Starting Brickball");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        return ExitCode::FAILURE;
    }

    if app.failed {
        ExitCode::FAILURE
    } else {
        log::info!("Goodbye");
        ExitCode::SUCCESS
    }
}
