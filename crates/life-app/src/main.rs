//! Windowed Game of Life on a fixed toroidal grid.
//!
//! The world advances once per tick (`LIFE_TICK_MS`, default 70 ms) and is
//! drawn one texel per cell. Closing the window or pressing Escape quits.

mod config;
mod renderer;

use std::sync::Arc;
use std::time::Instant;

use eyre::WrapErr;
use life_core::{Dimensions, Seed, World};
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use config::AppConfig;
use renderer::Renderer;

struct App {
    config: AppConfig,
    world: World,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    next_tick: Instant,
    /// First fatal error; returned from `main` once the loop exits.
    failure: Option<eyre::Report>,
}

impl App {
    fn new(world: World, config: AppConfig) -> Self {
        Self {
            config,
            world,
            window: None,
            renderer: None,
            next_tick: Instant::now(),
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: eyre::Report) {
        error!("{err:#}");
        self.failure.get_or_insert(err);
        event_loop.exit();
    }

    fn quit(event_loop: &ActiveEventLoop) {
        info!("quit requested, exiting");
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> eyre::Result<()> {
        let dims = self.world.dimensions();
        let size = PhysicalSize::new(
            (dims.width as u32).saturating_mul(self.config.scale),
            (dims.height as u32).saturating_mul(self.config.scale),
        );

        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title("Game of Life")
                        .with_inner_size(size)
                        .with_resizable(true),
                )
                .wrap_err("failed to create window")?,
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), dims))?;
        renderer.upload_grid(self.world.grid());
        window.request_redraw();

        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    /// Advance one generation and push it to the renderer.
    fn tick(&mut self) -> eyre::Result<()> {
        self.world.step()?;

        if let Some(renderer) = &self.renderer {
            renderer.upload_grid(self.world.grid());
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        let err = match renderer.render() {
            Ok(()) => return,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => eyre::eyre!("graphics device out of memory"),
            Err(e) => {
                warn!("Render error: {:?}", e);
                return;
            }
        };
        self.fail(event_loop, err);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.create_window(event_loop) {
                self.fail(event_loop, err);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => Self::quit(event_loop),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => Self::quit(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_none() || event_loop.exiting() {
            return;
        }

        let now = Instant::now();
        if now >= self.next_tick {
            if let Err(err) = self.tick() {
                self.fail(event_loop, err);
                return;
            }
            self.next_tick = now + self.config.tick_delay;
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("life=info".parse()?)
                .add_directive("life_core=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env();
    let seed = config.seed.unwrap_or_else(Seed::from_time);
    let dims = Dimensions::DEFAULT;

    info!(
        "Starting Game of Life: {} grid, scale {}, tick {:?}, seed {}",
        dims, config.scale, config.tick_delay, seed
    );

    let world = World::random(dims, seed)?;
    info!("Initial population: {}", world.population());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(world, config);
    event_loop.run_app(&mut app)?;

    info!("Stopped after {} generations", app.world.generation());

    match app.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
