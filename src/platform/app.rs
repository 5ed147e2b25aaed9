//! Native window and frame loop
//!
//! One window, one simulation tick and one render per redraw.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand_pcg::Pcg32;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::bounds::SharedBounds;
use super::clock::FrameClock;
use super::keyboard::{KeyboardState, map_key};
use crate::error::AppError;
use crate::renderer::{RenderFrame, RenderState};
use crate::settings::Settings;
use crate::sim::{
    GameEvent, GamePhase, Key, ScreenBounds, SimulationState, seeded, serve_random, tick,
};

/// Open the window and run until it is closed
pub fn run(settings: Settings) -> Result<(), AppError> {
    let event_loop = EventLoop::new().map_err(AppError::EventLoop)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app).map_err(AppError::EventLoop)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    render: Option<RenderState>,
    state: SimulationState,
    keys: KeyboardState,
    bounds: SharedBounds,
    clock: FrameClock,
    rng: Pcg32,
    /// Fatal error to hand back from [`run`]
    error: Option<AppError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let bounds = ScreenBounds::new(
            settings.window.width as f32,
            settings.window.height as f32,
        );
        let seed = settings.seed.unwrap_or_else(clock_seed);
        log::info!("Serve seed: {}", seed);

        let mut rng = seeded(seed);
        let mut state = SimulationState::new(bounds, settings.tuning.clone());
        serve_random(&mut state, &mut rng);

        Self {
            clock: FrameClock::new(settings.max_frame_dt),
            settings,
            window: None,
            render: None,
            state,
            keys: KeyboardState::new(),
            bounds: SharedBounds::new(bounds),
            rng,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        log::error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let attrs = Window::default_attributes()
            .with_title(self.settings.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.settings.window.width,
                self.settings.window.height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(AppError::CreateWindow)?,
        );

        let render = pollster::block_on(RenderState::new(window.clone(), &self.settings))?;

        // The window manager may not honor the requested size
        let (width, height) = render.size;
        self.bounds
            .store(ScreenBounds::new(width as f32, height as f32));

        self.window = Some(window);
        self.render = Some(render);
        self.clock.reset();
        Ok(())
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, key: Key) {
        match key {
            Key::Escape => event_loop.exit(),
            Key::Space if self.keys.take_pressed(Key::Space) => {
                if self.state.toggle_pause() {
                    serve_random(&mut self.state, &mut self.rng);
                    self.update_title();
                }
                log::info!("Phase: {:?}", self.state.phase);
            }
            _ => {}
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick();

        self.state.resize(self.bounds.load());

        let mut scored = false;
        for event in tick(&mut self.state, &self.keys, &mut self.rng, dt) {
            match event {
                GameEvent::WallBounce | GameEvent::PaddleHit { .. } => log::trace!("{event:?}"),
                GameEvent::Scored { .. } => scored = true,
                GameEvent::MatchWon { winner } => log::info!("{winner:?} wins the match"),
            }
        }
        if scored {
            self.update_title();
        }

        let Some(render) = self.render.as_mut() else {
            return;
        };
        render.sync(&RenderFrame::from_state(&self.state));

        match render.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => render.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => self.fail(event_loop, AppError::OutOfMemory),
            Err(e) => log::warn!("Skipping frame: {e:?}"),
        }
    }

    /// Scores go in the title bar; nothing is drawn as text
    fn update_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let [left, right] = self.state.scores;
        let suffix = if self.state.phase == GamePhase::Win {
            " (space for a new match)"
        } else {
            ""
        };
        window.set_title(&format!(
            "{}  {left} : {right}{suffix}",
            self.settings.window.title
        ));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            self.fail(event_loop, err);
            return;
        }
        self.update_title();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    log::info!("Resized to {}x{}", size.width, size.height);
                    if let Some(render) = self.render.as_mut() {
                        render.resize(size.width, size.height);
                    }
                    self.bounds
                        .store(ScreenBounds::new(size.width as f32, size.height as f32));
                }
            }

            WindowEvent::Focused(false) => self.keys.clear(),

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(key) = map_key(event.physical_key) {
                    self.keys.apply(key, event.state, event.repeat);
                    if event.state.is_pressed() {
                        self.on_key(event_loop, key);
                    }
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
