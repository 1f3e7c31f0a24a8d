//! Relief Terrain Viewer
//!
//! Run with: `cargo run --bin relief [config.json]`
//!
//! Generates a mountain height field and flies a first-person camera over it.
//! The config path may also be given through `RELIEF_CONFIG`.
//!
//! Controls:
//! - WASD: Move (follows the terrain)
//! - Mouse: Look around
//! - Arrow keys: Turn / tilt
//! - ESC: Exit

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use relief_engine::input::{CursorAction, CursorManager};
use relief_engine::logging::init_logging;
use relief_engine::render::{GpuContext, GpuContextConfig, SurfaceRecovery, TerrainRenderPass};
use relief_engine::{KeyCode, KeyResponse, TerrainScene, ViewerConfig, ViewerError};

/// Environment variable naming a config file
const CONFIG_ENV: &str = "RELIEF_CONFIG";

// ============================================================================
// APPLICATION STATE
// ============================================================================

struct AppState {
    window: Arc<Window>,
    gpu: GpuContext,
    terrain_pass: TerrainRenderPass,
    scene: TerrainScene,
    cursor: CursorManager,
    clear_color: wgpu::Color,
    frame_count: u32,
    fps_update_time: Instant,
}

impl AppState {
    fn new(event_loop: &ActiveEventLoop, config: &ViewerConfig) -> Result<Self, ViewerError> {
        let window_config = &config.window;
        let mut window_attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height));
        if window_config.fullscreen {
            window_attrs = window_attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = GpuContext::new(
            Arc::clone(&window),
            GpuContextConfig {
                vsync: window_config.vsync,
                ..Default::default()
            },
        )?;

        let scene = TerrainScene::generate(&config.terrain, config.camera);
        let terrain_pass = TerrainRenderPass::new(&gpu, &scene.geometry())?;

        let mut cursor = CursorManager::new();
        cursor.apply_to_window(&window);

        let [r, g, b] = window_config.clear_color;
        Ok(Self {
            window,
            gpu,
            terrain_pass,
            scene,
            cursor,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
            frame_count: 0,
            fps_update_time: Instant::now(),
        })
    }

    fn update(&mut self) {
        self.frame_count += 1;
        let elapsed = self.fps_update_time.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frame_count as f32 / elapsed;
            let camera = &self.scene.camera;
            tracing::trace!(
                fps,
                x = camera.position.x,
                y = camera.position.y,
                eye = camera.eye_height,
                yaw = camera.yaw,
                pitch = camera.pitch(),
                "frame stats"
            );
            self.frame_count = 0;
            self.fps_update_time = Instant::now();
        }

        self.scene.tick();
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let view_proj = self.scene.camera.view_projection(self.gpu.aspect());
        self.terrain_pass.update_uniforms(&self.gpu.queue, view_proj);
        self.terrain_pass.render_frame(&self.gpu, self.clear_color)
    }

    fn handle_focus(&mut self, focused: bool) {
        if !focused {
            self.scene.handle_focus_lost();
        }
        if self.cursor.handle_focus_changed(focused) == CursorAction::ApplyState {
            self.cursor.apply_to_window(&self.window);
        }
    }
}

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    config: ViewerConfig,
    state: Option<AppState>,
    fatal: Option<ViewerError>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        tracing::info!("creating window");
        match AppState::new(event_loop, &self.config) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
                tracing::info!("ready: WASD move, mouse/arrows look, ESC exits");
            }
            Err(err) => {
                self.fatal = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                state.gpu.resize(new_size.width, new_size.height);
            }
            WindowEvent::Focused(focused) => {
                state.handle_focus(focused);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                if state.scene.handle_key(KeyCode::from_winit(key), pressed) == KeyResponse::Exit {
                    tracing::info!("escape pressed, exiting");
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                state.update();

                if let Err(err) = state.render() {
                    match SurfaceRecovery::for_error(&err) {
                        SurfaceRecovery::Reconfigure => state.gpu.reconfigure(),
                        SurfaceRecovery::Skip => tracing::warn!("frame skipped: {err}"),
                        SurfaceRecovery::Fatal(fatal) => {
                            self.fatal = Some(fatal);
                            event_loop.exit();
                            return;
                        }
                    }
                }

                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        let Some(state) = &mut self.state else {
            return;
        };
        if !state.cursor.has_focus() {
            return;
        }
        if let DeviceEvent::MouseMotion { delta } = event {
            state
                .scene
                .handle_pointer_motion(delta.0 as f32, delta.1 as f32);
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn load_config() -> Result<ViewerConfig, ViewerError> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            Ok(ViewerConfig::load(&path)?)
        }
        None => Ok(ViewerConfig::default()),
    }
}

fn run() -> Result<(), ViewerError> {
    let config = load_config()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        config,
        state: None,
        fatal: None,
    };
    event_loop.run_app(&mut app)?;

    match app.fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
