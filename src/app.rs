//! Application shell: window, event loop and frame scheduling.
//!
//! The frame loop owns the scene and threads it through the two phases --
//! state update, then rendering -- while input events mutate camera and
//! player state synchronously as they arrive.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes},
};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, BOARD_COLS, BOARD_ROWS};
use crate::gfx::{CameraController, CameraRig, RenderEngine, Scene};

const WINDOW_TITLE: &str = "causeway";

pub struct CausewayApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Option<Scene>,
    // Generated up front from the seed; moved into the scene once the GPU
    // exists.
    pending_board: Option<Board>,
    controller: CameraController,
}

impl CausewayApp {
    /// Generates the board from `seed` and prepares the event loop. No GPU
    /// work happens until [`run`](Self::run) opens the window.
    pub fn new(seed: u64) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate(BOARD_ROWS, BOARD_COLS, &mut rng);
        log::info!("generated {}x{} board from seed {seed}", BOARD_ROWS, BOARD_COLS);

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                scene: None,
                pending_board: Some(board),
                controller: CameraController::new(),
            },
        })
    }

    /// Runs the event loop until quit. Consumes the app; every GPU resource
    /// is released when the state drops on the way out.
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .expect("Event loop already consumed");
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;
        Ok(())
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let Ok(window) = event_loop.create_window(
            WindowAttributes::default()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(1300, 600)),
        ) else {
            log::error!("window creation failed, exiting");
            event_loop.exit();
            return;
        };

        let window_handle = Arc::new(window);
        self.window = Some(window_handle.clone());

        let (width, height) = window_handle.inner_size().into();
        let renderer =
            pollster::block_on(async move { RenderEngine::new(window_handle, width, height).await });

        let board = self
            .pending_board
            .take()
            .expect("board consumed before scene construction");
        let camera = CameraRig::new(width as f32 / height.max(1) as f32);
        let scene = Scene::new(
            renderer.device(),
            renderer.queue(),
            renderer.transform_layout(),
            renderer.texture_layout(),
            board,
            camera,
        );

        self.scene = Some(scene);
        self.render_engine = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };
        let Some(scene) = self.scene.as_mut() else {
            return;
        };

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match key_code {
                KeyCode::Escape | KeyCode::KeyQ => event_loop.exit(),
                code => {
                    self.controller.apply(code, &mut scene.camera);
                }
            },
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                scene.camera.resize_projection(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                scene.update();
                scene.sync_transforms(render_engine.queue());
                render_engine.update(scene.camera.uniform);
                render_engine.render_frame(scene);
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
