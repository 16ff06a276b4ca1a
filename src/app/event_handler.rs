//! Event handler: the winit application and its input routing.

use crate::app::app_state::AppState;
use crate::demo::sprite::Vec2;
use std::{sync::Arc, time::Instant};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

const INITIAL_WIDTH: u32 = 1280;
const INITIAL_HEIGHT: u32 = 800;
const WINDOW_TITLE: &str = "Hello Wabbit";

/// Scroll wheel pixels treated as one line when the platform reports
/// pixel deltas (touchpads).
const SCROLL_PIXELS_PER_LINE: f64 = 20.0;

/// The application: owns the WGPU instance, the window and the session
/// state, and routes winit events into them.
///
/// `state` and `window` stay `None` until the first `resumed` call creates
/// the window.
#[derive(Default)]
pub struct App {
    /// The WGPU instance for graphics operations.
    pub instance: wgpu::Instance,
    /// The current session state, None until initialized.
    pub state: Option<AppState>,
    /// The application window, None until created.
    pub window: Option<Arc<Window>>,
}

impl App {
    pub fn new() -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        Self {
            instance,
            state: None,
            window: None,
        }
    }

    /// Creates the surface and session state for a freshly created window.
    pub async fn set_window(&mut self, window: Window) {
        let window = Arc::new(window);
        let _ = window.request_inner_size(PhysicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT));

        let surface = self
            .instance
            .create_surface(window.clone())
            .expect("Failed to create surface!");

        let state = AppState::new(
            &self.instance,
            surface,
            &window,
            INITIAL_WIDTH,
            INITIAL_HEIGHT,
        )
        .await;

        self.window.get_or_insert(window);
        self.state.get_or_insert(state);
    }

    /// Applies a window resize. Zero-sized updates (minimize) are ignored.
    pub fn handle_resized(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            if let Some(state) = self.state.as_mut() {
                state.resize_surface(width, height);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes().with_title(WINDOW_TITLE);
        let window = match event_loop.create_window(attributes) {
            Ok(window) => window,
            Err(err) => {
                panic!("Failed to create window: {}", err);
            }
        };
        pollster::block_on(self.set_window(window));

        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested; stopping");
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                self.handle_resized(new_size.width, new_size.height);
            }

            // The loop runs until Escape or the close button, so Escape
            // short-circuits here rather than going through demo state.
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                state.demo.cursor = Vec2::new(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => state.demo.press(),
                ElementState::Released => state.demo.release(),
            },

            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => (pos.y / SCROLL_PIXELS_PER_LINE) as f32,
                };
                state.demo.scroll(lines);
            }

            WindowEvent::RedrawRequested => {
                self.handle_frame_timing(Instant::now());
                self.handle_redraw();
            }

            _ => {}
        }
    }
}
