//! Per-frame update and rendering for the App.

use crate::demo::Screen;
use crate::demo::sprite::Vec2;
use crate::renderer::rectangle::Rectangle;
use std::time::Instant;

use super::event_handler::App;

// Button fills, linear values for the sRGB surface.
const BUTTON_IDLE: [f32; 4] = [0.22, 0.22, 0.22, 1.0];
const BUTTON_PRESSED: [f32; 4] = [0.58, 0.58, 0.58, 1.0];
const CLOSE_IDLE: [f32; 4] = [0.52, 0.015, 0.04, 1.0];
const CLOSE_PRESSED: [f32; 4] = [0.78, 0.022, 0.04, 1.0];

impl App {
    /// Renders one frame: advances the demo, rebuilds the frame's widgets,
    /// encodes the render passes and presents. Requests the next redraw at
    /// the end, keeping the loop running continuously.
    pub fn handle_redraw(&mut self) {
        let window = self
            .window
            .as_ref()
            .expect("Window must be initialized before use");
        if window.is_minimized().unwrap_or(false) {
            return;
        }

        let state = self
            .state
            .as_mut()
            .expect("State must be initialized before use");

        let bounds = Vec2::new(
            state.wgpu_renderer.surface_config.width as f32,
            state.wgpu_renderer.surface_config.height as f32,
        );
        state.demo.update(state.delta_time, bounds);

        // Per-screen text visibility.
        let on_menu = state.demo.screen == Screen::Menu;
        state.text_renderer.set_visible("greeting", on_menu);
        state.text_renderer.set_visible("wave_button_label", on_menu);
        state.text_renderer.set_visible("wave_instructions", !on_menu);
        state.text_renderer.set_visible("close_label", !on_menu);

        // Rebuild this frame's button quads.
        state.wgpu_renderer.rectangle_renderer.clear_rectangles();
        match state.demo.screen {
            Screen::Menu => {
                let button = &state.demo.wave_button;
                let color = if button.pressed {
                    BUTTON_PRESSED
                } else {
                    BUTTON_IDLE
                };
                state.wgpu_renderer.rectangle_renderer.add_rectangle(
                    Rectangle::new(
                        button.bounds.x,
                        button.bounds.y,
                        button.bounds.width,
                        button.bounds.height,
                        color,
                    ),
                );
            }
            Screen::Wave => {
                let button = &state.demo.close_button;
                let color = if button.pressed {
                    CLOSE_PRESSED
                } else {
                    CLOSE_IDLE
                };
                state.wgpu_renderer.rectangle_renderer.add_rectangle(
                    Rectangle::new(
                        button.bounds.x,
                        button.bounds.y,
                        button.bounds.width,
                        button.bounds.height,
                        color,
                    ),
                );
            }
        }

        let mut encoder = state
            .wgpu_renderer
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        let surface_texture = match state.wgpu_renderer.update_canvas(
            &mut encoder,
            &state.demo,
            &mut state.text_renderer,
        ) {
            Ok(surface_texture) => surface_texture,
            Err(err) => {
                log::error!("failed to update canvas: {err}");
                return;
            }
        };

        state.wgpu_renderer.queue.submit(Some(encoder.finish()));
        surface_texture.present();

        window.request_redraw();
    }

    /// Updates frame timing: the delta time the demo integrates with.
    pub fn handle_frame_timing(&mut self, current_time: Instant) {
        if let Some(state) = self.state.as_mut() {
            let delta_time = current_time
                .duration_since(state.last_frame_time)
                .as_secs_f32();

            state.delta_time = delta_time;
            state.last_frame_time = current_time;
        }
    }
}
