//! AppState: everything a running demo session owns.

use crate::demo::DemoState;
use crate::demo::audio::MusicPlayer;
use crate::demo::sprite::Vec2;
use crate::renderer::text::{TextPosition, TextRenderer, TextStyle};
use crate::renderer::wgpu_lib::WgpuRenderer;
use glyphon::{Color, Weight};
use std::time::Instant;
use winit::window::Window;

/// The texture drawn as the bouncing sprite.
pub const SPRITE_TEXTURE: &str = "wabbit_alpha.png";
/// The looping background track.
pub const MUSIC_TRACK: &str = "crystal_cave_track.mp3";

/// Sprite box dimensions used when the texture could not be loaded; the
/// sprite is invisible then, but the bounce integration still needs a size.
const FALLBACK_SPRITE_SIZE: (u32, u32) = (32, 32);

/// Holds all state for a running session: renderers, demo state, audio and
/// frame timing.
pub struct AppState {
    /// The WGPU renderer and its per-screen pipelines.
    pub wgpu_renderer: WgpuRenderer,
    /// All on-screen text, keyed by buffer id.
    pub text_renderer: TextRenderer,
    /// The two-screen demo state machine.
    pub demo: DemoState,
    /// Background music; `None` when the backend or the track is missing.
    pub music: Option<MusicPlayer>,
    /// Timestamp of the previous frame, for delta-time computation.
    pub last_frame_time: Instant,
    /// Seconds elapsed between the two most recent frames.
    pub delta_time: f32,
}

impl AppState {
    /// Creates a session: GPU setup, asset loads, text buffers, music.
    ///
    /// Asset loads are non-fatal by design. A missing texture hides the
    /// sprite, missing music runs silent; both are logged.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'static>,
        window: &Window,
        width: u32,
        height: u32,
    ) -> Self {
        let mut wgpu_renderer = WgpuRenderer::new(instance, surface, width, height).await;

        if let Err(err) =
            wgpu_renderer
                .sprite_renderer
                .load_texture(&wgpu_renderer.device, &wgpu_renderer.queue, SPRITE_TEXTURE)
        {
            log::warn!("could not load texture '{SPRITE_TEXTURE}': {err}");
        }
        let (sprite_w, sprite_h) = wgpu_renderer
            .sprite_renderer
            .texture_size()
            .unwrap_or(FALLBACK_SPRITE_SIZE);

        let demo = DemoState::new(
            Vec2::new(sprite_w as f32, sprite_h as f32),
            width as f32,
        );

        let mut text_renderer = TextRenderer::new(
            &wgpu_renderer.device,
            &wgpu_renderer.queue,
            wgpu_renderer.surface_config.format,
            window,
        );
        create_demo_text(&mut text_renderer, width as f32, height as f32);

        let music = match MusicPlayer::new() {
            Ok(mut player) => {
                if let Err(err) = player.play_music(MUSIC_TRACK) {
                    log::warn!("could not play music '{MUSIC_TRACK}': {err}");
                }
                Some(player)
            }
            Err(err) => {
                log::warn!("audio backend unavailable: {err}");
                None
            }
        };

        Self {
            wgpu_renderer,
            text_renderer,
            demo,
            music,
            last_frame_time: Instant::now(),
            delta_time: 0.0,
        }
    }

    /// Resizes the surface and re-anchors everything window-relative.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.wgpu_renderer.surface_config.width = width;
        self.wgpu_renderer.surface_config.height = height;
        self.wgpu_renderer.surface.configure(
            &self.wgpu_renderer.device,
            &self.wgpu_renderer.surface_config,
        );

        let (w, h) = (width as f32, height as f32);
        self.wgpu_renderer.sprite_renderer.resize(w, h);
        self.wgpu_renderer.rectangle_renderer.resize(w, h);
        self.demo.update_layout(w);

        // The close button's label and the bottom-anchored instructions
        // follow the window edges.
        let close = self.demo.close_button.bounds;
        if let Err(err) = self.text_renderer.update_position(
            "close_label",
            TextPosition {
                x: close.x + 8.0,
                y: close.y + 3.0,
                max_width: Some(close.width),
                max_height: Some(close.height),
            },
        ) {
            log::warn!("{err}");
        }
        if let Err(err) = self.text_renderer.update_position(
            "wave_instructions",
            TextPosition {
                x: 10.0,
                y: h - 30.0,
                max_width: Some(300.0),
                max_height: Some(25.0),
            },
        ) {
            log::warn!("{err}");
        }
    }
}

/// Creates every text buffer the demo uses; the frame loop only toggles
/// visibility afterwards.
fn create_demo_text(text_renderer: &mut TextRenderer, width: f32, height: f32) {
    text_renderer.create_text_buffer(
        "greeting",
        "Hello Wabbit",
        Some(TextStyle {
            font_size: 20.0,
            line_height: 25.0,
            color: Color::rgb(255, 255, 255),
            ..Default::default()
        }),
        Some(TextPosition {
            x: 200.0,
            y: 200.0,
            max_width: Some(300.0),
            max_height: Some(30.0),
        }),
    );

    text_renderer.create_text_buffer(
        "wave_button_label",
        "Wave shader",
        Some(TextStyle {
            font_size: 20.0,
            line_height: 25.0,
            color: Color::rgb(0, 0, 0),
            weight: Weight::MEDIUM,
            ..Default::default()
        }),
        Some(TextPosition {
            x: 65.0,
            y: 63.0,
            max_width: Some(170.0),
            max_height: Some(30.0),
        }),
    );

    text_renderer.create_text_buffer(
        "wave_instructions",
        "Scroll to change speed",
        Some(TextStyle {
            font_size: 20.0,
            line_height: 25.0,
            color: Color::rgb(255, 255, 255),
            ..Default::default()
        }),
        Some(TextPosition {
            x: 10.0,
            y: height - 30.0,
            max_width: Some(300.0),
            max_height: Some(25.0),
        }),
    );

    text_renderer.create_text_buffer(
        "close_label",
        "X",
        Some(TextStyle {
            font_size: 20.0,
            line_height: 25.0,
            color: Color::rgb(255, 255, 255),
            weight: Weight::BOLD,
            ..Default::default()
        }),
        Some(TextPosition {
            x: width - 32.0,
            y: 13.0,
            max_width: Some(30.0),
            max_height: Some(30.0),
        }),
    );

    // The demo starts on the menu screen.
    text_renderer.set_visible("wave_instructions", false);
    text_renderer.set_visible("close_label", false);
}
