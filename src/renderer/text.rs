//! Text rendering on glyphon.
//!
//! Text is organized as named buffers ("greeting", "wave_button_label", ...)
//! that the frame loop shows or hides per screen. Fonts come from the system
//! database; any font files shipped in the resource directory's `fonts/`
//! folder are loaded into the database on startup so styles can name them.

use glyphon::{
    Attrs, Buffer, Cache, Color, Family, FontSystem, Metrics, Resolution, Shaping, SwashCache,
    TextArea, TextAtlas, TextBounds, TextRenderer as GlyphonTextRenderer, Viewport, Weight,
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use wgpu::{Device, Queue, RenderPass, SurfaceConfiguration, TextureFormat};
use winit::window::Window;

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family by name; `None` uses the system sans-serif.
    pub font_family: Option<String>,
    pub font_size: f32,
    pub line_height: f32,
    pub color: Color,
    pub weight: Weight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: 16.0,
            line_height: 20.0,
            color: Color::rgb(255, 255, 255),
            weight: Weight::NORMAL,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextPosition {
    pub x: f32,
    pub y: f32,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
}

#[derive(Debug)]
pub struct TextBuffer {
    pub buffer: Buffer,
    pub style: TextStyle,
    pub position: TextPosition,
    pub visible: bool,
}

pub struct TextRenderer {
    pub font_system: FontSystem,
    swash_cache: SwashCache,
    viewport: Viewport,
    atlas: TextAtlas,
    text_renderer: GlyphonTextRenderer,
    pub text_buffers: HashMap<String, TextBuffer>,
    window_scale_factor: f32,
    window_size: winit::dpi::PhysicalSize<u32>,
}

impl TextRenderer {
    pub fn new(
        device: &Device,
        queue: &Queue,
        surface_format: TextureFormat,
        window: &Window,
    ) -> Self {
        let mut font_system = FontSystem::new();
        let swash_cache = SwashCache::new();
        let cache = Cache::new(device);
        let viewport = Viewport::new(device, &cache);
        let mut atlas = TextAtlas::new(device, queue, &cache, surface_format);
        let text_renderer =
            GlyphonTextRenderer::new(&mut atlas, device, wgpu::MultisampleState::default(), None);

        // Pick up any fonts bundled alongside the other assets. Missing
        // folder is the normal case; system fonts cover everything then.
        load_fonts_from_dir(&mut font_system, "fonts");

        Self {
            font_system,
            swash_cache,
            viewport,
            atlas,
            text_renderer,
            text_buffers: HashMap::new(),
            window_scale_factor: window.scale_factor() as f32,
            window_size: window.inner_size(),
        }
    }

    /// Creates (or replaces) a named text buffer.
    pub fn create_text_buffer(
        &mut self,
        id: &str,
        text: &str,
        style: Option<TextStyle>,
        position: Option<TextPosition>,
    ) {
        let style = style.unwrap_or_default();
        let position = position.unwrap_or_default();

        let metrics = Metrics::new(style.font_size, style.line_height);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        let width = position.max_width.unwrap_or(self.window_size.width as f32);
        let height = position
            .max_height
            .unwrap_or(self.window_size.height as f32);
        buffer.set_size(&mut self.font_system, Some(width), Some(height));

        buffer.set_text(&mut self.font_system, text, attrs(&style), Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        self.text_buffers.insert(
            id.to_string(),
            TextBuffer {
                buffer,
                style,
                position,
                visible: true,
            },
        );
    }

    /// Moves an existing buffer; used when widgets re-anchor on resize.
    pub fn update_position(&mut self, id: &str, position: TextPosition) -> Result<(), String> {
        let text_buffer = self
            .text_buffers
            .get_mut(id)
            .ok_or_else(|| format!("text buffer '{}' not found", id))?;

        if text_buffer.position.max_width != position.max_width
            || text_buffer.position.max_height != position.max_height
        {
            let width = position.max_width.unwrap_or(self.window_size.width as f32);
            let height = position
                .max_height
                .unwrap_or(self.window_size.height as f32);
            text_buffer
                .buffer
                .set_size(&mut self.font_system, Some(width), Some(height));
        }

        text_buffer.position = position;
        Ok(())
    }

    /// Shows or hides a buffer. Unknown ids are ignored.
    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(text_buffer) = self.text_buffers.get_mut(id) {
            text_buffer.visible = visible;
        }
    }

    /// Tracks window size changes for the glyph viewport and new buffers.
    pub fn resize(&mut self, queue: &Queue, resolution: Resolution) {
        self.window_size = winit::dpi::PhysicalSize::new(resolution.width, resolution.height);
        self.viewport.update(queue, resolution);
    }

    /// Shapes and uploads every visible buffer for this frame.
    pub fn prepare(
        &mut self,
        device: &Device,
        queue: &Queue,
        surface_config: &SurfaceConfiguration,
    ) -> Result<(), glyphon::PrepareError> {
        let text_areas: Vec<TextArea> = self
            .text_buffers
            .values()
            .filter(|buffer| buffer.visible)
            .map(|buffer| TextArea {
                buffer: &buffer.buffer,
                left: buffer.position.x,
                top: buffer.position.y,
                scale: self.window_scale_factor,
                bounds: TextBounds {
                    left: buffer.position.x as i32,
                    top: buffer.position.y as i32,
                    right: (buffer.position.x
                        + buffer
                            .position
                            .max_width
                            .unwrap_or(surface_config.width as f32)) as i32,
                    bottom: (buffer.position.y
                        + buffer
                            .position
                            .max_height
                            .unwrap_or(surface_config.height as f32)) as i32,
                },
                default_color: buffer.style.color,
                custom_glyphs: &[],
            })
            .collect();

        self.text_renderer.prepare(
            device,
            queue,
            &mut self.font_system,
            &mut self.atlas,
            &self.viewport,
            text_areas,
            &mut self.swash_cache,
        )?;

        Ok(())
    }

    pub fn render(&mut self, render_pass: &mut RenderPass) -> Result<(), glyphon::RenderError> {
        self.text_renderer
            .render(&self.atlas, &self.viewport, render_pass)
    }
}

fn attrs(style: &TextStyle) -> Attrs<'_> {
    let family = match &style.font_family {
        Some(name) => Family::Name(name.as_str()),
        None => Family::SansSerif,
    };
    Attrs::new().family(family).weight(style.weight)
}

fn load_fonts_from_dir(font_system: &mut FontSystem, dir: &str) {
    let Ok(entries) = fs::read_dir(Path::new(dir)) else {
        return;
    };
    for entry in entries.flatten() {
        match fs::read(entry.path()) {
            Ok(data) => {
                font_system.db_mut().load_font_data(data);
                log::info!("loaded font {}", entry.path().display());
            }
            Err(err) => {
                log::warn!("could not read font {}: {err}", entry.path().display());
            }
        }
    }
}
