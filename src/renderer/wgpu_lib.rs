//! WGPU-based renderer for the demo.
//!
//! [`WgpuRenderer`] owns the surface, device and queue plus the three
//! sub-renderers (sprite, rectangles, wave), and encodes one frame per
//! [`update_canvas`](WgpuRenderer::update_canvas) call. Each screen is a
//! short chain of render passes over the same surface view: a clearing pass
//! first, then load-and-draw passes for sprites, widgets and text.

use crate::demo::{DemoState, Screen};
use crate::renderer::rectangle::RectangleRenderer;
use crate::renderer::sprite::SpriteRenderer;
use crate::renderer::text::TextRenderer;
use crate::renderer::wave::WaveRenderer;
use wgpu::{SurfaceTexture, TextureView};

pub struct WgpuRenderer {
    /// The WGPU surface for presenting rendered frames.
    pub surface: wgpu::Surface<'static>,
    /// The surface configuration (format, size, present mode).
    pub surface_config: wgpu::SurfaceConfiguration,
    /// The WGPU device for resource creation.
    pub device: wgpu::Device,
    /// The WGPU queue for submitting commands.
    pub queue: wgpu::Queue,
    /// Draws the bouncing sprite.
    pub sprite_renderer: SpriteRenderer,
    /// Draws the button quads.
    pub rectangle_renderer: RectangleRenderer,
    /// Draws the full-screen wave shader.
    pub wave_renderer: WaveRenderer,
}

impl WgpuRenderer {
    /// Initializes the device and all per-screen renderers.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'static>,
        width: u32,
        height: u32,
    ) -> Self {
        let adapter = Self::create_adapter(instance, &surface).await;
        let (device, queue) = Self::create_device(&adapter).await;
        let surface_config = Self::create_surface_config(&surface, &adapter, width, height);

        surface.configure(&device, &surface_config);

        let sprite_renderer = SpriteRenderer::new(&device, surface_config.format);
        let rectangle_renderer = RectangleRenderer::new(&device, surface_config.format);
        let wave_renderer = WaveRenderer::new(&device, surface_config.format);

        Self {
            surface,
            surface_config,
            device,
            queue,
            sprite_renderer,
            rectangle_renderer,
            wave_renderer,
        }
    }

    /// Renders the current frame for the active screen.
    ///
    /// Returns the surface texture still to be presented; the caller submits
    /// the encoder and presents.
    pub fn update_canvas(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        demo: &DemoState,
        text_renderer: &mut TextRenderer,
    ) -> Result<SurfaceTexture, String> {
        let (surface_texture, surface_view) = self.get_surface_texture_and_view()?;

        match demo.screen {
            Screen::Menu => self.render_menu_screen(encoder, &surface_view, demo),
            Screen::Wave => self.render_wave_screen(encoder, &surface_view, demo),
        }

        self.render_text(encoder, &surface_view, text_renderer);

        Ok(surface_texture)
    }

    // Private helper methods

    async fn create_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'static>,
    ) -> wgpu::Adapter {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(surface),
            })
            .await
            .expect("Failed to find an appropriate adapter")
    }

    async fn create_device(adapter: &wgpu::Adapter) -> (wgpu::Device, wgpu::Queue) {
        adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: Default::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .expect("Failed to create device")
    }

    fn create_surface_config(
        surface: &wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> wgpu::SurfaceConfiguration {
        let capabilities = surface.get_capabilities(adapter);
        let format = capabilities
            .formats
            .iter()
            .find(|&&f| f == wgpu::TextureFormat::Bgra8UnormSrgb)
            .copied()
            .expect("Failed to select proper surface texture format");

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode: capabilities.alpha_modes[0],
            view_formats: vec![],
        }
    }

    fn get_surface_texture_and_view(&self) -> Result<(SurfaceTexture, TextureView), String> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Outdated) => {
                return Err("WGPU surface outdated".to_string());
            }
            Err(_) => {
                return Err("Failed to acquire next swap chain texture".to_string());
            }
        };

        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        Ok((surface_texture, surface_view))
    }

    fn render_menu_screen(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &TextureView,
        demo: &DemoState,
    ) {
        {
            let mut sprite_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Menu Sprite Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.sprite_renderer
                .render(&self.device, &mut sprite_pass, &demo.sprite);
        }

        self.render_rectangles(encoder, surface_view);
    }

    fn render_wave_screen(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &TextureView,
        demo: &DemoState,
    ) {
        let resolution = [
            self.surface_config.width as f32,
            self.surface_config.height as f32,
        ];
        let pointer = demo.pointer(resolution[0], resolution[1]);
        self.wave_renderer
            .update(&self.queue, resolution, demo.wave_time, pointer);

        {
            let mut wave_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Wave Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.wave_renderer.render(&mut wave_pass);
        }

        self.render_rectangles(encoder, surface_view);
    }

    fn render_rectangles(&mut self, encoder: &mut wgpu::CommandEncoder, surface_view: &TextureView) {
        let mut rectangle_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Rectangle Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: surface_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        self.rectangle_renderer
            .render(&self.device, &mut rectangle_pass);
    }

    fn render_text(
        &mut self,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &TextureView,
        text_renderer: &mut TextRenderer,
    ) {
        text_renderer.resize(
            &self.queue,
            glyphon::Resolution {
                width: self.surface_config.width,
                height: self.surface_config.height,
            },
        );
        if let Err(e) = text_renderer.prepare(&self.device, &self.queue, &self.surface_config) {
            log::error!("failed to prepare text renderer: {e:?}");
        }

        let mut text_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Text Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: surface_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Err(e) = text_renderer.render(&mut text_pass) {
            log::error!("text render failed: {e:?}");
        }
    }
}
