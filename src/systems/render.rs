//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Line pipeline
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use brickball_core::GameSession;
use brickball_render::{
    context::RenderContext,
    pipeline::{LinePipeline, ViewportUniforms},
    DebugLineRenderer,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed (no adapter, device or surface)
    Initialization(String),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Initialization(msg) => write!(f, "Renderer initialization failed: {}", msg),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    line_pipeline: LinePipeline,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    ///
    /// `viewport` is the pixel space the arena is authored in.
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        viewport: (u32, u32),
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))
            .map_err(|e| RenderError::Initialization(e.to_string()))?;

        let line_pipeline = LinePipeline::new(&context.device, context.surface_format());
        line_pipeline.update_viewport(
            &context.queue,
            &ViewportUniforms::new(viewport.0 as f32, viewport.1 as f32),
        );

        Ok(Self {
            context,
            line_pipeline,
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&mut self) {
        log::debug!("Reconfiguring lost surface");
        self.context.reconfigure();
    }

    /// Render a single frame
    ///
    /// Clears to the background color, then draws the world's outlines when
    /// `sink` is given.
    pub fn render_frame(
        &mut self,
        session: &GameSession,
        sink: Option<&mut DebugLineRenderer>,
    ) -> Result<(), RenderError> {
        match sink {
            Some(sink) => {
                sink.clear();
                session.debug_draw(&mut *sink);
                self.line_pipeline
                    .upload(&self.context.device, &self.context.queue, sink.vertices());
            }
            None => {
                self.line_pipeline
                    .upload(&self.context.device, &self.context.queue, &[]);
            }
        }

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.line_pipeline
            .render(&mut encoder, &view, self.render_config.clear_color());

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
