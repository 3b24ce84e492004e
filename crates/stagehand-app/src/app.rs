//! Main application: startup loading, window, and the redraw loop.

use std::sync::Arc;

use kurbo::Point;
use peniko::Color;
use stagehand_core::{
    FileStorage, LoadError, PointerEvent, Runtime, RuntimeError, SceneCatalog, StorageError, Style,
};
use stagehand_render::{RenderResult, RendererError, VelloPainter};
use stagehand_widgets::builtin_registry;
use thiserror::Error;
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::{AppConfig, ConfigError};
use crate::keys;

/// Anything that stops the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Failed to open maps directory: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Renderer(#[from] RendererError),
    #[error("Event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
}

/// Window and GPU state, created once the event loop resumes.
struct AppState {
    window: Arc<Window>,
    surface: RenderSurface<'static>,
    vello_renderer: vello::Renderer,
    painter: VelloPainter,
    /// Vello renders into this Rgba8Unorm texture, which is then blitted to
    /// the surface (whose format may differ).
    render_view: vello::wgpu::TextureView,
    texture_blitter: vello::wgpu::util::TextureBlitter,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    runtime: Runtime,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
    /// Set when a fatal error ends the event loop.
    failure: Option<AppError>,
}

impl App {
    pub fn new(config: AppConfig, runtime: Runtime) -> Self {
        Self {
            config,
            runtime,
            state: None,
            render_cx: None,
            failure: None,
        }
    }

    /// Load the style, the maps store and every scene named by `config`.
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let store = Arc::new(FileStorage::new(config.maps_dir.clone())?);
        let registry = builtin_registry(store);
        let style = Style::load(&config.style_file)?;
        let catalog = SceneCatalog::load_dir(&config.scenes_dir, &registry)?;
        Ok(Self::new(config, Runtime::new(catalog, style)))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Run until the window closes. Returns the error that ended the loop,
    /// if any.
    pub fn run(mut self) -> Result<(), AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;
        match self.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        self.failure = Some(error);
        event_loop.exit();
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| RendererError::InitFailed(e.to_string()))?,
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(e.to_string()))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);
        let render_view = create_render_view(device, width, height);

        log::info!("Window created - {}x{}", width, height);
        window.request_redraw();

        self.state = Some(AppState {
            window,
            surface,
            vello_renderer,
            painter: VelloPainter::new(),
            render_view,
            texture_blitter,
        });
        Ok(())
    }
}

/// Intermediate target Vello can bind as storage.
fn create_render_view(
    device: &vello::wgpu::Device,
    width: u32,
    height: u32,
) -> vello::wgpu::TextureView {
    let texture = device.create_texture(&vello::wgpu::TextureDescriptor {
        label: Some("vello render texture"),
        size: vello::wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: vello::wgpu::TextureDimension::D2,
        format: vello::wgpu::TextureFormat::Rgba8Unorm,
        usage: vello::wgpu::TextureUsages::STORAGE_BINDING
            | vello::wgpu::TextureUsages::COPY_SRC
            | vello::wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    texture.create_view(&vello::wgpu::TextureViewDescriptor::default())
}

/// Render the painter's scene and present it.
fn present(state: &mut AppState, render_cx: &RenderContext, base_color: Color) -> RenderResult<()> {
    let scene = state.painter.take_scene();
    let device_handle = &render_cx.devices[state.surface.dev_id];
    let device = &device_handle.device;
    let queue = &device_handle.queue;

    let surface_texture = match state.surface.surface.get_current_texture() {
        Ok(t) => t,
        Err(e) => {
            log::warn!("Failed to get surface texture: {:?}", e);
            return Ok(());
        }
    };

    let params = RenderParams {
        base_color,
        width: state.surface.config.width,
        height: state.surface.config.height,
        antialiasing_method: AaConfig::Area,
    };
    state
        .vello_renderer
        .render_to_texture(device, queue, &scene, &state.render_view, &params)
        .map_err(|e| RendererError::RenderFailed(e.to_string()))?;

    let surface_view = surface_texture
        .texture
        .create_view(&vello::wgpu::TextureViewDescriptor::default());
    let mut blit_encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
        label: Some("blit encoder"),
    });
    state
        .texture_blitter
        .copy(device, &mut blit_encoder, &state.render_view, &surface_view);
    queue.submit(std::iter::once(blit_encoder.finish()));

    surface_texture.present();
    Ok(())
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                    let device = &render_cx.devices[state.surface.dev_id].device;
                    state.render_view = create_render_view(device, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.runtime.frame(&mut state.painter) {
                    log::error!("Frame failed: {}", e);
                    self.failure = Some(e.into());
                    event_loop.exit();
                    return;
                }
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                let base_color = state.painter.base_color();
                if let Err(e) = present(state, render_cx, base_color) {
                    log::error!("Failed to render: {}", e);
                }
                state.window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.runtime.input_mut().handle_pointer_event(PointerEvent::Move {
                    position: Point::new(position.x, position.y),
                });
            }

            WindowEvent::MouseInput {
                state: btn_state,
                button,
                ..
            } => {
                let Some(button) = keys::pointer_button(button) else {
                    return;
                };
                let input = self.runtime.input_mut();
                let position = input.pointer_position;
                input.handle_pointer_event(match btn_state {
                    ElementState::Pressed => PointerEvent::Down { position, button },
                    ElementState::Released => PointerEvent::Up { position, button },
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let input = self.runtime.input_mut();
                if let Some(name) = keys::key_name(&event.logical_key) {
                    input.handle_key_event(keys::key_event(name, event.state, event.repeat));
                }
                if event.state == ElementState::Pressed {
                    if let Some(text) = &event.text {
                        input.handle_text(text);
                    }
                }
            }

            _ => {}
        }
    }
}
