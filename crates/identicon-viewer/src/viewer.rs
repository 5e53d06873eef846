//! Viewer window: winit event loop + pixels surface.

use std::path::PathBuf;
use std::sync::Arc;

use identicon_core::{Identicon, IdenticonOptions};
use identicon_render::{Framebuffer, render, save_png};
use pixels::{Pixels, SurfaceTexture};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Configuration for the viewer window.
pub struct ViewerConfig {
    /// Window title.
    pub title: String,
    /// Integer window zoom for sharp pixels.
    pub zoom: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Identicon".to_string(),
            zoom: 8,
        }
    }
}

/// Open a window showing the identicon and run until closed.
///
/// `R` regenerates with a fresh random seed (overrides and dimensions are
/// kept), `S` saves a numbered PNG screenshot, `Escape` exits. The image is
/// static between inputs, so the loop sleeps until an event arrives.
pub fn run(
    icon: Identicon,
    framebuffer: Framebuffer,
    options: IdenticonOptions,
    config: ViewerConfig,
) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut viewer = Viewer::new(icon, framebuffer, options, config);
    event_loop.run_app(&mut viewer).expect("Event loop error");
}

/// Viewer state: the current icon, its rendered framebuffer, and the
/// window/pixels pair once the event loop has started.
struct Viewer {
    options: IdenticonOptions,
    config: ViewerConfig,
    icon: Identicon,
    framebuffer: Framebuffer,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    screenshots: u32,
}

impl Viewer {
    fn new(
        icon: Identicon,
        framebuffer: Framebuffer,
        options: IdenticonOptions,
        config: ViewerConfig,
    ) -> Self {
        Self {
            options,
            config,
            icon,
            framebuffer,
            window: None,
            pixels: None,
            screenshots: 0,
        }
    }

    /// Copy the framebuffer to the pixels surface and request a redraw.
    fn present(&mut self) {
        if let Some(pixels) = &mut self.pixels {
            pixels.frame_mut().copy_from_slice(self.framebuffer.data());
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Replace the icon with one generated from a fresh random seed.
    fn regenerate(&mut self) {
        let mut options = self.options.clone();
        options.seed = None;
        match Identicon::generate(options) {
            Ok(icon) => self.icon = icon,
            Err(err) => {
                eprintln!("Regeneration failed: {err}");
                return;
            }
        }
        if let Err(err) = render(&self.icon, &mut self.framebuffer) {
            eprintln!("Render failed: {err}");
            return;
        }
        self.present();
    }

    fn screenshot(&mut self) {
        self.screenshots += 1;
        let path = PathBuf::from(format!("identicon-{:03}.png", self.screenshots));
        match save_png(&self.icon, &path) {
            Ok(()) => println!("Saved {}", path.display()),
            Err(err) => eprintln!("Screenshot failed: {err}"),
        }
    }
}

impl ApplicationHandler for Viewer {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Create window on first resume only
        if self.window.is_some() {
            return;
        }

        let dimension = self.icon.output_dimension();
        let window_size = dimension * self.config.zoom;

        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(format!("{} (R: new seed, S: save PNG)", self.config.title))
                        .with_inner_size(LogicalSize::new(window_size, window_size)),
                )
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels =
            Pixels::new(dimension, dimension, surface).expect("Failed to create pixels");

        self.window = Some(window);
        // SAFETY: pixels lifetime is tied to window which lives for the program duration
        self.pixels = Some(unsafe { std::mem::transmute(pixels) });
        self.present();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(pixels) = &mut self.pixels {
                        pixels.resize_surface(size.width, size.height).ok();
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if event.state == ElementState::Pressed && !event.repeat {
                        match keycode {
                            KeyCode::Escape => event_loop.exit(),
                            KeyCode::KeyR => self.regenerate(),
                            KeyCode::KeyS => self.screenshot(),
                            _ => {}
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(pixels) = &mut self.pixels {
                    if pixels.render().is_err() {
                        event_loop.exit();
                    }
                }
            }

            _ => {}
        }
    }
}
