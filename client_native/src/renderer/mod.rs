pub mod draw;
pub mod framebuffer;
pub mod init;

use std::sync::Arc;

use embedded_graphics::mono_font::{ascii::FONT_10X20, MonoFont};
use embedded_graphics::pixelcolor::Rgb888;
use game_core::{Config, PongMatch};
use glam::Vec2;
use pixels::Pixels;
use winit::dpi::PhysicalPosition;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

pub use framebuffer::{Framebuffer, Scaled};

use crate::menu::{MenuButton, MenuLayout};

pub const BACKGROUND: Rgb888 = Rgb888::new(0, 0, 0);
pub const FOREGROUND: Rgb888 = Rgb888::new(255, 255, 255);
pub const HOVER_OUTLINE: Rgb888 = Rgb888::new(128, 128, 128);

/// Font for menu buttons, at its native size
pub const BUTTON_FONT: MonoFont<'static> = FONT_10X20;
pub const TITLE_SCALE: u32 = 3;
pub const SCORE_SCALE: u32 = 2;
pub const PROMPT_SCALE: u32 = 2;

/// Strength of the black overlay behind the game-over prompt
pub const OVERLAY_ALPHA: u8 = 180;

/// What to put on screen this frame
#[derive(Clone, Copy)]
pub enum Scene<'a> {
    Menu { hovered: Option<MenuButton> },
    Match(&'a PongMatch),
    GameOver(&'a PongMatch),
}

pub struct Renderer {
    pub window: Arc<Window>,
    pub pixels: Pixels<'static>,
    pub size: (u32, u32),
}

impl Renderer {
    pub fn new(event_loop: &ActiveEventLoop, config: &Config) -> anyhow::Result<Self> {
        let ctx = init::init_pixels(event_loop, config)?;
        Ok(Self {
            window: ctx.window,
            pixels: ctx.pixels,
            size: ctx.size,
        })
    }

    /// Draw a scene into the frame buffer and present it
    pub fn draw_frame(&mut self, scene: Scene<'_>, menu: &MenuLayout) -> anyhow::Result<()> {
        let (width, height) = self.size;
        {
            let mut fb = Framebuffer::new(self.pixels.frame_mut(), width, height);
            if let Err(never) = draw::draw_scene(&mut fb, scene, menu) {
                match never {}
            }
        }
        self.window.pre_present_notify();
        self.pixels.render()?;
        Ok(())
    }

    /// Map a cursor position in window pixels to arena coordinates,
    /// clamping positions outside the drawn area to its edge
    pub fn window_to_arena(&self, position: PhysicalPosition<f64>) -> Vec2 {
        let pos = (position.x as f32, position.y as f32);
        let (x, y) = self
            .pixels
            .window_pos_to_pixel(pos)
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));
        Vec2::new(x as f32, y as f32)
    }
}
