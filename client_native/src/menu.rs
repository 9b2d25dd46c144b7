//! Main menu layout and hit-testing

use embedded_graphics::mono_font::MonoFont;
use game_core::{Config, Rect, ScreenInput};
use glam::Vec2;

use crate::renderer::BUTTON_FONT;

/// Clickable menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Quit,
}

impl MenuButton {
    pub fn label(self) -> &'static str {
        match self {
            MenuButton::Start => "START",
            MenuButton::Quit => "QUIT",
        }
    }

    pub fn input(self) -> ScreenInput {
        match self {
            MenuButton::Start => ScreenInput::StartClicked,
            MenuButton::Quit => ScreenInput::QuitClicked,
        }
    }
}

/// Where the title and buttons sit on screen
#[derive(Debug, Clone)]
pub struct MenuLayout {
    pub title_top: f32,
    pub center_x: f32,
    buttons: [(MenuButton, Rect); 2],
}

impl MenuLayout {
    pub fn new(config: &Config) -> Self {
        let center = config.center();
        let start = text_rect(&BUTTON_FONT, MenuButton::Start.label(), center - Vec2::Y * 30.0);
        let quit = text_rect(&BUTTON_FONT, MenuButton::Quit.label(), center + Vec2::Y * 30.0);

        Self {
            title_top: 150.0,
            center_x: center.x,
            buttons: [(MenuButton::Start, start), (MenuButton::Quit, quit)],
        }
    }

    pub fn buttons(&self) -> impl Iterator<Item = (MenuButton, Rect)> + '_ {
        self.buttons.iter().copied()
    }

    /// Button under a point, if any
    pub fn button_at(&self, point: Vec2) -> Option<MenuButton> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(button, _)| *button)
    }
}

/// Bounding box of a single line of text centred on `center`
fn text_rect(font: &MonoFont<'_>, text: &str, center: Vec2) -> Rect {
    let chars = text.chars().count() as u32;
    let char_size = font.character_size;
    let width = chars * char_size.width + chars.saturating_sub(1) * font.character_spacing;
    Rect::from_center_size(
        center,
        Vec2::new(width as f32, char_size.height as f32),
    )
}
