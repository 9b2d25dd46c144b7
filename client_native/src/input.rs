//! Window input handling

use game_core::{ScreenInput, ScreenState};
use glam::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::Key;

use crate::menu::MenuLayout;

/// Translate a window event into a screen input for the current state.
///
/// `pointer` is the last known cursor position in arena coordinates.
pub fn map_window_event(
    event: &WindowEvent,
    state: ScreenState,
    pointer: Vec2,
    menu: &MenuLayout,
) -> Option<ScreenInput> {
    match event {
        WindowEvent::CloseRequested => Some(ScreenInput::WindowClosed),
        WindowEvent::MouseInput {
            state: ElementState::Pressed,
            button: MouseButton::Left,
            ..
        } => handle_click(state, pointer, menu),
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    logical_key,
                    state: ElementState::Pressed,
                    repeat: false,
                    ..
                },
            ..
        } => handle_key_down(state, logical_key),
        _ => None,
    }
}

/// Handle a click; only menu buttons react to it
pub fn handle_click(state: ScreenState, pointer: Vec2, menu: &MenuLayout) -> Option<ScreenInput> {
    match state {
        ScreenState::Menu => menu.button_at(pointer).map(|button| button.input()),
        _ => None,
    }
}

/// Handle key down; the game-over prompt answers to the characters y and n
/// as produced by the active keyboard layout
pub fn handle_key_down(state: ScreenState, key: &Key) -> Option<ScreenInput> {
    if state != ScreenState::GameOverPrompt {
        return None;
    }
    match key {
        Key::Character(text) if text.eq_ignore_ascii_case("y") => Some(ScreenInput::Restart),
        Key::Character(text) if text.eq_ignore_ascii_case("n") => Some(ScreenInput::Decline),
        _ => None,
    }
}
