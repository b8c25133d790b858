//! Keyboard and pointer input
//!
//! Translates winit events into movement flags and a pointer position in
//! the bottom-left-origin pixel space the shader expects.

use crate::movement::{set_key, MovementInput, MovementKey};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input gathered between frames
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub movement: MovementInput,
    /// Pointer position in pixels, y measured from the bottom edge
    pub mouse: [f32; 2],
    pub exit_requested: bool,
}

/// Movement direction bound to a physical key
pub fn map_movement_key(code: KeyCode) -> Option<MovementKey> {
    match code {
        KeyCode::KeyA => Some(MovementKey::Left),
        KeyCode::KeyD => Some(MovementKey::Right),
        KeyCode::KeyW => Some(MovementKey::Forward),
        KeyCode::KeyS => Some(MovementKey::Backward),
        KeyCode::KeyQ => Some(MovementKey::Down),
        KeyCode::KeyE => Some(MovementKey::Up),
        _ => None,
    }
}

pub fn is_boost_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::ShiftLeft | KeyCode::ShiftRight)
}

/// Apply a key press or release; returns whether the key is bound
pub fn process_keyboard(input: &mut InputState, code: KeyCode, pressed: bool) -> bool {
    if let Some(key) = map_movement_key(code) {
        set_key(&mut input.movement, key, pressed);
        true
    } else if is_boost_key(code) {
        input.movement.boost = pressed;
        true
    } else if code == KeyCode::Escape {
        input.exit_requested |= pressed;
        true
    } else {
        false
    }
}

/// Store the pointer position, flipping y to count from the bottom
pub fn process_cursor(input: &mut InputState, x: f64, y: f64, screen_height: u32) {
    input.mouse = [x as f32, screen_height as f32 - y as f32];
}

/// Route a window event; returns whether it was consumed
pub fn process_window_event(input: &mut InputState, event: &WindowEvent, screen_height: u32) -> bool {
    match event {
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state,
                    ..
                },
            ..
        } => process_keyboard(input, *code, *state == ElementState::Pressed),
        WindowEvent::CursorMoved { position, .. } => {
            process_cursor(input, position.x, position.y, screen_height);
            true
        }
        // Keys held while focus leaves never report a release
        WindowEvent::Focused(false) => {
            input.movement = MovementInput::default();
            true
        }
        _ => false,
    }
}
