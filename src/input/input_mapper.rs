//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Quit.
//! Paddle keys (arrows) are NOT mapped here - they go directly to PaddleController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not paddle movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Leave the game (Escape)
    Quit,
}

/// Maps raw input events to semantic actions
///
/// Paddle keys are NOT mapped here - they go directly to the
/// PaddleController. This mapper handles "special" keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Quit),
            _ => None, // Paddle keys handled by controller
        }
    }
}
