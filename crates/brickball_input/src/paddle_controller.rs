//! Paddle controller for held-key input handling
//!
//! Controls:
//! - Left arrow: move paddle left
//! - Right arrow: move paddle right
//!
//! When both keys are held, left wins.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Horizontal motion requested for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleIntent {
    Left,
    Right,
    Idle,
}

impl PaddleIntent {
    /// Signed horizontal displacement for one frame, in the units of `speed`
    pub fn displacement(&self, speed: f32, dt: f32) -> f32 {
        match self {
            PaddleIntent::Left => -speed * dt,
            PaddleIntent::Right => speed * dt,
            PaddleIntent::Idle => 0.0,
        }
    }
}

/// Tracks which paddle keys are currently held
pub struct PaddleController {
    left: bool,
    right: bool,

    /// Paddle speed in simulation units per second
    pub move_speed: f32,
}

impl Default for PaddleController {
    fn default() -> Self {
        Self::new()
    }
}

impl PaddleController {
    pub fn new() -> Self {
        Self {
            left: false,
            right: false,
            move_speed: 5.0,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is a paddle key.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::ArrowLeft => { self.left = pressed; true }
            KeyCode::ArrowRight => { self.right = pressed; true }
            _ => false,
        }
    }

    /// Current intent, checking left before right
    pub fn intent(&self) -> PaddleIntent {
        if self.left {
            PaddleIntent::Left
        } else if self.right {
            PaddleIntent::Right
        } else {
            PaddleIntent::Idle
        }
    }

    /// Signed paddle displacement for a frame of `dt` seconds
    pub fn displacement(&self, dt: f32) -> f32 {
        self.intent().displacement(self.move_speed, dt)
    }

    /// Release every held key (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    /// Builder: set movement speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut controller = PaddleController::new();
        assert!(controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed));
        assert_eq!(controller.intent(), PaddleIntent::Left);

        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Released);
        assert_eq!(controller.intent(), PaddleIntent::Idle);
    }

    #[test]
    fn test_left_wins_when_both_held() {
        let mut controller = PaddleController::new();
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
        assert_eq!(controller.intent(), PaddleIntent::Left);

        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Released);
        assert_eq!(controller.intent(), PaddleIntent::Right);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut controller = PaddleController::new();
        assert!(!controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed));
        assert!(!controller.process_keyboard(KeyCode::Space, ElementState::Pressed));
        assert_eq!(controller.intent(), PaddleIntent::Idle);
    }

    #[test]
    fn test_displacement() {
        let controller = PaddleController::new().with_move_speed(5.0);
        assert_eq!(controller.displacement(0.5), 0.0);

        assert_eq!(PaddleIntent::Left.displacement(5.0, 0.1), -0.5);
        assert_eq!(PaddleIntent::Right.displacement(5.0, 0.1), 0.5);
        assert_eq!(PaddleIntent::Idle.displacement(5.0, 0.1), 0.0);
    }

    #[test]
    fn test_release_all() {
        let mut controller = PaddleController::new();
        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        controller.release_all();
        assert_eq!(controller.intent(), PaddleIntent::Idle);
    }
}
