//! Game phases and initialization failures

use brickball_core::BuildError;

use crate::config::ConfigError;
use crate::systems::{RenderError, WindowError};

/// Where the application is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Creating window, renderer and world
    Initializing,
    /// Frame loop active
    Running,
    /// Releasing the world and leaving the event loop
    ShuttingDown,
}

impl GamePhase {
    /// Whether `next` directly follows this phase
    pub fn can_transition_to(&self, next: GamePhase) -> bool {
        matches!(
            (self, next),
            (GamePhase::Initializing, GamePhase::Running)
                | (GamePhase::Initializing, GamePhase::ShuttingDown)
                | (GamePhase::Running, GamePhase::ShuttingDown)
        )
    }

    /// Move to `next`, refusing anything but a legal transition
    pub fn transition_to(&mut self, next: GamePhase) -> Result<(), TransitionError> {
        if !self.can_transition_to(next) {
            return Err(TransitionError {
                from: *self,
                to: next,
            });
        }
        log::info!("Phase {:?} -> {:?}", self, next);
        *self = next;
        Ok(())
    }
}

/// Illegal phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionError {
    pub from: GamePhase,
    pub to: GamePhase,
}

impl std::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cannot move from {:?} to {:?}", self.from, self.to)
    }
}

impl std::error::Error for TransitionError {}

/// Anything that stops the game from reaching the Running phase
#[derive(Debug)]
pub enum InitError {
    Config(ConfigError),
    Window(WindowError),
    Render(RenderError),
    World(BuildError),
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::Config(e) => write!(f, "{}", e),
            InitError::Window(e) => write!(f, "{}", e),
            InitError::Render(e) => write!(f, "{}", e),
            InitError::World(e) => write!(f, "World creation failed: {}", e),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Config(e) => Some(e),
            InitError::Window(e) => Some(e),
            InitError::Render(e) => Some(e),
            InitError::World(e) => Some(e),
        }
    }
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError::Config(e)
    }
}

impl From<WindowError> for InitError {
    fn from(e: WindowError) -> Self {
        InitError::Window(e)
    }
}

impl From<RenderError> for InitError {
    fn from(e: RenderError) -> Self {
        InitError::Render(e)
    }
}

impl From<BuildError> for InitError {
    fn from(e: BuildError) -> Self {
        InitError::World(e)
    }
}
