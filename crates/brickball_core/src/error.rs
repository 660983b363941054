//! World construction errors

use brickball_physics::PhysicsError;

/// Fatal problems found while building the play field
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The physics engine rejected a body or shape definition
    Configuration(PhysicsError),
    /// The layout contradicts itself (e.g. paddle starts outside its bounds)
    Layout(String),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Configuration(e) => write!(f, "Physics configuration failed: {}", e),
            BuildError::Layout(msg) => write!(f, "Invalid arena layout: {}", msg),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Configuration(e) => Some(e),
            BuildError::Layout(_) => None,
        }
    }
}

impl From<PhysicsError> for BuildError {
    fn from(e: PhysicsError) -> Self {
        BuildError::Configuration(e)
    }
}
