//! Physics configuration errors

/// Errors raised while describing bodies and shapes for the world
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Pixels-per-unit scale was zero, negative or not finite
    InvalidScale(f32),
    /// A shape description has degenerate or non-finite geometry
    InvalidShape(String),
    /// A body description has a non-finite position, rotation or velocity
    InvalidBody(String),
}

impl std::fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhysicsError::InvalidScale(scale) => {
                write!(f, "Invalid unit scale: {} pixels per unit", scale)
            }
            PhysicsError::InvalidShape(msg) => write!(f, "Invalid shape: {}", msg),
            PhysicsError::InvalidBody(msg) => write!(f, "Invalid body: {}", msg),
        }
    }
}

impl std::error::Error for PhysicsError {}
