//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`BRICKBALL_SECTION__KEY`)

use brickball_core::{srgb_to_linear, PaddleBounds, SessionSettings, UnitScale, WorldConfig};
use figment::{Figment, providers::{Format, Toml, Env}};
use glam::Vec2;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Paddle configuration
    #[serde(default)]
    pub paddle: PaddleConfig,
    /// Ball configuration
    #[serde(default)]
    pub ball: BallConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`BRICKBALL_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // BRICKBALL_PADDLE__SPEED=8 -> paddle.speed = 8
        figment = figment.merge(Env::prefixed("BRICKBALL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Everything the world builder needs, validated
    pub fn session_settings(&self) -> Result<SessionSettings, ConfigError> {
        let scale = UnitScale::new(self.physics.pixels_per_unit)
            .map_err(|e| ConfigError::invalid("physics.pixels_per_unit", e))?;

        if self.paddle.min_x >= self.paddle.max_x {
            return Err(ConfigError::invalid(
                "paddle",
                format!("min_x {} must be below max_x {}", self.paddle.min_x, self.paddle.max_x),
            ));
        }

        Ok(SessionSettings {
            scale,
            world: self.physics.to_world_config()?,
            paddle_bounds: PaddleBounds::new(self.paddle.min_x, self.paddle.max_x),
            ball_velocity: Vec2::from_array(self.ball.initial_velocity),
        })
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Brickball".to_string(),
            width: 400,
            height: 300,
            vsync: true,
        }
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Display pixels per simulation unit
    pub pixels_per_unit: f32,
    /// Fixed step length in seconds
    pub timestep: f32,
    /// Solver iterations per step
    pub substeps: usize,
    /// Approach speed below which contacts do not bounce
    pub restitution_threshold: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: 30.0,
            timestep: 0.016,
            substeps: 5,
            restitution_threshold: 0.1,
        }
    }
}

impl PhysicsConfig {
    /// Convert to the physics crate's step configuration
    pub fn to_world_config(&self) -> Result<WorldConfig, ConfigError> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(ConfigError::invalid(
                "physics.timestep",
                format!("{} is not a positive duration", self.timestep),
            ));
        }
        if self.substeps == 0 {
            return Err(ConfigError::invalid("physics.substeps", "must be at least 1"));
        }
        Ok(WorldConfig::new(
            self.timestep,
            self.substeps,
            self.restitution_threshold.max(0.0),
        ))
    }
}

/// Paddle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    /// Speed in simulation units per second
    pub speed: f32,
    /// Leftmost paddle center, in pixels (exclusive)
    pub min_x: f32,
    /// Rightmost paddle center, in pixels (exclusive)
    pub max_x: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            min_x: 50.0,
            max_x: 350.0,
        }
    }
}

/// Ball configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Launch velocity in simulation units per second (negative y is up)
    pub initial_velocity: [f32; 2],
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            initial_velocity: [0.0, -2.9],
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b], 0-255
    pub background_color: [u8; 3],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [33, 33, 33],
        }
    }
}

impl RenderingConfig {
    /// Background as a linear clear color for the sRGB surface
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b] = self.background_color;
        wgpu::Color {
            r: srgb_to_linear(r) as f64,
            g: srgb_to_linear(g) as f64,
            b: srgb_to_linear(b) as f64,
            a: 1.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Draw collider outlines
    pub draw_shapes: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            draw_shapes: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(key: &str, reason: impl std::fmt::Display) -> Self {
        ConfigError {
            message: format!("invalid value for {}: {}", key, reason),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
