//! Paddle input handling
//!
//! This crate turns held arrow keys into a paddle motion intent.

mod paddle_controller;

pub use paddle_controller::{PaddleController, PaddleIntent};
