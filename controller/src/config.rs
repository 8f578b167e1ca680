//! Character tunables, loadable from RON.

use serde::{Deserialize, Serialize};

/// Horizontal speed in pixels per second.
pub const HORIZONTAL_SPEED: f32 = 160.0;

/// Velocity applied on jump, in screen coordinates (negative = upward).
pub const JUMP_VELOCITY: f32 = -120.0;

/// Minimum interval between jump triggers in milliseconds.
pub const JUMP_COOLDOWN_MS: u64 = 650;

/// Atlas frame shown while facing left.
pub const LEFT_FRAME: usize = 0;

/// Atlas frame shown while facing right.
pub const RIGHT_FRAME: usize = 1;

/// Configurable character parameters.
///
/// Injected into [`crate::CharacterController`] at construction so tests
/// and the game can run alternate tunings. Missing fields fall back to
/// the defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub horizontal_speed: f32,
    pub jump_velocity: f32,
    pub jump_cooldown_ms: u64,
    pub left_frame: usize,
    pub right_frame: usize,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            horizontal_speed: HORIZONTAL_SPEED,
            jump_velocity: JUMP_VELOCITY,
            jump_cooldown_ms: JUMP_COOLDOWN_MS,
            left_frame: LEFT_FRAME,
            right_frame: RIGHT_FRAME,
        }
    }
}

impl CharacterConfig {
    /// Parse a config from RON text. The caller decides how to handle a
    /// parse failure (the game logs a warning and keeps the defaults).
    pub fn from_ron_str(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }
}
