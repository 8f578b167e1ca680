//! Capability contracts the host engine provides to the controller.
//!
//! The controller depends only on these narrow traits, never on a
//! concrete engine. The game crate implements them over bevy; the tests
//! implement them with plain structs.

/// Logical control keys the controller polls each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Left,
    Right,
    Jump,
}

/// The spritesheets the controller selects between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteSheet {
    /// Base character sheet (one frame per facing).
    #[default]
    Character,
    /// Jump animation sheet.
    Jump,
}

/// Keyboard state as of the current tick. Polled fresh each tick; past
/// presses are not buffered.
pub trait InputSource {
    fn is_down(&self, key: ControlKey) -> bool;
}

/// Monotonically non-decreasing game time.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// The physics body the host engine simulates for the character.
///
/// The controller is the sole mutator of velocity during its tick;
/// gravity, integration and world-bounds collision stay on the host side.
pub trait PhysicsBody {
    fn velocity_x(&self) -> f32;
    fn velocity_y(&self) -> f32;
    fn set_velocity_x(&mut self, vx: f32);
    fn set_velocity_y(&mut self, vy: f32);
    /// True when the body rests on a solid surface this tick.
    fn on_floor(&self) -> bool;
}

/// Texture, frame and animation selection for the character sprite.
pub trait SpriteRenderer {
    /// Switch the active spritesheet and show `frame` of it. When
    /// `reset_animation` is true, any running animation playback stops;
    /// when false, playback survives the swap.
    fn set_texture(&mut self, sheet: SpriteSheet, frame: usize, reset_animation: bool);
    /// Show a static frame of the active spritesheet.
    fn select_frame(&mut self, frame: usize);
    /// Register a named animation over frames of the active spritesheet.
    fn register_animation(&mut self, name: &str, frames: &[usize]);
    /// Start playback of a previously registered animation.
    fn play_animation(&mut self, name: &str, frame_rate: f32, looped: bool);
    /// Which spritesheet is currently active.
    fn current_sheet(&self) -> SpriteSheet;
}
