//! Platformer character controller core.
//!
//! A pure state-reducer for a single sprite: horizontal movement, a
//! gravity-driven jump behind a cooldown gate, left/right facing, and the
//! jump-texture swap. The host engine supplies keyboard state, the game
//! clock, a physics body, and a sprite renderer through the capability
//! traits in [`engine`]; the controller itself never touches the engine
//! directly.

pub mod character;
pub mod config;
pub mod engine;

pub use character::{AnimationMode, CharacterController, CharacterState, Facing};
pub use config::CharacterConfig;
pub use engine::{Clock, ControlKey, InputSource, PhysicsBody, SpriteRenderer, SpriteSheet};
