//! Lightweight arcade physics for the player sprite.
//!
//! Screen coordinates throughout: origin top-left, y grows downward,
//! gravity is positive. Intentionally hand-rolled (a single body clamped
//! to the window); a full rigidbody engine would be overkill here.

use bevy::prelude::*;
use controller::PhysicsBody;

/// World (and window) width in pixels.
pub const WORLD_WIDTH: f32 = 1280.0;

/// World (and window) height in pixels.
pub const WORLD_HEIGHT: f32 = 720.0;

/// Downward gravity in pixels per second squared.
pub const GRAVITY_Y: f32 = 96.0;

/// Axis-aligned arcade body in screen coordinates.
///
/// `position` is the top-left corner of the body. The controller writes
/// velocity during its tick; [`integrate_bodies`] then applies gravity,
/// moves the body, and resolves world-bounds collision.
#[derive(Component, Debug, Clone)]
pub struct ArcadeBody {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Downward acceleration applied every step.
    pub gravity_y: f32,
    /// Keep the body inside the world rectangle.
    pub collide_world_bounds: bool,
    /// Extent used for bounds collision.
    pub size: Vec2,
    on_floor: bool,
}

impl ArcadeBody {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            gravity_y: GRAVITY_Y,
            collide_world_bounds: true,
            size,
            on_floor: false,
        }
    }

    /// Integrate one step and resolve world-bounds collision. Floor
    /// contact is true only when the body ends the step resting on the
    /// bottom bound.
    pub fn step(&mut self, dt: f32) {
        self.velocity.y += self.gravity_y * dt;
        self.position += self.velocity * dt;

        self.on_floor = false;
        if !self.collide_world_bounds {
            return;
        }

        let max_x = WORLD_WIDTH - self.size.x;
        let floor_y = WORLD_HEIGHT - self.size.y;

        if self.position.x < 0.0 {
            self.position.x = 0.0;
        } else if self.position.x > max_x {
            self.position.x = max_x;
        }

        if self.position.y < 0.0 {
            self.position.y = 0.0;
            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
        } else if self.position.y >= floor_y {
            self.position.y = floor_y;
            if self.velocity.y > 0.0 {
                self.velocity.y = 0.0;
            }
            self.on_floor = true;
        }
    }

    /// Center of the body in bevy render coordinates (y up, origin at the
    /// window center).
    pub fn render_translation(&self) -> Vec3 {
        Vec3::new(
            self.position.x + self.size.x * 0.5 - WORLD_WIDTH * 0.5,
            WORLD_HEIGHT * 0.5 - (self.position.y + self.size.y * 0.5),
            0.0,
        )
    }
}

impl PhysicsBody for ArcadeBody {
    fn velocity_x(&self) -> f32 {
        self.velocity.x
    }
    fn velocity_y(&self) -> f32 {
        self.velocity.y
    }
    fn set_velocity_x(&mut self, vx: f32) {
        self.velocity.x = vx;
    }
    fn set_velocity_y(&mut self, vy: f32) {
        self.velocity.y = vy;
    }
    fn on_floor(&self) -> bool {
        self.on_floor
    }
}

/// Step every arcade body by this frame's delta.
pub fn integrate_bodies(time: Res<Time>, mut bodies: Query<&mut ArcadeBody>) {
    let dt = time.delta_secs();
    for mut body in &mut bodies {
        body.step(dt);
    }
}

/// Present arcade positions as bevy transforms.
pub fn sync_transforms(mut bodies: Query<(&ArcadeBody, &mut Transform)>) {
    for (body, mut transform) in &mut bodies {
        transform.translation = body.render_translation();
    }
}
