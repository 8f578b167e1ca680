//! Sprite selection and frame animation for the player.
//!
//! Implements the controller's renderer contract over a bevy `Sprite`
//! with two texture-atlas spritesheets, plus a small timer-driven
//! playback component for registered animations.

use std::collections::HashMap;
use std::time::Duration;

use bevy::prelude::*;
use controller::{SpriteRenderer, SpriteSheet};

/// The jump sheet ships eight 300x300 frames; registered frame lists are
/// clamped to this when presented.
pub const JUMP_SHEET_FRAME_COUNT: usize = 8;

/// Handles and atlas layouts for the two player spritesheets.
#[derive(Resource, Clone)]
pub struct PlayerSprites {
    pub character_image: Handle<Image>,
    pub character_layout: Handle<TextureAtlasLayout>,
    pub jump_image: Handle<Image>,
    pub jump_layout: Handle<TextureAtlasLayout>,
}

/// Which spritesheet a sprite currently shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveSheet(pub SpriteSheet);

struct Playback {
    frames: Vec<usize>,
    cursor: usize,
    timer: Timer,
    looped: bool,
}

/// Registered animations and the playback state of the active one.
#[derive(Component, Default)]
pub struct SpriteAnimation {
    registered: HashMap<String, Vec<usize>>,
    playback: Option<Playback>,
}

impl SpriteAnimation {
    pub fn register(&mut self, name: &str, frames: &[usize]) {
        self.registered.insert(name.to_string(), frames.to_vec());
    }

    /// Start a registered animation from its first frame. Unknown names
    /// are ignored.
    pub fn play(&mut self, name: &str, frame_rate: f32, looped: bool) {
        let Some(frames) = self.registered.get(name) else {
            return;
        };
        if frames.is_empty() {
            return;
        }
        let spf = 1.0 / frame_rate.max(1.0);
        self.playback = Some(Playback {
            frames: frames.clone(),
            cursor: 0,
            timer: Timer::from_seconds(spf, TimerMode::Repeating),
            looped,
        });
    }

    pub fn stop(&mut self) {
        self.playback = None;
    }

    /// Advance playback by `delta` and return the frame to show, or
    /// `None` once a non-looping animation has finished.
    pub fn advance(&mut self, delta: Duration) -> Option<usize> {
        let playback = self.playback.as_mut()?;
        playback.timer.tick(delta);
        for _ in 0..playback.timer.times_finished_this_tick() {
            if playback.cursor + 1 < playback.frames.len() {
                playback.cursor += 1;
            } else if playback.looped {
                playback.cursor = 0;
            } else {
                self.playback = None;
                return None;
            }
        }
        let playback = self.playback.as_ref()?;
        Some(playback.frames[playback.cursor])
    }
}

/// Mutable view over one sprite's render state, implementing the
/// controller's renderer contract for the duration of a tick.
pub struct PlayerSpriteView<'a> {
    pub sprite: &'a mut Sprite,
    pub sheet: &'a mut ActiveSheet,
    pub animation: &'a mut SpriteAnimation,
    pub sheets: &'a PlayerSprites,
}

impl SpriteRenderer for PlayerSpriteView<'_> {
    fn set_texture(&mut self, sheet: SpriteSheet, frame: usize, reset_animation: bool) {
        let (image, layout) = match sheet {
            SpriteSheet::Character => (
                &self.sheets.character_image,
                &self.sheets.character_layout,
            ),
            SpriteSheet::Jump => (&self.sheets.jump_image, &self.sheets.jump_layout),
        };
        self.sprite.image = image.clone();
        self.sprite.texture_atlas = Some(TextureAtlas {
            layout: layout.clone(),
            index: frame,
        });
        if reset_animation {
            self.animation.stop();
        }
        self.sheet.0 = sheet;
    }

    fn select_frame(&mut self, frame: usize) {
        if let Some(atlas) = self.sprite.texture_atlas.as_mut() {
            atlas.index = frame;
        }
    }

    fn register_animation(&mut self, name: &str, frames: &[usize]) {
        self.animation.register(name, frames);
    }

    fn play_animation(&mut self, name: &str, frame_rate: f32, looped: bool) {
        self.animation.play(name, frame_rate, looped);
    }

    fn current_sheet(&self) -> SpriteSheet {
        self.sheet.0
    }
}

/// Advance jump-sheet playback and write the frame into the atlas.
pub fn animate_sprites(
    time: Res<Time>,
    mut sprites: Query<(&ActiveSheet, &mut SpriteAnimation, &mut Sprite)>,
) {
    for (sheet, mut animation, mut sprite) in &mut sprites {
        if sheet.0 != SpriteSheet::Jump {
            continue;
        }
        let Some(frame) = animation.advance(time.delta()) else {
            continue;
        };
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = frame.min(JUMP_SHEET_FRAME_COUNT - 1);
        }
    }
}
