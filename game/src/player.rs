//! Player spawn, sprite assets, and the per-frame controller tick.

use bevy::prelude::*;
use controller::{CharacterController, Clock};

use crate::animation::{ActiveSheet, PlayerSprites, PlayerSpriteView, SpriteAnimation};
use crate::input::ControlState;
use crate::physics::ArcadeBody;
use crate::CharacterSettings;

/// Character sheet frame size in pixels (frame 0 faces left, 1 right).
const CHARACTER_FRAME: UVec2 = UVec2::new(125, 195);
const CHARACTER_FRAME_COUNT: u32 = 2;

/// Jump sheet frame size and count.
const JUMP_FRAME: UVec2 = UVec2::new(300, 300);
const JUMP_FRAME_COUNT: u32 = 8;

/// Spawn position in screen coordinates.
const SPAWN_POSITION: Vec2 = Vec2::new(250.0, 288.0);

/// Marker for the player sprite.
#[derive(Component)]
pub struct Player;

/// The player's character controller.
#[derive(Component)]
pub struct Controller(pub CharacterController);

/// Bevy's elapsed time as the controller's millisecond clock.
struct GameClock(u64);

impl Clock for GameClock {
    fn now_ms(&self) -> u64 {
        self.0
    }
}

pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Queue both spritesheets and build their atlas layouts.
pub fn setup_player_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let character_layout = layouts.add(TextureAtlasLayout::from_grid(
        CHARACTER_FRAME,
        CHARACTER_FRAME_COUNT,
        1,
        None,
        None,
    ));
    let jump_layout = layouts.add(TextureAtlasLayout::from_grid(
        JUMP_FRAME,
        JUMP_FRAME_COUNT,
        1,
        None,
        None,
    ));
    commands.insert_resource(PlayerSprites {
        character_image: asset_server.load("alien.png"),
        character_layout,
        jump_image: asset_server.load("sprite-jump-v5.png"),
        jump_layout,
    });
}

/// Spawn the player with its body, controller, and sprite.
pub fn spawn_player(
    mut commands: Commands,
    sprites: Res<PlayerSprites>,
    settings: Res<CharacterSettings>,
) {
    info!("Spawning player at {SPAWN_POSITION}");
    let body = ArcadeBody::new(SPAWN_POSITION, CHARACTER_FRAME.as_vec2());
    commands.spawn((
        Player,
        Sprite::from_atlas_image(
            sprites.character_image.clone(),
            TextureAtlas {
                layout: sprites.character_layout.clone(),
                index: 0,
            },
        ),
        Transform::from_translation(body.render_translation()),
        body,
        ActiveSheet::default(),
        SpriteAnimation::default(),
        Controller(CharacterController::new(settings.0.clone())),
    ));
}

/// Tick the character controller once per frame, wiring bevy's input,
/// clock, body, and sprite into its capability traits.
pub fn drive_character(
    time: Res<Time>,
    controls: Res<ControlState>,
    sprites: Res<PlayerSprites>,
    mut players: Query<
        (
            &mut Controller,
            &mut ArcadeBody,
            &mut Sprite,
            &mut ActiveSheet,
            &mut SpriteAnimation,
        ),
        With<Player>,
    >,
) {
    let clock = GameClock(time.elapsed().as_millis() as u64);
    for (mut ctl, mut body, mut sprite, mut sheet, mut animation) in &mut players {
        let mut view = PlayerSpriteView {
            sprite: &mut sprite,
            sheet: &mut sheet,
            animation: &mut animation,
            sheets: &sprites,
        };
        ctl.0.tick(&*controls, &clock, &mut *body, &mut view);
    }
}
