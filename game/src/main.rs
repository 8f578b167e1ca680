//! 2D platformer host app: arrows to run, space to jump.
//!
//! The actual character behavior lives in the `controller` crate; this
//! binary supplies the bevy side of its contracts (keyboard sampling,
//! game clock, an arcade physics body, and sprite/animation selection).

mod animation;
mod input;
mod physics;
mod player;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use controller::CharacterConfig;

/// Stage background, the classic light gray (#D3D3D3).
const CLEAR_COLOR: Color = Color::srgb(0.827, 0.827, 0.827);

/// Character tunables file, relative to the working directory.
const CONFIG_PATH: &str = "config/character.ron";

/// Tunables the player spawns with.
#[derive(Resource, Clone)]
pub struct CharacterSettings(pub CharacterConfig);

/// Read the RON tunables; a missing or malformed file falls back to the
/// built-in defaults. Runs as a startup system so the log subscriber is
/// already installed.
fn load_character_settings(mut commands: Commands) {
    let config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(text) => match CharacterConfig::from_ron_str(&text) {
            Ok(config) => {
                info!("Loaded character tunables from {CONFIG_PATH}");
                config
            }
            Err(err) => {
                warn!("Ignoring malformed {CONFIG_PATH}: {err}");
                CharacterConfig::default()
            }
        },
        Err(_) => CharacterConfig::default(),
    };
    commands.insert_resource(CharacterSettings(config));
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Alien Hop".to_string(),
                resolution: WindowResolution::new(
                    physics::WORLD_WIDTH as u32,
                    physics::WORLD_HEIGHT as u32,
                ),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(CLEAR_COLOR))
        .init_resource::<input::ControlState>()
        .add_systems(
            Startup,
            (
                player::setup_camera,
                load_character_settings,
                player::setup_player_sprites,
                player::spawn_player,
            )
                .chain(),
        )
        // ORDER MATTERS: sample input, tick the controller against last
        // frame's floor contact, then integrate, animate, and present.
        .add_systems(
            Update,
            (
                input::sample_keyboard,
                player::drive_character,
                physics::integrate_bodies,
                animation::animate_sprites,
                physics::sync_transforms,
            )
                .chain(),
        )
        .run();
}
