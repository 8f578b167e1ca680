//! Per-tick character state update.

use crate::config::CharacterConfig;
use crate::engine::{Clock, ControlKey, InputSource, PhysicsBody, SpriteRenderer, SpriteSheet};

/// Frame indices of the jump animation, in playback order.
///
/// The jump sheet ships eight 300x300 frames; playback clamps the
/// nine-entry list to the sheet (see DESIGN.md).
pub const JUMP_ANIMATION_FRAMES: [usize; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Jump animation playback rate in frames per second.
pub const JUMP_ANIMATION_RATE: f32 = 30.0;

/// Name the jump animation is registered under.
pub const JUMP_ANIMATION: &str = "jump";

/// Which way the character is logically oriented, independent of velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// Whether the character is in its grounded or jumping presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    #[default]
    Grounded,
    Jumping,
}

/// Mutable character state, owned by the controller and updated exactly
/// once per tick. Lives for the whole character lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharacterState {
    pub facing: Facing,
    /// Jumping is permitted only when the clock is strictly past this.
    /// Only ever advanced forward, never reset.
    pub jump_cooldown_until_ms: u64,
    pub animation_mode: AnimationMode,
}

/// The character controller: tunables plus per-character state.
pub struct CharacterController {
    config: CharacterConfig,
    state: CharacterState,
}

impl CharacterController {
    pub fn new(config: CharacterConfig) -> Self {
        Self {
            config,
            state: CharacterState::default(),
        }
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    /// Advance the character by one simulation tick.
    ///
    /// Runs synchronously with no suspension and must be the only writer
    /// of the body's velocity during the tick. Step order matters:
    /// horizontal movement, then the jump trigger, then the jump-sheet
    /// reversion check, then facing-to-frame selection. The frame written
    /// in the last step deliberately lands after the jump texture swap.
    pub fn tick(
        &mut self,
        input: &impl InputSource,
        clock: &impl Clock,
        body: &mut impl PhysicsBody,
        renderer: &mut impl SpriteRenderer,
    ) {
        let now = clock.now_ms();

        // Horizontal movement resets every tick; LEFT wins when both
        // arrows are held.
        body.set_velocity_x(0.0);
        if input.is_down(ControlKey::Left) {
            body.set_velocity_x(-self.config.horizontal_speed);
            self.state.facing = Facing::Left;
        } else if input.is_down(ControlKey::Right) {
            body.set_velocity_x(self.config.horizontal_speed);
            self.state.facing = Facing::Right;
        }

        // Jump needs the button, floor contact, and an expired cooldown.
        // The cooldown is the only double-jump guard; there is no minimum
        // grounded dwell time before a re-jump.
        let triggered = input.is_down(ControlKey::Jump)
            && body.on_floor()
            && now > self.state.jump_cooldown_until_ms;
        if triggered {
            renderer.register_animation(JUMP_ANIMATION, &JUMP_ANIMATION_FRAMES);
            renderer.play_animation(JUMP_ANIMATION, JUMP_ANIMATION_RATE, false);
            // The just-started playback must survive this swap.
            renderer.set_texture(SpriteSheet::Jump, 0, false);
            body.set_velocity_y(self.config.jump_velocity);
            self.state.jump_cooldown_until_ms = now + self.config.jump_cooldown_ms;
            self.state.animation_mode = AnimationMode::Jumping;
        }

        // Level-triggered reversion: any tick the jump sheet is still
        // selected (and we did not just select it), swap back to the
        // character sheet. The jump sheet is therefore visible for at most
        // one tick. Intentionally not landing- or duration-based; see
        // DESIGN.md.
        if !triggered
            && self.state.animation_mode == AnimationMode::Jumping
            && renderer.current_sheet() == SpriteSheet::Jump
        {
            renderer.set_texture(SpriteSheet::Character, 0, true);
            self.state.animation_mode = AnimationMode::Grounded;
        }

        // Facing decides the static frame, even mid-jump. This runs after
        // the texture swaps above on purpose (last writer wins).
        let frame = match self.state.facing {
            Facing::Left => self.config.left_frame,
            Facing::Right => self.config.right_frame,
        };
        renderer.select_frame(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Keys {
        left: bool,
        right: bool,
        jump: bool,
    }

    impl Keys {
        fn none() -> Self {
            Self::default()
        }
        fn left() -> Self {
            Self {
                left: true,
                ..Self::default()
            }
        }
        fn right() -> Self {
            Self {
                right: true,
                ..Self::default()
            }
        }
        fn jump() -> Self {
            Self {
                jump: true,
                ..Self::default()
            }
        }
    }

    impl InputSource for Keys {
        fn is_down(&self, key: ControlKey) -> bool {
            match key {
                ControlKey::Left => self.left,
                ControlKey::Right => self.right,
                ControlKey::Jump => self.jump,
            }
        }
    }

    struct AtMs(u64);

    impl Clock for AtMs {
        fn now_ms(&self) -> u64 {
            self.0
        }
    }

    #[derive(Default)]
    struct Body {
        vx: f32,
        vy: f32,
        floor: bool,
    }

    impl Body {
        fn grounded() -> Self {
            Self {
                floor: true,
                ..Self::default()
            }
        }
    }

    impl PhysicsBody for Body {
        fn velocity_x(&self) -> f32 {
            self.vx
        }
        fn velocity_y(&self) -> f32 {
            self.vy
        }
        fn set_velocity_x(&mut self, vx: f32) {
            self.vx = vx;
        }
        fn set_velocity_y(&mut self, vy: f32) {
            self.vy = vy;
        }
        fn on_floor(&self) -> bool {
            self.floor
        }
    }

    #[derive(Default)]
    struct Screen {
        sheet: SpriteSheet,
        frame: usize,
        registered: Vec<(String, Vec<usize>)>,
        playing: Option<(String, f32, bool)>,
    }

    impl SpriteRenderer for Screen {
        fn set_texture(&mut self, sheet: SpriteSheet, frame: usize, reset_animation: bool) {
            self.sheet = sheet;
            self.frame = frame;
            if reset_animation {
                self.playing = None;
            }
        }
        fn select_frame(&mut self, frame: usize) {
            self.frame = frame;
        }
        fn register_animation(&mut self, name: &str, frames: &[usize]) {
            self.registered.push((name.to_string(), frames.to_vec()));
        }
        fn play_animation(&mut self, name: &str, frame_rate: f32, looped: bool) {
            self.playing = Some((name.to_string(), frame_rate, looped));
        }
        fn current_sheet(&self) -> SpriteSheet {
            self.sheet
        }
    }

    fn controller() -> CharacterController {
        CharacterController::new(CharacterConfig::default())
    }

    #[test]
    fn left_only_moves_left_and_faces_left() {
        let mut ctl = controller();
        let mut body = Body::grounded();
        let mut screen = Screen::default();

        ctl.tick(&Keys::left(), &AtMs(1000), &mut body, &mut screen);

        assert_eq!(body.vx, -160.0);
        assert_eq!(ctl.state().facing, Facing::Left);
        assert_eq!(screen.frame, 0);
    }

    #[test]
    fn right_only_moves_right_and_faces_right() {
        let mut ctl = controller();
        let mut body = Body::grounded();
        let mut screen = Screen::default();

        ctl.tick(&Keys::right(), &AtMs(1000), &mut body, &mut screen);

        assert_eq!(body.vx, 160.0);
        assert_eq!(ctl.state().facing, Facing::Right);
        assert_eq!(screen.frame, 1);
    }

    #[test]
    fn left_wins_when_both_arrows_held() {
        let mut ctl = controller();
        let mut body = Body::grounded();
        let mut screen = Screen::default();
        let both = Keys {
            left: true,
            right: true,
            jump: false,
        };

        ctl.tick(&both, &AtMs(1000), &mut body, &mut screen);

        assert_eq!(body.vx, -160.0);
        assert_eq!(ctl.state().facing, Facing::Left);
        assert_eq!(screen.frame, 0);
    }

    #[test]
    fn no_arrows_zeroes_velocity_and_keeps_facing() {
        let mut ctl = controller();
        let mut body = Body::grounded();
        let mut screen = Screen::default();

        ctl.tick(&Keys::right(), &AtMs(1000), &mut body, &mut screen);
        ctl.tick(&Keys::none(), &AtMs(1016), &mut body, &mut screen);

        assert_eq!(body.vx, 0.0);
        assert_eq!(ctl.state().facing, Facing::Right);
        assert_eq!(screen.frame, 1);
    }

    #[test]
    fn jump_on_floor_sets_velocity_and_advances_cooldown() {
        let mut ctl = controller();
        let mut body = Body::grounded();
        let mut screen = Screen::default();

        ctl.tick(&Keys::jump(), &AtMs(1000), &mut body, &mut screen);

        assert_eq!(body.vy, -120.0);
        assert_eq!(ctl.state().jump_cooldown_until_ms, 1650);
        assert_eq!(ctl.state().animation_mode, AnimationMode::Jumping);
        assert_eq!(screen.sheet, SpriteSheet::Jump);
        // Facing is still Left, so the frame written last is 0.
        assert_eq!(screen.frame, 0);

        let (name, frames) = &screen.registered[0];
        assert_eq!(name, JUMP_ANIMATION);
        assert_eq!(frames, &JUMP_ANIMATION_FRAMES);
        // The texture swap on the trigger tick must not reset the
        // playback started just before it.
        assert_eq!(
            screen.playing,
            Some((JUMP_ANIMATION.to_string(), JUMP_ANIMATION_RATE, false))
        );
    }

    #[test]
    fn jump_requires_floor_contact() {
        let mut ctl = controller();
        let mut body = Body::default();
        let mut screen = Screen::default();

        ctl.tick(&Keys::jump(), &AtMs(1000), &mut body, &mut screen);

        assert_eq!(body.vy, 0.0);
        assert_eq!(ctl.state().jump_cooldown_until_ms, 0);
        assert_eq!(screen.sheet, SpriteSheet::Character);
    }

    #[test]
    fn jump_requires_unexpired_cooldown_to_lapse() {
        let mut ctl = controller();
        let mut body = Body::grounded();
        let mut screen = Screen::default();

        // First jump at t=1000 pushes the cooldown to 1650.
        ctl.tick(&Keys::jump(), &AtMs(1000), &mut body, &mut screen);
        body.vy = 0.0;
        body.floor = true;

        // t=1500: cooldown not yet expired, no trigger.
        ctl.tick(&Keys::jump(), &AtMs(1500), &mut body, &mut screen);
        assert_eq!(body.vy, 0.0);
        assert_eq!(ctl.state().jump_cooldown_until_ms, 1650);

        // t=1650 exactly: still gated (strictly-greater comparison).
        ctl.tick(&Keys::jump(), &AtMs(1650), &mut body, &mut screen);
        assert_eq!(body.vy, 0.0);

        // t=1651: eligible again, no grounded dwell time required.
        ctl.tick(&Keys::jump(), &AtMs(1651), &mut body, &mut screen);
        assert_eq!(body.vy, -120.0);
        assert_eq!(ctl.state().jump_cooldown_until_ms, 1651 + 650);
    }

    #[test]
    fn airborne_jump_press_never_triggers() {
        let mut ctl = controller();
        let mut body = Body::grounded();
        let mut screen = Screen::default();

        ctl.tick(&Keys::jump(), &AtMs(1000), &mut body, &mut screen);

        // Long past the cooldown but airborne.
        body.vy = 5.0;
        body.floor = false;
        ctl.tick(&Keys::jump(), &AtMs(3000), &mut body, &mut screen);

        assert_eq!(body.vy, 5.0);
        assert_eq!(ctl.state().jump_cooldown_until_ms, 1650);
    }

    #[test]
    fn jump_sheet_reverts_on_the_next_tick() {
        let mut ctl = controller();
        let mut body = Body::grounded();
        let mut screen = Screen::default();

        ctl.tick(&Keys::jump(), &AtMs(1000), &mut body, &mut screen);
        assert_eq!(screen.sheet, SpriteSheet::Jump);

        body.floor = false;
        ctl.tick(&Keys::none(), &AtMs(1001), &mut body, &mut screen);

        assert_eq!(screen.sheet, SpriteSheet::Character);
        assert_eq!(ctl.state().animation_mode, AnimationMode::Grounded);
        // The reversion swap resets playback.
        assert_eq!(screen.playing, None);
    }

    #[test]
    fn jump_button_alone_is_not_enough() {
        let mut ctl = controller();
        let mut body = Body::grounded();
        let mut screen = Screen::default();

        // Button not held: grounded, cooldown clear, still no jump.
        ctl.tick(&Keys::left(), &AtMs(1000), &mut body, &mut screen);

        assert_eq!(body.vy, 0.0);
        assert_eq!(ctl.state().jump_cooldown_until_ms, 0);
        assert!(screen.registered.is_empty());
    }

    #[test]
    fn alternate_tuning_is_respected() {
        let cfg = CharacterConfig {
            horizontal_speed: 200.0,
            jump_velocity: -300.0,
            jump_cooldown_ms: 100,
            left_frame: 4,
            right_frame: 5,
        };
        let mut ctl = CharacterController::new(cfg);
        let mut body = Body::grounded();
        let mut screen = Screen::default();

        ctl.tick(&Keys::right(), &AtMs(1000), &mut body, &mut screen);
        assert_eq!(body.vx, 200.0);
        assert_eq!(screen.frame, 5);

        ctl.tick(&Keys::jump(), &AtMs(1000), &mut body, &mut screen);
        assert_eq!(body.vy, -300.0);
        assert_eq!(ctl.state().jump_cooldown_until_ms, 1100);
    }
}
