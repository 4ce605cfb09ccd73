//! Player movement control
//!
//! Translates directional intent into velocity directives and animation
//! requests. Jumping is gated on the grounded contact the physics layer
//! reported for this tick; airborne requests are dropped, never queued.

use crate::Tuning;

use super::events::{AnimKey, Cue, Directive};
use super::state::{Facing, Player};
use super::tick::MoveIntent;

/// Apply one tick of movement intent to the player.
pub fn drive(
    player: &mut Player,
    intent: MoveIntent,
    jump: bool,
    grounded: bool,
    tuning: &Tuning,
    out: &mut Vec<Directive>,
) {
    player.grounded = grounded;

    match intent {
        MoveIntent::Left => {
            player.facing = Facing::Left;
            out.push(Directive::SetVelocityX(-tuning.run_speed));
            out.push(Directive::PlayAnim(AnimKey::Left));
        }
        MoveIntent::Right => {
            player.facing = Facing::Right;
            out.push(Directive::SetVelocityX(tuning.run_speed));
            out.push(Directive::PlayAnim(AnimKey::Right));
        }
        MoveIntent::Neither => {
            player.facing = Facing::Idle;
            out.push(Directive::SetVelocityX(0.0));
            out.push(Directive::PlayAnim(AnimKey::Turn));
        }
    }

    if jump && player.grounded {
        out.push(Directive::SetVelocityY(tuning.jump_velocity));
        out.push(Directive::PlayCue(Cue::Jump));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(intent: MoveIntent, jump: bool, grounded: bool) -> (Player, Vec<Directive>) {
        let mut player = Player::default();
        let mut out = Vec::new();
        drive(
            &mut player,
            intent,
            jump,
            grounded,
            &Tuning::default(),
            &mut out,
        );
        (player, out)
    }

    #[test]
    fn test_left_intent_sets_velocity_and_anim() {
        let (player, out) = run(MoveIntent::Left, false, true);
        assert_eq!(player.facing, Facing::Left);
        assert!(out.contains(&Directive::SetVelocityX(-160.0)));
        assert!(out.contains(&Directive::PlayAnim(AnimKey::Left)));
    }

    #[test]
    fn test_right_intent_sets_velocity_and_anim() {
        let (player, out) = run(MoveIntent::Right, false, true);
        assert_eq!(player.facing, Facing::Right);
        assert!(out.contains(&Directive::SetVelocityX(160.0)));
        assert!(out.contains(&Directive::PlayAnim(AnimKey::Right)));
    }

    #[test]
    fn test_no_intent_stops_and_turns() {
        let (player, out) = run(MoveIntent::Neither, false, true);
        assert_eq!(player.facing, Facing::Idle);
        assert!(out.contains(&Directive::SetVelocityX(0.0)));
        assert!(out.contains(&Directive::PlayAnim(AnimKey::Turn)));
    }

    #[test]
    fn test_grounded_jump_is_honored() {
        let (_, out) = run(MoveIntent::Neither, true, true);
        assert!(out.contains(&Directive::SetVelocityY(-330.0)));
        assert!(out.contains(&Directive::PlayCue(Cue::Jump)));
    }

    #[test]
    fn test_airborne_jump_is_dropped() {
        let (_, out) = run(MoveIntent::Right, true, false);
        assert!(!out.iter().any(|d| matches!(d, Directive::SetVelocityY(_))));
        assert!(!out.contains(&Directive::PlayCue(Cue::Jump)));
    }
}
