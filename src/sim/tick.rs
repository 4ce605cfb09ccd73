//! Per-tick gameplay loop
//!
//! One update per rendered frame, advanced synchronously. Movement always
//! runs before collision dispatch within a tick, and a pickup's score lands
//! before the hazard that pickup provokes.

use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_HIT_TINT;

use super::events::{AnimKey, CollisionEvent, Cue, Directive};
use super::player;
use super::state::{Facing, GamePhase, SessionState};

/// Mutually exclusive horizontal intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveIntent {
    Left,
    Right,
    #[default]
    Neither,
}

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal intent from the directional keys
    pub move_intent: MoveIntent,
    /// Jump key held this tick
    pub jump: bool,
    /// Pointer/tap went down this tick (one-shot; restarts after game over)
    pub pointer: bool,
    /// Player body rests on a solid surface (from physics contact)
    pub grounded: bool,
    /// Player body x (from physics); anchors hazard spawns
    pub player_x: f32,
    /// Collision notifications gathered since the last tick, in order
    pub collisions: Vec<CollisionEvent>,
}

/// Requests issued once at session start, before the first tick.
pub fn session_start(state: &SessionState) -> Vec<Directive> {
    vec![
        Directive::PlayCue(Cue::MusicLoop),
        Directive::SetScoreDisplay(state.scoreboard.total()),
    ]
}

/// Advance the session by one tick, returning the directives to execute.
pub fn tick(state: &mut SessionState, input: &TickInput) -> Vec<Directive> {
    let mut out = Vec::new();

    if state.phase == GamePhase::GameOver {
        // The session is over; only the armed restart listener remains.
        if input.pointer && state.restart_armed {
            state.restart_armed = false;
            out.push(Directive::RestartScene);
        }
        return out;
    }

    state.time_ticks += 1;

    // Movement first - the ordering the rest of the tick relies on.
    player::drive(
        &mut state.player,
        input.move_intent,
        input.jump,
        input.grounded,
        &state.tuning,
        &mut out,
    );

    for event in &input.collisions {
        match *event {
            CollisionEvent::CollectibleOverlap { slot } => {
                let score_delta = state.tuning.pickup_score;
                let Some(pickup) = state.field.on_overlap(slot, input.player_x, score_delta)
                else {
                    // Stale report on an inactive slot
                    continue;
                };
                out.push(Directive::DeactivateCollectible(slot));
                out.push(Directive::PlayCue(Cue::Pickup));

                // Score lands before the hazard this pickup provokes.
                let total = state.scoreboard.increment(pickup.score_delta);
                out.push(Directive::SetScoreDisplay(total));

                if pickup.wave_respawned {
                    out.push(Directive::RespawnCollectibles);
                }

                let hazard = state
                    .spawner
                    .spawn(pickup.spawn_anchor_x, state.seed, &state.tuning);
                out.push(Directive::SpawnHazard {
                    pos: hazard.pos,
                    vel: hazard.vel,
                    bounce: hazard.bounce,
                    gravity_scale: hazard.gravity_scale,
                });
            }
            CollisionEvent::HazardContact { hazard_id } => {
                enter_game_over(state, hazard_id, &mut out);
                break;
            }
        }
    }

    out
}

/// The single irreversible transition. Fires at most once per session.
fn enter_game_over(state: &mut SessionState, hazard_id: u32, out: &mut Vec<Directive>) {
    log::info!(
        "hazard {} ended the session: score={} ticks={}",
        hazard_id,
        state.scoreboard.total(),
        state.time_ticks
    );

    state.phase = GamePhase::GameOver;
    state.player.alive = false;
    state.player.facing = Facing::Idle;
    state.restart_armed = true;

    out.push(Directive::PlayCue(Cue::GameOver));
    out.push(Directive::PausePhysics);
    out.push(Directive::TintPlayer(PLAYER_HIT_TINT));
    out.push(Directive::PlayAnim(AnimKey::Turn));
    out.push(Directive::ShowGameOverCaption);
    out.push(Directive::StopMusic);
}
