//! Event values exchanged with the external collaborators
//!
//! Collisions arrive as plain values inside `TickInput` instead of
//! registered callbacks, and everything the core wants from the outside
//! world leaves as a `Directive`. Control flow stays linear and the whole
//! loop is testable without a frontend.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::SlotId;

/// Collision notifications from the physics layer, dispatched in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionEvent {
    /// Player overlapped a collectible slot (non-blocking overlap)
    CollectibleOverlap { slot: SlotId },
    /// Player touched a hazard body (solid contact); ends the session
    HazardContact { hazard_id: u32 },
}

/// Named animation states on the player sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimKey {
    Left,
    Right,
    /// Single idle frame, facing the camera
    Turn,
}

/// Fire-and-forget audio cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// Background loop, started once at session start
    MusicLoop,
    Jump,
    Pickup,
    GameOver,
}

/// Requests to the external collaborators, drained after every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Directive {
    /// Physics: set the player body's horizontal velocity
    SetVelocityX(f32),
    /// Physics: set the player body's vertical velocity (negative = up)
    SetVelocityY(f32),
    /// Physics: freeze the whole simulation
    PausePhysics,
    /// Physics + render: materialize a hazard body
    SpawnHazard {
        pos: Vec2,
        vel: Vec2,
        bounce: f32,
        gravity_scale: f32,
    },
    /// Render: play a named animation on the player
    PlayAnim(AnimKey),
    /// Render: tint the player sprite (0xRRGGBB)
    TintPlayer(u32),
    /// Render: hide a picked-up collectible
    DeactivateCollectible(SlotId),
    /// Render: bring the whole collectible batch back in place
    RespawnCollectibles,
    /// Render: reveal the "Game Over" caption
    ShowGameOverCaption,
    /// Audio: fire-and-forget cue playback
    PlayCue(Cue),
    /// Audio: stop the background loop
    StopMusic,
    /// Display: push the new total to the score label
    SetScoreDisplay(u32),
    /// Navigation: tear down and start a fresh session
    RestartScene,
}
