//! Session state and core gameplay types
//!
//! Everything needed to replay or inspect a session lives here.

use serde::{Deserialize, Serialize};

use crate::Tuning;
use crate::layout::Layout;

use super::field::CollectibleField;
use super::score::Scoreboard;
use super::spawner::HazardSpawner;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Session ended by hazard contact; terminal
    GameOver,
}

/// Which way the player is pushing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    /// Standing still, facing the camera
    #[default]
    Idle,
}

/// The player-controlled character.
///
/// Position and velocity live in the external physics body; the core only
/// tracks control-relevant state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub facing: Facing,
    /// Resting on a solid surface this tick (gates jumping)
    pub grounded: bool,
    pub alive: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            facing: Facing::Idle,
            grounded: false,
            alive: true,
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Player,
    /// The one static screen, handed to the frontend at session start
    pub layout: Layout,
    pub field: CollectibleField,
    pub spawner: HazardSpawner,
    pub scoreboard: Scoreboard,
    /// Balance values for this session
    pub tuning: Tuning,
    /// One-shot restart listener, armed by the game-over transition
    pub(crate) restart_armed: bool,
}

impl SessionState {
    /// Create a session over the default single-screen layout.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a session with custom balance values.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let layout = Layout::single_screen();
        let field = CollectibleField::from_slots(&layout.collectible_slots);
        Self {
            seed,
            phase: GamePhase::Playing,
            time_ticks: 0,
            player: Player::default(),
            layout,
            field,
            spawner: HazardSpawner::new(),
            scoreboard: Scoreboard::default(),
            tuning,
            restart_armed: false,
        }
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.scoreboard.total()
    }

    /// Hazards spawned so far this session
    pub fn hazard_count(&self) -> usize {
        self.spawner.hazards().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COLLECTIBLE_COUNT;

    #[test]
    fn test_new_session_starts_playing() {
        let state = SessionState::new(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.field.active_count(), COLLECTIBLE_COUNT);
        assert_eq!(state.hazard_count(), 0);
        assert!(state.player.alive);
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let state = SessionState::new(42);
        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, state.seed);
        assert_eq!(back.phase, state.phase);
        assert_eq!(back.field.active_count(), state.field.active_count());
    }
}
