//! Deterministic gameplay simulation
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio, or physics-integration dependencies; collaborators
//!   feed the core through `TickInput` and execute the returned `Directive`s

pub mod events;
pub mod field;
pub mod player;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use events::{AnimKey, CollisionEvent, Cue, Directive};
pub use field::{Collectible, CollectibleField, Pickup, SlotId};
pub use score::Scoreboard;
pub use spawner::{Hazard, HazardSpawner};
pub use state::{Facing, GamePhase, Player, SessionState};
pub use tick::{MoveIntent, TickInput, session_start, tick};
