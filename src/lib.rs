//! Star Hopper - a single-screen collect-and-dodge platformer
//!
//! Core modules:
//! - `sim`: Deterministic gameplay simulation (state machine, entities, events)
//! - `layout`: The one static screen handed to the physics/render setup
//! - `tuning`: Data-driven game balance
//!
//! Physics integration, rendering, audio playback and input polling live in
//! the frontend. The core consumes per-tick snapshots and collision events,
//! and answers with `Directive` values for the collaborators to execute.

pub mod layout;
pub mod sim;
pub mod tuning;

pub use layout::Layout;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one update per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Play-field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Collectible batch size and grid spacing
    pub const COLLECTIBLE_COUNT: usize = 12;
    pub const COLLECTIBLE_START_X: f32 = 12.0;
    pub const COLLECTIBLE_STEP_X: f32 = 70.0;

    /// Hazards enter just inside the top corner opposite the player
    pub const HAZARD_EDGE_MARGIN: f32 = 16.0;
    pub const HAZARD_SPAWN_Y: f32 = 16.0;
    /// Perfectly elastic so a hazard keeps its speed off platform tops
    pub const HAZARD_BOUNCE: f32 = 1.0;
    /// Zero so a hazard glides instead of falling
    pub const HAZARD_GRAVITY_SCALE: f32 = 0.0;

    /// Player spawn point
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 450.0;
    /// Tint applied to the player sprite on hazard contact (0xRRGGBB)
    pub const PLAYER_HIT_TINT: u32 = 0xff0000;
}
