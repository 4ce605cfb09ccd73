//! The one static screen layout
//!
//! The core never simulates platforms; this data is handed to the external
//! physics/render setup at session start so bodies and sprites exist before
//! the first tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A solid platform piece (static physics body)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    /// Sprite scale; the ground piece is doubled to span the screen
    pub scale: f32,
}

/// Everything the scene needs placed before play starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub platforms: Vec<Platform>,
    /// Fixed spawn position per collectible slot (they drop in from the top)
    pub collectible_slots: Vec<Vec2>,
    pub player_spawn: Vec2,
}

impl Layout {
    /// The single screen: a doubled ground piece, three floating platforms,
    /// and an evenly spaced collectible grid across the top.
    pub fn single_screen() -> Self {
        let platforms = vec![
            Platform {
                pos: Vec2::new(400.0, 568.0),
                scale: 2.0,
            },
            Platform {
                pos: Vec2::new(600.0, 400.0),
                scale: 1.0,
            },
            Platform {
                pos: Vec2::new(50.0, 250.0),
                scale: 1.0,
            },
            Platform {
                pos: Vec2::new(750.0, 220.0),
                scale: 1.0,
            },
        ];

        let collectible_slots = (0..COLLECTIBLE_COUNT)
            .map(|i| Vec2::new(COLLECTIBLE_START_X + i as f32 * COLLECTIBLE_STEP_X, 0.0))
            .collect();

        Self {
            platforms,
            collectible_slots,
            player_spawn: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::single_screen()
    }
}
