//! Collectible batch
//!
//! A fixed batch of slots laid out once at session start. Picking the last
//! active slot reactivates the whole batch in place - a fresh wave of the
//! same grid, never a partial or relocated one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Index of a collectible slot in the batch
pub type SlotId = usize;

/// One slot of the batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    /// Fixed spawn position (drop-in point for the external physics body)
    pub spawn_pos: Vec2,
    pub active: bool,
}

/// A successful pickup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    /// Points to award
    pub score_delta: u32,
    /// Player x at pickup time; anchors the retaliatory hazard spawn
    pub spawn_anchor_x: f32,
    /// True when this pickup emptied the batch and respawned it
    pub wave_respawned: bool,
}

/// Owns the collectible slots and their pickup/respawn behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleField {
    slots: Vec<Collectible>,
}

impl CollectibleField {
    /// Build the batch from fixed slot positions, all active.
    pub fn from_slots(slots: &[Vec2]) -> Self {
        Self {
            slots: slots
                .iter()
                .map(|&spawn_pos| Collectible {
                    spawn_pos,
                    active: true,
                })
                .collect(),
        }
    }

    pub fn slots(&self) -> &[Collectible] {
        &self.slots
    }

    /// How many slots are currently active (visible and collidable)
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|c| c.active).count()
    }

    /// Handle a player overlap reported by the collision layer.
    ///
    /// An overlap on an already-inactive (or unknown) slot is a no-op: the
    /// collision layer is trusted to deduplicate, but a stale report must
    /// not double-count or drive the active count negative.
    pub fn on_overlap(&mut self, slot: SlotId, player_x: f32, score_delta: u32) -> Option<Pickup> {
        let entry = self.slots.get_mut(slot)?;
        if !entry.active {
            return None;
        }
        entry.active = false;

        // Wave check: the batch respawns exactly when the last slot goes
        // dark, all twelve at once or not at all.
        let wave_respawned = self.active_count() == 0;
        if wave_respawned {
            for c in &mut self.slots {
                c.active = true;
            }
            log::debug!("batch exhausted, respawning all {} slots", self.slots.len());
        }

        Some(Pickup {
            score_delta,
            spawn_anchor_x: player_x,
            wave_respawned,
        })
    }
}
