//! Hazard spawning policy
//!
//! One hazard per pickup, placed near the edge the player is NOT near and
//! sent gliding toward the opposite side. Nothing despawns a hazard during
//! a session, so the screen gets busier with every pickup.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Tuning;
use crate::consts::*;

/// A hazard spawn record. Travel and bouncing belong to the external
/// physics body created from this record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub bounce: f32,
    pub gravity_scale: f32,
}

/// Owns the ever-growing hazard pool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HazardSpawner {
    hazards: Vec<Hazard>,
    next_id: u32,
}

impl HazardSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hazards(&self) -> &[Hazard] {
        &self.hazards
    }

    /// Place one hazard on the edge opposite `anchor_x`, moving back across.
    ///
    /// Deterministic "randomness" based on the spawn ordinal AND the session
    /// seed: a replayed session deals the same speeds in the same order.
    pub fn spawn(&mut self, anchor_x: f32, session_seed: u64, tuning: &Tuning) -> Hazard {
        let spawn_seed = (self.next_id as u64)
            .wrapping_mul(2654435761)
            .wrapping_add(session_seed);
        let mut rng = Pcg32::seed_from_u64(spawn_seed);

        // Mirror across the field: emerge where the player is not.
        let from_left = anchor_x > FIELD_WIDTH / 2.0;
        let x = if from_left {
            HAZARD_EDGE_MARGIN
        } else {
            FIELD_WIDTH - HAZARD_EDGE_MARGIN
        };
        let speed = rng.random_range(0.0..=tuning.hazard_max_speed);
        let vx = if from_left { speed } else { -speed };

        let hazard = Hazard {
            id: self.next_id,
            pos: Vec2::new(x, HAZARD_SPAWN_Y),
            vel: Vec2::new(vx, tuning.hazard_drop_speed),
            bounce: HAZARD_BOUNCE,
            gravity_scale: HAZARD_GRAVITY_SCALE,
        };
        self.next_id += 1;

        log::debug!(
            "hazard {} enters at x={:.0} with vx={:.1}",
            hazard.id,
            hazard.pos.x,
            hazard.vel.x
        );
        self.hazards.push(hazard);
        hazard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_mirrors_the_anchor() {
        let tuning = Tuning::default();
        let mut spawner = HazardSpawner::new();

        // Player near the left edge: hazard enters from the right, heading left.
        let hazard = spawner.spawn(100.0, 7, &tuning);
        assert_eq!(hazard.pos.x, FIELD_WIDTH - HAZARD_EDGE_MARGIN);
        assert!(hazard.vel.x <= 0.0);

        // Player near the right edge: hazard enters from the left, heading right.
        let hazard = spawner.spawn(700.0, 7, &tuning);
        assert_eq!(hazard.pos.x, HAZARD_EDGE_MARGIN);
        assert!(hazard.vel.x >= 0.0);
    }

    #[test]
    fn test_center_anchor_spawns_on_the_right() {
        let tuning = Tuning::default();
        let mut spawner = HazardSpawner::new();
        let hazard = spawner.spawn(FIELD_WIDTH / 2.0, 7, &tuning);
        assert_eq!(hazard.pos.x, FIELD_WIDTH - HAZARD_EDGE_MARGIN);
    }

    #[test]
    fn test_hazards_glide_and_bounce_forever() {
        let tuning = Tuning::default();
        let mut spawner = HazardSpawner::new();
        let hazard = spawner.spawn(100.0, 7, &tuning);
        assert_eq!(hazard.bounce, 1.0);
        assert_eq!(hazard.gravity_scale, 0.0);
        assert!(hazard.vel.x.abs() <= tuning.hazard_max_speed);
        assert_eq!(hazard.vel.y, tuning.hazard_drop_speed);
    }

    #[test]
    fn test_pool_only_grows() {
        let tuning = Tuning::default();
        let mut spawner = HazardSpawner::new();
        for i in 0..5 {
            spawner.spawn(100.0 + i as f32, 7, &tuning);
            assert_eq!(spawner.hazards().len(), i + 1);
        }
        // Ids are dealt in order
        let ids: Vec<u32> = spawner.hazards().iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_same_seed_deals_the_same_speeds() {
        let tuning = Tuning::default();
        let mut a = HazardSpawner::new();
        let mut b = HazardSpawner::new();
        for _ in 0..4 {
            assert_eq!(a.spawn(100.0, 1234, &tuning), b.spawn(100.0, 1234, &tuning));
        }
    }
}
