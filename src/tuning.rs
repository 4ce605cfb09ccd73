//! Data-driven game balance
//!
//! Every gameplay number a designer might want to poke lives here. The
//! defaults reproduce the reference screen; a frontend can override any
//! subset from a JSON blob.

use serde::{Deserialize, Serialize};

/// Balance values for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    /// Horizontal run speed (px/s)
    pub run_speed: f32,
    /// Vertical velocity applied on an honored jump (negative = up)
    pub jump_velocity: f32,

    // === Scoring ===
    /// Points awarded per pickup
    pub pickup_score: u32,

    // === Hazards ===
    /// Fastest horizontal speed a fresh hazard can be dealt (px/s)
    pub hazard_max_speed: f32,
    /// Small downward speed hazards enter with so they drop onto platforms
    pub hazard_drop_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            run_speed: 160.0,
            jump_velocity: -330.0,
            pickup_score: 10,
            hazard_max_speed: 200.0,
            hazard_drop_speed: 20.0,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_screen() {
        let tuning = Tuning::default();
        assert_eq!(tuning.run_speed, 160.0);
        assert_eq!(tuning.jump_velocity, -330.0);
        assert_eq!(tuning.pickup_score, 10);
        assert_eq!(tuning.hazard_max_speed, 200.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"run_speed": 200.0}"#).unwrap();
        assert_eq!(tuning.run_speed, 200.0);
        assert_eq!(tuning.pickup_score, 10);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }
}
