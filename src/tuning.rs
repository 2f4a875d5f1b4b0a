//! Data-driven game balance
//!
//! Every per-frame constant the simulation uses lives in [`Tuning`]. The
//! defaults are the shipped balance; a JSON document can override any subset
//! of fields (missing keys keep their default).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a tuning table
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("tuning field '{field}' = {value} is invalid: {reason}")]
    Invalid {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Game balance table (all speeds and accelerations are per frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Downward acceleration added to vertical velocity each frame
    pub gravity: f32,
    /// Upward velocity set by a jump
    pub jump_strength: f32,
    /// Player square side
    pub player_size: f32,

    // === Ground ===
    /// Ground strip height on landscape screens
    pub landscape_ground_height: f32,
    /// Portrait screens use `height / portrait_ground_divisor`
    pub portrait_ground_divisor: f32,

    // === Obstacles ===
    pub obstacle_size: f32,
    /// Shortest gap between spawns, in frames
    pub spawn_gap_min: f32,
    /// Random extra gap, uniform in `[0, spawn_gap_jitter)`
    pub spawn_gap_jitter: f32,

    // === Scroll ===
    pub collectible_size: f32,
    /// Score at which the scroll may start appearing
    pub collectible_score_threshold: u32,
    /// Per-frame spawn probability once eligible
    pub collectible_spawn_chance: f32,

    // === Difficulty ===
    pub initial_speed: f32,
    /// Frames between speed-ups
    pub ramp_interval: u64,
    pub ramp_increment: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_strength: 12.0,
            player_size: 40.0,

            landscape_ground_height: 50.0,
            portrait_ground_divisor: 3.0,

            obstacle_size: 40.0,
            spawn_gap_min: 60.0,
            spawn_gap_jitter: 90.0,

            collectible_size: 30.0,
            collectible_score_threshold: 6,
            collectible_spawn_chance: 0.005,

            initial_speed: 4.0,
            ramp_interval: 240,
            ramp_increment: 0.5,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file on disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let floats = [
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("player_size", self.player_size),
            ("landscape_ground_height", self.landscape_ground_height),
            ("portrait_ground_divisor", self.portrait_ground_divisor),
            ("obstacle_size", self.obstacle_size),
            ("spawn_gap_min", self.spawn_gap_min),
            ("spawn_gap_jitter", self.spawn_gap_jitter),
            ("collectible_size", self.collectible_size),
            ("collectible_spawn_chance", self.collectible_spawn_chance),
            ("initial_speed", self.initial_speed),
            ("ramp_increment", self.ramp_increment),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(invalid(field, value, "must be finite"));
            }
        }

        for (field, value) in [
            ("player_size", self.player_size),
            ("obstacle_size", self.obstacle_size),
            ("collectible_size", self.collectible_size),
            ("initial_speed", self.initial_speed),
            ("spawn_gap_min", self.spawn_gap_min),
        ] {
            if value <= 0.0 {
                return Err(invalid(field, value, "must be positive"));
            }
        }

        for (field, value) in [
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("landscape_ground_height", self.landscape_ground_height),
            ("spawn_gap_jitter", self.spawn_gap_jitter),
            ("ramp_increment", self.ramp_increment),
        ] {
            if value < 0.0 {
                return Err(invalid(field, value, "must not be negative"));
            }
        }

        if !(0.0..=1.0).contains(&self.collectible_spawn_chance) {
            return Err(invalid(
                "collectible_spawn_chance",
                self.collectible_spawn_chance,
                "must be within [0, 1]",
            ));
        }
        if self.portrait_ground_divisor < 1.0 {
            return Err(invalid(
                "portrait_ground_divisor",
                self.portrait_ground_divisor,
                "must be at least 1",
            ));
        }
        if self.ramp_interval == 0 {
            return Err(TuningError::Invalid {
                field: "ramp_interval",
                value: 0.0,
                reason: "must be positive",
            });
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: f32, reason: &'static str) -> TuningError {
    TuningError::Invalid {
        field,
        value: value as f64,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        Tuning::default().validate().expect("defaults must validate");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "initial_speed": 5.0, "ramp_interval": 300 }"#)
            .expect("valid json");
        assert_eq!(tuning.initial_speed, 5.0);
        assert_eq!(tuning.ramp_interval, 300);
        assert_eq!(tuning.gravity, 0.6);
        assert_eq!(tuning.collectible_score_threshold, 6);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning {
            collectible_score_threshold: 10,
            ..Tuning::default()
        };
        let json = tuning.to_json().expect("serialize");
        assert_eq!(Tuning::from_json(&json).expect("parse"), tuning);
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Json(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            r#"{ "collectible_spawn_chance": 1.5 }"#,
            r#"{ "initial_speed": 0.0 }"#,
            r#"{ "gravity": -1.0 }"#,
            r#"{ "ramp_interval": 0 }"#,
            r#"{ "portrait_ground_divisor": 0.5 }"#,
        ];
        for json in cases {
            let err = Tuning::from_json(json).unwrap_err();
            assert!(matches!(err, TuningError::Invalid { .. }), "{json} -> {err}");
        }
    }

    #[test]
    fn test_error_message_names_field() {
        let err = Tuning::from_json(r#"{ "obstacle_size": -3.0 }"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("obstacle_size"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
