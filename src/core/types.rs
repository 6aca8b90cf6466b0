use super::error::{PsoError, Result};
use serde::{Deserialize, Serialize};

// ===== CONFIGURATION =====

/// Full parameter table for one optimization run.
///
/// `Default` reproduces the classic table (75 particles, 0.5 retentions,
/// jump 0.1, 500 iterations, 2 dimensions). The solver itself never falls back
/// to it; callers assemble a config explicitly or start from the default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwarmConfig {
    pub swarm_size: usize,
    pub velocity_retention: f64,
    pub pb_retention: f64,
    /// Reserved for a neighborhood-informed variant; never read by the update step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ib_retention: Option<f64>,
    pub gb_retention: f64,
    pub jump_size: f64,
    pub iterations: u32,
    #[serde(default = "default_dimension")]
    pub dimension: usize,
}

fn default_dimension() -> usize {
    2
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            swarm_size: 75,
            velocity_retention: 0.5,
            pb_retention: 0.5,
            ib_retention: Some(0.5),
            gb_retention: 0.5,
            jump_size: 0.1,
            iterations: 500,
            dimension: default_dimension(),
        }
    }
}

impl SwarmConfig {
    /// Coefficients consumed by a particle during its update
    pub fn retention(&self) -> Retention {
        Retention {
            velocity: self.velocity_retention,
            personal_best: self.pb_retention,
            global_best: self.gb_retention,
            jump_size: self.jump_size,
        }
    }

    /// Reject coefficients that would poison the swarm with NaN/inf.
    ///
    /// Zero swarm size or zero iterations are valid and yield an empty run.
    pub fn validate(&self) -> Result<()> {
        let coefficients = [
            ("velocity_retention", Some(self.velocity_retention)),
            ("pb_retention", Some(self.pb_retention)),
            ("gb_retention", Some(self.gb_retention)),
            ("ib_retention", self.ib_retention),
        ];
        for (name, value) in coefficients {
            let Some(value) = value else { continue };
            if !value.is_finite() || value < 0.0 {
                return Err(PsoError::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !self.jump_size.is_finite() {
            return Err(PsoError::InvalidConfig(format!(
                "jump_size must be finite, got {}",
                self.jump_size
            )));
        }

        Ok(())
    }
}

/// Upper bounds of the three per-update random weights, plus the step scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Retention {
    pub velocity: f64,
    pub personal_best: f64,
    pub global_best: f64,
    pub jump_size: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_matches_reference_table() {
        let config = SwarmConfig::default();
        assert_eq!(config.swarm_size, 75);
        assert_eq!(config.iterations, 500);
        assert_eq!(config.dimension, 2);
        assert_eq!(config.jump_size, 0.1);
        assert_eq!(
            config.retention(),
            Retention {
                velocity: 0.5,
                personal_best: 0.5,
                global_best: 0.5,
                jump_size: 0.1,
            }
        );
    }

    #[test]
    fn json_table_round_trips() {
        let config = SwarmConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SwarmConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn dimension_and_ib_retention_are_optional_in_json() {
        let json = r#"{
            "swarm_size": 10,
            "velocity_retention": 0.4,
            "pb_retention": 0.3,
            "gb_retention": 0.2,
            "jump_size": 0.05,
            "iterations": 20
        }"#;
        let config: SwarmConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.dimension, 2);
        assert_eq!(config.ib_retention, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let json = r#"{"swarm_size": 1, "velocity_retention": 0.5, "pb_retention": 0.5,
            "gb_retention": 0.5, "jump_size": 0.1, "iterations": 1, "topology": "ring"}"#;
        assert!(serde_json::from_str::<SwarmConfig>(json).is_err());
    }

    #[test]
    fn empty_runs_are_valid() {
        let config = SwarmConfig {
            swarm_size: 0,
            iterations: 0,
            ..SwarmConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test_case(f64::NAN ; "nan")]
    #[test_case(f64::INFINITY ; "infinite")]
    #[test_case(-0.1 ; "negative")]
    fn bad_velocity_retention_is_rejected(value: f64) {
        let config = SwarmConfig {
            velocity_retention: value,
            ..SwarmConfig::default()
        };
        assert!(matches!(config.validate(), Err(PsoError::InvalidConfig(_))));
    }

    #[test_case(-0.5 ; "negative")]
    #[test_case(f64::NAN ; "nan")]
    fn bad_ib_retention_is_rejected_like_the_others(value: f64) {
        let config = SwarmConfig {
            ib_retention: Some(value),
            ..SwarmConfig::default()
        };
        assert!(matches!(config.validate(), Err(PsoError::InvalidConfig(msg)) if msg.starts_with("ib_retention")));
    }

    #[test]
    fn non_finite_jump_size_is_rejected() {
        let config = SwarmConfig {
            jump_size: f64::NAN,
            ..SwarmConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
