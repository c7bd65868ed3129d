//! Simulation settings
//!
//! Every tunable the physics engine reads lives here and is fixed when the
//! state is constructed. Settings can be loaded from a JSON document; missing
//! fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::is_in_hexagon;

/// What happens after the ball slips past a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossPolicy {
    /// Ball keeps flying past the wall
    #[default]
    PassThrough,
    /// Ball is put back at the spawn point
    Respawn,
    /// Simulation stops advancing until the ball is reset
    Halt,
}

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Physics and paddle tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hexagon circumradius
    pub hex_scale: f64,
    /// Paddle half-width (position units; also the catch tolerance)
    pub paddle_half_width: f64,
    /// Paddle half-height, only meaningful to renderers
    pub paddle_half_height: f64,
    /// Fixed tick duration (seconds)
    pub dt: f64,
    /// Paddle speed (position units per second)
    pub paddle_speed: f64,
    /// Ball speed after a catch
    pub ball_speed: f64,
    /// Central force strength
    pub gravity: f64,
    /// Radius below which the central force repels
    pub core_radius: f64,
    /// Floor applied to the radius before the inverse-cube term
    pub min_radius: f64,
    /// Ball position at start and on respawn
    pub spawn_position: DVec2,
    /// Ball velocity at start and on respawn
    pub spawn_velocity: DVec2,
    /// Behaviour after a loss
    pub on_loss: LossPolicy,
    /// Seed for respawn jitter
    pub seed: u64,
    /// Max random rotation of the spawn velocity on respawn (radians)
    pub serve_jitter: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hex_scale: HEX_SCALE,
            paddle_half_width: PADDLE_HALF_WIDTH,
            paddle_half_height: PADDLE_HALF_HEIGHT,
            dt: SIM_DT,
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
            gravity: FORCE_STRENGTH,
            core_radius: CORE_RADIUS,
            min_radius: MIN_RADIUS,
            spawn_position: DVec2::new(SPAWN_OFFSET.0, SPAWN_OFFSET.1),
            spawn_velocity: DVec2::new(0.0, -BALL_SPEED),
            on_loss: LossPolicy::default(),
            seed: 0,
            serve_jitter: 0.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings (on_loss: {:?})", settings.on_loss);
        Ok(settings)
    }

    /// Check every field for values the engine cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be finite and positive",
                })
            }
        }

        positive("hex_scale", self.hex_scale)?;
        positive("dt", self.dt)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("ball_speed", self.ball_speed)?;
        positive("min_radius", self.min_radius)?;

        if !(self.paddle_half_width > 0.0 && self.paddle_half_width < 1.0) {
            return Err(SettingsError::Invalid {
                field: "paddle_half_width",
                reason: "must lie in (0, 1)",
            });
        }
        if !self.gravity.is_finite() {
            return Err(SettingsError::Invalid {
                field: "gravity",
                reason: "must be finite",
            });
        }
        if !(self.core_radius.is_finite() && self.core_radius >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "core_radius",
                reason: "must be finite and non-negative",
            });
        }
        if !(self.serve_jitter.is_finite() && self.serve_jitter >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "serve_jitter",
                reason: "must be finite and non-negative",
            });
        }
        if !is_in_hexagon(self.spawn_position, self.hex_scale) {
            return Err(SettingsError::Invalid {
                field: "spawn_position",
                reason: "must lie inside the hexagon",
            });
        }
        if !self.spawn_velocity.is_finite() {
            return Err(SettingsError::Invalid {
                field: "spawn_velocity",
                reason: "must be finite",
            });
        }
        Ok(())
    }

    /// Lowest paddle position
    #[inline]
    pub fn left_limit(&self) -> f64 {
        self.paddle_half_width - 1.0
    }

    /// Highest paddle position
    #[inline]
    pub fn right_limit(&self) -> f64 {
        1.0 - self.paddle_half_width
    }

    /// Paddle displacement per tick
    #[inline]
    pub fn paddle_step(&self) -> f64 {
        self.paddle_speed * self.dt
    }

    /// Distance a ball at `ball_speed` covers in one tick
    #[inline]
    pub fn swept_reach(&self) -> f64 {
        self.ball_speed * self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!((settings.left_limit() + 0.8).abs() < 1e-12);
        assert!((settings.right_limit() - 0.8).abs() < 1e-12);
        assert!((settings.ball_speed - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "gravity": 0.0, "on_loss": "respawn" }"#).unwrap();
        assert_eq!(settings.gravity, 0.0);
        assert_eq!(settings.on_loss, LossPolicy::Respawn);
        assert_eq!(settings.dt, SIM_DT);
    }

    #[test]
    fn test_rejects_bad_paddle_width() {
        let err = Settings::from_json(r#"{ "paddle_half_width": 1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "paddle_half_width",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_spawn_outside() {
        let settings = Settings {
            spawn_position: DVec2::new(0.0, 2.0),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ dt: }"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("hex-pong-no-such-settings.json");
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_json_roundtrip_keeps_vectors() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        let back = Settings::from_json(&json).unwrap();
        let defaults = Settings::default();
        assert!((back.spawn_position - defaults.spawn_position).length() < 1e-12);
        assert!((back.spawn_velocity - defaults.spawn_velocity).length() < 1e-12);
        assert!((back.ball_speed - defaults.ball_speed).abs() < 1e-12);
        assert_eq!(back.on_loss, defaults.on_loss);
    }
}
