use std::path::PathBuf;

use buoyancy::{diverspecs, DiverPhysicsSpec};
use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::{Args, DiveScript};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Lungs only
    Freedive,
    /// Lungs plus a buoyancy compensator bladder
    Scuba,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub profile: Profile,
    /// Constant downward weight term (px/s^2).
    pub weight: f32,
    /// Gravity constant multiplier.
    pub g: f32,
    /// Lung mass change per tick at 1 atm.
    pub inhale_rate: f32,
    pub start_x: f32,
    /// Spawn depth: 264 px is neutral-ish at 2 atm with the default presets.
    pub start_y: f32,
    pub world_width: f32,
    pub world_height: f32,
    pub tick_hz: u32,
    pub seconds: f32,
    /// Scripted held keys; built-in demo script when absent.
    pub script: Option<DiveScript>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Scuba,
            weight: 5.0,
            g: 0.98,
            inhale_rate: 0.01,
            start_x: 400.0,
            start_y: 264.0,
            world_width: 800.0,
            world_height: 600.0,
            tick_hz: 60,
            seconds: 30.0,
            script: None,
        }
    }
}

impl SimConfig {
    /// Physics spec for the selected profile with the config's gravity
    /// constant applied.
    pub fn spec(&self) -> DiverPhysicsSpec {
        let mut spec = match self.profile {
            Profile::Freedive => diverspecs::freediver_spec(),
            Profile::Scuba => diverspecs::scuba_spec(),
        };
        spec.gravity_constant = self.g;
        spec
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_hz == 0 {
            return Err(ConfigError::Invalid("tick_hz must be positive".into()));
        }
        if !self.seconds.is_finite() || self.seconds < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "seconds must be finite and non-negative, got {}",
                self.seconds
            )));
        }
        for (name, value) in [
            ("weight", self.weight),
            ("g", self.g),
            ("inhale_rate", self.inhale_rate),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "world bounds must be positive, got {}x{}",
                self.world_width, self.world_height
            )));
        }
        Ok(())
    }
}

/// Load the optional TOML file, apply CLI overrides, validate.
pub fn load_config(args: &Args) -> Result<SimConfig, ConfigError> {
    let mut cfg = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?
        }
        None => SimConfig::default(),
    };

    if let Some(profile) = args.profile {
        cfg.profile = profile;
    }
    if let Some(weight) = args.weight {
        cfg.weight = weight;
    }
    if let Some(g) = args.g {
        cfg.g = g;
    }
    if let Some(rate) = args.inhale_rate {
        cfg.inhale_rate = rate;
    }
    if let Some(seconds) = args.seconds {
        cfg.seconds = seconds;
    }

    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_source_form_values() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.weight, 5.0);
        assert_eq!(cfg.g, 0.98);
        assert_eq!(cfg.inhale_rate, 0.01);
        assert_eq!(cfg.start_y, 264.0);
        assert_eq!(cfg.tick_hz, 60);
    }

    #[test]
    fn toml_overrides_and_script_parse() {
        let cfg: SimConfig = toml::from_str(
            r#"
            profile = "freedive"
            weight = 6.5
            seconds = 10.0

            [[script.phases]]
            secs = 4.0
            inhale = true

            [[script.phases]]
            secs = 6.0
            swim = 1.0
            "#,
        )
        .expect("parse config");
        assert_eq!(cfg.profile, Profile::Freedive);
        assert_eq!(cfg.weight, 6.5);
        let script = cfg.script.expect("script present");
        assert_eq!(script.phases.len(), 2);
        assert!(script.phases[0].inhale);
        assert_eq!(script.phases[1].swim, 1.0);
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let mut cfg = SimConfig::default();
        cfg.tick_hz = 0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn spec_takes_gravity_override() {
        let mut cfg = SimConfig::default();
        cfg.g = 1.5;
        assert_eq!(cfg.spec().gravity_constant, 1.5);
        assert!(cfg.spec().bcd.is_some(), "scuba profile carries a bcd");
        cfg.profile = Profile::Freedive;
        assert!(cfg.spec().bcd.is_none());
    }
}
