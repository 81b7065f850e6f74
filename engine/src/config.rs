use serde::{Deserialize, Serialize};

use crate::dimensions::{Bounds, Dimensions, MAX_DIMENSION, MIN_DIMENSION};
use crate::error::{ConfigError, DimensionError};

pub const DEFAULT_HEIGHT: usize = 20;
pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_ALIVE_RATIO: f64 = 0.05;

/// Tunables for a simulation session. Every key is optional when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub min_dimension: usize,
    pub max_dimension: usize,
    pub default_height: usize,
    pub default_width: usize,
    pub alive_ratio: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_dimension: MIN_DIMENSION,
            max_dimension: MAX_DIMENSION,
            default_height: DEFAULT_HEIGHT,
            default_width: DEFAULT_WIDTH,
            alive_ratio: DEFAULT_ALIVE_RATIO,
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_dimension < 1 {
            return Err(ConfigError::Invalid("min_dimension must be at least 1".to_owned()));
        }
        if self.min_dimension > self.max_dimension {
            return Err(ConfigError::Invalid(format!(
                "min_dimension {} is larger than max_dimension {}",
                self.min_dimension, self.max_dimension
            )));
        }
        if !(0.0..=1.0).contains(&self.alive_ratio) {
            return Err(ConfigError::Invalid(format!(
                "alive_ratio {} is not a probability",
                self.alive_ratio
            )));
        }
        self.default_dimensions()
            .map_err(|err| ConfigError::Invalid(format!("default size rejected: {err}")))?;
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min_dimension, self.max_dimension)
    }

    pub fn default_dimensions(&self) -> Result<Dimensions, DimensionError> {
        self.bounds()
            .validate(self.default_height as i64, self.default_width as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        let dims = config.default_dimensions().unwrap();
        assert_eq!((dims.height(), dims.width()), (20, 20));
        assert_eq!(config.bounds(), Bounds::new(3, 40));
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(
            SimulationConfig::from_toml_str("").unwrap(),
            SimulationConfig::default()
        );
    }

    #[test]
    fn partial_toml_overrides_some_keys() {
        let config = SimulationConfig::from_toml_str(
            r#"
            default_height = 10
            alive_ratio = 0.25
            "#,
        )
        .unwrap();
        assert_eq!(config.default_height, 10);
        assert_eq!(config.default_width, 20);
        assert_eq!(config.alive_ratio, 0.25);
    }

    #[test]
    fn rejects_inconsistent_values() {
        assert!(matches!(
            SimulationConfig::from_toml_str("min_dimension = 50"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("default_width = 2"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("alive_ratio = 1.5"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SimulationConfig::from_toml_str("min_dimension = 0"),
            Err(ConfigError::Invalid(_))
        ));
        let nan = SimulationConfig {
            alive_ratio: f64::NAN,
            ..SimulationConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            SimulationConfig::from_toml_str("default_height = \"twenty\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
