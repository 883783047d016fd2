use std::time::Duration;

use common::config::Validate;
use common::games::snake::{
    SnakeSessionSettings, BOARD_SIZE_RANGE, DEFAULT_BOARD_SIZE, DEFAULT_REVERSE_FOOD_PROBABILITY,
    DEFAULT_TICK_INTERVAL,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub board_size: u32,
    pub tick_interval_ms: u32,
    pub reverse_food_probability: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        SnakeSessionSettings::from(self).validate()
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE as u32,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u32,
            reverse_food_probability: DEFAULT_REVERSE_FOOD_PROBABILITY,
            seed: None,
        }
    }
}

impl From<&SnakeConfig> for SnakeSessionSettings {
    fn from(config: &SnakeConfig) -> Self {
        Self {
            board_size: config.board_size as usize,
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
            reverse_food_probability: config.reverse_food_probability,
            seed: config.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_session_defaults() {
        let settings = SnakeSessionSettings::from(&SnakeConfig::default());
        assert_eq!(settings, SnakeSessionSettings::default());
    }

    #[test]
    fn test_board_size_out_of_range() {
        let config = SnakeConfig {
            board_size: *BOARD_SIZE_RANGE.end() as u32 + 1,
            ..SnakeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tick_interval_out_of_range() {
        let config = SnakeConfig {
            tick_interval_ms: 20,
            ..SnakeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seed_is_carried_over() {
        let config = SnakeConfig {
            seed: Some(1234),
            ..SnakeConfig::default()
        };
        assert_eq!(SnakeSessionSettings::from(&config).seed, Some(1234));
    }
}
