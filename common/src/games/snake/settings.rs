use std::ops::RangeInclusive;
use std::time::Duration;

use crate::config::Validate;
use super::food::DEFAULT_REVERSE_FOOD_PROBABILITY;

pub const DEFAULT_BOARD_SIZE: usize = 15;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(150);

pub const BOARD_SIZE_RANGE: RangeInclusive<usize> = 5..=50;
pub const TICK_INTERVAL_MS_RANGE: RangeInclusive<u64> = 50..=1000;

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub board_size: usize,
    pub tick_interval: Duration,
    pub reverse_food_probability: f64,
    /// Fixed seed for a reproducible run; random when `None`.
    pub seed: Option<u64>,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            tick_interval: DEFAULT_TICK_INTERVAL,
            reverse_food_probability: DEFAULT_REVERSE_FOOD_PROBABILITY,
            seed: None,
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if !BOARD_SIZE_RANGE.contains(&self.board_size) {
            return Err(format!(
                "Board size must be between {} and {}",
                BOARD_SIZE_RANGE.start(),
                BOARD_SIZE_RANGE.end()
            ));
        }
        let tick_ms = self.tick_interval.as_millis() as u64;
        if !TICK_INTERVAL_MS_RANGE.contains(&tick_ms) {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms",
                TICK_INTERVAL_MS_RANGE.start(),
                TICK_INTERVAL_MS_RANGE.end()
            ));
        }
        if !(0.0..=1.0).contains(&self.reverse_food_probability) {
            return Err("Reverse food probability must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = SnakeSessionSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.board_size, 15);
        assert_eq!(settings.tick_interval, Duration::from_millis(150));
    }

    #[test]
    fn test_board_size_limits() {
        let small = SnakeSessionSettings {
            board_size: 4,
            ..SnakeSessionSettings::default()
        };
        assert!(small.validate().is_err());

        let large = SnakeSessionSettings {
            board_size: 51,
            ..SnakeSessionSettings::default()
        };
        assert!(large.validate().is_err());
    }

    #[test]
    fn test_tick_interval_limits() {
        let fast = SnakeSessionSettings {
            tick_interval: Duration::from_millis(10),
            ..SnakeSessionSettings::default()
        };
        assert!(fast.validate().is_err());
    }

    #[test]
    fn test_probability_limits() {
        let settings = SnakeSessionSettings {
            reverse_food_probability: 1.5,
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
