use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < 200.0 || self.height < 200.0 {
            return Err(format!(
                "Window must be at least 200x200, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 700.0,
        }
    }
}
