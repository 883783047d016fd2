mod config;
mod snake_config;
mod window_config;

pub use config::{get_config_manager, Config};
pub use snake_config::SnakeConfig;
pub use window_config::WindowConfig;
