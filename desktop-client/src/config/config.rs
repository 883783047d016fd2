use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::{SnakeConfig, WindowConfig};

const CONFIG_FILE_NAME: &str = "reversnake_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Config manager for `path`, or for the file next to the executable.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub snake: SnakeConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.window.validate()?;
        Ok(())
    }
}
