use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait ConfigContentProvider {
    /// Returns `Ok(None)` when there is no stored config yet.
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.path.display(),
                err
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        std::fs::write(&self.path, content).map_err(|e| {
            format!(
                "Failed to write config file {}: {}",
                self.path.display(),
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("reversnake_{}_{}.yaml", name, random_number))
    }

    #[test]
    fn test_missing_file_returns_none() {
        let provider = FileContentConfigProvider::new(temp_path("missing"));
        let content = provider.get_config_content().unwrap();
        assert!(content.is_none());
    }

    #[test]
    fn test_written_content_is_read_back() {
        let path = temp_path("roundtrip");
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("board_size: 15\n").unwrap();

        let content = provider.get_config_content().unwrap();
        assert_eq!(content.as_deref(), Some("board_size: 15\n"));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let dir = temp_path("dir");
        let path = dir.join("nested.yaml");
        let provider = FileContentConfigProvider::new(path.clone());
        provider.set_config_content("a: 1\n").unwrap();
        assert!(path.exists());

        std::fs::remove_dir_all(dir).unwrap();
    }
}
