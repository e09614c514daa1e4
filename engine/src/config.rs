//! Window configuration, loadable from TOML.

use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    /// Frames per second the loop asks the backend to cap at. 0 means
    /// uncapped.
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            title: "rayframe".to_string(),
            target_fps: 60,
        }
    }
}

impl WindowConfig {
    pub fn new(width: i32, height: i32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(EngineError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

/// Read and deserialize a TOML file.
pub fn load_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, EngineError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| EngineError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = WindowConfig::from_toml_str("title = \"demo\"\ntarget_fps = 30").unwrap();
        assert_eq!(cfg.width, 1920);
        assert_eq!(cfg.height, 1080);
        assert_eq!(cfg.title, "demo");
        assert_eq!(cfg.target_fps, 30);
    }

    #[test]
    fn non_positive_size_is_rejected() {
        assert!(WindowConfig::new(800, 600, "ok").validate().is_ok());
        let err = WindowConfig::new(0, 600, "bad").validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
        assert!(WindowConfig::new(800, -1, "bad").validate().is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_toml::<WindowConfig>("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let path = std::env::temp_dir().join(format!("rayframe-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "width = \"wide\"").unwrap();
        let err = load_toml::<WindowConfig>(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        match err {
            EngineError::ConfigParse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
