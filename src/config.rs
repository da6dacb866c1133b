//! Menu configuration
//!
//! Loaded from JSON. Every field has a default, so a config file only
//! needs the values it changes and a missing file means "all defaults".

use crate::draw_plan::Rgb;
use crate::error::ConfigError;
use crate::gui::{MenuAction, MenuCatalog, MenuItem};
use crate::phrases::DEFAULT_PHRASES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up next to the working directory
pub const LOCAL_CONFIG_PATH: &str = "config/menu.json";

const APP_DIR: &str = "starfield-menu";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Frames per second the application loop paces itself to
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Menu".to_string(),
            width: 500,
            height: 720,
            target_fps: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub count: usize,
    /// Pixels per tick
    pub speed: f32,
    /// Edge length of the drawn star square
    pub size: u32,
}

impl Default for StarConfig {
    fn default() -> Self {
        StarConfig {
            count: 8,
            speed: 1.0,
            size: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub title_y: i32,
    pub prompt_y: i32,
    pub menu_y: i32,
    pub item_spacing: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            title_y: 200,
            prompt_y: 300,
            menu_y: 200,
            item_spacing: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: Rgb,
    pub text: Rgb,
    pub selected: Rgb,
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig {
            background: Rgb::RED,
            text: Rgb::YELLOW,
            selected: Rgb::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub font: PathBuf,
    pub font_size: u16,
    pub star_image: PathBuf,
    /// Optional; the title text is drawn when it is missing
    pub title_image: Option<PathBuf>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            font: PathBuf::from("imgs/NotoSansTC-Regular.ttf"),
            font_size: 24,
            star_image: PathBuf::from("imgs/Yellow-Star.png"),
            title_image: Some(PathBuf::from("imgs/Title.png")),
        }
    }
}

/// Everything the front-end can be tuned with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub window: WindowConfig,
    pub stars: StarConfig,
    pub layout: LayoutConfig,
    pub colors: ColorConfig,
    pub assets: AssetConfig,
    pub title_text: String,
    pub prompt_text: String,
    /// Prefix drawn in front of the selected item
    pub selected_marker: String,
    pub phrases: Vec<String>,
    pub controls_info: Vec<String>,
    pub info_duration_ms: u64,
    pub main_menu: Vec<MenuItem>,
    pub settings_menu: Vec<MenuItem>,
    /// Fixed seed for the shared random source; random when unset
    pub rng_seed: Option<u64>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let catalog = MenuCatalog::default();
        MenuConfig {
            window: WindowConfig::default(),
            stars: StarConfig::default(),
            layout: LayoutConfig::default(),
            colors: ColorConfig::default(),
            assets: AssetConfig::default(),
            title_text: "Chud Bullet Hell".to_string(),
            prompt_text: "Press Enter to Start".to_string(),
            selected_marker: "--> ".to_string(),
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
            controls_info: vec![
                "Up / Down: move".to_string(),
                "Enter: select".to_string(),
                "Close window: quit".to_string(),
            ],
            info_duration_ms: catalog.info_duration.as_millis() as u64,
            main_menu: catalog.main_menu,
            settings_menu: catalog.settings_menu,
            rng_seed: None,
        }
    }
}

impl MenuConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: MenuConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the first config found, or the defaults
    ///
    /// An explicit path must exist. Otherwise the user config directory is
    /// tried, then [`LOCAL_CONFIG_PATH`]. Returns the file that was used.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load_from_file(path)?, Some(path.to_path_buf())));
        }

        match Self::candidate_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Ok((Self::load_from_file(&path)?, Some(path))),
            None => Ok((MenuConfig::default(), None)),
        }
    }

    /// Implicit lookup locations, most specific first
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(APP_DIR).join("menu.json"));
        }
        paths.push(PathBuf::from(LOCAL_CONFIG_PATH));
        paths
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window must not be empty ({}x{})",
                self.window.width, self.window.height
            )));
        }
        if self.window.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be at least 1".to_string()));
        }
        if !(self.stars.speed.is_finite() && self.stars.speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "star speed must be positive, got {}",
                self.stars.speed
            )));
        }
        if self.phrases.is_empty() {
            return Err(ConfigError::Invalid("phrase pool is empty".to_string()));
        }
        if self.main_menu.is_empty() {
            return Err(ConfigError::Invalid("main menu has no items".to_string()));
        }
        if self.settings_menu.is_empty() {
            return Err(ConfigError::Invalid("settings menu has no items".to_string()));
        }
        if !self.settings_menu.iter().any(|item| item.action == MenuAction::GoBack) {
            tracing::warn!("settings menu has no Back item; only closing the window leaves it");
        }
        Ok(())
    }

    pub fn info_duration(&self) -> Duration {
        Duration::from_millis(self.info_duration_ms)
    }

    pub fn catalog(&self) -> MenuCatalog {
        MenuCatalog {
            main_menu: self.main_menu.clone(),
            settings_menu: self.settings_menu.clone(),
            info_duration: self.info_duration(),
        }
    }

    /// Time the application loop sleeps per frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.window.target_fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = MenuConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.main_menu.len(), 3);
        assert_eq!(config.settings_menu.len(), 2);
        assert_eq!(config.info_duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(LOCAL_CONFIG_PATH);
        let config = MenuConfig::load_from_file(path).unwrap();
        assert_eq!(config, MenuConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "stars": {{ "count": 12 }}, "title_text": "Hello" }}"#).unwrap();

        let config = MenuConfig::load_from_file(file.path()).unwrap();

        assert_eq!(config.stars.count, 12);
        assert_eq!(config.stars.speed, 1.0);
        assert_eq!(config.title_text, "Hello");
        assert_eq!(config.window.width, 500);
    }

    #[test]
    fn test_custom_menu_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "main_menu": [
                {{ "label": "Go", "action": "StartGame" }},
                {{ "label": "Options", "action": "OpenSettings" }},
                {{ "label": "Credits", "action": "OpenControlsInfo" }},
                {{ "label": "Leave", "action": "Quit" }}
            ] }}"#
        )
        .unwrap();

        let config = MenuConfig::load_from_file(file.path()).unwrap();
        let catalog = config.catalog();

        assert_eq!(catalog.main_menu.len(), 4);
        assert_eq!(catalog.main_menu[3], MenuItem::new("Leave", MenuAction::Quit));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = MenuConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_explicit_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");

        let result = MenuConfig::load(Some(missing.as_path()));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = MenuConfig::default();
        config.stars.speed = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = MenuConfig::default();
        config.window.width = 0;
        assert!(config.validate().is_err());

        let mut config = MenuConfig::default();
        config.phrases.clear();
        assert!(config.validate().is_err());

        let mut config = MenuConfig::default();
        config.settings_menu.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_frame_duration() {
        let config = MenuConfig::default();
        assert_eq!(config.frame_duration(), Duration::from_secs(1) / 60);
    }
}
