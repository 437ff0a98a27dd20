use serde::Deserialize;
use std::fs::File;
use std::io::Read;

/// Configuration loaded from config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub subtitle: SubtitleConfig,
}

/// Subtitle rendering settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubtitleConfig {
    /// Style name stamped on every dialogue line
    pub style: String,
    /// Font used by the generated style
    pub font: String,
    pub font_size: u32,
    pub play_res_x: u32,
    pub play_res_y: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            subtitle: SubtitleConfig::default(),
        }
    }
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        SubtitleConfig {
            style: "Karaoke".to_string(),
            font: "Arial".to_string(),
            font_size: 48,
            play_res_x: 1280,
            play_res_y: 720,
        }
    }
}

/// Load configuration from config.toml
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    match File::open("config.toml") {
        Ok(mut file) => {
            let mut contents = String::new();
            file.read_to_string(&mut contents)?;
            Ok(toml::from_str(&contents)?)
        }
        Err(_) => {
            // If file doesn't exist, return default config
            Ok(Config::default())
        }
    }
}

/// Get the subtitle settings, falling back to defaults
pub fn get_subtitle_config() -> SubtitleConfig {
    load_config().unwrap_or_default().subtitle
}
