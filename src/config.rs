use crate::gui::slider::InputMode;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown color '{0}'")]
pub struct ColorParseError(String);

/// Slider color, written as a CSS color name or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct SliderColor(Srgb<u8>);

impl SliderColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    pub fn to_srgba(&self, alpha: f64) -> Srgba<f64> {
        let c: Srgb<f64> = self.0.into_format();
        Srgba::new(c.red, c.green, c.blue, alpha)
    }
}

impl Default for SliderColor {
    fn default() -> Self {
        Self::new(0x80, 0x80, 0x80)
    }
}

impl FromStr for SliderColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        palette::named::from_str(&s.to_ascii_lowercase())
            .or_else(|| s.parse::<Srgb<u8>>().ok())
            .map(Self)
            .ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl fmt::Display for SliderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SliderRecord {
    pub label: String,
    #[serde(default)]
    pub color: SliderColor,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputMode,
    #[serde(default)]
    pub sliders: Vec<SliderRecord>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "dial", "dial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("DIAL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// The expense page shipped with the binary.
pub fn default_config() -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_setup() -> Config {
    if let Err(e) = write_default_config() {
        log::warn!("Could not write default config: {}", e);
    }

    let loaded = match load_config() {
        Ok(c) if !c.sliders.is_empty() => Ok(c),
        Ok(_) => {
            log::info!("No sliders configured, using the default page");
            default_config()
        }
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            default_config()
        }
    };

    loaded.unwrap_or_else(|e| {
        log::error!("Failed to parse built-in config: {}", e);
        Config::default()
    })
}

pub fn write_default_config() -> Result<std::path::PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
        log::info!("Wrote default config to {}", path.display());
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
