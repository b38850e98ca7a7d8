//! Configuration and color scheme management for termcell.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.termcell/config.toml`
//! - Built-in color schemes choosing the default foreground/background slots
//! - Palette construction (size, scheme and per-slot overrides)
//!
//! # Configuration File
//!
//! ```toml
//! # Color scheme: gray-black, black-white, green-black, white-black
//! color_scheme = "gray-black"
//!
//! # Number of palette slots (8..=65536)
//! palette_size = 256
//!
//! # Optional overrides of the scheme's default slots
//! default_foreground = 7
//! default_background = 0
//!
//! # Row width used by the demo binary
//! cols = 80
//!
//! [[palette]]
//! index = 1
//! color = { r = 255, g = 0, b = 0 }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::term::{CellError, Palette, Rgb, DEFAULT_PALETTE_SIZE};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown color scheme: {0}")]
    UnknownScheme(String),

    #[error("Invalid palette: {0}")]
    Palette(#[from] CellError),

    #[error("Could not determine config path")]
    NoConfigPath,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color scheme name
    pub color_scheme: String,
    /// Number of palette slots
    pub palette_size: usize,
    /// Default foreground slot, overriding the scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_foreground: Option<u16>,
    /// Default background slot, overriding the scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_background: Option<u16>,
    /// Row width used by the demo binary
    pub cols: usize,
    /// Palette slot overrides
    pub palette: Vec<PaletteEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_scheme: "gray-black".to_string(),
            palette_size: DEFAULT_PALETTE_SIZE,
            default_foreground: None,
            default_background: None,
            cols: 80,
            palette: Vec::new(),
        }
    }
}

/// A single palette slot override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub index: usize,
    pub color: Rgb,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::get_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::get_config_path().ok_or(ConfigError::NoConfigPath)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".termcell").join("config.toml"))
    }

    /// Get the color scheme
    pub fn get_color_scheme(&self) -> Result<ColorScheme> {
        ColorScheme::by_name(&self.color_scheme)
            .ok_or_else(|| ConfigError::UnknownScheme(self.color_scheme.clone()))
    }

    /// Build the palette described by this configuration
    pub fn build_palette(&self) -> Result<Palette> {
        let scheme = self.get_color_scheme()?;
        let mut palette = Palette::with_size(self.palette_size)?;

        for entry in &self.palette {
            palette.set(entry.index, entry.color)?;
        }

        let foreground = self.default_foreground.unwrap_or(scheme.foreground);
        let background = self.default_background.unwrap_or(scheme.background);
        palette.set_defaults(foreground, background)?;

        tracing::debug!(
            "Built {}-slot palette, scheme {} ({} on {})",
            palette.len(),
            scheme.name,
            foreground,
            background
        );
        Ok(palette)
    }
}

/// Color scheme: which palette slots supply the default colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub foreground: u16,
    pub background: u16,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::GRAY_BLACK
    }
}

impl ColorScheme {
    pub const GRAY_BLACK: Self = Self {
        name: "gray-black",
        foreground: 7,
        background: 0,
    };

    pub const BLACK_WHITE: Self = Self {
        name: "black-white",
        foreground: 0,
        background: 15,
    };

    pub const GREEN_BLACK: Self = Self {
        name: "green-black",
        foreground: 2,
        background: 0,
    };

    pub const WHITE_BLACK: Self = Self {
        name: "white-black",
        foreground: 15,
        background: 0,
    };

    /// Get scheme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "gray-black" | "gray_black" | "default" => Some(Self::GRAY_BLACK),
            "black-white" | "black_white" => Some(Self::BLACK_WHITE),
            "green-black" | "green_black" => Some(Self::GREEN_BLACK),
            "white-black" | "white_black" => Some(Self::WHITE_BLACK),
            _ => None,
        }
    }

    /// List available schemes
    pub fn list() -> Vec<&'static str> {
        vec!["gray-black", "black-white", "green-black", "white-black"]
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());

        let palette = config.build_palette().unwrap();
        assert_eq!(palette.len(), 256);
        assert_eq!(palette.default_foreground_index(), 7);
        assert_eq!(palette.default_background_index(), 0);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            r#"
            color_scheme = "black-white"
            palette_size = 16
            default_background = 4
            cols = 40

            [[palette]]
            index = 1
            color = { r = 255, g = 0, b = 0 }
            "#,
        )
        .unwrap();

        assert_eq!(config.cols, 40);
        let palette = config.build_palette().unwrap();
        assert_eq!(palette.len(), 16);
        assert_eq!(palette.get(1).unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(palette.default_foreground_index(), 0);
        assert_eq!(palette.default_background_index(), 4);
    }

    #[test]
    fn test_invalid_configs() {
        let config = Config::from_toml_str(r#"color_scheme = "neon""#).unwrap();
        assert!(matches!(
            config.build_palette(),
            Err(ConfigError::UnknownScheme(name)) if name == "neon"
        ));

        let config = Config::from_toml_str("palette_size = 16\ndefault_foreground = 20").unwrap();
        assert!(matches!(
            config.build_palette(),
            Err(ConfigError::Palette(CellError::InvalidPaletteIndex { index: 20, size: 16 }))
        ));

        let config = Config::from_toml_str("palette_size = 2").unwrap();
        assert!(matches!(
            config.build_palette(),
            Err(ConfigError::Palette(CellError::InvalidPaletteSize(2)))
        ));

        assert!(matches!(
            Config::from_toml_str("palette_size = \"big\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_scheme_lookup() {
        for name in ColorScheme::list() {
            assert_eq!(ColorScheme::by_name(name).map(|s| s.name), Some(name));
        }
        assert_eq!(ColorScheme::by_name("Green_Black"), Some(ColorScheme::GREEN_BLACK));
        assert_eq!(ColorScheme::by_name("nope"), None);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = std::env::temp_dir().join(format!("termcell-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.color_scheme = "green-black".to_string();
        config.palette.push(PaletteEntry {
            index: 3,
            color: Rgb::new(1, 2, 3),
        });
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/termcell.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
