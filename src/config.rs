use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::element::CategoryStyle;
use crate::render::color::{parse_hex_color, Rgba};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/elements";

/// Settings stored as `settings.json` in the OS config directory
/// (e.g. `~/.config/periodic-table/settings.json`). Every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Element listing endpoint; `http(s)://` or `file://`.
    pub endpoint: String,
    /// `None` waits for the server indefinitely.
    pub request_timeout_secs: Option<u64>,
    pub dark_mode: bool,
    /// Edge length of one element cell, in points.
    pub cell_size: f32,
    pub window_size: [f32; 2],
    /// Style tag → CSS hex colour, e.g. `"noble-gas": "#80c0ff"`.
    pub category_colors: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: None,
            dark_mode: false,
            cell_size: 52.0,
            window_size: [1280.0, 800.0],
            category_colors: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads config from the standard OS location, falling back to defaults.
    pub fn load() -> Self {
        match Self::get_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::info!("No config directory available. Using defaults.");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config found at {:?}. Using defaults.", path);
            return Self::default();
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("Error opening config {:?}: {}. Using defaults.", path, e);
                return Self::default();
            }
        };

        match serde_json::from_reader::<_, Config>(BufReader::new(file)) {
            Ok(cfg) => {
                log::info!("Config loaded from {:?}", path);
                cfg.sanitized()
            }
            Err(e) => {
                log::warn!("Error parsing config {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Writes the config back to the standard OS location.
    pub fn save(&self) -> io::Result<PathBuf> {
        let path = Self::get_path()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.cell_size.is_finite() && self.cell_size >= 16.0) {
            log::warn!("cell_size {} too small; using {}", self.cell_size, defaults.cell_size);
            self.cell_size = defaults.cell_size;
        }
        if self.window_size.iter().any(|v| !v.is_finite() || *v < 200.0) {
            self.window_size = defaults.window_size;
        }
        self.category_colors.retain(|tag, hex| {
            let known = CategoryStyle::from_tag(tag).is_some();
            let valid = parse_hex_color(hex).is_some();
            if !(known && valid) {
                log::warn!("Ignoring category colour {:?} = {:?}", tag, hex);
            }
            known && valid
        });
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Fill colour for a category, honouring overrides.
    pub fn category_color(&self, style: CategoryStyle) -> Rgba {
        self.category_colors
            .get(style.tag())
            .and_then(|hex| parse_hex_color(hex))
            .unwrap_or_else(|| style.default_fill())
    }

    fn get_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "periodic-table", "periodic-table")
            .map(|proj| proj.config_dir().join("settings.json"))
    }
}
