use std::{fs, io, path::Path};

use log::info;
use serde::Deserialize;

use crate::{error::ZError, ZResult};

pub const CONFIG_PATH: &str = "assets/config.ron";

/// Compiled-in settings. Every field can be overridden from `assets/config.ron`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,
    pub frames_per_second: u32,

    /// Relative to the assets folder.
    pub background_path: String,
    pub font_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Screen Stack Intro".to_string(),
            window_width: 800,
            window_height: 600,
            frames_per_second: 30,
            background_path: "background.png".to_string(),
            font_path: "OpenSans-Regular.ttf".to_string(),
        }
    }
}

impl Config {
    pub fn from_ron_str(s: &str, path: &Path) -> ZResult<Self> {
        let config: Config =
            ron::de::from_str(s).map_err(|e| ZError::from_ron_de_error(e, path.into()))?;
        config.validate(path)?;
        Ok(config)
    }

    /// A missing file isn't an error: the defaults are used instead.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ZResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => {
                info!("Loading config from '{}'", path.display());
                Self::from_ron_str(&s, path)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No '{}' found, using the default config", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn validate(&self, path: &Path) -> ZResult {
        if self.frames_per_second == 0 {
            return Err(ZError::bad_config(path.into(), "frames_per_second must be > 0"));
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(ZError::bad_config(path.into(), "window size must be positive"));
        }
        Ok(())
    }

    pub fn window_conf(&self) -> mq::window::Conf {
        mq::window::Conf {
            window_title: self.window_title.clone(),
            window_width: self.window_width,
            window_height: self.window_height,
            ..Default::default()
        }
    }
}
