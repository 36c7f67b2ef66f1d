use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Option defaults remembered between invocations. Scripts are stored by
/// their lowercase names so they round-trip through clap's value parsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Defaults {
    pub rounds: u32,
    pub digits_from: usize,
    pub digits_to: usize,
    pub question: String,
    pub answer: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            rounds: 10,
            digits_from: 1,
            digits_to: 4,
            question: "hiragana".to_string(),
            answer: "arabic".to_string(),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Defaults;
    fn save(&self, defaults: &Defaults) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "suuji") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("suuji_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Defaults {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(defaults) = serde_json::from_slice::<Defaults>(&bytes) {
                return defaults;
            }
        }
        Defaults::default()
    }

    fn save(&self, defaults: &Defaults) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(defaults).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
