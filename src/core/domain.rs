use std::env;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

pub const DATA_FILE_ENV: &str = "LMS_CATALOG_FILE";
pub const DEFAULT_DATA_FILE: &str = "data/catalog.json";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
}

impl Configuration {
    pub fn new(data_file: &Path) -> Self {
        Configuration {
            data_file: data_file.to_path_buf(),
        }
    }

    pub fn from_env() -> Self {
        match env::var(DATA_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Configuration::new(Path::new(path.trim())),
            _ => Configuration::default(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(Path::new(DEFAULT_DATA_FILE))
    }
}
