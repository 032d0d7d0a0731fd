use registrar_db::connection::DbTarget;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file, created on first run
    #[serde(default = "default_db_path")]
    pub path: PathBuf,

    /// Use a private in-memory database instead of `path`
    #[serde(default)]
    pub in_memory: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            in_memory: false,
        }
    }
}

impl DatabaseConfig {
    pub fn target(&self) -> DbTarget {
        if self.in_memory {
            DbTarget::Memory
        } else {
            DbTarget::File(self.path.clone())
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("student_registration.db")
}
