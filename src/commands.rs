//! Administrative commands behind `signup-api init` and `signup-api stats`

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::SqliteUserStore;

/// Outcome of [`init`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub database_path: PathBuf,
    pub config_path: PathBuf,
    /// False when a config file was already present and left untouched
    pub config_written: bool,
}

/// Create the database schema and write `config` to `config_path` unless a file is already there
pub fn init(config: &Config, config_path: &Path) -> Result<InitReport> {
    tracing::info!("Initializing database at {:?}", config.database_path);
    SqliteUserStore::open(&config.database_path)?;

    let config_written = if config_path.exists() {
        tracing::debug!("Keeping existing config at {:?}", config_path);
        false
    } else {
        config.save(config_path)?;
        true
    };

    Ok(InitReport {
        database_path: config.database_path.clone(),
        config_path: config_path.to_path_buf(),
        config_written,
    })
}

/// Store statistics reported by `signup-api stats`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub database_path: PathBuf,
    pub user_count: u64,
}

/// Count stored users; never creates the database
pub async fn stats(config: &Config) -> Result<Stats> {
    if !config.database_path.exists() {
        return Err(Error::NotInitialized(config.database_path.clone()));
    }

    let store = SqliteUserStore::open(&config.database_path)?;
    Ok(Stats {
        database_path: config.database_path.clone(),
        user_count: store.count().await?,
    })
}
