use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const DB_FILE: &str = "sitecost.db";
const LOG_FILE: &str = "sitecost.log";

/// en-US short date, e.g. 01/15/2024.
pub(crate) const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Where things live on disk and how they are shown. Resolved once at startup.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
    pub(crate) log_path: PathBuf,
    pub(crate) date_format: String,
}

impl Config {
    pub(crate) fn resolve() -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("com", "sitecost", "SiteCost")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Self::in_dir(proj_dirs.data_dir())
    }

    pub(crate) fn in_dir(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(Self {
            db_path: data_dir.join(DB_FILE),
            log_path: data_dir.join(LOG_FILE),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_in_dir_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("nested").join("sitecost");
        let config = Config::in_dir(&data_dir).unwrap();

        assert!(data_dir.is_dir());
        assert_eq!(config.db_path, data_dir.join("sitecost.db"));
        assert_eq!(config.log_path, data_dir.join("sitecost.log"));
        assert_eq!(config.date_format, "%m/%d/%Y");
    }

    #[test]
    fn test_in_dir_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(Config::in_dir(tmp.path()).is_ok());
        assert!(Config::in_dir(tmp.path()).is_ok());
    }

    #[test]
    fn test_in_dir_fails_on_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("not-a-dir");
        std::fs::write(&file, "x").unwrap();
        let err = Config::in_dir(&file).unwrap_err();
        assert!(err.to_string().contains("Failed to create data directory"));
    }
}
