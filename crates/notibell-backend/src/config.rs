use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use notibell_bridge::config::Config;
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};

/// Errors that can occur while loading or resolving application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration directory. This usually
    /// occurs when required environment variables are missing (e.g., `$HOME`
    /// on Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing the configuration file.
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid TOML or does not match the expected structure.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the configuration to TOML (e.g., when writing defaults).
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

fn config_file_path() -> Result<PathBuf, ConfigError> {
    match ProjectDirs::from("dev", "notibell", "notibell") {
        Some(path) => Ok(path.config_dir().join("config.toml")),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the application configuration from the user's configuration
/// directory, writing the defaults there first if the file does not exist.
pub async fn load_config() -> Result<Config, ConfigError> {
    let config_path = config_file_path()?;
    log::info!("Loading configuration from {config_path:?}");
    load_config_from(&config_path).await
}

/// Loads the configuration stored at `config_path`. A missing file is
/// created with the default configuration.
pub async fn load_config_from(config_path: &Path) -> Result<Config, ConfigError> {
    if config_path.exists() {
        let contents = read_to_string(config_path).await?;
        let config: Config = toml::from_str(&contents)?;
        return Ok(config);
    }

    let config = Config::default();
    if let Some(parent) = config_path.parent() {
        create_dir_all(parent).await?;
    }

    let contents = toml::to_string_pretty(&config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).await.unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = load_config_from(&path).await.unwrap();
        assert_eq!(reloaded, config);
    }

    #[tokio::test]
    async fn reads_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[channel]\npage_url = \"https://panel.example.edu/admin/\"\nreconnect_delay_ms = 2500\n",
        )
        .unwrap();

        let config = load_config_from(&path).await.unwrap();
        assert_eq!(config.channel.page_url, "https://panel.example.edu/admin/");
        assert_eq!(config.channel.reconnect_delay_ms, 2500);
        assert_eq!(config.channel.path, "/ws/notifications/");
        assert_eq!(config.toast.dwell_ms, 5_000);
    }

    #[tokio::test]
    async fn rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "channel = [").unwrap();

        let error = load_config_from(&path).await.unwrap_err();
        assert!(matches!(error, ConfigError::DeserializeError(_)));
    }
}
