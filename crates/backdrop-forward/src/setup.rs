//! Config loading and default paths.

use std::path::PathBuf;

use tracing::info;

use crate::config::Config;
use crate::error::ForwardError;

/// Load configuration from the given path, or the default location.
pub fn load_config(path: Option<&str>) -> Result<Config, ForwardError> {
    let config_path = match path {
        Some(p) => PathBuf::from(p),
        None => default_config_path(),
    };

    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| ForwardError::Config(format!("failed to read config: {e}")))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ForwardError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        info!(path = %config_path.display(), "loaded config");
        Ok(config)
    } else if path.is_some() {
        Err(ForwardError::Config(format!(
            "config file not found: {}",
            config_path.display()
        )))
    } else {
        info!("no config file found, using defaults");
        Ok(Config::default())
    }
}

/// Get the default config directory path.
pub fn config_dir() -> PathBuf {
    config_root(dirs::config_dir(), dirs::home_dir()).join("backdrop")
}

/// Platform config directory, else `~/.config` resolved against the real
/// home directory, else the working directory.
fn config_root(platform: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    platform
        .or_else(|| home.map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn platform_config_dir_preferred() {
        let root = config_root(Some(PathBuf::from("/etc/xdg")), Some(PathBuf::from("/home/u")));
        assert_eq!(root, Path::new("/etc/xdg"));
    }

    #[test]
    fn home_fallback_is_expanded() {
        let root = config_root(None, Some(PathBuf::from("/home/u")));
        assert_eq!(root, Path::new("/home/u/.config"));
    }

    #[test]
    fn working_directory_as_last_resort() {
        assert_eq!(config_root(None, None), Path::new("."));
        assert!(!config_dir().starts_with("~"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config(Some("/nonexistent/backdrop/config.toml")).unwrap_err();
        assert!(matches!(err, ForwardError::Config(_)));
    }
}
