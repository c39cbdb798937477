use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{AuthConfig, Config, ConfigError};
use crate::persist::atomic_write;

#[must_use]
pub fn config_path() -> PathBuf {
    crate::paths::config_dir().join("config.toml")
}

/// Load `path`; a missing file yields the defaults
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let mut config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if config.auth.max_failed_attempts == 0 {
        tracing::warn!(
            path = %path.display(),
            "auth.max_failed_attempts must be positive, using the default"
        );
        config.auth.max_failed_attempts = AuthConfig::default().max_failed_attempts;
    }
    Ok(config)
}

/// Load the config file (explicit path, else the default location) and
/// apply environment overrides
///
/// # Errors
///
/// See [`load_from`].
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match explicit {
        Some(path) => load_from(path)?,
        None => load_from(&config_path())?,
    };
    apply_env_overrides(&mut config, |var| std::env::var(var).ok());
    Ok(config)
}

/// Apply `WORDLE_*` overrides, reading variables through `lookup`
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let value = |var: &str| {
        lookup(var)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
    };

    if let Some(dir) = value("WORDLE_DATA_DIR") {
        config.data_dir = Some(PathBuf::from(dir));
    }

    if let Some(path) = value("WORDLE_WORD_LIST") {
        config.word_list = Some(PathBuf::from(path));
    }

    if let Some(raw) = value("WORDLE_MAX_FAILED_ATTEMPTS") {
        match raw.parse::<u32>() {
            Ok(max) if max > 0 => config.auth.max_failed_attempts = max,
            Ok(_) => tracing::warn!("WORDLE_MAX_FAILED_ATTEMPTS must be positive, ignoring"),
            Err(err) => tracing::warn!("invalid WORDLE_MAX_FAILED_ATTEMPTS, ignoring: {err}"),
        }
    }
}

/// # Errors
///
/// Returns `ConfigError` if rendering or the atomic write fails.
pub fn write_config(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config)?;
    atomic_write(path, contents.as_bytes()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.auth.max_failed_attempts, 5);
        assert_eq!(config.auth.lockout_secs, 300);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "word_list = \"/tmp/words.txt\"\n[auth]\nlockout_secs = 30\n").unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.word_list, Some(PathBuf::from("/tmp/words.txt")));
        assert_eq!(config.auth.lockout_secs, 30);
        assert_eq!(config.auth.max_failed_attempts, 5);
        assert!(config.logging.stderr);
    }

    #[test]
    fn zero_max_failed_attempts_in_file_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[auth]\nmax_failed_attempts = 0\nlockout_secs = 10\n").unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.auth.max_failed_attempts, 5);
        assert_eq!(config.auth.lockout_secs, 10);
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[auth\n").unwrap();

        assert!(matches!(load_from(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.data_dir = Some(PathBuf::from("/var/lib/wordle"));
        config.logging.level = Some("debug".into());
        config.auth.max_failed_attempts = 9;

        write_config(&path, &config).unwrap();
        assert_eq!(load_from(&path).unwrap(), config);
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            env(&[
                ("WORDLE_DATA_DIR", "/data"),
                ("WORDLE_WORD_LIST", " /words.txt "),
                ("WORDLE_MAX_FAILED_ATTEMPTS", "3"),
            ]),
        );
        assert_eq!(config.data_dir(), PathBuf::from("/data"));
        assert_eq!(config.word_list, Some(PathBuf::from("/words.txt")));
        assert_eq!(config.auth.max_failed_attempts, 3);
    }

    #[test]
    fn invalid_env_values_ignored() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            env(&[
                ("WORDLE_DATA_DIR", "   "),
                ("WORDLE_MAX_FAILED_ATTEMPTS", "lots"),
            ]),
        );
        assert_eq!(config.data_dir, None);
        assert_eq!(config.auth.max_failed_attempts, 5);

        apply_env_overrides(&mut config, env(&[("WORDLE_MAX_FAILED_ATTEMPTS", "0")]));
        assert_eq!(config.auth.max_failed_attempts, 5);
    }
}
