//! Config command: show the effective configuration or write a starter file

use crate::config::{self, Config};
use anyhow::{Context, Result, bail};
use std::path::Path;

/// The effective configuration rendered as TOML
///
/// # Errors
///
/// Returns an error if the configuration cannot be rendered.
pub fn render(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("rendering configuration")
}

/// Write `config` to `path`, refusing to replace an existing file
///
/// # Errors
///
/// Returns an error if `path` already exists or the write fails.
pub fn init(path: &Path, config: &Config) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    config::write_config(path, config)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote config file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn init_writes_loadable_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordle").join("config.toml");
        let mut config = Config::default();
        config.word_list = Some(PathBuf::from("/usr/share/words5.txt"));

        init(&path, &config).unwrap();
        assert_eq!(config::load_from(&path).unwrap(), config);

        let err = init(&path, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn render_shows_sections() {
        let text = render(&Config::default()).unwrap();
        assert!(text.contains("[logging]"));
        assert!(text.contains("[auth]"));
        assert!(text.contains("max_failed_attempts = 5"));
    }
}
