use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_EXTENSIONS_DIR: &str = "extensions";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FORMAT: &str = "compact";

// ─── ExtensionsConfig ────────────────────────────────────────────────────────

/// Extension discovery configuration (`[extensions]` in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtensionsConfig {
    /// Directory scanned for extension packs. Default: `"extensions"`,
    /// relative to the shell's data directory.
    pub dir: PathBuf,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_EXTENSIONS_DIR),
        }
    }
}

// ─── LogConfig ───────────────────────────────────────────────────────────────

/// Logging configuration (`[log]` in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log filter directive (EnvFilter syntax). Default: `"info"`.
    pub level: String,
    /// Output format: `"compact"` or `"json"`. Default: `"compact"`.
    pub format: String,
    /// Log file path. None = stdout only.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: DEFAULT_LOG_FORMAT.to_string(),
            file: None,
        }
    }
}

// ─── ShellConfig ─────────────────────────────────────────────────────────────

/// Top-level shell configuration, read from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    pub extensions: ExtensionsConfig,
    pub log: LogConfig,
}

impl ShellConfig {
    /// Load `config.toml` from `path`, falling back to defaults if the file
    /// is absent or malformed. A malformed file is logged, never fatal.
    pub fn load_or_default(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str::<ShellConfig>(&contents) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.extensions.dir, PathBuf::from("extensions"));
        assert_eq!(cfg.log.level, "info");
        assert_eq!(cfg.log.format, "compact");
        assert!(cfg.log.file.is_none());
    }

    #[test]
    fn partial_tables_fill_with_defaults() {
        let cfg: ShellConfig = toml::from_str(
            r#"
            [extensions]
            dir = "/opt/aviary/extensions"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.extensions.dir, PathBuf::from("/opt/aviary/extensions"));
        assert_eq!(cfg.log.level, "debug");
        assert_eq!(cfg.log.format, "compact");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = ShellConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(cfg.log.level, "info");
    }
}
