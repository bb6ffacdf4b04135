//! User settings and config-dir paths.
//!
//! Loupe reads a flat `key = value` config file from
//! `$XDG_CONFIG_HOME/loupe/loupe.conf` (or `~/.config/loupe/loupe.conf`).
//! Lines starting with `#` or `//` are comments; inline `#` comments after a
//! value are stripped. Missing or invalid files fall back to defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default backend base address when no config or CLI override is present.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8787";

/// User-tunable settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base address of the search backend serving `/search`, `/suggest`,
    /// and `/click`.
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Return Loupe's config directory, creating it if needed.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| env::var("HOME").ok().map(|h| Path::new(&h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join("loupe");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Return the directory used for log files, creating it if needed.
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Load user settings from the config file.
///
/// Falls back to [`Settings::default`] when the file is missing or a key is
/// absent or malformed.
#[must_use]
pub fn settings() -> Settings {
    let path = config_dir().join("loupe.conf");
    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content),
        Err(_) => Settings::default(),
    }
}

/// Parse settings from config file content.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        match key.as_str() {
            "base_url" | "backend_url" => {
                if !val.is_empty() {
                    out.base_url = val.trim_end_matches('/').to_string();
                }
            }
            _ => {}
        }
    }
    out
}

/// Strip an inline `#` comment from a value, unless it is quoted.
fn strip_inline_comment(val: &str) -> &str {
    let bare = val.trim_matches('"');
    if bare.len() != val.len() {
        return bare;
    }
    val.split('#').next().unwrap_or(val).trim()
}
