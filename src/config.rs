use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GhxConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// [api] section: where and how requests are sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Page size used when exhausting the repository listing
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows per page in the repository and file lists
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_true")]
    pub line_numbers: bool,
    #[serde(default = "default_tab_width")]
    pub tab_width: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "https://api.github.com".into()
}

fn default_per_page() -> u32 {
    100
}

fn default_user_agent() -> String {
    concat!("ghx/", env!("CARGO_PKG_VERSION")).into()
}

fn default_page_size() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_tab_width() -> u8 {
    4
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            per_page: default_per_page(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            line_numbers: true,
            tab_width: default_tab_width(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Location of the global config file (`~/.config/ghx/config.toml` on Linux).
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ghx").join("config.toml"))
}

/// Load config by merging the global file with an optional explicit file.
/// Priority: `--config` file > global config > built-in defaults.
/// Merging is deep: individual keys within a section override independently.
pub fn load_config(explicit: Option<&Path>) -> GhxConfig {
    let global_table = global_config_path().and_then(|p| read_table(&p));
    let explicit_table = explicit.and_then(|p| {
        let table = read_table(p);
        if table.is_none() {
            tracing::warn!(path = %p.display(), "config file unreadable, ignoring");
        }
        table
    });
    merge_tables(global_table, explicit_table)
}

fn read_table(path: &Path) -> Option<toml::Table> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|c| toml::from_str::<toml::Table>(&c).ok())
}

fn merge_tables(base: Option<toml::Table>, overlay: Option<toml::Table>) -> GhxConfig {
    let merged = match (base, overlay) {
        (Some(mut base), Some(overlay)) => {
            deep_merge(&mut base, overlay);
            toml::Value::Table(base)
        }
        (Some(base), None) => toml::Value::Table(base),
        (None, Some(overlay)) => toml::Value::Table(overlay),
        (None, None) => return GhxConfig::default(),
    };

    match merged.try_into() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid config, using defaults");
            GhxConfig::default()
        }
    }
}

/// Recursively merge `overlay` into `base`. Overlay values win; nested tables
/// are merged recursively.
fn deep_merge(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base_table)), toml::Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
