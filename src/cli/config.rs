use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::{
    action::links::wowhead_lang_prefix,
    source::{http::HttpDataSource, source_model::DataSource, static_db::StaticDataSource},
};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "action-icons",
    version,
    about = "Resolve combat simulator action ids into names and icons"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: action-icons.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Data source: file or http
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Base URL for the http data source
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Icon database YAML for the file data source
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Append a JSON line per resolved id to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve action ids (e.g. spell-30451-3, item-29035) to names and icons
    Resolve {
        /// Canonical action id, repeatable
        #[arg(long = "id", required = true)]
        ids: Vec<String>,

        /// Raid index of the viewing player, for per-caster names
        #[arg(long)]
        viewer: Option<i32>,

        /// Wowhead language for links (e.g. de, fr)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Replace {SpellID: N} style tokens in log text with display names
    Expand {
        /// Log file to read (default: stdin)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Print the structured JSON key for an action id
    Key {
        /// Canonical action id
        #[arg(long)]
        id: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `action-icons.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_kind")]
    pub kind: String,

    pub endpoint: Option<String>,

    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: "file".to_string(),
            endpoint: None,
            path: "icons.yaml".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub viewer_index: Option<i32>,

    #[serde(default)]
    pub wowhead_lang: String,
}

// Serde default helpers
fn default_kind() -> String { "file".to_string() }
fn default_db_path() -> String { "icons.yaml".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("action-icons.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("ignoring malformed config '{}': {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Source settings after applying CLI overrides to the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSource {
    pub kind: String,
    pub endpoint: Option<String>,
    pub path: String,
}

pub fn resolve_source(cli: &Cli, config: &AppConfig) -> ResolvedSource {
    ResolvedSource {
        kind: cli.source.clone().unwrap_or_else(|| config.source.kind.clone()),
        endpoint: cli.endpoint.clone().or_else(|| config.source.endpoint.clone()),
        path: cli.db.clone().unwrap_or_else(|| config.source.path.clone()),
    }
}

/// Wowhead path prefix: CLI language > config language > English.
pub fn resolve_lang_prefix(cli_lang: Option<&str>, config: &AppConfig) -> String {
    wowhead_lang_prefix(cli_lang.unwrap_or(&config.display.wowhead_lang))
}

pub fn build_data_source(source: &ResolvedSource) -> Result<Arc<dyn DataSource>, Box<dyn std::error::Error>> {
    match source.kind.as_str() {
        "http" => {
            let backend = match source.endpoint.as_deref() {
                Some(endpoint) => HttpDataSource::new(endpoint),
                None => HttpDataSource::default(),
            };
            Ok(Arc::new(backend))
        }
        "file" => Ok(Arc::new(StaticDataSource::load(Path::new(&source.path))?)),
        other => Err(format!("Unknown data source '{}'. Use 'file' or 'http'.", other).into()),
    }
}
