//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/devcat/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use tokio::process::Command;

use devcat_catalog::{Regions, SortOrder};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file location.
const CONFIG_ENV: &str = "DEVCAT_CONFIG";

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# devcat - development catalog CLI configuration

# Config schema version (do not modify)
version = 1

# Catalog file (can also use --catalog or the DEVCAT_CATALOG env var)
# catalog = "/path/to/catalog.json"

# Region identifiers with special meaning
[regions]
# primary = "region-a"             # ready developments here form the ready-now section
# international = "international" # faceted by country instead of city

# Output preferences
[output]
# color = true              # Enable colors (respects --no-color)

# Filter defaults
[filters]
# default_sort = "relevant" # "relevant", "price-asc", "price-desc", "newest"
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Catalog file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Special region identifiers.
    #[serde(default)]
    pub regions: Regions,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Filter defaults.
    #[serde(default)]
    pub filters: FiltersConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            catalog: None,
            regions: Regions::default(),
            output: OutputConfig::default(),
            filters: FiltersConfig::default(),
        }
    }
}

impl Config {
    /// Returns the configured default sort order.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Filter` if the configured value is not a known sort order.
    pub fn default_sort(&self) -> Result<SortOrder> {
        match &self.filters.default_sort {
            Some(value) => Ok(value.parse()?),
            None => Ok(SortOrder::default()),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Filter defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FiltersConfig {
    /// Sort order applied when the command line does not choose one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/devcat/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("devcat"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("devcat"))
        .ok_or_else(|| {
            CommandError::Config("Could not determine config directory".to_string())
        })
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
/// Returns the config as-is if already at current version.
fn migrate_config(mut config: Config) -> Result<Config> {
    // version 1 is the initial schema; future migrations chain here:
    // if config.version < 2 { ...; config.version = 2; }
    if config.version < CONFIG_VERSION {
        tracing::debug!(from = config.version, to = CONFIG_VERSION, "migrating config");
    }
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {}", e)))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        println!("Settings:");
        match &config.catalog {
            Some(catalog) => println!("  catalog: {}", catalog.display()),
            None => println!("  catalog: (default data directory)"),
        }

        println!("\n[regions]");
        println!("  primary: {}", config.regions.primary);
        println!("  international: {}", config.regions.international);

        println!("\n[output]");
        if let Some(color) = config.output.color {
            println!("  color: {}", color);
        }

        println!("\n[filters]");
        if let Some(ref sort) = config.filters.default_sort {
            println!("  default_sort: {}", sort);
        }

        if !path.exists() {
            println!("\n(No config file exists. Run 'devcat config edit' to create one.)");
        }
    }

    Ok(())
}

/// Executes the config edit command.
pub async fn execute_edit(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {}", e)))?;
    }

    if !path.exists() {
        fs::write(&path, DEFAULT_CONFIG)
            .map_err(|e| CommandError::Config(format!("Failed to create config file: {}", e)))?;

        if !ctx.quiet && !ctx.json_output {
            eprintln!("Created default config at: {}", path.display());
        }
    }

    let editor = env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| "vi".to_string());

    if ctx.verbose {
        eprintln!("Opening {} with {}", path.display(), editor);
    }

    // async to avoid blocking the tokio runtime
    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .await
        .map_err(|e| CommandError::Config(format!("Failed to open editor '{}': {}", editor, e)))?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": if status.success() { "success" } else { "error" },
            "editor": editor,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        if status.success() {
            println!("Config saved.");
        } else {
            eprintln!("Editor exited with error");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies one `key = value` assignment to a config.
fn set_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let (section, field) = match key.split_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };

    match (section, field) {
        (None, "catalog") => {
            config.catalog = Some(PathBuf::from(value));
        }
        (Some("regions"), "primary") => {
            config.regions.primary = non_empty(key, value)?;
        }
        (Some("regions"), "international") => {
            config.regions.international = non_empty(key, value)?;
        }
        (Some("output"), "color") => {
            config.output.color = Some(parse_bool(value)?);
        }
        (Some("filters"), "default_sort") => {
            if value.parse::<SortOrder>().is_err() {
                let valid: Vec<&str> = SortOrder::ALL.iter().map(|s| s.as_str()).collect();
                return Err(CommandError::Config(format!(
                    "Invalid default_sort value '{}'. Valid values: {}",
                    value,
                    valid.join(", ")
                )));
            }
            config.filters.default_sort = Some(value.to_string());
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: catalog, regions.primary, regions.international, output.color, filters.default_sort",
                key
            )));
        }
    }

    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    set_value(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommandError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Points `DEVCAT_CONFIG` at `path` for the duration of `f`.
    fn with_config_env<T>(path: &std::path::Path, f: impl FnOnce() -> T) -> T {
        let original = env::var(CONFIG_ENV).ok();
        env::set_var(CONFIG_ENV, path);
        let result = f();
        match original {
            Some(val) => env::set_var(CONFIG_ENV, val),
            None => env::remove_var(CONFIG_ENV),
        }
        result
    }

    #[test]
    fn test_parse_bool_values() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("YES").unwrap());
        assert!(parse_bool("on").unwrap());
        assert!(!parse_bool("False").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("maybe").is_err());
        assert!(parse_bool("").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.catalog.is_none());
        assert_eq!(config.regions, Regions::default());
        assert!(config.output.color.is_none());
        assert_eq!(config.default_sort().unwrap(), SortOrder::Relevant);
    }

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.regions, Regions::default());
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
version = 1
catalog = "/data/catalog.json"

[regions]
primary = "litoral"

[output]
color = false

[filters]
default_sort = "price-asc"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/data/catalog.json")));
        assert_eq!(config.regions.primary, "litoral");
        // unspecified region keeps its default
        assert_eq!(config.regions.international, "international");
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.default_sort().unwrap(), SortOrder::PriceAsc);
    }

    #[test]
    fn test_config_deserialization_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.catalog.is_none());
        assert!(config.filters.default_sort.is_none());
    }

    #[test]
    fn test_invalid_default_sort_is_a_filter_error() {
        let config: Config = toml::from_str("[filters]\ndefault_sort = \"cheapest\"").unwrap();
        assert!(matches!(config.default_sort(), Err(CommandError::Filter(_))));
    }

    #[test]
    fn test_config_serialization_roundtrip_keeps_sections() {
        let mut config = Config::default();
        config.regions.primary = "litoral".to_string();
        config.filters.default_sort = Some("newest".to_string());

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 1"));
        assert!(toml_str.contains("[regions]"));
        assert!(toml_str.contains("primary = \"litoral\""));
        assert!(toml_str.contains("default_sort = \"newest\""));
    }

    #[test]
    fn test_migrate_config_sets_current_version() {
        let config = Config {
            version: 0,
            catalog: Some(PathBuf::from("/data/catalog.json")),
            ..Config::default()
        };

        let migrated = migrate_config(config).unwrap();
        assert_eq!(migrated.version, CONFIG_VERSION);
        assert_eq!(migrated.catalog, Some(PathBuf::from("/data/catalog.json")));
    }

    #[test]
    fn test_set_value_known_keys() {
        let mut config = Config::default();
        set_value(&mut config, "catalog", "/data/catalog.json").unwrap();
        set_value(&mut config, "regions.primary", "litoral").unwrap();
        set_value(&mut config, "regions.international", "exterior").unwrap();
        set_value(&mut config, "output.color", "off").unwrap();
        set_value(&mut config, "filters.default_sort", "price-desc").unwrap();

        assert_eq!(config.catalog, Some(PathBuf::from("/data/catalog.json")));
        assert_eq!(config.regions, Regions::new("litoral", "exterior"));
        assert_eq!(config.output.color, Some(false));
        assert_eq!(config.default_sort().unwrap(), SortOrder::PriceDesc);
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = Config::default();
        assert!(set_value(&mut config, "filters.default_sort", "cheapest").is_err());
        assert!(set_value(&mut config, "regions.primary", "  ").is_err());
        assert!(set_value(&mut config, "token", "abc").is_err());
        assert!(config.filters.default_sort.is_none());
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");

        let resolved = with_config_env(&path, get_config_path).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    #[serial]
    fn test_load_config_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let config = with_config_env(&path, load_config).unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.catalog.is_none());
    }

    #[test]
    #[serial]
    fn test_load_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let result = with_config_env(&path, load_config);
        assert!(matches!(result, Err(CommandError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_set_then_load_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let ctx = CommandContext {
            json_output: false,
            use_colors: false,
            quiet: true,
            verbose: false,
            catalog: None,
        };
        let opts = ConfigSetOptions {
            key: "regions.primary".to_string(),
            value: "litoral".to_string(),
        };

        let config = with_config_env(&path, || {
            execute_set(&ctx, &opts)?;
            load_config()
        })
        .unwrap();

        assert!(path.exists());
        assert_eq!(config.regions.primary, "litoral");
    }
}
