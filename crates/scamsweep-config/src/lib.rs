use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use scamsweep_core::LockerStyle;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "scamsweep";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT_DIR: &str = "clean-data";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub locker_style: LockerStyle,
    pub csv_sources: Vec<CsvSourceConfig>,
    pub db_sources: Vec<DbSourceConfig>,
}

/// A CSV export whose rows carry a phone number column and a label column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSourceConfig {
    pub name: String,
    pub file: String,
    pub number_field: String,
    pub type_field: String,
}

/// A SQLite table read as `SELECT number_field, type_field FROM table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSourceConfig {
    pub name: String,
    pub db_file: String,
    pub table: String,
    pub number_field: String,
    pub type_field: String,
    pub output_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            locker_style: LockerStyle::default(),
            csv_sources: default_csv_sources(),
            db_sources: default_db_sources(),
        }
    }
}

impl AppConfig {
    pub fn csv_source(&self, name: &str) -> Option<&CsvSourceConfig> {
        self.csv_sources.iter().find(|source| source.name == name)
    }

    pub fn db_source(&self, name: &str) -> Option<&DbSourceConfig> {
        self.db_sources.iter().find(|source| source.name == name)
    }

    pub fn csv_source_names(&self) -> Vec<&str> {
        self.csv_sources.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn db_source_names(&self) -> Vec<&str> {
        self.db_sources.iter().map(|s| s.name.as_str()).collect()
    }
}

fn csv_source(file: &str, number_field: &str, type_field: &str) -> CsvSourceConfig {
    CsvSourceConfig {
        name: file.to_string(),
        file: file.to_string(),
        number_field: number_field.to_string(),
        type_field: type_field.to_string(),
    }
}

fn db_source(
    name: &str,
    db_file: &str,
    table: &str,
    number_field: &str,
    type_field: &str,
    output_file: &str,
) -> DbSourceConfig {
    DbSourceConfig {
        name: name.to_string(),
        db_file: db_file.to_string(),
        table: table.to_string(),
        number_field: number_field.to_string(),
        type_field: type_field.to_string(),
        output_file: output_file.to_string(),
    }
}

pub fn default_csv_sources() -> Vec<CsvSourceConfig> {
    vec![
        csv_source("sola.csv", "number", "fullName"),
        csv_source("clean_call.csv", "phone_number", "name"),
        csv_source("ntrust_part1.csv", "dial_id", "type_tag"),
        csv_source("ntrust_part2.csv", "dial_id", "type_tag"),
        csv_source("ntrust_part3.csv", "dial_id", "type_tag"),
    ]
}

pub fn default_db_sources() -> Vec<DbSourceConfig> {
    vec![
        db_source(
            "sorac",
            "sorac.db",
            "User",
            "number",
            "fullName",
            "sorac_clean.csv",
        ),
        db_source(
            "ntrust",
            "ntrust.db",
            "phone_number",
            "dial_id",
            "type_tag",
            "ntrust_clean.csv",
        ),
        db_source(
            "cleancall",
            "cleancall.db",
            "identifications",
            "phone_number",
            "name",
            "cleancall_clean.csv",
        ),
    ]
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid {0} value: path cannot be empty")]
    InvalidDir(&'static str),
    #[error("invalid source name: {0:?}")]
    InvalidSourceName(String),
    #[error("duplicate source name: {0}")]
    DuplicateSourceName(String),
    #[error("source {name} has empty or missing field {field}")]
    InvalidSourceField { name: String, field: &'static str },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    locker_type: Option<LockerStyle>,
    csv_sources: Option<Vec<CsvSourceFile>>,
    db_sources: Option<Vec<DbSourceFile>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CsvSourceFile {
    name: Option<String>,
    file: Option<String>,
    number_field: Option<String>,
    type_field: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DbSourceFile {
    name: Option<String>,
    db_file: Option<String>,
    table: Option<String>,
    number_field: Option<String>,
    type_field: Option<String>,
    output_file: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(dir) = parsed.data_dir {
        config.data_dir = non_empty_dir(dir, "data_dir")?;
    }
    if let Some(dir) = parsed.output_dir {
        config.output_dir = non_empty_dir(dir, "output_dir")?;
    }
    if let Some(style) = parsed.locker_type {
        config.locker_style = style;
    }

    if let Some(sources) = parsed.csv_sources {
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(sources.len());
        for source in sources {
            let name = source_name(source.name, &mut seen)?;
            out.push(CsvSourceConfig {
                file: required_field(&name, source.file, "file")?,
                number_field: required_field(&name, source.number_field, "number_field")?,
                type_field: required_field(&name, source.type_field, "type_field")?,
                name,
            });
        }
        config.csv_sources = out;
    }

    if let Some(sources) = parsed.db_sources {
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(sources.len());
        for source in sources {
            let name = source_name(source.name, &mut seen)?;
            out.push(DbSourceConfig {
                db_file: required_field(&name, source.db_file, "db_file")?,
                table: required_field(&name, source.table, "table")?,
                number_field: required_field(&name, source.number_field, "number_field")?,
                type_field: required_field(&name, source.type_field, "type_field")?,
                output_file: required_field(&name, source.output_file, "output_file")?,
                name,
            });
        }
        config.db_sources = out;
    }

    Ok(config)
}

fn non_empty_dir(dir: PathBuf, key: &'static str) -> Result<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(ConfigError::InvalidDir(key));
    }
    Ok(dir)
}

fn source_name(raw: Option<String>, seen: &mut HashSet<String>) -> Result<String> {
    let name = raw.unwrap_or_default().trim().to_string();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidSourceName(name));
    }
    if !seen.insert(name.clone()) {
        return Err(ConfigError::DuplicateSourceName(name));
    }
    Ok(name)
}

fn required_field(name: &str, value: Option<String>, field: &'static str) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::InvalidSourceField {
            name: name.to_string(),
            field,
        }),
    }
}
