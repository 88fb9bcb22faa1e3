use crate::conf::types::ReqstatConfig;
use crate::conf::{ConfigError, validate_config};
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "reqstat.toml";

pub fn load_config(path: &Path) -> Result<ReqstatConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(path, &contents)?;

    //--------------------------------------------------------------------------
    // Semantic validation
    //--------------------------------------------------------------------------
    validate_config(&config)?;

    Ok(config)
}

pub fn parse_config(path: &Path, contents: &str) -> Result<ReqstatConfig, ConfigError> {
    toml::from_str(contents).map_err(|e| ConfigError::parse(path, e))
}

/// Loads `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else the defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ReqstatConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default = Path::new(DEFAULT_CONFIG_FILE);
    if default.is_file() {
        tracing::debug!(path = %default.display(), "using config file from working directory");
        return load_config(default);
    }

    Ok(ReqstatConfig::default())
}
