use crate::conf::ConfigError;
use crate::conf::types::ReqstatConfig;

/// Rejects values that would make a run meaningless. Stops at the first problem.
pub fn validate_config(config: &ReqstatConfig) -> Result<(), ConfigError> {
    if config.window.step == Some(0) {
        return Err(ConfigError::ZeroStep);
    }

    if config.window.limit == Some(0) {
        return Err(ConfigError::ZeroLimit);
    }

    if let Some(index) = config
        .classifier
        .static_markers
        .iter()
        .position(|m| m.is_empty())
    {
        return Err(ConfigError::EmptyStaticMarker { index });
    }

    Ok(())
}
