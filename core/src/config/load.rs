use super::types::PrettyConfig;
use crate::error::ConfigError;

pub const ENV_TOOL_INPUT_MAX: &str = "CLAUDE_PRETTY_TOOL_INPUT_MAX";
pub const ENV_LOG: &str = "STREAM_PRETTY_LOG";
pub const ENV_RUST_LOG: &str = "RUST_LOG";

pub fn load_default() -> Result<PrettyConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Resolves configuration through `lookup` (normally the process environment).
///
/// A set-but-unparsable tool input limit is an error rather than a silent default.
pub fn from_lookup<F>(lookup: F) -> Result<PrettyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = PrettyConfig::default();

    if let Some(raw) = lookup(ENV_TOOL_INPUT_MAX) {
        cfg.tool_input_max = parse_tool_input_max(&raw)?;
    }

    let level = lookup(ENV_RUST_LOG)
        .filter(|v| !v.trim().is_empty())
        .or_else(|| lookup(ENV_LOG).filter(|v| !v.trim().is_empty()));
    if let Some(level) = level {
        let level = level.trim().to_string();
        cfg.logging.enabled = !level.eq_ignore_ascii_case("off");
        cfg.logging.level = level;
    }

    Ok(cfg)
}

pub fn parse_tool_input_max(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidToolInputMax {
            value: raw.to_string(),
            reason: e.to_string(),
        })
}
