pub const DEFAULT_TOOL_INPUT_MAX: usize = 800;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyConfig {
    /// Max characters shown for a serialized tool input; longer inputs end in `…`.
    pub tool_input_max: usize,
    pub logging: LoggingConfig,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            tool_input_max: DEFAULT_TOOL_INPUT_MAX,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub enabled: bool,

    /// EnvFilter string, e.g. "warn" or "stream_pretty_core=debug".
    /// Logs go to stderr only; stdout is reserved for rendered output.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
