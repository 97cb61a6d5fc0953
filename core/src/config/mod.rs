mod load;
mod types;

pub use load::{
    from_lookup, load_default, parse_tool_input_max, ENV_LOG, ENV_RUST_LOG, ENV_TOOL_INPUT_MAX,
};
pub use types::{LoggingConfig, PrettyConfig, DEFAULT_LOG_LEVEL, DEFAULT_TOOL_INPUT_MAX};
