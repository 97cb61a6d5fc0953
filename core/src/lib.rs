//! Pretty-printer for assistant `stream-json` event logs.
//!
//! [`Dispatcher`] reads newline-delimited JSON records, classifies them with
//! [`stream_json::Record`], and drives a [`Printer`] that rebuilds streamed text into
//! whole lines and renders tool calls and results.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod stream_json;

pub use config::PrettyConfig;
pub use dispatch::{render_stream, Dispatcher, RunStats};
pub use error::{ConfigError, PrettyError};
pub use render::Printer;
