//! Claude `--output-format stream-json` records.
//!
//! Best-effort classification of decoded lines; nothing here fails on unexpected shapes.

mod record;
pub mod value;

pub use record::{Block, Record, ASSISTANT, RESULT, STREAM_EVENT, TEXT_DELTA};
