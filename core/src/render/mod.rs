mod printer;

pub use printer::{json_compact, truncate, Printer, TRUNCATION_MARKER};
