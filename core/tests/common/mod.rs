#![allow(dead_code)]

use stream_pretty_core::{Dispatcher, PrettyConfig, RunStats};

pub fn render_with_limit(input: &str, tool_input_max: usize) -> (String, RunStats) {
    let cfg = PrettyConfig {
        tool_input_max,
        ..PrettyConfig::default()
    };
    let mut dispatcher = Dispatcher::new(Vec::new(), &cfg);
    let stats = dispatcher
        .run(input.as_bytes())
        .expect("rendering into memory cannot fail");
    let out = String::from_utf8(dispatcher.into_inner()).expect("rendered output is utf8");
    (out, stats)
}

pub fn render_str(input: &str) -> (String, RunStats) {
    render_with_limit(input, PrettyConfig::default().tool_input_max)
}

pub fn stream_delta(text: &str) -> String {
    serde_json::json!({
        "type": "stream_event",
        "event": {"type": "content_block_delta", "index": 0, "delta": {"type": "text_delta", "text": text}}
    })
    .to_string()
}
