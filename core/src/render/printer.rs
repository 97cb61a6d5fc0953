use std::io::{self, Write};

use serde_json::Value;

use crate::config::PrettyConfig;

/// Replaces the cut-off tail of an over-long tool input.
pub const TRUNCATION_MARKER: char = '…';

/// Compact JSON (source key order, no extra whitespace), capped at `max_chars`.
pub fn json_compact(v: &Value, max_chars: usize) -> String {
    let s = serde_json::to_string(v).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "tool input serialization failed, using debug form");
        format!("{v:?}")
    });
    truncate(&s, max_chars)
}

/// Caps `s` at `max_chars` characters; when cut, the last kept slot holds the marker.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let Some((cut, _)) = s.char_indices().nth(max_chars) else {
        return s.to_string();
    };
    let keep = match max_chars.checked_sub(1) {
        Some(n) => s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(cut),
        None => 0,
    };
    let mut out = String::with_capacity(keep + TRUNCATION_MARKER.len_utf8());
    out.push_str(&s[..keep]);
    out.push(TRUNCATION_MARKER);
    out
}

/// Turns stream-json events into terminal lines.
///
/// Text deltas are stitched into whole lines; discrete events (tool use, final message,
/// result) always flush the partial line first so they never land mid-line. Every write
/// is flushed right away so a pipe or terminal sees output as it arrives.
pub struct Printer<W: Write> {
    out: W,
    buf: String,
    tool_input_max: usize,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, cfg: &PrettyConfig) -> Self {
        Self {
            out,
            buf: String::new(),
            tool_input_max: cfg.tool_input_max,
        }
    }

    /// Text received since the last emitted newline.
    pub fn pending(&self) -> &str {
        &self.buf
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn println(&mut self, s: &str) -> io::Result<()> {
        self.out.write_all(s.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    pub fn on_text_delta(&mut self, fragment: &str) -> io::Result<()> {
        self.buf.push_str(fragment);
        while let Some(pos) = self.buf.find('\n') {
            // `..=pos` takes the newline with the line.
            let line: String = self.buf.drain(..=pos).collect();
            self.out.write_all(line.as_bytes())?;
            self.out.flush()?;
        }
        debug_assert!(!self.buf.contains('\n'));
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = std::mem::take(&mut self.buf);
        self.println(&line)
    }

    pub fn on_tool_use(&mut self, name: &str, input: Option<&Value>, id: Option<&str>) -> io::Result<()> {
        self.flush()?;
        let suffix = id.map(|id| format!(" id={id}")).unwrap_or_default();
        self.println(&format!("\n>>> tool_use {name}{suffix}"))?;
        if let Some(input) = input.filter(|v| !v.is_null()) {
            let rendered = json_compact(input, self.tool_input_max);
            self.println(&rendered)?;
        }
        Ok(())
    }

    /// Non-streamed assistant text, usually a repeat of what the deltas already showed.
    pub fn on_final_message(&mut self, text: &str) -> io::Result<()> {
        self.flush()?;
        if !text.trim().is_empty() {
            self.println(text.trim_end_matches('\n'))?;
        }
        Ok(())
    }

    pub fn on_result(&mut self, ok: bool, text: &str) -> io::Result<()> {
        self.flush()?;
        let status = if ok { "success" } else { "error" };
        self.println(&format!("\n=== {status} ==="))?;
        if !text.trim().is_empty() {
            self.println(text.trim_end_matches('\n'))?;
        }
        Ok(())
    }

    /// Writes a line verbatim, after whatever partial line was pending.
    pub fn passthrough(&mut self, line: &str) -> io::Result<()> {
        self.flush()?;
        self.println(line)
    }
}
