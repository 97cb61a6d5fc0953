use std::io::{BufRead, Write};

use serde_json::Value;

use crate::config::PrettyConfig;
use crate::error::PrettyError;
use crate::render::Printer;
use crate::stream_json::{Block, Record};

/// Per-run counters, reported at debug level when the input ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines: u64,
    pub rendered: u64,
    pub passthrough: u64,
    pub ignored: u64,
}

/// Reads stream-json lines and routes each record to the [`Printer`].
pub struct Dispatcher<W: Write> {
    printer: Printer<W>,
    stats: RunStats,
}

impl<W: Write> Dispatcher<W> {
    pub fn new(out: W, cfg: &PrettyConfig) -> Self {
        Self {
            printer: Printer::new(out, cfg),
            stats: RunStats::default(),
        }
    }

    pub fn printer(&self) -> &Printer<W> {
        &self.printer
    }

    pub fn into_inner(self) -> W {
        self.printer.into_inner()
    }

    /// Handles one input line. Blank lines are skipped; lines that are not JSON are
    /// echoed verbatim.
    pub fn handle_line(&mut self, raw: &str) -> Result<(), PrettyError> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }
        self.stats.lines += 1;

        let v: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(error = %e, "non-json line, passing through");
                self.stats.passthrough += 1;
                self.printer.passthrough(line)?;
                return Ok(());
            }
        };

        let record = Record::from_value(&v);
        if record.is_ignored() {
            tracing::trace!(
                kind = v.get("type").and_then(|x| x.as_str()).unwrap_or(""),
                "record ignored"
            );
            self.stats.ignored += 1;
            return Ok(());
        }

        self.stats.rendered += 1;
        self.dispatch(record)
    }

    fn dispatch(&mut self, record: Record) -> Result<(), PrettyError> {
        match record {
            Record::TextDelta(text) => self.printer.on_text_delta(&text)?,
            Record::Assistant(blocks) => {
                for block in blocks {
                    match block {
                        Block::ToolUse { name, input, id } => {
                            self.printer
                                .on_tool_use(&name, input.as_ref(), id.as_deref())?
                        }
                        Block::Text(text) => self.printer.on_final_message(&text)?,
                    }
                }
            }
            Record::Result { ok, text } => self.printer.on_result(ok, &text)?,
            Record::Ignored => {}
        }
        Ok(())
    }

    /// Consumes `rd` to EOF, then flushes any partial line.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so one bad byte only affects
    /// its own line.
    pub fn run<R: BufRead>(&mut self, mut rd: R) -> Result<RunStats, PrettyError> {
        let mut line_buf: Vec<u8> = Vec::with_capacity(8 * 1024);
        loop {
            line_buf.clear();
            let n = rd.read_until(b'\n', &mut line_buf)?;
            if n == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&line_buf);
            self.handle_line(&line)?;
        }
        self.printer.flush()?;

        tracing::debug!(
            lines = self.stats.lines,
            rendered = self.stats.rendered,
            passthrough = self.stats.passthrough,
            ignored = self.stats.ignored,
            "input exhausted"
        );
        Ok(self.stats)
    }
}

/// Renders everything `rd` yields to `out`.
pub fn render_stream<R: BufRead, W: Write>(
    rd: R,
    out: W,
    cfg: &PrettyConfig,
) -> Result<RunStats, PrettyError> {
    Dispatcher::new(out, cfg).run(rd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(input: &str) -> (String, RunStats) {
        let mut d = Dispatcher::new(Vec::new(), &PrettyConfig::default());
        let stats = d.run(input.as_bytes()).unwrap();
        (String::from_utf8(d.into_inner()).unwrap(), stats)
    }

    #[test]
    fn hello_world_then_result() {
        let input = concat!(
            r#"{"type":"stream_event","event":{"delta":{"type":"text_delta","text":"Hello"}}}"#,
            "\n",
            r#"{"type":"stream_event","event":{"delta":{"type":"text_delta","text":" world\n"}}}"#,
            "\n",
            r#"{"type":"result","is_error":false,"result":"done"}"#,
            "\n",
        );
        let (out, stats) = render(input);
        assert_eq!(out, "Hello world\n\n=== success ===\ndone\n");
        assert_eq!(
            stats,
            RunStats {
                lines: 3,
                rendered: 3,
                passthrough: 0,
                ignored: 0
            }
        );
    }

    #[test]
    fn partial_line_is_flushed_at_eof() {
        let input = r#"{"type":"stream_event","event":{"delta":{"type":"text_delta","text":"no newline"}}}"#;
        let (out, _) = render(input);
        assert_eq!(out, "no newline\n");
    }

    #[test]
    fn non_json_line_flushes_then_passes_through_trimmed() {
        let input = concat!(
            r#"{"type":"stream_event","event":{"delta":{"type":"text_delta","text":"partial"}}}"#,
            "\n",
            "   Warning: something odd {  \n",
        );
        let (out, stats) = render(input);
        assert_eq!(out, "partial\nWarning: something odd {\n");
        assert_eq!(stats.passthrough, 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (out, stats) = render("\n   \n\t\r\n");
        assert_eq!(out, "");
        assert_eq!(stats, RunStats::default());
    }

    #[test]
    fn unknown_records_and_shapes_are_silent() {
        let input = concat!(
            r#"{"type":"system","subtype":"init","session_id":"abc"}"#,
            "\n",
            r#"{"type":"rate_limit_event"}"#,
            "\n",
            "[1,2,3]\n",
            "42\n",
            r#"{"type":"stream_event","event":{"delta":{"type":"input_json_delta","partial_json":"{"}}}"#,
            "\n",
        );
        let (out, stats) = render(input);
        assert_eq!(out, "");
        assert_eq!(stats.ignored, 5);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut input = b"bad \xff bytes\n".to_vec();
        input.extend_from_slice(br#"{"type":"result","result":"ok"}"#);
        let mut d = Dispatcher::new(Vec::new(), &PrettyConfig::default());
        d.run(&input[..]).unwrap();
        let out = String::from_utf8(d.into_inner()).unwrap();
        assert_eq!(out, "bad \u{fffd} bytes\n\n=== success ===\nok\n");
    }

    #[test]
    fn assistant_blocks_render_in_order() {
        let input = concat!(
            r#"{"type":"assistant","message":{"content":[{"type":"text","text":"Checking.\n"},{"type":"tool_use","id":"toolu_9","name":"Glob","input":{"pattern":"**/*.rs"}}]}}"#,
            "\n",
        );
        let (out, _) = render(input);
        assert_eq!(
            out,
            "Checking.\n\n>>> tool_use Glob id=toolu_9\n{\"pattern\":\"**/*.rs\"}\n"
        );
    }

    #[test]
    fn handle_line_leaves_partial_text_pending() {
        let mut d = Dispatcher::new(Vec::new(), &PrettyConfig::default());
        d.handle_line(r#"{"type":"stream_event","event":{"delta":{"type":"text_delta","text":"a\nb"}}}"#)
            .unwrap();
        assert_eq!(d.printer().pending(), "b");
        assert_eq!(d.into_inner(), b"a\n");
    }
}
