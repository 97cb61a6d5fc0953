use std::path::{Path, PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "stream-pretty",
    version,
    about = "Render Claude stream-json output as readable terminal text"
)]
pub struct Args {
    /// Stream-json log to read. Omit or pass `-` to read stdin.
    pub input: Option<PathBuf>,

    /// Max characters of serialized tool input to show.
    /// Overrides CLAUDE_PRETTY_TOOL_INPUT_MAX.
    #[arg(long)]
    pub tool_input_max: Option<usize>,
}

impl Args {
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}
