//! Per-invocation state shared by every command.

use super::config::Config;
use super::input::Document;
use anyhow::Result;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

pub struct Context {
    pub config: Config,
    /// `--input`; stdin when unset.
    pub input: Option<PathBuf>,
    /// Colour status cells; only when enabled and stdout is a terminal.
    pub color: bool,
}

impl Context {
    pub fn new(config: Config, input: Option<PathBuf>) -> Self {
        let color = config.table.color && std::io::stdout().is_terminal();
        Self {
            config,
            input,
            color,
        }
    }

    pub fn document(&self) -> Result<Document> {
        Document::read(self.input.as_deref())
    }

    /// Write rendered output to stdout.
    pub fn emit(&self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
