//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines straight to a
//! color-capable writer as `walk_streaming` produces them.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Label, StreamingOutput, TreeLine};

use super::config::OutputConfig;

/// Color used for the name part of a line.
fn label_color(label: &Label) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match label {
        Label::Root(_) | Label::Dir(_) => spec.set_fg(Some(Color::Blue)).set_bold(true),
        Label::File(_) => spec.set_fg(Some(Color::Green)),
        Label::PermissionDenied => spec.set_fg(Some(Color::Red)),
    };
    spec
}

/// Write one line: prefix and connector plain, the name colored, then the
/// trailing `/` for directories after the reset.
pub fn write_tree_line<W: WriteColor>(out: &mut W, line: &TreeLine) -> io::Result<()> {
    write!(out, "{}{}", line.prefix, line.connector_str())?;
    out.set_color(&label_color(&line.label))?;
    write!(out, "{}", line.label.text())?;
    out.reset()?;
    writeln!(out, "{}", line.label.suffix())
}

/// Streaming output formatter - writes each line as soon as it is produced.
pub struct StreamingFormatter<W: WriteColor> {
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter on stdout. Whether to color is decided by `config`, not by termcolor.
    pub fn new(config: &OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::with_writer(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> StreamingOutput for StreamingFormatter<W> {
    fn output_line(&mut self, line: &TreeLine) -> io::Result<()> {
        write_tree_line(&mut self.out, line)
    }
}
