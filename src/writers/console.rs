//! Console writer implementation

use crate::core::{Message, OutputFormat, Result, Writer};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::{self, Write};

/// Standard stream a [`ConsoleWriter`] targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    #[default]
    Stderr,
}

/// Writes one formatted message per line to stdout or stderr
pub struct ConsoleWriter {
    target: ConsoleTarget,
    output_format: OutputFormat,
    use_colors: bool,
}

impl ConsoleWriter {
    pub fn new(target: ConsoleTarget) -> Self {
        Self {
            target,
            output_format: OutputFormat::default(),
            use_colors: false,
        }
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }

    /// Set the output format for this writer
    ///
    /// # Example
    ///
    /// ```
    /// use rust_syslog_logger::writers::ConsoleWriter;
    /// use rust_syslog_logger::OutputFormat;
    ///
    /// let writer = ConsoleWriter::stdout()
    ///     .with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Colour text lines by severity
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn render(&self, message: &Message) -> Result<String> {
        let line = self.output_format.format(message)?;

        #[cfg(feature = "console")]
        if self.use_colors && self.output_format == OutputFormat::Text {
            let severity = message.header.priority.severity;
            return Ok(line.color(severity.color_code()).to_string());
        }

        Ok(line)
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Writer for ConsoleWriter {
    fn write(&mut self, message: &Message) -> Result<()> {
        let line = self.render(message)?;

        match self.target {
            ConsoleTarget::Stdout => writeln!(io::stdout().lock(), "{}", line)?,
            ConsoleTarget::Stderr => writeln!(io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().flush()?,
            ConsoleTarget::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}
