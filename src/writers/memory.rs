//! In-memory writer

use crate::core::{Message, OutputFormat, Result, Writer};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects formatted messages in a shared buffer
///
/// Clones share the same buffer, so one clone can be handed to a
/// [`Logger`](crate::Logger) while another inspects the output.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    lines: Arc<Mutex<Vec<String>>>,
    output_format: OutputFormat,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Snapshot of every line written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Writer for MemoryWriter {
    fn write(&mut self, message: &Message) -> Result<()> {
        let line = self.output_format.format(message)?;
        self.lines.lock().push(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
