//! Writer trait for message destinations

use super::{error::Result, message::Message};

/// Sink that receives fully built messages
///
/// Errors are returned to the caller unchanged; writers do not retry.
pub trait Writer: Send + Sync {
    fn write(&mut self, message: &Message) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
