//! Writer implementations

pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod memory;

pub use console::{ConsoleTarget, ConsoleWriter};
#[cfg(feature = "file")]
pub use file::FileWriter;
pub use memory::MemoryWriter;

pub use crate::core::Writer;
