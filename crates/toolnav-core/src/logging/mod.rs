//! Logging abstractions
//!
//! The navigator never writes to stdout/stderr directly; it logs through a
//! [`Logger`] the embedder hands in.

mod traits;
mod noop;
mod console;
mod memory;

pub use traits::{Logger, LogLevel, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;
