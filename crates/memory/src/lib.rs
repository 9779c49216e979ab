//! Session memory for Roamer.
//!
//! Each conversation owns one [`Session`]: a bounded newest-first log of
//! resolved interactions plus the last-location and last-query cursors used
//! to interpret follow-up questions. Sessions share nothing with each other.

pub mod session;
pub mod session_memory;

pub use session::{Session, SessionId};
pub use session_memory::{SessionMemory, DEFAULT_MEMORY_SIZE};
