//! Transport implementations for Roamer.

pub mod cli;

pub use cli::CliTransport;
