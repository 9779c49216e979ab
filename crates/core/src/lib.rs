//! # Roamer Core
//!
//! Domain types, traits, and error definitions for the Roamer location query engine.
//! This crate performs **no I/O** - it defines the domain model that all other
//! crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator is a trait here. Implementations live in their
//! respective crates:
//! - [`DataSource`] yields validated [`Fact`]s (CSV lives in `roamer-store`)
//! - [`Augmenter`] polishes answer text (HTTP lives in `roamer-providers`)
//! - [`Transport`] delivers questions and displays answers (terminal lives in `roamer-channels`)

pub mod augmenter;
pub mod error;
pub mod fact;
pub mod interaction;
pub mod source;
pub mod transport;

// Re-export key types at crate root for ergonomics
pub use augmenter::Augmenter;
pub use error::{AugmentError, SourceError, TransportError};
pub use fact::{Category, Fact};
pub use interaction::Interaction;
pub use source::DataSource;
pub use transport::{Inbound, Transport};
