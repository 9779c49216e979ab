//! Augmenter implementations for Roamer.
//!
//! All augmenters implement the `roamer_core::Augmenter` trait.
//! [`router::build_from_config`] picks one from configuration, or none.

pub mod openai_compat;
pub mod router;

pub use openai_compat::OpenAiCompatAugmenter;
pub use router::build_from_config;
