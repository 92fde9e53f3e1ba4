//! Configuration types
//!
//! Board-agnostic configuration structures, optionally deserializable
//! from the host's configuration file.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
