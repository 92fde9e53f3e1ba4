//! Board-agnostic core types for the color recognition module
//!
//! This crate contains everything about the module that does not depend
//! on a particular bus or output implementation:
//!
//! - Channel samples and their wire decoding
//! - Fixed-point reemission scaling
//! - Device identity and driver state
//! - Configuration type definitions
//! - The `ColorSensor` trait implemented by drivers

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod identity;
pub mod state;
pub mod traits;

pub use color::{active_low, ColorSample, ReemitScale, DEFAULT_ILLUMINATION_LEVEL};
pub use config::{CommandSet, DriverConfig, PinAssignment};
pub use identity::DeviceIdentity;
pub use state::DriverState;
pub use traits::ColorSensor;
