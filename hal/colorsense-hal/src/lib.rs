//! Colorsense Hardware Abstraction Layer
//!
//! This crate defines the capabilities the color sensor driver consumes
//! from its host: a two-wire bus to reach the sensor and an output port
//! for the illumination LED and the three reemission LEDs. Any board can
//! run the driver by implementing these two traits, either by hand or
//! through the [`embedded`] adapters for `embedded-hal` 1.0 peripherals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  colorsense-drivers (Tcs34725)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  colorsense-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  board code / │
//! │   adapters    │       │  test mocks   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`gpio::OutputPort`] - Digital and PWM outputs addressed by pin number

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod embedded;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use embedded::{EmbeddedI2c, OutputError, PwmOutputs};
pub use gpio::{OutputPort, PinAssignment};
pub use i2c::I2cBus;
