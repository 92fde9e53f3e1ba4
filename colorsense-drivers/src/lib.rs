//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in colorsense-core, running on the capabilities from colorsense-hal:
//!
//! - Color sensors (TCS34725 with illumination and RGB reemission)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod sensor;

pub use sensor::tcs34725::{DriverError, Tcs34725, Tcs34725Error};
