//! Hardware abstraction traits
//!
//! These traits define the interface between host application logic
//! and sensor driver implementations.

pub mod sensor;

pub use sensor::ColorSensor;
