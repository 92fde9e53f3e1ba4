//! Color sensor trait

use crate::color::ColorSample;

/// Trait for color sensors
///
/// A capture stores its result in the driver; the accessors then return
/// the latest sample until the next successful capture. Every accessor
/// returns 0 before the first capture.
pub trait ColorSensor {
    /// Error type for captures
    type Error;

    /// Sample all channels
    ///
    /// On error the previous sample is kept as a whole.
    fn capture_color(&mut self) -> Result<(), Self::Error>;

    /// The latest sample
    fn sample(&self) -> ColorSample;

    /// Red channel of the latest sample
    fn red(&self) -> u16 {
        self.sample().red
    }

    /// Green channel of the latest sample
    fn green(&self) -> u16 {
        self.sample().green
    }

    /// Blue channel of the latest sample
    fn blue(&self) -> u16 {
        self.sample().blue
    }

    /// Clear channel of the latest sample
    fn clear(&self) -> u16 {
        self.sample().clear
    }
}
