//! GPIO and PWM output abstractions
//!
//! The color module drives four LEDs: one white illumination LED used
//! while sampling and three reemission LEDs (red, green, blue). Outputs
//! are addressed by board pin number so the same trait covers both the
//! digital enable line and the PWM channels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digital and PWM output port
///
/// Implementations should handle the actual pin muxing and timer setup
/// for the specific board.
pub trait OutputPort {
    /// Error type for output operations
    type Error;

    /// Configure a pin as a push-pull digital output
    fn configure_digital_output(&mut self, pin: u8) -> Result<(), Self::Error>;

    /// Drive a digital output high (`true`) or low (`false`)
    fn write_digital(&mut self, pin: u8, high: bool) -> Result<(), Self::Error>;

    /// Set a PWM duty cycle, 0 (always low) to 255 (always high)
    fn write_pwm(&mut self, pin: u8, duty: u8) -> Result<(), Self::Error>;
}

impl<T: OutputPort + ?Sized> OutputPort for &mut T {
    type Error = T::Error;

    fn configure_digital_output(&mut self, pin: u8) -> Result<(), Self::Error> {
        T::configure_digital_output(self, pin)
    }

    fn write_digital(&mut self, pin: u8, high: bool) -> Result<(), Self::Error> {
        T::write_digital(self, pin, high)
    }

    fn write_pwm(&mut self, pin: u8, duty: u8) -> Result<(), Self::Error> {
        T::write_pwm(self, pin, duty)
    }
}

/// Pin assignment for the color recognition module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinAssignment {
    /// White illumination LED
    pub illumination: u8,
    /// Red reemission LED (PWM, active-low)
    pub red: u8,
    /// Green reemission LED (PWM, active-low)
    pub green: u8,
    /// Blue reemission LED (PWM, active-low)
    pub blue: u8,
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self::BOARD
    }
}

impl PinAssignment {
    /// Pins wired on the DevDuino color recognition module
    pub const BOARD: Self = Self {
        illumination: 5,
        red: 9,
        green: 10,
        blue: 11,
    };

    /// Create a pin assignment
    pub const fn new(illumination: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            illumination,
            red,
            green,
            blue,
        }
    }

    /// The reemission pins in red, green, blue order
    pub const fn reemission(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}
