//! `embedded-hal` 1.0 adapters
//!
//! Binds the [`I2cBus`] and [`OutputPort`] capabilities to standard
//! `embedded-hal` peripherals so any chip HAL implementing those traits
//! can host the driver without glue code.

use embedded_hal::i2c::I2c;
use embedded_hal::pwm::SetDutyCycle;

use crate::gpio::{OutputPort, PinAssignment};
use crate::i2c::I2cBus;

/// [`I2cBus`] over an `embedded_hal::i2c::I2c` peripheral
pub struct EmbeddedI2c<I> {
    i2c: I,
}

impl<I: I2c> EmbeddedI2c<I> {
    /// Wrap an I2C peripheral
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the underlying I2C peripheral
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> I2cBus for EmbeddedI2c<I> {
    type Error = I::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        I2c::write(&mut self.i2c, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        I2c::read(&mut self.i2c, address, buf)
    }

    // Repeated start, no stop between the command byte and the data
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        I2c::write_read(&mut self.i2c, address, write_data, read_buf)
    }
}

/// Errors from [`PwmOutputs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError<E> {
    /// Pin number is not part of the pin assignment
    UnknownPin(u8),
    /// The PWM channel reported an error
    Channel(E),
}

/// [`OutputPort`] over four `embedded_hal::pwm::SetDutyCycle` channels
///
/// The illumination LED is driven through PWM as well, so a digital write
/// maps to a fully-on or fully-off duty cycle.
pub struct PwmOutputs<L, R, G, B> {
    pins: PinAssignment,
    illumination: L,
    red: R,
    green: G,
    blue: B,
}

impl<L, R, G, B, E> PwmOutputs<L, R, G, B>
where
    L: SetDutyCycle<Error = E>,
    R: SetDutyCycle<Error = E>,
    G: SetDutyCycle<Error = E>,
    B: SetDutyCycle<Error = E>,
{
    /// Create the output port from four PWM channels
    ///
    /// # Arguments
    /// - `pins`: Pin numbers the driver will address each channel by
    /// - `illumination`, `red`, `green`, `blue`: The PWM channels
    pub fn new(pins: PinAssignment, illumination: L, red: R, green: G, blue: B) -> Self {
        Self {
            pins,
            illumination,
            red,
            green,
            blue,
        }
    }

    /// Get the pin assignment
    pub fn pins(&self) -> &PinAssignment {
        &self.pins
    }

    /// Release the underlying channels
    pub fn release(self) -> (L, R, G, B) {
        (self.illumination, self.red, self.green, self.blue)
    }

    /// Apply `level` to the channel wired to `pin`
    fn drive(&mut self, pin: u8, level: Level) -> Result<(), OutputError<E>> {
        let result = if pin == self.pins.illumination {
            level.apply(&mut self.illumination)
        } else if pin == self.pins.red {
            level.apply(&mut self.red)
        } else if pin == self.pins.green {
            level.apply(&mut self.green)
        } else if pin == self.pins.blue {
            level.apply(&mut self.blue)
        } else {
            return Err(OutputError::UnknownPin(pin));
        };
        result.map_err(OutputError::Channel)
    }
}

impl<L, R, G, B, E> OutputPort for PwmOutputs<L, R, G, B>
where
    L: SetDutyCycle<Error = E>,
    R: SetDutyCycle<Error = E>,
    G: SetDutyCycle<Error = E>,
    B: SetDutyCycle<Error = E>,
{
    type Error = OutputError<E>;

    fn configure_digital_output(&mut self, pin: u8) -> Result<(), Self::Error> {
        self.drive(pin, Level::Off)
    }

    fn write_digital(&mut self, pin: u8, high: bool) -> Result<(), Self::Error> {
        self.drive(pin, if high { Level::On } else { Level::Off })
    }

    fn write_pwm(&mut self, pin: u8, duty: u8) -> Result<(), Self::Error> {
        self.drive(pin, Level::Duty(duty))
    }
}

#[derive(Clone, Copy)]
enum Level {
    Off,
    On,
    Duty(u8),
}

impl Level {
    fn apply<C: SetDutyCycle>(self, channel: &mut C) -> Result<(), C::Error> {
        match self {
            Level::Off => channel.set_duty_cycle_fully_off(),
            Level::On => channel.set_duty_cycle_fully_on(),
            Level::Duty(duty) => {
                channel.set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
            }
        }
    }
}
