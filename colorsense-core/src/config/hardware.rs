//! Hardware configuration types
//!
//! Pin wiring and the sensor register command family.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use colorsense_hal::gpio::PinAssignment;

/// Fixed 7-bit I2C address of the TCS34725
pub const SENSOR_I2C_ADDRESS: u8 = 0x29;

/// Command register protocol used to address sensor registers
///
/// Every register access starts with a command byte: the CMD bit (0x80),
/// a two-bit transaction type and the register address. Module revisions
/// differ in the transaction type they were built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CommandSet {
    /// Type 00: the register pointer stays put between bytes
    RepeatedByte,
    /// Type 01: the register pointer advances after each byte
    #[default]
    AutoIncrement,
}

impl CommandSet {
    /// Transaction type bits OR'd into the command byte
    pub const fn type_bits(&self) -> u8 {
        match self {
            CommandSet::RepeatedByte => 0x00,
            CommandSet::AutoIncrement => 0x20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_set() {
        assert_eq!(CommandSet::default(), CommandSet::AutoIncrement);
    }

    #[test]
    fn test_type_bits() {
        assert_eq!(CommandSet::RepeatedByte.type_bits(), 0x00);
        assert_eq!(CommandSet::AutoIncrement.type_bits(), 0x20);
    }
}
