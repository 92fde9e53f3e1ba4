//! Driver configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::{CommandSet, PinAssignment};

/// Color sensor driver configuration
///
/// Describes the fitted module. The illumination and reemission levels
/// are not part of it: they are runtime settings that
/// `initialize` resets, changed through the driver setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DriverConfig {
    /// LED pin wiring
    pub pins: PinAssignment,
    /// Register command family of the fitted module revision
    pub command_set: CommandSet,
    /// Mirror captured colors on the reemission LEDs
    pub reemission_enabled: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            pins: PinAssignment::BOARD,
            command_set: CommandSet::default(),
            reemission_enabled: true,
        }
    }
}

impl DriverConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }
}
