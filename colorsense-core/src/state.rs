//! Driver state
//!
//! The driver has no explicit teardown: once powered on it stays ready
//! until the process restarts.

/// Driver states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Not yet initialized, or the identity probe failed; sensor unpowered
    #[default]
    Uninitialized,
    /// Identity confirmed and sensor powered on
    Ready,
}

impl DriverState {
    /// Check if the sensor has been confirmed and powered on
    pub fn is_ready(&self) -> bool {
        matches!(self, DriverState::Ready)
    }

    /// State after an identity probe
    pub fn after_probe(identity_matched: bool) -> Self {
        if identity_matched {
            DriverState::Ready
        } else {
            DriverState::Uninitialized
        }
    }
}
