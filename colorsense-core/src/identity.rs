//! Device identity

/// Contents of the sensor's ID register
///
/// Read once during initialization to confirm the right part is on the
/// bus before it is powered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity(pub u8);

impl DeviceIdentity {
    /// ID register value of the TCS34725
    pub const EXPECTED: Self = Self(0x44);

    /// Check if this is the part the driver supports
    pub const fn is_expected(&self) -> bool {
        self.0 == Self::EXPECTED.0
    }

    /// Raw register value
    pub const fn raw(&self) -> u8 {
        self.0
    }
}

impl From<u8> for DeviceIdentity {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_identity() {
        assert!(DeviceIdentity(0x44).is_expected());
        assert!(DeviceIdentity::EXPECTED.is_expected());
    }

    #[test]
    fn test_other_identities() {
        // TCS34727 reports 0x4D
        assert!(!DeviceIdentity(0x4D).is_expected());
        assert!(!DeviceIdentity(0x00).is_expected());
        assert!(!DeviceIdentity::from(0xFF).is_expected());
        assert_eq!(DeviceIdentity::from(0x12).raw(), 0x12);
    }
}
