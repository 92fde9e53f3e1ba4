//! Color samples and reemission scaling

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size in bytes of one clear/red/green/blue block read
pub const SAMPLE_LEN: usize = 8;

/// Illumination level after `initialize` (full power)
pub const DEFAULT_ILLUMINATION_LEVEL: u8 = u8::MAX;

/// One capture of the four light channels
///
/// All four channels come from the same bus read and are always
/// replaced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorSample {
    /// Unfiltered channel
    pub clear: u16,
    /// Red channel
    pub red: u16,
    /// Green channel
    pub green: u16,
    /// Blue channel
    pub blue: u16,
}

impl ColorSample {
    /// Create a sample from channel values
    pub const fn new(clear: u16, red: u16, green: u16, blue: u16) -> Self {
        Self {
            clear,
            red,
            green,
            blue,
        }
    }

    /// Decode the channel data block
    ///
    /// Layout is CDATAL, CDATAH, RDATAL, RDATAH, GDATAL, GDATAH, BDATAL,
    /// BDATAH: four little-endian words in clear, red, green, blue order.
    pub const fn from_le_bytes(raw: [u8; SAMPLE_LEN]) -> Self {
        Self {
            clear: u16::from_le_bytes([raw[0], raw[1]]),
            red: u16::from_le_bytes([raw[2], raw[3]]),
            green: u16::from_le_bytes([raw[4], raw[5]]),
            blue: u16::from_le_bytes([raw[6], raw[7]]),
        }
    }

    /// Red, green and blue channels, without clear
    pub const fn rgb(&self) -> [u16; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Reemission scale factor
///
/// A fixed-point ratio `numerator / 65535`. Channels are 16-bit while the
/// reemission LEDs take an 8-bit duty cycle, so a scale built from an
/// 8-bit level already folds in the 16-to-8 bit range reduction: a full
/// scale channel times `level / 65535` lands in `0..=level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReemitScale {
    numerator: u32,
}

impl Default for ReemitScale {
    fn default() -> Self {
        Self::PASS_THROUGH
    }
}

impl ReemitScale {
    const DENOMINATOR: u32 = u16::MAX as u32;

    /// Ratio 1.0: channel values are passed through and saturate at 255
    pub const PASS_THROUGH: Self = Self {
        numerator: Self::DENOMINATOR,
    };

    /// Scale for an 8-bit reemission level, ratio `level / 65535`
    pub const fn from_level(level: u8) -> Self {
        Self {
            numerator: level as u32,
        }
    }

    /// The scale as a floating point ratio
    pub fn ratio(&self) -> f32 {
        self.numerator as f32 / Self::DENOMINATOR as f32
    }

    /// Scale a channel value down to a duty cycle
    ///
    /// Returns `round(channel * ratio)` saturated to 255.
    pub const fn apply(&self, channel: u16) -> u8 {
        let product = channel as u64 * self.numerator as u64;
        let rounded = (product + (Self::DENOMINATOR as u64 / 2)) / Self::DENOMINATOR as u64;
        if rounded > u8::MAX as u64 {
            u8::MAX
        } else {
            rounded as u8
        }
    }
}

/// Duty cycle for an active-low LED
///
/// The reemission LEDs sink current into the pin, so a brightness of
/// `value` needs the pin low for `value` of every 255 ticks.
pub const fn active_low(value: u8) -> u8 {
    u8::MAX - value
}
