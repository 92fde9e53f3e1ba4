//! TCS34725 color sensor on the color recognition module
//!
//! The module carries the sensor, a white LED that lights the target
//! while sampling, and an RGB LED that can mirror the captured color.
//!
//! # Bus Protocol
//!
//! The sensor sits at the fixed address 0x29. Every register access
//! starts with a command byte:
//! - Bit 7: CMD, always set
//! - Bits 6:5: transaction type (repeated byte or auto-increment)
//! - Bits 4:0: register address
//!
//! Reading the channel data is a one-byte command write addressing
//! CDATAL followed by an 8-byte read: clear, red, green, blue, each a
//! little-endian word.
//!
//! # Reentrancy
//!
//! [`Tcs34725::initialize`] and [`Tcs34725::capture_color`] run a
//! sequence of bus and output calls that must not interleave with other
//! users of the same bus or LEDs. The driver holds no lock; a host that
//! shares the bus must serialize access around these calls.

use colorsense_core::color::SAMPLE_LEN;
use colorsense_core::config::SENSOR_I2C_ADDRESS;
use colorsense_core::traits::ColorSensor;
use colorsense_core::{
    active_low, ColorSample, CommandSet, DeviceIdentity, DriverConfig, DriverState, ReemitScale,
    DEFAULT_ILLUMINATION_LEVEL,
};
use colorsense_hal::{I2cBus, OutputPort};

/// TCS34725 register addresses
pub mod reg {
    /// Enables states and interrupts
    pub const ENABLE: u8 = 0x00;
    /// Device ID
    pub const ID: u8 = 0x12;
    /// Clear data low byte, first of the 8-byte channel block
    pub const CDATAL: u8 = 0x14;
}

/// ENABLE register bits
pub mod enable {
    /// Power ON, starts the internal oscillator
    pub const PON: u8 = 0x01;
    /// RGBC enable, starts channel acquisition
    pub const AEN: u8 = 0x02;
}

/// Command bit, set in every command byte
pub const COMMAND_BIT: u8 = 0x80;

/// Build the command byte addressing `register`
pub const fn command(set: CommandSet, register: u8) -> u8 {
    COMMAND_BIT | set.type_bits() | register
}

/// TCS34725 driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tcs34725Error<BE, OE> {
    /// Bus transaction failed
    Bus(BE),
    /// Illumination or reemission output failed
    Output(OE),
}

/// Error type of a driver running on bus `B` and outputs `O`
pub type DriverError<B, O> = Tcs34725Error<<B as I2cBus>::Error, <O as OutputPort>::Error>;

/// Color recognition module driver
///
/// Owns the latest sample and the illumination and reemission levels,
/// which only the setters and [`initialize`](Self::initialize) change.
/// The bus and outputs may be owned or borrowed: both traits are
/// implemented for `&mut T`.
pub struct Tcs34725<B, O> {
    bus: B,
    outputs: O,
    config: DriverConfig,
    illumination_level: u8,
    reemit_scale: ReemitScale,
    sample: ColorSample,
    state: DriverState,
}

impl<B: I2cBus, O: OutputPort> Tcs34725<B, O> {
    /// Create a new driver
    ///
    /// Does not touch the bus or the outputs; call
    /// [`initialize`](Self::initialize) before capturing.
    pub fn new(bus: B, outputs: O, config: DriverConfig) -> Self {
        Self {
            bus,
            outputs,
            config,
            illumination_level: DEFAULT_ILLUMINATION_LEVEL,
            reemit_scale: ReemitScale::PASS_THROUGH,
            sample: ColorSample::default(),
            state: DriverState::Uninitialized,
        }
    }

    /// Detect and power on the sensor
    ///
    /// Switches the illumination LED off, checks the ID register and
    /// blanks the reemission LEDs. Illumination is reset to full power
    /// and reemission to pass-through. The sensor is powered on only if
    /// the ID matches.
    ///
    /// Returns `Ok(true)` if the sensor was found and started, `Ok(false)`
    /// if another ID was read, in which case the sensor is left unpowered.
    pub fn initialize(&mut self) -> Result<bool, DriverError<B, O>> {
        let pins = self.config.pins;

        self.bus.begin().map_err(Tcs34725Error::Bus)?;
        self.outputs
            .configure_digital_output(pins.illumination)
            .map_err(Tcs34725Error::Output)?;
        self.outputs
            .write_digital(pins.illumination, false)
            .map_err(Tcs34725Error::Output)?;

        let identity = self.read_device_id()?;

        self.illumination_level = DEFAULT_ILLUMINATION_LEVEL;
        self.reemit_scale = ReemitScale::PASS_THROUGH;
        self.reemit([0, 0, 0])?;

        if !identity.is_expected() {
            #[cfg(feature = "defmt")]
            defmt::warn!("TCS34725 not found: ID register reads {=u8:#x}", identity.raw());
            self.state = DriverState::after_probe(false);
            return Ok(false);
        }

        self.power_on()?;
        self.state = DriverState::after_probe(true);

        #[cfg(feature = "defmt")]
        defmt::info!("TCS34725 powered on");

        Ok(true)
    }

    /// Set the illumination level used while capturing (0 = off, 255 = full)
    ///
    /// Takes effect at the next capture.
    pub fn set_illumination_level(&mut self, level: u8) {
        self.illumination_level = level;
    }

    /// Illumination level used while capturing
    pub fn illumination_level(&self) -> u8 {
        self.illumination_level
    }

    /// Set the reemission level
    ///
    /// A full scale channel is reemitted at `level`; lower channels in
    /// proportion.
    pub fn set_reemit_scale(&mut self, level: u8) {
        self.reemit_scale = ReemitScale::from_level(level);
    }

    /// Enable or disable mirroring captures on the reemission LEDs
    pub fn set_reemission_enabled(&mut self, enabled: bool) {
        self.config.reemission_enabled = enabled;
    }

    /// Current reemission scale
    pub fn reemit_scale(&self) -> ReemitScale {
        self.reemit_scale
    }

    /// Capture all four channels
    ///
    /// Lights the target, reads the channel block, switches the light
    /// off again whatever the outcome of the read, then reemits the
    /// scaled color if enabled.
    ///
    /// If the read fails the previous sample is kept and the bus error is
    /// returned.
    pub fn capture_color(&mut self) -> Result<(), DriverError<B, O>> {
        let pins = self.config.pins;

        self.outputs
            .write_pwm(pins.illumination, self.illumination_level)
            .map_err(Tcs34725Error::Output)?;

        let mut raw = [0u8; SAMPLE_LEN];
        let read = self.bus.write_read(
            SENSOR_I2C_ADDRESS,
            &[command(self.config.command_set, reg::CDATAL)],
            &mut raw,
        );

        let light_off = self.outputs.write_digital(pins.illumination, false);

        if let Err(e) = read {
            #[cfg(feature = "defmt")]
            defmt::warn!("TCS34725 channel read failed, keeping previous sample");
            return Err(Tcs34725Error::Bus(e));
        }

        self.sample = ColorSample::from_le_bytes(raw);
        light_off.map_err(Tcs34725Error::Output)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("TCS34725 sample: {}", self.sample);

        if self.config.reemission_enabled {
            let scale = self.reemit_scale;
            let [red, green, blue] = self.sample.rgb();
            self.reemit([scale.apply(red), scale.apply(green), scale.apply(blue)])?;
        }

        Ok(())
    }

    /// Read the ID register
    ///
    /// Does not change the driver state; only
    /// [`initialize`](Self::initialize) powers the sensor on.
    pub fn read_device_id(&mut self) -> Result<DeviceIdentity, DriverError<B, O>> {
        let mut id = [0u8; 1];
        self.bus
            .write_read(
                SENSOR_I2C_ADDRESS,
                &[command(self.config.command_set, reg::ID)],
                &mut id,
            )
            .map_err(Tcs34725Error::Bus)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("TCS34725 ID register: {=u8:#x}", id[0]);

        Ok(DeviceIdentity(id[0]))
    }

    /// Latest red channel, 0 if never captured
    pub fn red(&self) -> u16 {
        self.sample.red
    }

    /// Latest green channel, 0 if never captured
    pub fn green(&self) -> u16 {
        self.sample.green
    }

    /// Latest blue channel, 0 if never captured
    pub fn blue(&self) -> u16 {
        self.sample.blue
    }

    /// Latest clear channel, 0 if never captured
    pub fn clear(&self) -> u16 {
        self.sample.clear
    }

    /// Latest sample
    pub fn sample(&self) -> ColorSample {
        self.sample
    }

    /// Get the driver state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Check if the sensor was found and powered on
    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Get the configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Release the bus and the outputs
    pub fn release(self) -> (B, O) {
        (self.bus, self.outputs)
    }

    fn power_on(&mut self) -> Result<(), DriverError<B, O>> {
        self.bus
            .write(
                SENSOR_I2C_ADDRESS,
                &[
                    command(self.config.command_set, reg::ENABLE),
                    enable::PON | enable::AEN,
                ],
            )
            .map_err(Tcs34725Error::Bus)
    }

    /// Drive the reemission LEDs, which are active-low
    fn reemit(&mut self, levels: [u8; 3]) -> Result<(), DriverError<B, O>> {
        for (pin, level) in self.config.pins.reemission().into_iter().zip(levels) {
            self.outputs
                .write_pwm(pin, active_low(level))
                .map_err(Tcs34725Error::Output)?;
        }
        Ok(())
    }
}

impl<B: I2cBus, O: OutputPort> ColorSensor for Tcs34725<B, O> {
    type Error = DriverError<B, O>;

    fn capture_color(&mut self) -> Result<(), Self::Error> {
        Tcs34725::capture_color(self)
    }

    fn sample(&self) -> ColorSample {
        self.sample
    }
}
