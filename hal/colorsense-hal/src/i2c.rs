//! I2C bus abstractions
//!
//! The driver talks to exactly one device, so every call carries the
//! 7-bit address explicitly and there is no notion of bus ownership
//! beyond `&mut self`.

/// I2C bus master
///
/// A "transaction" in the Arduino sense (begin, one or more byte writes,
/// end) is a single [`write`](I2cBus::write) call here; a byte request is
/// a single [`read`](I2cBus::read) call.
///
/// Implementations are not expected to be shared across threads. A host
/// that shares one physical bus between contexts must serialize access
/// itself.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Bring up the bus peripheral
    ///
    /// Most implementations receive an already-configured peripheral, so
    /// the default does nothing.
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into; its length is the byte count requested
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write then read
    ///
    /// This is commonly used to write a register address then read data.
    /// The default issues a stop between the phases; buses that support a
    /// repeated start should override it.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically register address)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.write(address, write_data)?;
        self.read(address, read_buf)
    }
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn begin(&mut self) -> Result<(), Self::Error> {
        T::begin(self)
    }

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        T::read(self, address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        T::write_read(self, address, write_data, read_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bus that records each phase as (address, is_read, len)
    #[derive(Default)]
    struct RecordingBus {
        phases: Vec<(u8, bool, usize)>,
        fill: u8,
    }

    impl I2cBus for RecordingBus {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            self.phases.push((address, false, data.len()));
            Ok(())
        }

        fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), ()> {
            self.phases.push((address, true, buf.len()));
            buf.fill(self.fill);
            Ok(())
        }
    }

    #[test]
    fn test_default_write_read_is_two_phases() {
        let mut bus = RecordingBus {
            fill: 0x5A,
            ..Default::default()
        };
        let mut buf = [0u8; 3];

        bus.write_read(0x29, &[0x94], &mut buf).unwrap();

        assert_eq!(bus.phases, vec![(0x29, false, 1), (0x29, true, 3)]);
        assert_eq!(buf, [0x5A; 3]);
    }

    #[test]
    fn test_borrowed_bus_forwards() {
        fn power_on<B: I2cBus>(mut bus: B) -> Result<(), B::Error> {
            bus.begin()?;
            bus.write(0x29, &[0x80, 0x03])
        }

        let mut bus = RecordingBus::default();
        power_on(&mut bus).unwrap();

        assert_eq!(bus.phases, vec![(0x29, false, 2)]);
    }
}
