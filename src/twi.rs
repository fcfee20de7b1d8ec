//! The two-wire bus seam consumed by the driver.

/// Bus address of the sensor, selected by the SDO pin strapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceAddress {
    /// SDO strapped low: 0x76.
    Primary,
    /// SDO strapped high: 0x77.
    Secondary,
}

impl From<DeviceAddress> for u8 {
    fn from(address: DeviceAddress) -> u8 {
        match address {
            DeviceAddress::Primary => 0x76,
            DeviceAddress::Secondary => 0x77,
        }
    }
}

/// A two-wire bus controller in the submit/complete model.
///
/// Submissions return as soon as the transfer has been handed to the
/// controller; the single completion notification per transfer is observed
/// by awaiting [`transfer_done`](TwiBus::transfer_done). At most one
/// transfer may be outstanding at a time. The driver enforces this;
/// implementations may assume it.
pub trait TwiBus {
    type Error;

    /// Submit a write of `bytes` to the device at `address`.
    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Submit a write of the `register` address followed by a read of
    /// `len` bytes.
    fn write_then_read(&mut self, address: u8, register: u8, len: usize)
        -> Result<(), Self::Error>;

    /// Suspend until the outstanding transfer has completed.
    ///
    /// Bytes read by a write-then-read transfer are copied into `buf` and
    /// their count returned; a plain write completes with a count of zero.
    /// There is no timeout: a lost completion suspends forever. An error is
    /// fatal, the driver defines no recovery for it.
    async fn transfer_done(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<T: TwiBus> TwiBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, bytes)
    }

    fn write_then_read(
        &mut self,
        address: u8,
        register: u8,
        len: usize,
    ) -> Result<(), Self::Error> {
        T::write_then_read(self, address, register, len)
    }

    async fn transfer_done(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        T::transfer_done(self, buf).await
    }
}
