//! The raw temperature data registers.

use crate::register::merge_20_bit;

/// First of the three raw temperature registers (msb, lsb, xlsb).
pub const ADDR: u8 = 0xFA;

/// Number of raw temperature registers.
pub const LEN: usize = 3;

/// A raw 20-bit ADC sample, pre-compensation.
///
/// Single slot: the driver overwrites it on every completed fetch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawTemperature(i32);

impl RawTemperature {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<[u8; LEN]> for RawTemperature {
    fn from(buf: [u8; LEN]) -> Self {
        Self(merge_20_bit(buf))
    }
}
