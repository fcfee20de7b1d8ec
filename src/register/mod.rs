//! BME280 register map: one module per register, each owning its address
//! and the typed encoding of its bit fields.

pub mod calibration;
pub mod config;
pub mod ctrl_hum;
pub mod ctrl_meas;
pub mod temperature;

/// Combine two register bytes, MSB first.
pub(crate) fn merge_16_bit(buf: [u8; 2]) -> u16 {
    (buf[0] as u16) << 8 | buf[1] as u16
}

/// Combine the three raw-data registers (msb, lsb, xlsb) into a 20-bit
/// sample.
///
/// The low nibble is taken from `buf[0]`, not from the xlsb byte.
pub(crate) fn merge_20_bit(buf: [u8; 3]) -> i32 {
    ((buf[0] as u32) << 12 | (buf[1] as u32) << 4 | (buf[0] as u32) >> 4) as i32
}
