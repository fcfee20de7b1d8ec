//! Factory calibration block and the temperature compensation it feeds.

use crate::domain::temperature::{Celsius, Temperature};
use crate::register::merge_16_bit;
use crate::register::temperature::RawTemperature;

/// First register of the temperature calibration block, read during
/// initialization.
pub const ADDR: u8 = 0x89;

/// Length of the temperature calibration block.
pub const LEN: usize = 6;

/// Temperature calibration coefficients, programmed per device at the
/// factory. Read once during initialization and never rewritten.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub(crate) dig_t1: u16,
    pub(crate) dig_t2: i16,
    pub(crate) dig_t3: i16,
}

impl From<[u8; LEN]> for Calibration {
    fn from(buf: [u8; LEN]) -> Self {
        Self {
            dig_t1: merge_16_bit([buf[0], buf[1]]),
            dig_t2: merge_16_bit([buf[2], buf[3]]) as i16,
            dig_t3: merge_16_bit([buf[4], buf[5]]) as i16,
        }
    }
}

impl Calibration {
    /// Compensate a raw sample into hundredths of a degree Celsius.
    ///
    /// Integer formula from the datasheet; the evaluation order and the
    /// shift amounts are load-bearing. Inputs are assumed to be within the
    /// datasheet bounds.
    pub fn compensate(&self, raw: RawTemperature) -> Temperature<Celsius> {
        let adc = raw.value();
        let dig_t1 = self.dig_t1 as i32;
        let dig_t2 = self.dig_t2 as i32;
        let dig_t3 = self.dig_t3 as i32;

        let var1 = (((adc >> 3) - (dig_t1 << 1)) * dig_t2) >> 11;
        let var2 = (((((adc >> 4) - dig_t1) * ((adc >> 4) - dig_t1)) >> 12) * dig_t3) >> 14;

        Temperature::from_centidegrees(((var1 + var2) * 5 + 128) >> 8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The worked example from the datasheet.
    const DATASHEET: Calibration = Calibration {
        dig_t1: 27504,
        dig_t2: 26435,
        dig_t3: -1000,
    };

    #[test]
    fn decodes_coefficients_msb_first() {
        let calibration = Calibration::from([0x6B, 0x70, 0x67, 0x43, 0xFC, 0x18]);
        assert_eq!(calibration.dig_t1, 27504);
        assert_eq!(calibration.dig_t2, 26435);
        assert_eq!(calibration.dig_t3, -1000);
    }

    #[test]
    fn compensates_the_datasheet_vector_bit_exactly() {
        let t = DATASHEET.compensate(RawTemperature::new(519888));
        assert_eq!(t.centidegrees(), 2508);
    }

    #[test]
    fn compensation_preserves_sign() {
        // A raw value well below the datasheet example lands below zero.
        let t = DATASHEET.compensate(RawTemperature::new(200000));
        assert!(t.centidegrees() < 0);
    }
}
