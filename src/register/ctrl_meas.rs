//! The `ctrl_meas` register: oversampling and measurement mode.
//!
//! Writing it latches the pending `ctrl_hum` value and, in normal mode,
//! starts continuous sampling.

/// Register address.
pub const ADDR: u8 = 0xF4;

const SHIFT_OSRS_T: u8 = 5;
const SHIFT_OSRS_P: u8 = 2;

/// Oversampling applied to a measurement channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Oversampling {
    Skipped,
    X1,
    X2,
    X4,
    X8,
    X16,
}

impl From<Oversampling> for u8 {
    fn from(oversampling: Oversampling) -> u8 {
        match oversampling {
            Oversampling::Skipped => 0x00,
            Oversampling::X1 => 0x01,
            Oversampling::X2 => 0x02,
            Oversampling::X4 => 0x03,
            Oversampling::X8 => 0x04,
            Oversampling::X16 => 0x05,
        }
    }
}

/// Measurement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Sleep,
    Forced,
    Normal,
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> u8 {
        match mode {
            Mode::Sleep => 0x00,
            Mode::Forced => 0x01,
            Mode::Normal => 0x03,
        }
    }
}

/// Typed value of the `ctrl_meas` register.
#[derive(Debug, Clone, Copy)]
pub struct CtrlMeas {
    pub temperature: Oversampling,
    pub pressure: Oversampling,
    pub mode: Mode,
}

impl From<CtrlMeas> for u8 {
    fn from(reg: CtrlMeas) -> u8 {
        u8::from(reg.temperature) << SHIFT_OSRS_T
            | u8::from(reg.pressure) << SHIFT_OSRS_P
            | u8::from(reg.mode)
    }
}
