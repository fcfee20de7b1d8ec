//! The `config` register: standby period and IIR filter.
//!
//! Only guaranteed to take effect while the device is in sleep mode, so the
//! driver writes it before anything that could start sampling.

/// Register address.
pub const ADDR: u8 = 0xF5;

const SHIFT_T_SB: u8 = 5;
const SHIFT_FILTER: u8 = 2;

/// Standby period between samples in normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StandbyTime {
    Ms0_5,
    Ms10,
    Ms20,
    Ms62_5,
    Ms125,
    Ms250,
    Ms500,
    Ms1000,
}

impl From<StandbyTime> for u8 {
    fn from(standby: StandbyTime) -> u8 {
        match standby {
            StandbyTime::Ms0_5 => 0x00,
            StandbyTime::Ms62_5 => 0x01,
            StandbyTime::Ms125 => 0x02,
            StandbyTime::Ms250 => 0x03,
            StandbyTime::Ms500 => 0x04,
            StandbyTime::Ms1000 => 0x05,
            StandbyTime::Ms10 => 0x06,
            StandbyTime::Ms20 => 0x07,
        }
    }
}

/// IIR filter coefficient applied to samples by the sensor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Filter {
    Off,
    X2,
    X4,
    X8,
    X16,
}

impl From<Filter> for u8 {
    fn from(filter: Filter) -> u8 {
        match filter {
            Filter::Off => 0x00,
            Filter::X2 => 0x01,
            Filter::X4 => 0x02,
            Filter::X8 => 0x03,
            Filter::X16 => 0x04,
        }
    }
}

/// Typed value of the `config` register.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub standby: StandbyTime,
    pub filter: Filter,
}

impl From<Config> for u8 {
    fn from(reg: Config) -> u8 {
        u8::from(reg.standby) << SHIFT_T_SB | u8::from(reg.filter) << SHIFT_FILTER
    }
}
