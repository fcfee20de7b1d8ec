//! The `ctrl_hum` register: humidity oversampling.
//!
//! Changes only take effect after the next `ctrl_meas` write, so the driver
//! writes it before computing and holding the measurement-control byte.

use crate::register::ctrl_meas::Oversampling;

/// Register address.
pub const ADDR: u8 = 0xF2;

/// Typed value of the `ctrl_hum` register.
#[derive(Debug, Clone, Copy)]
pub struct CtrlHum {
    pub oversampling: Oversampling,
}

impl From<CtrlHum> for u8 {
    fn from(reg: CtrlHum) -> u8 {
        u8::from(reg.oversampling)
    }
}
