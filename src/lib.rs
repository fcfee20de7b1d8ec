#![cfg_attr(not(feature = "std"), no_std)]
#![allow(async_fn_in_trait)]
//! Interrupt-driven TWI driver for the Bosch BME280, reduced to its
//! temperature channel.
//!
//! The driver speaks to the sensor through the [`twi::TwiBus`] seam: a
//! two-wire bus controller that accepts one transfer at a time and reports
//! its completion asynchronously. Initialization and enabling block on each
//! register transfer; measurement fetches are fire-and-forget and complete
//! through [`driver::Bme280::process`], which delivers
//! [`monitor::SensorEvent::MeasurementFetched`] to the registered monitor.
//! The compensated value is pulled on demand with
//! [`driver::Bme280::measurement_get`].
//!
//! The sensor must not start sampling before the caller is ready to receive
//! fetch results, so configuration and start are split: `initialize` writes
//! the configuration registers and holds the measurement-control byte back
//! until `enable` is called.

pub(crate) mod fmt;

pub mod domain;
pub mod driver;
pub mod monitor;
pub mod register;
pub mod twi;

mod transaction;

#[cfg(feature = "std")]
pub mod testutil;

pub use driver::{Bme280, Bme280Config, Error};
pub use monitor::{SensorEvent, SensorMonitor, SignalMonitor};
pub use register::config::{Filter, StandbyTime};
pub use register::ctrl_meas::{Mode, Oversampling};
pub use twi::{DeviceAddress, TwiBus};
