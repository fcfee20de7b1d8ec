//! The BME280 driver proper: initialization sequencing, the transfer
//! state machine, and measurement retrieval.

use crate::domain::temperature::{Celsius, Temperature};
use crate::monitor::{SensorEvent, SensorMonitor};
use crate::register::calibration::{self, Calibration};
use crate::register::config::{self, Config, Filter, StandbyTime};
use crate::register::ctrl_hum::{self, CtrlHum};
use crate::register::ctrl_meas::{self, CtrlMeas, Mode, Oversampling};
use crate::register::temperature::{self, RawTemperature};
use crate::transaction::Transaction;
use crate::twi::{DeviceAddress, TwiBus};

// Largest payload moved by any transfer (the calibration block).
const BUF_LEN: usize = calibration::LEN;

/// Errors surfaced by the driver.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus transfer failed. This is fatal: the driver defines no
    /// recovery path and the device state is unknown afterwards. Callers
    /// decide whether to reset the bus or escalate.
    Twi(E),
    /// A transfer was submitted while another was still outstanding.
    Busy,
    /// A measurement was requested before the calibration was loaded.
    NotCalibrated,
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Error<E> {
        Error::Twi(e)
    }
}

/// Driver configuration, supplied once at construction.
///
/// The values are the documented register enumerations; they are not
/// validated at runtime.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bme280Config {
    pub address: DeviceAddress,
    pub standby: StandbyTime,
    pub filter: Filter,
    pub temperature_oversampling: Oversampling,
}

/// Driver for a single BME280 behind a [`TwiBus`].
///
/// Owns the calibration coefficients, the raw-sample slot and the transfer
/// state; the monitor is held by reference and notified from the
/// completion path.
pub struct Bme280<'m, B, M>
where
    B: TwiBus,
    M: SensorMonitor,
{
    bus: B,
    monitor: &'m M,
    address: u8,
    config: Bme280Config,
    transaction: Transaction,
    calibration: Option<Calibration>,
    raw_temperature: RawTemperature,
    ctrl_meas: u8,
}

impl<'m, B, M> Bme280<'m, B, M>
where
    B: TwiBus,
    M: SensorMonitor,
{
    pub fn new(bus: B, config: Bme280Config, monitor: &'m M) -> Self {
        Self {
            bus,
            monitor,
            address: config.address.into(),
            config,
            transaction: Transaction::Idle,
            calibration: None,
            raw_temperature: RawTemperature::default(),
            ctrl_meas: 0,
        }
    }

    /// Configure the sensor without starting measurements.
    ///
    /// Loads the factory calibration and writes the configuration
    /// registers, blocking on each transfer. Sampling does not start until
    /// [`enable`](Self::enable) is called, so the caller controls when the
    /// first fetch can be answered.
    pub async fn initialize(&mut self) -> Result<(), Error<B::Error>> {
        self.submit_read(calibration::ADDR, calibration::LEN)?;
        self.process().await?;

        // Write CONFIG first, because it is only guaranteed to take effect
        // in sleep mode.
        let reg = Config {
            standby: self.config.standby,
            filter: self.config.filter,
        };
        self.submit_write(config::ADDR, reg.into())?;
        self.process().await?;

        // Write CTRL_HUM next, because it only takes effect after writing
        // CTRL_MEAS.
        let reg = CtrlHum {
            oversampling: Oversampling::Skipped,
        };
        self.submit_write(ctrl_hum::ADDR, reg.into())?;
        self.process().await?;

        // Calculate, but don't write CTRL_MEAS yet. It is written by
        // `enable`.
        self.ctrl_meas = CtrlMeas {
            temperature: self.config.temperature_oversampling,
            pressure: Oversampling::Skipped,
            mode: Mode::Normal,
        }
        .into();

        Ok(())
    }

    /// Start continuous sampling by writing the held measurement-control
    /// byte. Blocks until the write has completed.
    pub async fn enable(&mut self) -> Result<(), Error<B::Error>> {
        self.submit_write(ctrl_meas::ADDR, self.ctrl_meas)?;
        self.process().await?;
        info!("[bme280] normal mode enabled");
        Ok(())
    }

    /// Submit an asynchronous fetch of the latest raw temperature sample.
    ///
    /// Returns as soon as the transfer is submitted. Drive it to completion
    /// with [`process`](Self::process); the monitor is then notified with
    /// [`SensorEvent::MeasurementFetched`] and the value can be read with
    /// [`measurement_get`](Self::measurement_get).
    pub fn measurement_fetch(&mut self) -> Result<(), Error<B::Error>> {
        self.submit_read(temperature::ADDR, temperature::LEN)
    }

    /// Drive the outstanding transfer to completion.
    ///
    /// Suspends until the bus reports the completion, decodes and stores
    /// the received bytes when the pending target is a known data register,
    /// and notifies the monitor of a fetched measurement. Completions for
    /// any other target only return the transaction to idle. There is no
    /// timeout.
    pub async fn process(&mut self) -> Result<(), Error<B::Error>> {
        let mut buf = [0; BUF_LEN];
        let n = self.bus.transfer_done(&mut buf).await?;
        self.complete(&buf[..n]);
        Ok(())
    }

    /// Recompute the compensated temperature from the last fetched sample.
    ///
    /// Pull model: the value is derived on demand and never cached, so two
    /// calls without an intervening fetch return the same value.
    pub fn measurement_get(&self) -> Result<Temperature<Celsius>, Error<B::Error>> {
        let calibration = self.calibration.as_ref().ok_or(Error::NotCalibrated)?;
        Ok(calibration.compensate(self.raw_temperature))
    }

    fn submit_write(&mut self, register: u8, value: u8) -> Result<(), Error<B::Error>> {
        self.transaction.begin(None).map_err(|_| Error::Busy)?;
        self.bus.write(self.address, &[register, value])?;
        Ok(())
    }

    fn submit_read(&mut self, register: u8, len: usize) -> Result<(), Error<B::Error>> {
        self.transaction.begin(Some(register)).map_err(|_| Error::Busy)?;
        self.bus.write_then_read(self.address, register, len)?;
        Ok(())
    }

    // Completion path. The transaction returns to idle before the monitor
    // runs.
    fn complete(&mut self, bytes: &[u8]) {
        match self.transaction.finish() {
            Some(temperature::ADDR) => {
                if let Ok(raw) = <[u8; temperature::LEN]>::try_from(bytes) {
                    self.raw_temperature = RawTemperature::from(raw);
                    trace!("[bme280] raw sample {}", self.raw_temperature.value());
                    self.monitor.notify(SensorEvent::MeasurementFetched);
                }
            }
            Some(calibration::ADDR) => {
                if let Ok(block) = <[u8; calibration::LEN]>::try_from(bytes) {
                    let calibration = Calibration::from(block);
                    debug!(
                        "[bme280] calibration dig_T1={} dig_T2={} dig_T3={}",
                        calibration.dig_t1, calibration.dig_t2, calibration.dig_t3
                    );
                    self.calibration = Some(calibration);
                }
            }
            _ => {}
        }
    }
}
