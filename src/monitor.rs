//! Event delivery to the owning application.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

/// Events emitted by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorEvent {
    /// A measurement has been fetched and may now be read with
    /// [`measurement_get`](crate::Bme280::measurement_get).
    MeasurementFetched,
}

/// Observer for driver events.
///
/// Registered once at construction and never reassigned. Invoked
/// synchronously from the completion path, strictly after the transaction
/// has returned to idle; a typical implementation records the event or
/// wakes a task, it cannot re-enter the driver.
pub trait SensorMonitor {
    fn notify(&self, event: SensorEvent);
}

/// Monitor adapter that raises a signal, for waking an async observer.
pub struct SignalMonitor<'s, M: RawMutex> {
    signal: &'s Signal<M, SensorEvent>,
}

impl<'s, M: RawMutex> SignalMonitor<'s, M> {
    pub fn new(signal: &'s Signal<M, SensorEvent>) -> Self {
        Self { signal }
    }
}

impl<M: RawMutex> SensorMonitor for SignalMonitor<'_, M> {
    fn notify(&self, event: SensorEvent) {
        self.signal.signal(event);
    }
}
