#![cfg(feature = "std")]

use bme280_twi::testutil::{TestMonitor, TestTwi, TestTwiError, Transfer};
use bme280_twi::{
    Bme280, Bme280Config, DeviceAddress, Error, Filter, Oversampling, SensorEvent, SignalMonitor,
    StandbyTime,
};
use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::signal::Signal;

const CONFIG: Bme280Config = Bme280Config {
    address: DeviceAddress::Primary,
    standby: StandbyTime::Ms250,
    filter: Filter::Off,
    temperature_oversampling: Oversampling::X4,
};

// dig_T1=27504, dig_T2=26435, dig_T3=-1000 as MSB-first pairs, the worked
// example from the datasheet.
const CALIBRATION: [u8; 6] = [0x6B, 0x70, 0x67, 0x43, 0xFC, 0x18];

// Decodes to 519895, which compensates to 25.08 °C with the block above.
const RAW_SAMPLE: [u8; 3] = [0x7E, 0xED, 0x00];

#[test]
fn initialization_writes_config_registers_in_order() {
    let mut twi = TestTwi::new();
    twi.respond(&CALIBRATION);
    let monitor = TestMonitor::new();

    let mut bme280 = Bme280::new(&mut twi, CONFIG, &monitor);
    block_on(bme280.initialize()).unwrap();
    block_on(bme280.enable()).unwrap();
    drop(bme280);

    assert_eq!(
        twi.transfers,
        vec![
            // Calibration block first, then config before ctrl_hum before
            // ctrl_meas; ctrl_meas arrives only through enable().
            Transfer::WriteThenRead {
                address: 0x76,
                register: 0x89,
                len: 6
            },
            Transfer::Write {
                address: 0x76,
                bytes: vec![0xF5, 0x60]
            },
            Transfer::Write {
                address: 0x76,
                bytes: vec![0xF2, 0x00]
            },
            Transfer::Write {
                address: 0x76,
                bytes: vec![0xF4, 0x63]
            },
        ]
    );
}

#[test]
fn initialization_does_not_start_sampling() {
    let mut twi = TestTwi::new();
    twi.respond(&CALIBRATION);
    let monitor = TestMonitor::new();

    let mut bme280 = Bme280::new(&mut twi, CONFIG, &monitor);
    block_on(bme280.initialize()).unwrap();
    drop(bme280);

    assert!(!twi
        .transfers
        .iter()
        .any(|t| matches!(t, Transfer::Write { bytes, .. } if bytes[0] == 0xF4)));
}

#[test]
fn second_submit_while_pending_is_rejected() {
    let mut twi = TestTwi::new();
    twi.respond(&CALIBRATION);
    let monitor = TestMonitor::new();

    let mut bme280 = Bme280::new(&mut twi, CONFIG, &monitor);
    block_on(bme280.initialize()).unwrap();
    block_on(bme280.enable()).unwrap();

    bme280.measurement_fetch().unwrap();
    assert_eq!(bme280.measurement_fetch(), Err(Error::Busy));
}

#[test]
fn fetch_completion_notifies_once_and_yields_the_compensated_value() {
    let mut twi = TestTwi::new();
    twi.respond(&CALIBRATION);
    twi.respond(&RAW_SAMPLE);
    let monitor = TestMonitor::new();

    let mut bme280 = Bme280::new(&mut twi, CONFIG, &monitor);
    block_on(bme280.initialize()).unwrap();
    block_on(bme280.enable()).unwrap();
    assert_eq!(monitor.fetched(), 0);

    bme280.measurement_fetch().unwrap();
    block_on(bme280.process()).unwrap();
    assert_eq!(monitor.fetched(), 1);

    let first = bme280.measurement_get().unwrap();
    assert_eq!(first.centidegrees(), 2508);

    // The value is recomputed on demand; without a new fetch it does not
    // change.
    assert_eq!(bme280.measurement_get().unwrap(), first);
    assert_eq!(monitor.fetched(), 1);

    // Completion returned the transaction to idle.
    bme280.measurement_fetch().unwrap();
}

#[test]
fn config_write_completions_do_not_notify() {
    let mut twi = TestTwi::new();
    twi.respond(&CALIBRATION);
    let monitor = TestMonitor::new();

    let mut bme280 = Bme280::new(&mut twi, CONFIG, &monitor);
    block_on(bme280.initialize()).unwrap();
    block_on(bme280.enable()).unwrap();

    assert_eq!(monitor.fetched(), 0);
}

#[test]
fn measurement_get_requires_calibration() {
    let twi = TestTwi::new();
    let monitor = TestMonitor::new();

    let bme280 = Bme280::new(twi, CONFIG, &monitor);
    assert_eq!(bme280.measurement_get(), Err(Error::NotCalibrated));
}

#[test]
fn bus_errors_are_fatal_and_propagate() {
    let mut twi = TestTwi::new();
    twi.fail_next();
    let monitor = TestMonitor::new();

    let mut bme280 = Bme280::new(&mut twi, CONFIG, &monitor);
    assert_eq!(
        block_on(bme280.initialize()),
        Err(Error::Twi(TestTwiError))
    );
}

#[test]
fn signal_monitor_wakes_an_async_observer() {
    let signal: Signal<NoopRawMutex, SensorEvent> = Signal::new();
    let monitor = SignalMonitor::new(&signal);

    let mut twi = TestTwi::new();
    twi.respond(&CALIBRATION);
    twi.respond(&RAW_SAMPLE);

    let mut bme280 = Bme280::new(&mut twi, CONFIG, &monitor);
    block_on(bme280.initialize()).unwrap();
    block_on(bme280.enable()).unwrap();
    bme280.measurement_fetch().unwrap();
    block_on(bme280.process()).unwrap();

    assert_eq!(block_on(signal.wait()), SensorEvent::MeasurementFetched);
}

#[test]
fn secondary_address_is_used_on_the_bus() {
    let mut twi = TestTwi::new();
    twi.respond(&CALIBRATION);
    let monitor = TestMonitor::new();

    let config = Bme280Config {
        address: DeviceAddress::Secondary,
        ..CONFIG
    };
    let mut bme280 = Bme280::new(&mut twi, config, &monitor);
    block_on(bme280.initialize()).unwrap();
    drop(bme280);

    assert!(matches!(
        twi.transfers[0],
        Transfer::WriteThenRead { address: 0x77, .. }
    ));
}
