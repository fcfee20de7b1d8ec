//! Test doubles for exercising the driver on the host.

use core::cell::Cell;
use std::collections::VecDeque;
use std::vec::Vec;

use crate::monitor::{SensorEvent, SensorMonitor};
use crate::twi::TwiBus;

/// A transfer submitted to a [`TestTwi`], in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    Write { address: u8, bytes: Vec<u8> },
    WriteThenRead { address: u8, register: u8, len: usize },
}

/// Error injected with [`TestTwi::fail_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestTwiError;

/// A recording mock bus.
///
/// Submissions are recorded in order and complete immediately when awaited;
/// each write-then-read completion pops the next payload queued with
/// [`respond`](TestTwi::respond).
#[derive(Default)]
pub struct TestTwi {
    pub transfers: Vec<Transfer>,
    responses: VecDeque<Vec<u8>>,
    reading: Option<usize>,
    fail_next: bool,
}

impl TestTwi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the payload returned by the next write-then-read transfer.
    pub fn respond(&mut self, bytes: &[u8]) {
        self.responses.push_back(bytes.to_vec());
    }

    /// Fail the next submission with [`TestTwiError`].
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    fn check_fail(&mut self) -> Result<(), TestTwiError> {
        if core::mem::take(&mut self.fail_next) {
            Err(TestTwiError)
        } else {
            Ok(())
        }
    }
}

impl TwiBus for TestTwi {
    type Error = TestTwiError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), TestTwiError> {
        self.check_fail()?;
        self.transfers.push(Transfer::Write {
            address,
            bytes: bytes.to_vec(),
        });
        self.reading = None;
        Ok(())
    }

    fn write_then_read(
        &mut self,
        address: u8,
        register: u8,
        len: usize,
    ) -> Result<(), TestTwiError> {
        self.check_fail()?;
        self.transfers.push(Transfer::WriteThenRead {
            address,
            register,
            len,
        });
        self.reading = Some(len);
        Ok(())
    }

    async fn transfer_done(&mut self, buf: &mut [u8]) -> Result<usize, TestTwiError> {
        match self.reading.take() {
            Some(len) => {
                let payload = self.responses.pop_front().expect("no canned response queued");
                let n = len.min(payload.len()).min(buf.len());
                buf[..n].copy_from_slice(&payload[..n]);
                Ok(n)
            }
            None => Ok(0),
        }
    }
}

/// Monitor that counts delivered events.
#[derive(Default)]
pub struct TestMonitor {
    fetched: Cell<u32>,
}

impl TestMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `MeasurementFetched` events delivered so far.
    pub fn fetched(&self) -> u32 {
        self.fetched.get()
    }
}

impl SensorMonitor for TestMonitor {
    fn notify(&self, event: SensorEvent) {
        match event {
            SensorEvent::MeasurementFetched => self.fetched.set(self.fetched.get() + 1),
        }
    }
}
