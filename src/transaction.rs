//! Single-outstanding-transfer discipline.

/// A transfer was submitted while another was outstanding.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Busy;

/// Tracks the one transfer that may be in flight at a time, together with
/// the register a write-then-read transfer targets, so the completion path
/// knows what the received bytes mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transaction {
    Idle,
    Pending { target: Option<u8> },
}

impl Transaction {
    /// Mark a transfer as outstanding. Rejected unless idle.
    pub fn begin(&mut self, target: Option<u8>) -> Result<(), Busy> {
        match self {
            Transaction::Idle => {
                *self = Transaction::Pending { target };
                Ok(())
            }
            Transaction::Pending { .. } => Err(Busy),
        }
    }

    /// Return to idle, yielding the pending target register, if any.
    pub fn finish(&mut self) -> Option<u8> {
        match core::mem::replace(self, Transaction::Idle) {
            Transaction::Pending { target } => target,
            Transaction::Idle => None,
        }
    }
}
