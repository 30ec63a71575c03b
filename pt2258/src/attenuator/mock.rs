//! Test doubles for the I2C bus and delay provider.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, ErrorType, I2c, Operation};

const LOG_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError;

impl i2c::Error for MockError {
    fn kind(&self) -> i2c::ErrorKind {
        i2c::ErrorKind::NoAcknowledge(i2c::NoAcknowledgeSource::Address)
    }
}

/// Mock I2C that records every accepted write in order.
///
/// A failing write is not recorded, mirroring a NACKed transfer.
pub(crate) struct MockI2c {
    /// `(7-bit address, first byte, length)` per write.
    log: [(u8, u8, usize); LOG_SIZE],
    pub(crate) count: usize,
    /// Index of the write attempt that returns an error.
    fail_at: Option<usize>,
    attempts: usize,
}

impl MockI2c {
    pub(crate) fn new() -> Self {
        Self {
            log: [(0, 0, 0); LOG_SIZE],
            count: 0,
            fail_at: None,
            attempts: 0,
        }
    }

    /// A bus whose `n`th write attempt (0-based) is not acknowledged.
    pub(crate) fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::new()
        }
    }

    pub(crate) fn address_at(&self, idx: usize) -> u8 {
        assert!(idx < self.count, "no write #{idx}");
        self.log[idx].0
    }

    pub(crate) fn byte_at(&self, idx: usize) -> u8 {
        assert!(idx < self.count, "no write #{idx}");
        self.log[idx].1
    }

    pub(crate) fn len_at(&self, idx: usize) -> usize {
        assert!(idx < self.count, "no write #{idx}");
        self.log[idx].2
    }
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl I2c for MockI2c {
    fn read(&mut self, _addr: u8, _buf: &mut [u8]) -> Result<(), Self::Error> {
        unreachable!("PT2258 is write-only")
    }

    fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(attempt) {
            return Err(MockError);
        }
        self.log[self.count] = (addr, bytes.first().copied().unwrap_or(0), bytes.len());
        self.count += 1;
        Ok(())
    }

    fn write_read(
        &mut self,
        _addr: u8,
        _wr: &[u8],
        _rd: &mut [u8],
    ) -> Result<(), Self::Error> {
        unreachable!("PT2258 is write-only")
    }

    fn transaction(
        &mut self,
        addr: u8,
        ops: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in ops.iter_mut() {
            match op {
                Operation::Write(bytes) => self.write(addr, bytes)?,
                Operation::Read(_) => unreachable!("PT2258 is write-only"),
            }
        }
        Ok(())
    }
}

/// Delay provider that only accumulates the requested time.
pub(crate) struct MockDelay {
    pub(crate) total_ns: u64,
}

impl MockDelay {
    pub(crate) fn new() -> Self {
        Self { total_ns: 0 }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
