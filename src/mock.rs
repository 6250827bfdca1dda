//! Test doubles for the bus capability.

use std::collections::VecDeque;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::bus::{AsyncRegisterBus, RegisterBus};

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write-only transaction, register byte included
    Write { addr: u8, data: Vec<u8> },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

/// Mock I2C implementation
///
/// Records all transactions for test verification, serves pre-programmed read
/// data and can be told to NACK writes to one register.
#[derive(Debug, Default)]
pub struct MockI2c {
    transactions: Vec<I2cTransaction>,
    read_data: VecDeque<u8>,
    nack_register: Option<u8>,
    nack_reads: bool,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.clone()
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// Queue data to return for read operations
    pub fn set_read_data(&mut self, data: &[u8]) {
        self.read_data.extend(data.iter().copied());
    }

    /// Fail every write whose first byte is `register`.
    pub fn nack_writes_to(&mut self, register: u8) {
        self.nack_register = Some(register);
    }

    pub fn nack_reads(&mut self) {
        self.nack_reads = true;
    }

    fn run(&mut self, addr: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
        let mut written = Vec::new();
        let mut read_len = 0;
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => written.extend_from_slice(bytes),
                Operation::Read(buf) => read_len += buf.len(),
            }
        }

        let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data);
        if read_len == 0 {
            if self.nack_register.is_some() && written.first() == self.nack_register.as_ref() {
                return Err(nack);
            }
            self.transactions.push(I2cTransaction::Write {
                addr,
                data: written,
            });
            return Ok(());
        }

        if self.nack_reads {
            return Err(nack);
        }
        for operation in operations.iter_mut() {
            if let Operation::Read(buf) = operation {
                for byte in buf.iter_mut() {
                    *byte = self.read_data.pop_front().unwrap_or(0);
                }
            }
        }
        self.transactions.push(I2cTransaction::WriteRead {
            addr,
            write_data: written,
            read_len,
        });
        Ok(())
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

impl embedded_hal_async::i2c::I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

/// A transport that accepts every write but only ever delivers `delivered`
/// bytes per read, like an SMBus adapter capped below the requested length.
#[derive(Debug)]
pub struct ShortReadBus {
    pub delivered: usize,
    pub writes: Vec<(u8, u8, Vec<u8>)>,
}

impl ShortReadBus {
    pub fn new(delivered: usize) -> Self {
        Self {
            delivered,
            writes: Vec::new(),
        }
    }

    fn fill(&self, buf: &mut [u8]) -> usize {
        let len = self.delivered.min(buf.len());
        buf[..len].fill(0x7F);
        len
    }
}

impl RegisterBus for ShortReadBus {
    type Error = ErrorKind;

    fn write_block(&mut self, address: u8, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.writes.push((address, register, data.to_vec()));
        Ok(())
    }

    fn read_block(
        &mut self,
        _address: u8,
        _register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        Ok(self.fill(buf))
    }
}

impl AsyncRegisterBus for ShortReadBus {
    type Error = ErrorKind;

    async fn write_block(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        self.writes.push((address, register, data.to_vec()));
        Ok(())
    }

    async fn read_block(
        &mut self,
        _address: u8,
        _register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        Ok(self.fill(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_i2c_nack_only_hits_selected_register() {
        let mut i2c = MockI2c::new();
        i2c.nack_writes_to(0x23);

        assert!(i2c.write(0x6B, &[0x20, 0x0F]).is_ok());
        assert_eq!(
            i2c.write(0x6B, &[0x23, 0x10]),
            Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data))
        );
        assert_eq!(i2c.transactions().len(), 1);
    }

    #[test]
    fn test_mock_i2c_reads_drain_queue() {
        let mut i2c = MockI2c::new();
        i2c.set_read_data(&[0x12, 0x34]);

        let mut buf = [0u8; 3];
        i2c.write_read(0x6B, &[0xA8], &mut buf).unwrap();
        assert_eq!(buf, [0x12, 0x34, 0x00]);
    }
}
