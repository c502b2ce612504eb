//! Flat register bank with bounds-checked accessors.

use crate::RegBankError;

/// A captured register bank: an immutable byte sequence with addressed
/// read accessors.
///
/// Multi-byte reads are big-endian, matching the chip's register
/// convention, and always return unsigned values over the full range of
/// the read width. Every accessor is bounds-checked; a read that would
/// run past the end of the capture fails with
/// [`RegBankError::OutOfRange`] instead of truncating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegBank {
    data: Vec<u8>,
}

impl RegBank {
    /// Creates a bank from the exact byte sequence of a capture.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Number of bytes captured for this bank.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the capture is empty (header present, table empty).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw captured bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    fn check(&self, offset: usize, width: usize) -> Result<(), RegBankError> {
        if offset.checked_add(width).is_none_or(|end| end > self.data.len()) {
            return Err(RegBankError::OutOfRange {
                offset,
                width,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    /// Reads an unsigned 8-bit register.
    #[inline]
    pub fn read8(&self, offset: usize) -> Result<u8, RegBankError> {
        self.check(offset, 1)?;
        Ok(self.data[offset])
    }

    /// Reads an unsigned 16-bit register (big-endian).
    #[inline]
    pub fn read16(&self, offset: usize) -> Result<u16, RegBankError> {
        self.check(offset, 2)?;
        Ok(u16::from_be_bytes([self.data[offset], self.data[offset + 1]]))
    }

    /// Reads an unsigned 32-bit register (big-endian).
    #[inline]
    pub fn read32(&self, offset: usize) -> Result<u32, RegBankError> {
        self.check(offset, 4)?;
        Ok(u32::from_be_bytes([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]))
    }
}
