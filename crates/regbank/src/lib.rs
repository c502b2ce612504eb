//! Register bank byte buffer for hdmirx.
//!
//! A [`RegBank`] is the snapshot of one register address space of the
//! receiver chip, captured as a flat byte sequence. All decoding in the
//! higher layers is built on its addressed accessors.
//!
//! # Example
//!
//! ```
//! use hdmirx_regbank::RegBank;
//!
//! let bank = RegBank::new(vec![0x01, 0x02, 0x03, 0x04]);
//! assert_eq!(bank.read8(0).unwrap(), 0x01);
//! assert_eq!(bank.read16(1).unwrap(), 0x0203);
//! assert!(bank.read32(1).is_err());
//! ```

mod bank;

pub use bank::RegBank;

use thiserror::Error;

/// Error type for register bank accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegBankError {
    /// A read would extend past the end of the captured bank.
    #[error("{width}-byte read at offset {offset:#04x} exceeds bank length {len}")]
    OutOfRange {
        /// Starting offset of the failed read.
        offset: usize,
        /// Width of the failed read in bytes.
        width: usize,
        /// Length of the bank.
        len: usize,
    },
}
