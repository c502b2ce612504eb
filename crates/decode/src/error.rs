//! Decoder error type.

use hdmirx_dump::Bank;
use hdmirx_regbank::RegBankError;
use thiserror::Error;

/// Error type for decoding a bank table into a snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A bank the decode cannot proceed without was not captured.
    #[error("required bank `{0}` is missing from the dump")]
    MissingBank(Bank),
    /// A mandatory register read fell outside the captured bank.
    #[error("bank `{bank}`: {source}")]
    Read {
        /// Bank the failed read targeted.
        bank: Bank,
        /// The underlying accessor error.
        source: RegBankError,
    },
}
