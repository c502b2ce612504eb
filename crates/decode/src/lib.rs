//! Signal status decoding for hdmirx.
//!
//! Interprets the captured register banks of one dump into a
//! [`SignalSnapshot`]: video timing, TMDS clock, polarity, colorspace,
//! and link/lock status. The `hdmi` bank is mandatory; fields derived
//! from the `io` bank degrade to [`TriState::Unknown`] when that bank
//! was not captured.
//!
//! # Example
//!
//! ```
//! use hdmirx_decode::{decode, DecodeError};
//! use hdmirx_dump::{Bank, BankTable};
//!
//! let table = BankTable::parse("no banks here at all");
//! assert!(matches!(
//!     decode(&table),
//!     Err(DecodeError::MissingBank(Bank::Hdmi))
//! ));
//! ```

mod decoder;
mod error;
pub mod regs;
mod snapshot;

pub use decoder::decode;
pub use error::DecodeError;
pub use snapshot::{Colorspace, LinkMode, SignalSnapshot, TriState};
