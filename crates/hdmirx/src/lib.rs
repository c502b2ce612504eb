//! HDMI receiver register dump analyzer.
//!
//! Pipeline: dump text → [`BankTable`] (one [`RegBank`] per located
//! section) → [`decode`] → [`SignalSnapshot`] → report tree.
//!
//! ```
//! use hdmirx::{decode, BankTable};
//!
//! let text = "hdmi map\n--------\n\
//!             0x00 | 00 00 00 00 00 30 00 03 E8 02 BC 00 00 00 00 00\n\
//!             0x10 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00\n\
//!             0x20 | 00 64 00 32 00 32 00 00 00 00 00 64 00 00 00 3C\n\
//!             0x30 | 00 00 00 28 00 00 00 00 00 00 00 00 00 00 00 00\n\
//!             0x40 | 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00\n\
//!             0x50 | 00 0A 40 03\n";
//! let table = BankTable::parse(text);
//! let snapshot = decode(&table).unwrap();
//! assert_eq!(snapshot.width, 1000);
//! assert_eq!(snapshot.tmds_clock_mhz, 20.5);
//! ```

pub use hdmirx_decode::{
    decode, Colorspace, DecodeError, LinkMode, SignalSnapshot, TriState,
};
pub use hdmirx_dump::{Bank, BankTable, DumpError};
pub use hdmirx_regbank::{RegBank, RegBankError};
pub use hdmirx_report::{el, snapshot_report, text, Node};
