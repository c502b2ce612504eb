//! Register dump text parser.
//!
//! Input files are loosely structured text captures: an arbitrary
//! preamble followed by one titled hex-byte table per register bank.
//! Table rows look like `0x10 | 1A 2B 3C ...` with an optional
//! pipe-delimited row-index column, and a row of hyphens separates each
//! table's title from its first data row.
//!
//! [`BankTable::parse`] locates the section for every known bank
//! header and converts its hex listing into a
//! [`RegBank`](hdmirx_regbank::RegBank). Failures are isolated per
//! bank: a malformed table leaves that one bank missing and records
//! the error, it never fails the whole file.

mod error;
mod section;
mod table;

pub use error::DumpError;
pub use section::Bank;
pub use table::{parse_table, BankTable};
