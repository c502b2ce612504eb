//! HTML report assembly for hdmirx.
//!
//! A report is a plain tree of [`Node`]s (tag, ordered attributes,
//! ordered children, or a text leaf) assembled with the [`el`] and
//! [`text`] helpers and rendered to indented HTML. The decoding core
//! knows nothing about this crate; [`snapshot_report`] consumes
//! finished [`SignalSnapshot`](hdmirx_decode::SignalSnapshot) records.

mod node;
mod report;

pub use node::{el, text, Node};
pub use report::snapshot_report;
