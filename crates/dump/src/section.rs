//! Bank identifiers and section location within the dump text.

use std::fmt;

/// The register banks a dump may carry, in dump order.
///
/// The set is closed: new chip register groups require extending this
/// enum, not config-driven discovery. Header matching is case-sensitive
/// and matches the literal lowercase name as a substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    Hdmi,
    Io,
    Rep,
    Edid,
    If,
    Cec,
    Cp,
    Dpll,
}

impl Bank {
    /// All known banks, in the order they are reported.
    pub const ALL: [Bank; 8] = [
        Bank::Hdmi,
        Bank::Io,
        Bank::Rep,
        Bank::Edid,
        Bank::If,
        Bank::Cec,
        Bank::Cp,
        Bank::Dpll,
    ];

    /// The literal section header this bank is located by.
    pub fn header(self) -> &'static str {
        match self {
            Bank::Hdmi => "hdmi",
            Bank::Io => "io",
            Bank::Rep => "rep",
            Bank::Edid => "edid",
            Bank::If => "if",
            Bank::Cec => "cec",
            Bank::Cp => "cp",
            Bank::Dpll => "dpll",
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Locates `bank`'s textual section inside the full dump text.
///
/// The section starts at the first occurrence of the bank's header and
/// runs to the earliest following occurrence of any *other* known
/// header, or to the end of the text. Returns `None` when the header
/// does not occur at all.
pub fn find_section(text: &str, bank: Bank) -> Option<&str> {
    let start = text.find(bank.header())?;
    let scan_from = start + bank.header().len();
    let rest = &text[scan_from..];
    let end = Bank::ALL
        .iter()
        .filter(|other| **other != bank)
        .filter_map(|other| rest.find(other.header()))
        .min()
        .map_or(text.len(), |pos| scan_from + pos);
    Some(&text[start..end])
}
