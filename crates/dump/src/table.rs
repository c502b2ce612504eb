//! Hex table parsing and the per-dump bank table.

use indexmap::IndexMap;

use crate::error::DumpError;
use crate::section::{find_section, Bank};
use hdmirx_regbank::RegBank;

/// Parses one bank's textual section into a [`RegBank`].
///
/// The last hyphen in the section ends the title/separator row;
/// everything before it is discarded. Each remaining line keeps only
/// the portion after its last `|` (row-index column), the kept portions
/// are joined, and the result is tokenized into two-digit hex bytes.
///
/// An empty table after the separator yields a zero-length bank.
pub fn parse_table(section: &str) -> Result<RegBank, DumpError> {
    let dash = section.rfind('-').ok_or(DumpError::MalformedTable)?;
    let body = &section[dash + 1..];
    let rows: Vec<&str> = body
        .lines()
        .map(|line| match line.rfind('|') {
            Some(pipe) => line[pipe + 1..].trim(),
            None => line.trim(),
        })
        .collect();
    let flat = rows.join(" ");

    let mut data = Vec::new();
    for (index, token) in flat.split_whitespace().enumerate() {
        let valid = token.len() == 2 && token.bytes().all(|b| b.is_ascii_hexdigit());
        if !valid {
            return Err(DumpError::MalformedByteToken {
                token: token.to_owned(),
                index,
            });
        }
        let byte = u8::from_str_radix(token, 16).map_err(|_| DumpError::MalformedByteToken {
            token: token.to_owned(),
            index,
        })?;
        data.push(byte);
    }
    Ok(RegBank::new(data))
}

/// The parsed banks of one dump file.
///
/// Maps every known [`Bank`] to its captured [`RegBank`], or to nothing
/// when the header was absent or its table malformed. Built once per
/// input file and immutable afterwards; iteration order is the fixed
/// bank order.
#[derive(Debug, Clone)]
pub struct BankTable {
    banks: IndexMap<Bank, Option<RegBank>>,
    errors: Vec<(Bank, DumpError)>,
}

impl BankTable {
    /// Parses the full text of one dump file.
    ///
    /// Every known bank header is looked up independently; a bank whose
    /// header is absent, or whose table fails to parse, is recorded as
    /// missing. Table errors are kept with their bank so callers can
    /// surface them.
    pub fn parse(text: &str) -> Self {
        let mut banks = IndexMap::with_capacity(Bank::ALL.len());
        let mut errors = Vec::new();
        for bank in Bank::ALL {
            let parsed = match find_section(text, bank) {
                Some(section) => match parse_table(section) {
                    Ok(regs) => Some(regs),
                    Err(err) => {
                        errors.push((bank, err));
                        None
                    }
                },
                None => None,
            };
            banks.insert(bank, parsed);
        }
        Self { banks, errors }
    }

    /// The captured bank, if the dump carried one.
    pub fn get(&self, bank: Bank) -> Option<&RegBank> {
        self.banks.get(&bank).and_then(|slot| slot.as_ref())
    }

    /// Iterates all known banks with their capture state, in bank order.
    pub fn banks(&self) -> impl Iterator<Item = (Bank, Option<&RegBank>)> {
        self.banks.iter().map(|(bank, slot)| (*bank, slot.as_ref()))
    }

    /// Per-bank parse errors encountered while building the table.
    pub fn errors(&self) -> &[(Bank, DumpError)] {
        &self.errors
    }
}
