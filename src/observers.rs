//! Station code to observer abbreviation table.
//!
//! IOD records carry a four-digit station number; MPC records end with a
//! three-character observatory code. Stations without a known
//! abbreviation are written as [`UNKNOWN_OBSERVER`](crate::constants::UNKNOWN_OBSERVER).
//!
//! Many more satellite observer sites are listed at
//! <https://github.com/cbassa/sattools/blob/master/data/sites.txt>.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{ConvertError, Result};

/// Built-in stations, in lookup order.
const BUILTIN_OBSERVERS: &[ObserverEntry] = &[
    ObserverEntry::from_bytes(*b"0433", *b"GRR"), // Greg Roberts
    ObserverEntry::from_bytes(*b"1086", *b"AOO"), // Odessa Astronomical Observatory, Kryzhanovka
    ObserverEntry::from_bytes(*b"1244", *b"AMa"), // Andriy Makeyev
    ObserverEntry::from_bytes(*b"1753", *b"VMe"), // Vitaly Mechinsky
    ObserverEntry::from_bytes(*b"1775", *b"Fet"), // Kevin Fetter
    ObserverEntry::from_bytes(*b"1860", *b"SGu"), // Sergey Guryanov, Siberia
    ObserverEntry::from_bytes(*b"4171", *b"CBa"), // Cees Bassa
    ObserverEntry::from_bytes(*b"4172", *b"Alm"), // Almere
    ObserverEntry::from_bytes(*b"4353", *b"Lei"), // Leiden
    ObserverEntry::from_bytes(*b"4355", *b"Cro"), // Cronesteyn
    ObserverEntry::from_bytes(*b"4541", *b"Ran"), // Alberto Rango
    ObserverEntry::from_bytes(*b"4553", *b"SOb"), // unidentified observer, 53.3199N 2.24377W
    ObserverEntry::from_bytes(*b"7778", *b"E12"), // Siding Spring
    ObserverEntry::from_bytes(*b"8049", *b"ScT"), // Roberts Creek 1 (Scott Tilley)
    ObserverEntry::from_bytes(*b"8335", *b"Tu2"), // Tulsa-2
    ObserverEntry::from_bytes(*b"8336", *b"Tu1"), // Tulsa-1
];

static BUILTIN: LazyLock<ObserverTable> = LazyLock::new(|| ObserverTable {
    entries: BUILTIN_OBSERVERS.to_vec(),
});

/// One station mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverEntry {
    code: [u8; 4],
    abbreviation: [u8; 3],
}

impl ObserverEntry {
    /// Build an entry, checking that the code is four ASCII characters and
    /// the abbreviation three.
    pub fn new(code: &str, abbreviation: &str) -> Result<Self> {
        let invalid = || ConvertError::InvalidObserverEntry {
            code: code.to_string(),
            abbreviation: abbreviation.to_string(),
        };
        if !code.is_ascii() || !abbreviation.is_ascii() {
            return Err(invalid());
        }
        Ok(Self {
            code: code.as_bytes().try_into().map_err(|_| invalid())?,
            abbreviation: abbreviation.as_bytes().try_into().map_err(|_| invalid())?,
        })
    }

    const fn from_bytes(code: [u8; 4], abbreviation: [u8; 3]) -> Self {
        Self { code, abbreviation }
    }

    pub fn code(&self) -> &[u8; 4] {
        &self.code
    }

    pub fn abbreviation(&self) -> &[u8; 3] {
        &self.abbreviation
    }
}

/// Immutable, duplicate-free list of station mappings.
///
/// Lookup scans in insertion order and returns the first entry whose code
/// matches byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverTable {
    entries: Vec<ObserverEntry>,
}

impl ObserverTable {
    /// Build a table, rejecting any code that appears twice.
    pub fn new(entries: Vec<ObserverEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.code) {
                return Err(ConvertError::DuplicateObserverCode(
                    String::from_utf8_lossy(&entry.code).into_owned(),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// The stations compiled into the crate.
    pub fn builtin() -> &'static ObserverTable {
        &BUILTIN
    }

    /// Append `extra` after the current entries, validating the result.
    pub fn extended_with(&self, extra: Vec<ObserverEntry>) -> Result<Self> {
        let mut entries = self.entries.clone();
        entries.extend(extra);
        Self::new(entries)
    }

    pub fn lookup(&self, code: &[u8]) -> Option<&[u8; 3]> {
        self.entries
            .iter()
            .find(|entry| entry.code[..] == *code)
            .map(|entry| &entry.abbreviation)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObserverEntry> {
        self.entries.iter()
    }
}

impl Default for ObserverTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
