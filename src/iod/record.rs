use std::fmt;
use std::ops::Range;

use crate::constants::MPC_LINE_LEN;

/// A space-padded MPC 80-column record under construction.
///
/// Only ASCII bytes are ever written, so the record is always valid UTF-8.
#[derive(Clone, PartialEq, Eq)]
pub struct MpcRecord {
    buf: [u8; MPC_LINE_LEN],
}

impl MpcRecord {
    pub fn blank() -> Self {
        Self {
            buf: [b' '; MPC_LINE_LEN],
        }
    }

    /// Copy `src` into the field at `range`. Lengths must match.
    pub(crate) fn copy(&mut self, range: Range<usize>, src: &[u8]) {
        debug_assert!(src.is_ascii());
        self.buf[range].copy_from_slice(src);
    }

    pub(crate) fn set(&mut self, col: usize, byte: u8) {
        debug_assert!(byte.is_ascii());
        self.buf[col] = byte;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_str(&self) -> &str {
        // Every write path is ASCII-only.
        std::str::from_utf8(&self.buf).unwrap_or_default()
    }

    /// Text of the field at `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` reaches past column 80. Use [`MpcRecord::get`] for
    /// ranges that are not known to fit.
    pub fn field(&self, range: Range<usize>) -> &str {
        &self.as_str()[range]
    }

    /// Text of the field at `range`, or `None` if it reaches past column 80.
    pub fn get(&self, range: Range<usize>) -> Option<&str> {
        self.as_str().get(range)
    }
}

impl Default for MpcRecord {
    fn default() -> Self {
        Self::blank()
    }
}

impl fmt::Display for MpcRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for MpcRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MpcRecord({:?})", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_record() {
        let record = MpcRecord::blank();
        assert_eq!(record.as_str().len(), MPC_LINE_LEN);
        assert!(record.as_str().chars().all(|c| c == ' '));
    }

    #[test]
    fn test_copy_and_set() {
        let mut record = MpcRecord::blank();
        record.copy(2..5, b"abc");
        record.set(79, b'Z');
        assert_eq!(record.field(0..6), "  abc ");
        assert_eq!(record.field(79..80), "Z");
        assert_eq!(record.to_string().len(), MPC_LINE_LEN);
    }

    #[test]
    fn test_get_checks_bounds() {
        let mut record = MpcRecord::blank();
        record.copy(77..80, b"GRR");
        assert_eq!(record.get(77..80), Some("GRR"));
        assert_eq!(record.get(77..81), None);
        assert_eq!(record.get(90..95), None);
    }

    #[test]
    #[should_panic]
    fn test_field_past_end_panics() {
        MpcRecord::blank().field(78..82);
    }
}
