/// A 73-character IOD record from station 0433 for 2014-067A.
pub const SAMPLE_IOD_LINE: &str =
    "40258 14 067A   0433 G 20141120013512345 17 15 1234567+123456 37 S+052 10";

/// Builds an IOD line field by field, starting from [`SAMPLE_IOD_LINE`].
///
/// # Example
/// ```
/// use iod2mpc::test_utils::IodLineBuilder;
///
/// let line = IodLineBuilder::new().station("4171").angle_mode(b'2').build();
/// assert_eq!(&line[16..20], "4171");
/// assert_eq!(&line[44..45], "2");
/// ```
#[derive(Debug, Clone)]
pub struct IodLineBuilder {
    buf: Vec<u8>,
}

impl IodLineBuilder {
    pub fn new() -> Self {
        Self {
            buf: SAMPLE_IOD_LINE.as_bytes().to_vec(),
        }
    }

    fn put(mut self, col: usize, text: &str) -> Self {
        let end = col + text.len();
        if self.buf.len() < end {
            self.buf.resize(end, b' ');
        }
        self.buf[col..end].copy_from_slice(text.as_bytes());
        self
    }

    /// Nine characters at offset 6, e.g. `"98 067A  "`.
    pub fn designator(self, designator: &str) -> Self {
        self.put(6, designator)
    }

    pub fn station(self, code: &str) -> Self {
        self.put(16, code)
    }

    /// Seventeen characters `YYYYMMDDHHMMSSsss` at offset 23.
    pub fn timestamp(self, timestamp: &str) -> Self {
        self.put(23, timestamp)
    }

    pub fn angle_mode(mut self, mode: u8) -> Self {
        self.buf[44] = mode;
        self
    }

    /// Seven characters at offset 47.
    pub fn ra(self, ra: &str) -> Self {
        self.put(47, ra)
    }

    /// Seven characters (sign first) at offset 54.
    pub fn dec(self, dec: &str) -> Self {
        self.put(54, dec)
    }

    /// Four characters `sMMm` at offset 66.
    pub fn magnitude(self, magnitude: &str) -> Self {
        self.put(66, magnitude)
    }

    pub fn build(self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

impl Default for IodLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
