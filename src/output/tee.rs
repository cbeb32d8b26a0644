use std::io::{self, Write};

use super::RecordSink;
use crate::iod::MpcRecord;

/// Writes each record, newline terminated, to a primary writer and an
/// optional secondary one.
pub struct TeeSink<P: Write, S: Write> {
    primary: P,
    secondary: Option<S>,
}

impl<P: Write, S: Write> TeeSink<P, S> {
    pub fn new(primary: P, secondary: Option<S>) -> Self {
        Self { primary, secondary }
    }

    pub fn into_inner(self) -> (P, Option<S>) {
        (self.primary, self.secondary)
    }
}

impl<P: Write> TeeSink<P, io::Sink> {
    pub fn primary_only(primary: P) -> Self {
        Self::new(primary, None)
    }
}

impl<P: Write, S: Write> RecordSink for TeeSink<P, S> {
    fn write_record(&mut self, record: &MpcRecord) -> io::Result<()> {
        writeln!(self.primary, "{}", record)?;
        if let Some(secondary) = self.secondary.as_mut() {
            writeln!(secondary, "{}", record)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        if let Some(secondary) = self.secondary.as_mut() {
            secondary.flush()?;
        }
        Ok(())
    }
}
