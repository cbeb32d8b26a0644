mod tee;

use std::io;

use crate::iod::MpcRecord;

pub use self::tee::TeeSink;

/// Destination for converted records.
pub trait RecordSink {
    fn write_record(&mut self, record: &MpcRecord) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn write_record(&mut self, record: &MpcRecord) -> io::Result<()> {
        (**self).write_record(record)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Collects records in memory.
impl RecordSink for Vec<MpcRecord> {
    fn write_record(&mut self, record: &MpcRecord) -> io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}
