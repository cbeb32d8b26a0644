use std::io::BufRead;

use crate::config::ConverterConfig;
use crate::constants::IOD_MAX_LEN;
use crate::error::{Rejection, Result};
use crate::iod::{MpcRecord, transcode};
use crate::output::RecordSink;

/// Totals for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Every line read, including skipped ones.
    pub lines_read: usize,
    pub records_written: usize,
}

/// Feeds IOD lines through the transcoder into a sink.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a single line, given without its terminator. `line_no` is
    /// only used for log messages.
    ///
    /// Lines longer than 200 bytes are refused here, before the transcoder
    /// sees them.
    pub fn convert_line(&self, line: &[u8], line_no: usize) -> Option<MpcRecord> {
        if line.len() > IOD_MAX_LEN {
            log::warn!("Line {}: skipped, {}", line_no, Rejection::TooLong(line.len()));
            return None;
        }
        match transcode(line, &self.config) {
            Ok(record) => Some(record),
            Err(reason) => {
                log::debug!("Line {}: skipped, {}", line_no, reason);
                None
            }
        }
    }

    /// Convert every line of `input`, writing records to `sink`.
    ///
    /// Lines that are not IOD records are skipped. Only I/O failures abort
    /// the run; records already written stay written.
    pub fn run<R: BufRead, S: RecordSink>(
        &self,
        mut input: R,
        sink: &mut S,
    ) -> Result<ConversionSummary> {
        let mut summary = ConversionSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines_read += 1;

            if let Some(record) = self.convert_line(trim_line_ending(&buf), summary.lines_read) {
                sink.write_record(&record)?;
                summary.records_written += 1;
            }
        }

        sink.flush()?;
        log::info!(
            "Converted {} of {} lines",
            summary.records_written,
            summary.lines_read
        );
        Ok(summary)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::config::TimeFormat;
    use crate::output::TeeSink;
    use crate::test_utils::{IodLineBuilder, SAMPLE_IOD_LINE, captured_logs};
    use log::Level;

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc"), b"abc");
    }

    #[test]
    fn test_run_skips_non_iod_lines() {
        let input = format!(
            "# header comment\n{}\n\nshort\n{}\r\n",
            SAMPLE_IOD_LINE,
            IodLineBuilder::new().station("4171").build()
        );
        let mut records: Vec<MpcRecord> = Vec::new();
        let summary = Converter::default()
            .run(Cursor::new(input), &mut records)
            .unwrap();

        assert_eq!(
            summary,
            ConversionSummary {
                lines_read: 5,
                records_written: 2
            }
        );
        assert_eq!(records[0].field(77..80), "GRR");
        assert_eq!(records[1].field(77..80), "CBa");
    }

    #[test]
    fn test_run_last_line_without_newline() {
        let mut records: Vec<MpcRecord> = Vec::new();
        let summary = Converter::default()
            .run(Cursor::new(SAMPLE_IOD_LINE), &mut records)
            .unwrap();
        assert_eq!(summary.records_written, 1);
    }

    #[test]
    fn test_run_keeps_lines_with_invalid_utf8_remarks() {
        let mut input = SAMPLE_IOD_LINE.as_bytes().to_vec();
        input[70] = 0xff;
        input.push(b'\n');
        input.extend_from_slice(SAMPLE_IOD_LINE.as_bytes());

        let mut records: Vec<MpcRecord> = Vec::new();
        let summary = Converter::default()
            .run(Cursor::new(input), &mut records)
            .unwrap();
        assert_eq!(summary.lines_read, 2);
        assert_eq!(summary.records_written, 2);
        assert_eq!(records[0], records[1]);
    }

    #[test]
    fn test_run_keeps_multibyte_remarks_in_place() {
        let input = format!("{} Jürgen Müller\n", SAMPLE_IOD_LINE);
        let mut records: Vec<MpcRecord> = Vec::new();
        Converter::default()
            .run(Cursor::new(input), &mut records)
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field(65..70), " 5.2 ");
        assert_eq!(records[0].field(77..80), "GRR");
    }

    #[test]
    fn test_run_skips_long_lines() {
        let logs = captured_logs();
        let input = format!("{:<250}\n{}\n", SAMPLE_IOD_LINE, SAMPLE_IOD_LINE);
        let mut records: Vec<MpcRecord> = Vec::new();
        let summary = Converter::default()
            .run(Cursor::new(input), &mut records)
            .unwrap();
        assert_eq!(summary.records_written, 1);
        assert!(logs.contains(Level::Warn, "line is 250 characters, limit is 200"));
    }

    #[test]
    fn test_convert_line_length_limit() {
        let converter = Converter::default();
        let at_limit = format!("{:<200}", SAMPLE_IOD_LINE);
        assert!(converter.convert_line(at_limit.as_bytes(), 1).is_some());

        let over = format!("{:<201}", SAMPLE_IOD_LINE);
        assert!(converter.convert_line(over.as_bytes(), 2).is_none());
    }

    #[test]
    fn test_run_standard_time_to_tee() {
        let converter = Converter::new(ConverterConfig {
            time_format: TimeFormat::Standard,
            ..ConverterConfig::default()
        });
        let mut sink = TeeSink::new(Vec::new(), Some(Vec::new()));
        converter
            .run(Cursor::new(SAMPLE_IOD_LINE), &mut sink)
            .unwrap();

        let (primary, secondary) = sink.into_inner();
        let text = String::from_utf8(primary).unwrap();
        assert_eq!(text.as_bytes(), secondary.unwrap().as_slice());
        assert_eq!(&text[14..32], "C2014 11 20.066115");
        assert_eq!(text.len(), 81);
    }
}
