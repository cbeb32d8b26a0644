//! Builders for well-formed IOD lines, and a logger that records messages.

mod iod_line;
mod log_capture;

pub use iod_line::{IodLineBuilder, SAMPLE_IOD_LINE};
pub use log_capture::{CapturedLogs, captured_logs};
