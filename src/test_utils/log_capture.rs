use std::sync::{Mutex, Once, PoisonError};

use log::{Level, LevelFilter, Metadata, Record};

/// Process-wide logger that keeps every message for later inspection.
///
/// Tests run on several threads and share this logger, so look for text
/// unique to the test rather than counting messages.
pub struct CapturedLogs {
    messages: Mutex<Vec<(Level, String)>>,
}

static CAPTURED: CapturedLogs = CapturedLogs {
    messages: Mutex::new(Vec::new()),
};

/// Install the capturing logger (once) and return it.
///
/// If some other logger was installed first, nothing is captured.
pub fn captured_logs() -> &'static CapturedLogs {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURED).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    &CAPTURED
}

impl CapturedLogs {
    /// Whether a message at `level` containing `text` has been logged.
    pub fn contains(&self, level: Level, text: &str) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(text))
    }
}

impl log::Log for CapturedLogs {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
