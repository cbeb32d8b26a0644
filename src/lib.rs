pub mod config;
pub mod constants;
pub mod error;
pub mod horizons;
pub mod iod;
pub mod observers;
pub mod output;
pub mod processing;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConverterConfig, TimeFormat};
pub use error::{ConvertError, Rejection, Result};
pub use iod::{MpcRecord, transcode};
pub use observers::ObserverTable;
pub use processing::{ConversionSummary, Converter};
