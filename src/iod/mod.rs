//! IOD to MPC record transcoding.
//!
//! The IOD (Interactive Orbit Determination) observation format is
//! described at <http://www.satobs.org/position/IODformat.html>.
//! Each line is converted on its own; nothing carries over between lines.

mod angle;
mod record;
mod transcode;

pub use angle::{AngleMode, DecFormat, RaFormat};
pub use record::MpcRecord;
pub use transcode::{check_structure, fractional_day, transcode};
