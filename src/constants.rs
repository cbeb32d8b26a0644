//! Column layout of the IOD input and MPC output records.
//!
//! All offsets are 0-based byte positions. Ranges are half-open, so a
//! `Range` of `6..15` names the nine bytes at columns 6 through 14.

use std::ops::Range;

/// Minimum length of an IOD line (without terminator) to be considered.
pub const IOD_MIN_LEN: usize = 64;

/// Longest input line the converter accepts, excluding the terminator.
pub const IOD_MAX_LEN: usize = 200;

/// Width of a produced MPC record.
pub const MPC_LINE_LEN: usize = 80;

/// Input layout (IOD).
pub mod iod {
    use super::Range;

    /// International designator, `YY NNNPPP` style.
    pub const DESIGNATOR: Range<usize> = 6..15;
    /// Four-character station code.
    pub const STATION: Range<usize> = 16..20;
    /// Must be a space.
    pub const SEPARATOR: usize = 22;
    /// Digit block holding `YYYYMMDDHHMMSSsss`.
    pub const DIGIT_BLOCK: Range<usize> = 23..40;
    /// Full four-digit year.
    pub const YEAR: Range<usize> = 23..27;
    /// Second digit of the year, `'9'` for the 1900s.
    pub const CENTURY_DIGIT: usize = 24;
    /// `YYMMDD`.
    pub const SHORT_DATE: Range<usize> = 25..31;
    pub const MONTH: Range<usize> = 27..29;
    /// `DDHHMMSSss`, decoded digit by digit in standard time format.
    pub const DAY_AND_TIME: Range<usize> = 29..39;
    /// `HHMMSSsss`.
    pub const TIME_OF_DAY: Range<usize> = 31..40;
    /// Angle format code selecting the RA/Dec sub-format.
    pub const ANGLE_MODE: usize = 44;
    pub const RA_HOURS: Range<usize> = 47..49;
    pub const RA_MINUTES: Range<usize> = 49..51;
    /// RA seconds, or the first two decimal-minute digits.
    pub const RA_SUB: Range<usize> = 51..53;
    pub const RA_LAST_DIGIT: usize = 53;
    /// Sign and two degree digits.
    pub const DEC_DEGREES: Range<usize> = 54..57;
    pub const DEC_DECIMAL_DEGREES: Range<usize> = 57..61;
    pub const DEC_ARCMIN: Range<usize> = 57..59;
    /// Arc seconds, or hundredths of an arc minute.
    pub const DEC_SUB: Range<usize> = 59..61;
    /// Sign, tens, units and tenths of the visual magnitude.
    pub const MAGNITUDE: Range<usize> = 66..70;
}

/// Output layout (MPC 80-column).
pub mod mpc {
    use super::Range;

    /// Two-digit century prefixed to the designator.
    pub const CENTURY: Range<usize> = 0..2;
    pub const DESIGNATOR: Range<usize> = 2..11;
    pub const DESIGNATOR_DASH: usize = 4;
    /// Observation type, always `'C'`.
    pub const NOTE: usize = 14;

    /// Extended time: `CYYMMDD:HHMMSSsss`.
    pub const EXT_CENTURY: usize = 15;
    pub const EXT_DATE: Range<usize> = 16..22;
    pub const EXT_COLON: usize = 22;
    pub const EXT_TIME: Range<usize> = 23..32;

    /// Standard time: `YYYY MM DD.dddddd`.
    pub const STD_YEAR: Range<usize> = 15..19;
    pub const STD_MONTH: Range<usize> = 20..22;
    pub const STD_DAY: Range<usize> = 23..32;

    pub const RA_HOURS: Range<usize> = 32..34;
    pub const RA_MINUTES: Range<usize> = 35..37;
    pub const RA_SUB: Range<usize> = 38..40;
    /// Point before decimal minutes (`HH MM.mmm`).
    pub const RA_MINUTES_POINT: usize = 37;
    /// Point before tenths of seconds (`HH MM SS.s`).
    pub const RA_SECONDS_POINT: usize = 40;
    pub const RA_SECONDS_TENTHS: usize = 41;
    /// Last decimal-minute digit.
    pub const RA_MINUTES_LAST: usize = 40;

    pub const DEC_DEGREES: Range<usize> = 44..47;
    pub const DEC_DEGREES_POINT: usize = 47;
    pub const DEC_DECIMAL_DEGREES: Range<usize> = 48..52;
    pub const DEC_ARCMIN: Range<usize> = 48..50;
    pub const DEC_ARCMIN_POINT: usize = 50;
    pub const DEC_SUB: Range<usize> = 51..53;

    pub const MAG_TENS: usize = 65;
    pub const MAG_UNITS: usize = 66;
    pub const MAG_POINT: usize = 67;
    pub const MAG_TENTHS: usize = 68;

    pub const OBSERVER: Range<usize> = 77..80;
}

/// Placeholder written when a station code has no abbreviation.
pub const UNKNOWN_OBSERVER: &str = "???";
