//! Angle format codes.
//!
//! Column 45 of an IOD record says how RA and Dec are written:
//!
//! | code | RA          | Dec         |
//! |------|-------------|-------------|
//! | `1`  | `HHMMSSs`   | `+DDMMSS`   |
//! | `2`  | `HHMMmmm`   | `+DDMMmm`   |
//! | `3`  | `HHMMmmm`   | `+DDdddd`   |
//!
//! Codes 4 to 7 describe azimuth/elevation, which MPC records cannot carry.
//! Those and any other value fall back to decimal-minute RA and
//! degree/minute/second Dec.

use crate::constants::{iod, mpc};

use super::record::MpcRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleMode {
    /// `1`: RA seconds, Dec arc seconds.
    Seconds,
    /// `2`: decimal minutes for both.
    DecimalMinutes,
    /// `3`: RA decimal minutes, Dec decimal degrees.
    DecimalDegrees,
    /// Any other code byte.
    Other(u8),
}

impl AngleMode {
    pub fn from_code(code: u8) -> Self {
        match code {
            b'1' => AngleMode::Seconds,
            b'2' => AngleMode::DecimalMinutes,
            b'3' => AngleMode::DecimalDegrees,
            other => AngleMode::Other(other),
        }
    }

    pub fn ra_format(self) -> RaFormat {
        match self {
            AngleMode::Seconds => RaFormat::HoursMinutesSeconds,
            AngleMode::DecimalMinutes | AngleMode::DecimalDegrees | AngleMode::Other(_) => {
                RaFormat::HoursDecimalMinutes
            }
        }
    }

    pub fn dec_format(self) -> DecFormat {
        match self {
            AngleMode::DecimalDegrees => DecFormat::DecimalDegrees,
            AngleMode::DecimalMinutes => DecFormat::DegreesDecimalMinutes,
            AngleMode::Seconds | AngleMode::Other(_) => DecFormat::DegreesMinutesSeconds,
        }
    }
}

/// Output shape of the RA field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaFormat {
    /// `HH MM SS.s`
    HoursMinutesSeconds,
    /// `HH MM.mmm`
    HoursDecimalMinutes,
}

impl RaFormat {
    pub(crate) fn write(self, line: &[u8], out: &mut MpcRecord) {
        out.copy(mpc::RA_HOURS, &line[iod::RA_HOURS]);
        out.copy(mpc::RA_MINUTES, &line[iod::RA_MINUTES]);
        out.copy(mpc::RA_SUB, &line[iod::RA_SUB]);
        let last = line[iod::RA_LAST_DIGIT];
        match self {
            RaFormat::HoursMinutesSeconds => {
                out.set(mpc::RA_SECONDS_POINT, b'.');
                out.set(mpc::RA_SECONDS_TENTHS, last);
            }
            RaFormat::HoursDecimalMinutes => {
                out.set(mpc::RA_MINUTES_POINT, b'.');
                out.set(mpc::RA_MINUTES_LAST, last);
            }
        }
    }
}

/// Output shape of the Dec field. The sign travels inside the copied
/// degree bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecFormat {
    /// `sDD MM SS`
    DegreesMinutesSeconds,
    /// `sDD MM.mm`
    DegreesDecimalMinutes,
    /// `sDD.dddd`
    DecimalDegrees,
}

impl DecFormat {
    pub(crate) fn write(self, line: &[u8], out: &mut MpcRecord) {
        out.copy(mpc::DEC_DEGREES, &line[iod::DEC_DEGREES]);
        match self {
            DecFormat::DecimalDegrees => {
                out.set(mpc::DEC_DEGREES_POINT, b'.');
                out.copy(mpc::DEC_DECIMAL_DEGREES, &line[iod::DEC_DECIMAL_DEGREES]);
            }
            DecFormat::DegreesDecimalMinutes => {
                out.copy(mpc::DEC_ARCMIN, &line[iod::DEC_ARCMIN]);
                out.set(mpc::DEC_ARCMIN_POINT, b'.');
                out.copy(mpc::DEC_SUB, &line[iod::DEC_SUB]);
            }
            DecFormat::DegreesMinutesSeconds => {
                out.copy(mpc::DEC_ARCMIN, &line[iod::DEC_ARCMIN]);
                out.copy(mpc::DEC_SUB, &line[iod::DEC_SUB]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(AngleMode::from_code(b'1'), AngleMode::Seconds);
        assert_eq!(AngleMode::from_code(b'2'), AngleMode::DecimalMinutes);
        assert_eq!(AngleMode::from_code(b'3'), AngleMode::DecimalDegrees);
        assert_eq!(AngleMode::from_code(b'5'), AngleMode::Other(b'5'));
        assert_eq!(AngleMode::from_code(b' '), AngleMode::Other(b' '));
    }

    #[test]
    fn test_format_dispatch() {
        use super::DecFormat as D;
        use super::RaFormat as R;

        let cases = [
            (b'1', R::HoursMinutesSeconds, D::DegreesMinutesSeconds),
            (b'2', R::HoursDecimalMinutes, D::DegreesDecimalMinutes),
            (b'3', R::HoursDecimalMinutes, D::DecimalDegrees),
            (b'4', R::HoursDecimalMinutes, D::DegreesMinutesSeconds),
            (b'x', R::HoursDecimalMinutes, D::DegreesMinutesSeconds),
        ];
        for (code, ra, dec) in cases {
            let mode = AngleMode::from_code(code);
            assert_eq!(mode.ra_format(), ra, "RA for code {}", code as char);
            assert_eq!(mode.dec_format(), dec, "Dec for code {}", code as char);
        }
    }
}
