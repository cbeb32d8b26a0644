use crate::config::{ConverterConfig, TimeFormat};
use crate::constants::{IOD_MIN_LEN, UNKNOWN_OBSERVER, iod, mpc};
use crate::error::Rejection;
use crate::observers::ObserverTable;

use super::angle::AngleMode;
use super::record::MpcRecord;

/// Convert one IOD line (without its terminator) into an MPC record.
///
/// The line must pass the structural checks of [`check_structure`]; any
/// line that does not is returned as a [`Rejection`] and produces no
/// output. Decoding itself never fails. Offsets are byte offsets, so the
/// line is taken as raw bytes and free text past the decoded columns may
/// hold anything.
pub fn transcode<L>(line: &L, config: &ConverterConfig) -> Result<MpcRecord, Rejection>
where
    L: AsRef<[u8]> + ?Sized,
{
    let line = line.as_ref();
    check_structure(line)?;

    let mut out = MpcRecord::blank();
    write_designator(line, &mut out);
    out.set(mpc::NOTE, b'C');
    write_time(line, config.time_format, &mut out);

    let mode = AngleMode::from_code(line[iod::ANGLE_MODE]);
    mode.ra_format().write(line, &mut out);
    mode.dec_format().write(line, &mut out);

    write_magnitude(line, &mut out);
    write_observer(line, &config.observers, &mut out);
    Ok(out)
}

/// Gate applied before any field is decoded.
///
/// The 17 digits starting at offset 23 double as a layout check: if they
/// are not exactly where the date and time belong, the line is not IOD.
pub fn check_structure(line: &[u8]) -> Result<(), Rejection> {
    if line.len() < IOD_MIN_LEN {
        return Err(Rejection::TooShort(line.len()));
    }
    // Remarks after the magnitude are never read.
    let decoded = &line[..line.len().min(iod::MAGNITUDE.end)];
    if !decoded.is_ascii() {
        return Err(Rejection::NotAscii);
    }
    if line[iod::SEPARATOR] != b' ' {
        return Err(Rejection::MissingSeparator);
    }
    let stop = iod::DIGIT_BLOCK.start
        + line[iod::DIGIT_BLOCK.start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
    if stop != iod::DIGIT_BLOCK.end {
        return Err(Rejection::DigitBlock { stop });
    }
    Ok(())
}

fn write_designator(line: &[u8], out: &mut MpcRecord) {
    let designator = &line[iod::DESIGNATOR];
    let century: &[u8; 2] = if matches!(designator[0], b'5'..=b'9') {
        b"19"
    } else {
        b"20"
    };
    out.copy(mpc::CENTURY, century);
    out.copy(mpc::DESIGNATOR, designator);
    out.set(mpc::DESIGNATOR_DASH, b'-');
}

fn write_time(line: &[u8], format: TimeFormat, out: &mut MpcRecord) {
    match format {
        TimeFormat::Extended => {
            let century = if line[iod::CENTURY_DIGIT] == b'9' {
                b'J'
            } else {
                b'K'
            };
            out.set(mpc::EXT_CENTURY, century);
            out.copy(mpc::EXT_DATE, &line[iod::SHORT_DATE]);
            out.set(mpc::EXT_COLON, b':');
            out.copy(mpc::EXT_TIME, &line[iod::TIME_OF_DAY]);
        }
        TimeFormat::Standard => {
            out.copy(mpc::STD_YEAR, &line[iod::YEAR]);
            out.copy(mpc::STD_MONTH, &line[iod::MONTH]);
            let digits = line[iod::DAY_AND_TIME].first_chunk().unwrap_or(&[b'0'; 10]);
            let day = format!("{:09.6}", fractional_day(digits));
            // Out-of-range hours can push the day past 99; keep the field width.
            out.copy(mpc::STD_DAY, &day.as_bytes()[..mpc::STD_DAY.len()]);
        }
    }
}

/// Day of month with its fraction, from the ten digits `DDHHMMSSss`
/// (hundredths of a second in the last pair).
pub fn fractional_day(digits: &[u8; 10]) -> f64 {
    let pair = |i: usize| {
        let tens = digits[i].saturating_sub(b'0');
        let units = digits[i + 1].saturating_sub(b'0');
        f64::from(tens) * 10.0 + f64::from(units)
    };
    pair(0) + pair(2) / 24.0 + pair(4) / 1440.0 + pair(6) / 86400.0 + pair(8) / 8_640_000.0
}

// TODO: negative magnitudes ('-' sign) are dropped as well; confirm with
// observers whether they should be written.
fn write_magnitude(line: &[u8], out: &mut MpcRecord) {
    let Some(&[sign, tens, units, tenths]) = line.get(iod::MAGNITUDE) else {
        return;
    };
    if sign != b'+' {
        return;
    }
    if tens != b'0' {
        out.set(mpc::MAG_TENS, tens);
    }
    out.set(mpc::MAG_UNITS, units);
    out.set(mpc::MAG_POINT, b'.');
    out.set(mpc::MAG_TENTHS, tenths);
}

fn write_observer(line: &[u8], observers: &ObserverTable, out: &mut MpcRecord) {
    let code = observers
        .lookup(&line[iod::STATION])
        .map_or(UNKNOWN_OBSERVER.as_bytes(), |abbr| &abbr[..]);
    out.copy(mpc::OBSERVER, code);
}
