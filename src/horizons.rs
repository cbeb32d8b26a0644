//! JPL Horizons vector tables to DASO ephemerides.
//!
//! Horizons must be asked for a text `VECTORS` table in equatorial
//! coordinates with units of AU. Positions only is enough; velocities are
//! carried through when present, range and light-time columns are ignored.
//!
//! The DASO file starts with a one-line summary (first epoch, step size,
//! record count), then one line per epoch, then the Horizons header for
//! reference:
//!
//! ```text
//!  2458849.50000   1.000000    3
//!  2458849.50000   -0.1234567890    0.8901234568    0.3860000000
//!  ...
//! ```

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};

use crate::error::{ConvertError, Result};

const EPOCH_MARK: (usize, &str) = (17, " = A.D.");
const EPOCH_SUFFIX: (usize, &str) = (42, ":00.0000 TDB");
const VELOCITY_HEADER: &str = "   VX    VY    VZ";
const START_OF_EPHEMERIS: &str = "$$SOE";

/// Value columns for unlabelled and `X =`-labelled tables.
const PLAIN_COLUMNS: [usize; 3] = [1, 24, 47];
const LABELLED_COLUMNS: [usize; 3] = [4, 30, 56];

#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisRecord {
    pub jd: f64,
    pub position: [f64; 3],
    pub velocity: Option<[f64; 3]>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizonsEphemeris {
    pub records: Vec<EphemerisRecord>,
    /// Input lines before `$$SOE`.
    pub header: Vec<String>,
}

impl HorizonsEphemeris {
    pub fn parse<R: BufRead>(input: R) -> Result<Self> {
        let lines = input.lines().collect::<io::Result<Vec<String>>>()?;

        let header = lines
            .iter()
            .take_while(|line| !line.starts_with(START_OF_EPHEMERIS))
            .cloned()
            .collect();

        let mut records = Vec::new();
        let mut state_vectors = false;
        let mut iter = lines.iter();
        while let Some(line) = iter.next() {
            if let Some(jd) = epoch_of(line) {
                let truncated = || ConvertError::TruncatedEphemeris { jd };
                let position_line = iter.next().ok_or_else(truncated)?;
                let columns = if position_line.as_bytes().get(1) == Some(&b'X') {
                    LABELLED_COLUMNS
                } else {
                    PLAIN_COLUMNS
                };
                let position = read_triplet(position_line, columns);
                let velocity = if state_vectors {
                    let velocity_line = iter.next().ok_or_else(truncated)?;
                    Some(read_triplet(velocity_line, columns))
                } else {
                    None
                };
                records.push(EphemerisRecord {
                    jd,
                    position,
                    velocity,
                });
            } else if line.starts_with(VELOCITY_HEADER) {
                state_vectors = true;
            }
        }

        log::info!("Read {} ephemeris records", records.len());
        Ok(Self { records, header })
    }

    pub fn start_jd(&self) -> f64 {
        self.records.first().map_or(0.0, |r| r.jd)
    }

    /// Interval between the first two epochs, zero with fewer than two.
    pub fn step_size(&self) -> f64 {
        match self.records.as_slice() {
            [first, second, ..] => second.jd - first.jd,
            _ => 0.0,
        }
    }

    pub fn write_daso<W: Write>(&self, mut out: W, created: DateTime<Utc>) -> io::Result<()> {
        writeln!(
            out,
            "{:13.5} {:10.6} {:4}",
            self.start_jd(),
            self.step_size(),
            self.records.len()
        )?;
        for record in &self.records {
            let [x, y, z] = record.position;
            write!(out, "{:13.5}{:16.10}{:16.10}{:16.10}", record.jd, x, y, z)?;
            if let Some([vx, vy, vz]) = record.velocity {
                write!(out, " {:16.12}{:16.12}{:16.12}", vx, vy, vz)?;
            }
            writeln!(out)?;
        }
        writeln!(
            out,
            "\n\nCreated from Horizons data by 'jpl2mpc', ver {}, {}",
            env!("CARGO_PKG_VERSION"),
            created.format("%Y-%m-%dT%H:%M:%SZ")
        )?;
        for line in &self.header {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

/// Julian date of an epoch line, `None` for any other line.
fn epoch_of(line: &str) -> Option<f64> {
    let has = |(col, text): (usize, &str)| line.get(col..col + text.len()) == Some(text);
    if !has(EPOCH_MARK) || !has(EPOCH_SUFFIX) {
        return None;
    }
    let jd = leading_float(line);
    (jd > 2_000_000.0 && jd < 3_000_000.0).then_some(jd)
}

fn read_triplet(line: &str, columns: [usize; 3]) -> [f64; 3] {
    columns.map(|col| line.get(col..).map_or(0.0, leading_float))
}

/// The number at the start of `text`, like C's `atof`: leading whitespace
/// is skipped, parsing stops at the first character that cannot extend
/// the number, and no number at all reads as zero.
pub fn leading_float(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0.0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }
    text[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use approx::assert_relative_eq;
    use chrono::TimeZone;

    use super::*;

    const PLAIN: &str = "\
*******************************************************************************
Target body name: Gaia (spacecraft) (-139479)
*******************************************************************************
$$SOE
2458849.500000000 = A.D. 2020-Jan-01 00:00:00.0000 TDB
 -8.510154516557538E-03  1.020040049787617E-02  1.854131565474402E-03
2458850.500000000 = A.D. 2020-Jan-02 00:00:00.0000 TDB
 -8.473302232734791E-03  1.024162808296981E-02  1.871470127380463E-03
$$EOE
";

    const LABELLED_STATE: &str = "\
Reference frame : ICRF
            JDTDB
   VX    VY    VZ
$$SOE
2458849.500000000 = A.D. 2020-Jan-01 00:00:00.0000 TDB
 X =-8.510154516557538E-03 Y = 1.020040049787617E-02 Z = 1.854131565474402E-03
 VX= 3.730286345624584E-05 VY= 4.060316327632542E-05 VZ= 1.773567432085107E-05
2458849.750000000 = A.D. 2020-Jan-01 06:00:00.0000 TDB
 X =-8.501000000000000E-03 Y = 1.021000000000000E-02 Z = 1.858000000000000E-03
 VX= 3.731000000000000E-05 VY= 4.061000000000000E-05 VZ= 1.774000000000000E-05
$$EOE
";

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("2458849.500000000 = A.D."), 2458849.5);
        assert_eq!(leading_float("  -8.5E-03  1.0"), -8.5e-3);
        assert_eq!(leading_float("1.5e+2x"), 150.0);
        assert_eq!(leading_float("12e"), 12.0);
        assert_eq!(leading_float("7.e-"), 7.0);
        assert_eq!(leading_float(".25"), 0.25);
        assert_eq!(leading_float("X = 1"), 0.0);
        assert_eq!(leading_float(""), 0.0);
        assert_eq!(leading_float("-"), 0.0);
    }

    #[test]
    fn test_epoch_detection() {
        assert_eq!(
            epoch_of("2458849.500000000 = A.D. 2020-Jan-01 00:00:00.0000 TDB "),
            Some(2458849.5)
        );
        assert_eq!(
            epoch_of("2458849.500000000 = A.D. 2020-Jan-01 00:00:00.0000 TDB"),
            Some(2458849.5)
        );
        assert_eq!(
            epoch_of("1458849.500000000 = A.D. 2020-Jan-01 00:00:00.0000 TDB "),
            None
        );
        assert_eq!(
            epoch_of("2458849.500000000 = A.D. 2020-Jan-01 00:00:30.0000 TDB "),
            None
        );
        assert_eq!(epoch_of("2458849.5"), None);
    }

    #[test]
    fn test_parse_plain_positions() {
        let eph = HorizonsEphemeris::parse(Cursor::new(PLAIN)).unwrap();
        assert_eq!(eph.records.len(), 2);
        assert_eq!(eph.header.len(), 3);
        assert_relative_eq!(eph.start_jd(), 2458849.5);
        assert_relative_eq!(eph.step_size(), 1.0);

        let first = &eph.records[0];
        assert_relative_eq!(first.position[0], -8.510154516557538e-3);
        assert_relative_eq!(first.position[1], 1.020040049787617e-2);
        assert_relative_eq!(first.position[2], 1.854131565474402e-3);
        assert!(first.velocity.is_none());
    }

    #[test]
    fn test_parse_labelled_state_vectors() {
        let eph = HorizonsEphemeris::parse(Cursor::new(LABELLED_STATE)).unwrap();
        assert_eq!(eph.records.len(), 2);
        assert_relative_eq!(eph.step_size(), 0.25);

        let first = &eph.records[0];
        assert_relative_eq!(first.position[2], 1.854131565474402e-3);
        let velocity = first.velocity.unwrap();
        assert_relative_eq!(velocity[0], 3.730286345624584e-5);
        assert_relative_eq!(velocity[2], 1.773567432085107e-5);
    }

    #[test]
    fn test_truncated_input() {
        let input = "2458849.500000000 = A.D. 2020-Jan-01 00:00:00.0000 TDB \n";
        let result = HorizonsEphemeris::parse(Cursor::new(input));
        assert!(matches!(
            result,
            Err(ConvertError::TruncatedEphemeris { jd }) if jd == 2458849.5
        ));
    }

    #[test]
    fn test_empty_input() {
        let eph = HorizonsEphemeris::parse(Cursor::new("")).unwrap();
        assert_eq!(eph.start_jd(), 0.0);
        assert_eq!(eph.step_size(), 0.0);

        let mut out = Vec::new();
        eph.write_daso(&mut out, created()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("      0.00000   0.000000    0\n"));
    }

    #[test]
    fn test_write_daso_positions() {
        let eph = HorizonsEphemeris::parse(Cursor::new(PLAIN)).unwrap();
        let mut out = Vec::new();
        eph.write_daso(&mut out, created()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "2458849.50000   1.000000    2");
        assert_eq!(
            lines[1],
            "2458849.50000   -0.0085101545    0.0102004005    0.0018541316"
        );
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "");
        assert_eq!(
            lines[5],
            format!(
                "Created from Horizons data by 'jpl2mpc', ver {}, 2026-01-02T03:04:05Z",
                env!("CARGO_PKG_VERSION")
            )
        );
        assert_eq!(lines[6], PLAIN.lines().next().unwrap());
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_write_daso_state_vectors() {
        let eph = HorizonsEphemeris::parse(Cursor::new(LABELLED_STATE)).unwrap();
        let mut out = Vec::new();
        eph.write_daso(&mut out, created()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let record = text.lines().nth(1).unwrap();

        assert_eq!(record.len(), 13 + 3 * 16 + 1 + 3 * 16);
        assert!(record.ends_with("  0.000037302863  0.000040603163  0.000017735674"));
    }
}
