use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use iod2mpc::horizons::HorizonsEphemeris;

const LONG_ABOUT: &str = "\
JPL2MPC takes input ephemerides generated by HORIZONS and produces files
suitable for use in DASO.

The JPL ephemeris must be in text form (use the 'download/save' option),
with vectors in units of AU, in equatorial (not the default ecliptic!)
coordinates. Position (xyz) output alone is enough; velocities are copied
when present and range/rate/light time are ignored.

A suitable batch request to horizons@ssd.jpl.nasa.gov (subject JOB) sets:
  TABLE_TYPE = 'VECTORS'   CENTER = '500@399'   REF_PLANE = 'FRAME'
  VEC_TABLE = '1'          VEC_CORR = 'NONE'    OUT_UNITS = 'AU-D'
  CSV_FORMAT = 'NO'        VEC_LABELS = 'NO'
plus COMMAND, START_TIME, STOP_TIME and STEP_SIZE for the target.";

#[derive(Parser, Debug)]
#[command(name = "jpl2mpc", version)]
#[command(about = "Convert a JPL Horizons vector table to a DASO ephemeris")]
#[command(long_about = LONG_ABOUT)]
struct Args {
    /// Horizons text ephemeris, e.g. gaia.txt
    input: PathBuf,

    /// Output file (stdout when omitted)
    output: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let input = File::open(&args.input).with_context(|| {
        format!("Couldn't open the Horizons file '{}'", args.input.display())
    })?;
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Couldn't open the output file '{}'", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let ephemeris = HorizonsEphemeris::parse(BufReader::new(input))
        .with_context(|| format!("Failed to get data from '{}'", args.input.display()))?;
    ephemeris.write_daso(output, Utc::now())?;

    log::info!(
        "JD0: {:.6}   Step size: {:.6}   {} steps",
        ephemeris.start_jd(),
        ephemeris.step_size(),
        ephemeris.records.len()
    );
    Ok(())
}
