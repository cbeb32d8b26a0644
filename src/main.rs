use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use iod2mpc::config::{ConverterConfig, TimeFormat, TrailingArgs};
use iod2mpc::output::TeeSink;
use iod2mpc::processing::Converter;

#[derive(Parser, Debug)]
#[command(name = "iod2mpc", version)]
#[command(about = "Convert IOD satellite observations to MPC 80-column records")]
#[command(
    long_about = "Convert IOD satellite observations to MPC 80-column records.\n\n\
    Records are printed to stdout. A bare argument after the input file names a \
    file that receives a copy. By default times are written as CYYMMDD:HHMMSSsss \
    (millisecond precision, understood by Find_Orb); -f writes the MPC standard \
    YYYY MM DD.dddddd (0.000001 day = 86.4 ms). Other dash options are ignored."
)]
struct Args {
    /// IOD observation file
    input: PathBuf,

    /// Output file and flags, e.g. `out.mpc -f`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,

    /// Time format for the MPC records
    #[arg(short = 't', long, value_enum)]
    time_format: Option<TimeFormat>,

    /// TOML configuration file (time format, extra observer codes)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

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

    let input = File::open(&args.input)
        .with_context(|| format!("Couldn't find '{}'", args.input.display()))?;

    let mut config = match &args.config {
        Some(path) => ConverterConfig::load(path)?,
        None => ConverterConfig::default(),
    };
    if let Some(time_format) = args.time_format {
        config.time_format = time_format;
    }
    let trailing = TrailingArgs::parse(args.rest.as_slice());
    trailing.apply(&mut config);

    let copy = trailing
        .output
        .as_ref()
        .map(|path| {
            File::create(path)
                .map(BufWriter::new)
                .with_context(|| format!("Couldn't create '{}'", path.display()))
        })
        .transpose()?;

    log::info!(
        "Converting {} ({:?} time, {} observer codes)",
        args.input.display(),
        config.time_format,
        config.observers.len()
    );

    let stdout = io::stdout().lock();
    let mut sink = TeeSink::new(BufWriter::new(stdout), copy);
    let summary = Converter::new(config).run(BufReader::new(input), &mut sink)?;

    log::info!(
        "{} records written from {} lines",
        summary.records_written,
        summary.lines_read
    );
    Ok(())
}
