//! Converter configuration.
//!
//! Defaults match the command-line tool run without flags: extended time
//! format and the built-in observer table. A TOML file can switch the time
//! format and add stations:
//!
//! ```toml
//! time_format = "standard"
//! replace_builtin_observers = false
//!
//! [[observer]]
//! code = "9999"
//! abbreviation = "XyZ"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::observers::{ObserverEntry, ObserverTable};

/// How the observation time is written into the MPC record.
///
/// # Example
/// ```
/// use iod2mpc::config::TimeFormat;
///
/// assert_eq!(TimeFormat::default(), TimeFormat::Extended);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// `CYYMMDD:HHMMSSsss`, millisecond precision. Only Find_Orb reads it.
    #[default]
    Extended,
    /// `YYYY MM DD.dddddd`, the MPC standard, 0.000001 day precision.
    Standard,
}

/// Options fixed for the whole run.
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    pub time_format: TimeFormat,
    pub observers: ObserverTable,
}

impl ConverterConfig {
    pub fn use_extended_time_format(&self) -> bool {
        self.time_format == TimeFormat::Extended
    }

    /// Parse a TOML configuration, merging its stations into the built-in table.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        file.into_config()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            ConvertError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    time_format: Option<TimeFormat>,
    #[serde(default)]
    replace_builtin_observers: bool,
    #[serde(default, rename = "observer")]
    observers: Vec<ObserverSection>,
}

#[derive(Debug, Deserialize)]
struct ObserverSection {
    code: String,
    abbreviation: String,
}

impl ConfigFile {
    fn into_config(self) -> Result<ConverterConfig> {
        let extra = self
            .observers
            .iter()
            .map(|o| ObserverEntry::new(&o.code, &o.abbreviation))
            .collect::<Result<Vec<_>>>()?;

        let observers = if self.replace_builtin_observers {
            ObserverTable::new(extra)?
        } else {
            ObserverTable::builtin().extended_with(extra)?
        };

        Ok(ConverterConfig {
            time_format: self.time_format.unwrap_or_default(),
            observers,
        })
    }
}

/// Arguments following the input file, read the way the original
/// `iod2mpc` tool reads them: a bare word names the copy file, `-f` asks
/// for standard time, and any other dash option is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailingArgs {
    pub output: Option<PathBuf>,
    pub standard_time: bool,
    pub ignored: Vec<String>,
}

impl TrailingArgs {
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        let mut parsed = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            match arg.strip_prefix('-') {
                None => parsed.output = Some(PathBuf::from(arg)),
                Some(flag) if flag.starts_with('f') => parsed.standard_time = true,
                Some(_) => parsed.ignored.push(arg.to_string()),
            }
        }
        parsed
    }

    /// Fold these arguments into `config`, logging each ignored option.
    pub fn apply(&self, config: &mut ConverterConfig) {
        if self.standard_time {
            config.time_format = TimeFormat::Standard;
        }
        for arg in &self.ignored {
            log::warn!("Option '{}' ignored", arg);
        }
    }
}
