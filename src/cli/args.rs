//! Command-line argument parsing.

use thiserror::Error;

use crate::startup::AppConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI with the given overrides
    Run(CliOverrides),
}

/// Values given on the command line; they win over the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub films_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl CliOverrides {
    /// Apply the overrides on top of `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = &self.films_url {
            config.films_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
    #[error("unknown argument '{0}'")]
    Unknown(String),
}

pub const USAGE: &str = "\
Usage: filmreel [OPTIONS]

Options:
  -u, --url <URL>         Films endpoint (env FILMREEL_URL)
  -t, --timeout <SECS>    Request timeout in seconds (env FILMREEL_TIMEOUT_SECS)
  -V, --version           Print version
  -h, --help              Print this help

Keys: j/k or arrows to move, Enter to open, Esc to go back, r to retry, q to quit.
Logs go to the platform data directory; set FILMREEL_LOG to change the filter.";

/// Parse command-line arguments (including the program name).
///
/// # Examples
///
/// ```
/// use filmreel::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["filmreel".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--url" | "-u" => {
                let value = inline
                    .or_else(|| args.next())
                    .ok_or_else(|| ArgsError::MissingValue(flag.clone()))?;
                overrides.films_url = Some(value);
            }
            "--timeout" | "-t" => {
                let value = inline
                    .or_else(|| args.next())
                    .ok_or_else(|| ArgsError::MissingValue(flag.clone()))?;
                let secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or(ArgsError::InvalidTimeout(value))?;
                overrides.timeout_secs = Some(secs);
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(CliCommand::Run(overrides))
}
