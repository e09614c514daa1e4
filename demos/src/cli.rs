//! Command-line interface for the demos.

use std::{env, fmt, path::PathBuf};

use thiserror::Error;

pub const USAGE: &str = "\
usage: rayframe-demos [hello|orbit] [--headless <frames>] [--config <path>]

  hello               green cube and centered text (default)
  orbit               orbiting camera over a grid; Space pauses, R resets
  --headless <n>      run n frames without a window, recording draw calls
  --config <path>     TOML file with [window] and [camera] tables";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    #[default]
    Hello,
    Orbit,
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Demo::Hello => "hello",
            Demo::Orbit => "orbit",
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("unknown demo or argument: {0}")]
    Unknown(String),
    #[error("{0} expects a value")]
    MissingValue(&'static str),
    #[error("--headless expects a frame count, got {0:?}")]
    InvalidFrames(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cli {
    pub demo: Demo,
    pub headless_frames: Option<u64>,
    pub config: Option<PathBuf>,
    pub help: bool,
}

impl Cli {
    pub fn parse() -> Result<Self, CliError> {
        Self::parse_from(env::args().skip(1))
    }

    pub fn parse_from<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut cli = Cli::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "hello" => cli.demo = Demo::Hello,
                "orbit" => cli.demo = Demo::Orbit,
                "-h" | "--help" => cli.help = true,
                "--headless" => {
                    let value = args.next().ok_or(CliError::MissingValue("--headless"))?;
                    let frames = value
                        .parse()
                        .map_err(|_| CliError::InvalidFrames(value.clone()))?;
                    cli.headless_frames = Some(frames);
                }
                "--config" => {
                    let value = args.next().ok_or(CliError::MissingValue("--config"))?;
                    cli.config = Some(PathBuf::from(value));
                }
                _ => return Err(CliError::Unknown(arg)),
            }
        }

        Ok(cli)
    }
}
