use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_ORIGIN: u16 = 0x8000;
pub const DEFAULT_CYCLES: u64 = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing program image path")]
    MissingImage,
    #[error("{flag} expects a value")]
    MissingValue { flag: String },
    #[error("invalid address {0:?}")]
    InvalidAddress(String),
    #[error("invalid cycle count {0:?}")]
    InvalidCycles(String),
    #[error("unknown option {0:?}")]
    UnknownOption(String),
}

/// What the host program should do with an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub image: PathBuf,
    pub origin: u16,
    pub cycles: u64,
    pub disasm: bool,
    pub trace: bool,
}

/// Accepts `$C000`, `0xC000` or `C000`.
pub fn parse_address(text: &str) -> Result<u16, ConfigError> {
    let digits = text
        .strip_prefix('$')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).map_err(|_| ConfigError::InvalidAddress(text.to_string()))
}

impl RunConfig {
    /// Parse the arguments following the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut image = None;
        let mut origin = DEFAULT_ORIGIN;
        let mut cycles = DEFAULT_CYCLES;
        let mut disasm = false;
        let mut trace = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--origin" => {
                    let value = args.next().ok_or(ConfigError::MissingValue { flag: arg.clone() })?;
                    origin = parse_address(&value)?;
                }
                "--cycles" => {
                    let value = args.next().ok_or(ConfigError::MissingValue { flag: arg.clone() })?;
                    cycles = value
                        .replace('_', "")
                        .parse()
                        .map_err(|_| ConfigError::InvalidCycles(value.clone()))?;
                }
                "--disasm" => disasm = true,
                "--trace" => trace = true,
                other if other.starts_with("--") => {
                    return Err(ConfigError::UnknownOption(other.to_string()));
                }
                _ => image = Some(PathBuf::from(&arg)),
            }
        }

        Ok(RunConfig {
            image: image.ok_or(ConfigError::MissingImage)?,
            origin,
            cycles,
            disasm,
            trace,
        })
    }
}
