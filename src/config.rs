use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::{ConfigError, DisplayModeRequest};

/// Which flavor of config file is expected
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Variant {
    /// One tuple: `monitor width height refresh`
    Single,
    /// Two tuples, applied as a toggle or to two monitors
    Pair,
}

impl Variant {
    /// Number of tuples the config file must contain
    pub fn tuple_count(self) -> usize {
        match self {
            Variant::Single => 1,
            Variant::Pair => 2,
        }
    }
}

/// Reads the config file at `path` and parses it for `variant`.
pub fn read_config(path: &Path, variant: Variant) -> Result<Vec<DisplayModeRequest>, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        log::debug!("Cannot read {}: {}", path.display(), err);
        ConfigError::Unavailable
    })?;
    parse_config(&contents, variant)
}

/// Parses whitespace separated tuples of `monitor width height refresh`.
///
/// Tokens after the last expected tuple are ignored.
pub fn parse_config(contents: &str, variant: Variant) -> Result<Vec<DisplayModeRequest>, ConfigError> {
    let mut tokens = contents.split_ascii_whitespace();
    (0..variant.tuple_count())
        .map(|_| -> Result<DisplayModeRequest, ConfigError> {
            let monitor = next_int(&mut tokens)?;
            let width = next_int(&mut tokens)?;
            let height = next_int(&mut tokens)?;
            let refresh_rate = next_int(&mut tokens)?;
            Ok(DisplayModeRequest::new(monitor, width, height, refresh_rate))
        })
        .collect()
}

fn next_int<'a, T: FromStr>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<T, ConfigError> {
    tokens
        .next()
        .ok_or(ConfigError::Malformed)?
        .parse()
        .map_err(|_| ConfigError::Malformed)
}
