use std::ffi::OsString;
use std::io::Write;
use std::num::ParseFloatError;

use clap::{CommandFactory, Parser};
use nalgebra::Vector3;
use thiserror::Error;

use crate::observer::Observer;
use crate::topocentric::Sez;

const USAGE: &str = "sez-to-ecef <O_LAT_DEG> <O_LON_DEG> <O_HAE_KM> <S_KM> <E_KM> <Z_KM>";
const ARG_COUNT: usize = 6;

#[derive(Parser, Debug)]
#[command(name = "sez-to-ecef", override_usage = USAGE)]
#[command(about = "Convert an observer-relative SEZ vector to an ECEF position (km)")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Observer lat/lon (degrees), height (km), then S/E/Z (km)
    #[arg(num_args = 0.., allow_hyphen_values = true)]
    values: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(transparent)]
    Clap(#[from] clap::Error),
    #[error("'{input}' is not a number: {source}")]
    NotANumber {
        input: String,
        source: ParseFloatError,
    },
}

/// Observer and SEZ offset taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    pub observer: Observer,
    pub sez: Sez,
}

fn parse_number(input: &str) -> Result<f64, ArgsError> {
    let trimmed = input.trim();
    strip_digit_separators(trimmed)
        .parse()
        .map_err(|source| ArgsError::NotANumber {
            input: input.to_string(),
            source,
        })
}

// `1_000` style separators, only when every underscore sits between two digits
fn strip_digit_separators(input: &str) -> String {
    let bytes = input.as_bytes();
    let separated = bytes.iter().enumerate().all(|(i, b)| {
        *b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if separated {
        input.replace('_', "")
    } else {
        input.to_string()
    }
}

/// Parse the command line.
///
/// The argument count is checked before any value is converted. Returns
/// `Ok(None)` when it is not exactly six, in which case the caller prints
/// [`usage`] and computes nothing.
pub fn parse_args<I, T>(args: I) -> Result<Option<Request>, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    if cli.values.len() != ARG_COUNT {
        return Ok(None);
    }

    let numbers = cli
        .values
        .iter()
        .map(|value| parse_number(value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Request {
        observer: Observer::new(numbers[0], numbers[1], numbers[2]),
        sez: Sez::new(numbers[3], numbers[4], numbers[5]),
    }))
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Write x, y and z (km) one per line.
pub fn write_ecef<W: Write>(out: &mut W, ecef: &Vector3<f64>) -> std::io::Result<()> {
    for component in ecef.iter() {
        writeln!(out, "{}", format_km(*component))?;
    }
    Ok(())
}

/// Shortest round-trip decimal, always with a fractional part; scientific
/// notation with a signed two-digit exponent below 1e-4 and from 1e16 up.
pub fn format_km(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => scientific,
    }
}
