mod cli;
mod ellipsoid;
mod observer;
mod topocentric;

use std::io::Write;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let request = match cli::parse_args(std::env::args_os()) {
        Ok(Some(request)) => request,
        Ok(None) => {
            println!("{}", cli::usage());
            return Ok(());
        }
        Err(cli::ArgsError::Clap(err)) => err.exit(),
        Err(err) => return Err(err.into()),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&request, &mut out).context("Failed to write ECEF position")?;
    out.flush()?;

    Ok(())
}

fn run<W: Write>(request: &cli::Request, out: &mut W) -> std::io::Result<()> {
    log::debug!(
        "Converting {:?} relative to {:?}",
        request.sez,
        request.observer
    );

    let ecef = request.observer.locate(&request.sez);
    cli::write_ecef(out, &ecef)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(values: &[&str]) -> String {
        let args = std::iter::once("sez-to-ecef").chain(values.iter().copied());
        let request = cli::parse_args(args).unwrap().unwrap();

        let mut out = Vec::new();
        run(&request, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_equator_prime_meridian_output() {
        assert_eq!(output(&["0", "0", "0", "0", "0", "0"]), "6378.137\n0.0\n0.0\n");
    }

    #[test]
    fn test_zenith_offset_output() {
        assert_eq!(output(&["0", "0", "0", "0", "0", "100"]), "6478.137\n0.0\n0.0\n");
    }

    #[test]
    fn test_leading_dot_negative_latitude_output() {
        let lines: Vec<f64> = output(&["-.5", "0", "0", "0", "0", "0"])
            .lines()
            .map(|l| l.parse().unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2] < 0.0);
    }

    #[test]
    fn test_periodic_longitude_output() {
        let parse = |s: String| -> Vec<f64> { s.lines().map(|l| l.parse().unwrap()).collect() };
        let a = parse(output(&["40", "-75", "0.1", "10", "20", "30"]));
        let b = parse(output(&["40", "285", "0.1", "10", "20", "30"]));
        assert_eq!(a.len(), 3);
        for (a, b) in a.iter().zip(&b) {
            assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
        }
    }
}
