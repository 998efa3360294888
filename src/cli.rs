//! Command line driver.
//!
//! `ppm-filter <in-file> <out-file> <filter> [blur-length]`
//!
//! The filter and its parameters are resolved before the input is read, so
//! a usage error never touches either file.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::info;
use tracing::level_filters::LevelFilter;

use crate::errors::Result;
use crate::filters::Filter;
use crate::ppm;

pub const USAGE: &str =
    "USAGE: ppm-filter <in-file> <out-file> <grayscale|invert|emboss|motionblur> {motion-blur-length}";

#[derive(Parser, Debug)]
#[command(author, version, about = "apply a spatial filter to a P3 image")]
pub struct Cli {
    /// input P3 image file
    pub input: PathBuf,

    /// output P3 image file
    pub output: PathBuf,

    /// filter name (grayscale, greyscale, invert, emboss, motionblur)
    pub filter: String,

    /// filter parameters (motionblur: blur length)
    #[arg(allow_negative_numbers = true)]
    pub params: Vec<String>,

    /// increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the requested filter and its parameters.
    pub fn filter(&self) -> Result<Filter> {
        Filter::parse(&self.filter, self.params.as_slice())
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Read the input, apply the filter and write the output.
///
/// Nothing is written unless reading, decoding and filtering all succeed.
pub fn run(cli: &Cli) -> Result<()> {
    let filter = cli.filter()?;

    let mut image = ppm::read_file(&cli.input)?;
    info!(
        input = %cli.input.display(),
        width = image.width(),
        height = image.height(),
        %filter,
        "applying filter"
    );

    filter.apply(&mut image);

    ppm::write_file(&image, &cli.output)?;
    info!(output = %cli.output.display(), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PpmFilterError;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["ppm-filter", "in.ppm", "out.ppm", "emboss"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.ppm"));
        assert_eq!(cli.output, PathBuf::from("out.ppm"));
        assert_eq!(cli.filter().unwrap(), Filter::Emboss);
        assert_eq!(cli.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn test_parse_motionblur_length() {
        let cli =
            Cli::try_parse_from(["ppm-filter", "-vv", "a", "b", "motionblur", "4"]).unwrap();
        assert_eq!(cli.filter().unwrap(), Filter::MotionBlur { length: 4 });
        assert_eq!(cli.log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_negative_blur_length_is_usage_error() {
        let cli = Cli::try_parse_from(["ppm-filter", "a", "b", "motionblur", "-3"]).unwrap();
        assert!(matches!(cli.filter(), Err(PpmFilterError::UsageError(_))));
    }

    #[test]
    fn test_missing_arguments() {
        assert!(Cli::try_parse_from(["ppm-filter", "a", "b"]).is_err());
    }

    #[test]
    fn test_usage_error_skips_input() {
        // the input does not exist; a usage error must be reported first
        let cli = Cli::try_parse_from(["ppm-filter", "/nonexistent/in.ppm", "out.ppm", "blur"])
            .unwrap();
        assert!(matches!(run(&cli), Err(PpmFilterError::UsageError(_))));
    }
}
