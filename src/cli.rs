//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use crate::batch::BatchOptions;
use crate::config::{
    Extraction, MarkerPolicy, PlotConfig, DEFAULT_END_MARKER, DEFAULT_START_MARKER,
};

#[derive(Parser, Debug)]
#[command(
    name = "irviz",
    version,
    about = "Normalize and visualize IR spectra from CSV exports",
    long_about = "Normalize and visualize IR spectra from CSV exports.\n\n\
                  Each <name>.csv is cut down to its XYDATA block, scaled to a maximum of 1.0,\n\
                  saved as <name>_normalized.csv and plotted."
)]
pub struct Cli {
    /// CSV files with IR data (a shell wildcard such as *.csv works).
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// X limits of the plot.
    #[arg(
        short = 'x',
        num_args = 2,
        action = ArgAction::Set,
        overrides_with = "x_limits",
        value_names = ["START", "END"],
        allow_negative_numbers = true
    )]
    pub x_limits: Option<Vec<i64>>,

    /// Y limits of the plot (default: automatic).
    #[arg(
        short = 'y',
        num_args = 2,
        action = ArgAction::Set,
        overrides_with = "y_limits",
        value_names = ["START", "END"],
        allow_negative_numbers = true
    )]
    pub y_limits: Option<Vec<f64>>,

    /// Row marker that precedes the data block.
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_START_MARKER)]
    pub start_marker: String,

    /// Row marker that ends the data block.
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_END_MARKER)]
    pub end_marker: String,

    /// How to treat markers that occur more than once.
    #[arg(long, value_enum, default_value = "strict")]
    pub marker_policy: MarkerPolicyArg,

    /// Ignore markers and cut 19 header and 40 footer rows instead.
    #[arg(long, conflicts_with_all = ["start_marker", "end_marker", "marker_policy"])]
    pub legacy_rows: bool,

    /// Write the normalized files without opening the plot window.
    #[arg(long)]
    pub no_plot: bool,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MarkerPolicyArg {
    /// Each marker must appear exactly once.
    Strict,
    /// Use the first occurrence of each marker.
    First,
}

impl From<MarkerPolicyArg> for MarkerPolicy {
    fn from(arg: MarkerPolicyArg) -> Self {
        match arg {
            MarkerPolicyArg::Strict => MarkerPolicy::Strict,
            MarkerPolicyArg::First => MarkerPolicy::First,
        }
    }
}

impl Cli {
    pub fn plot_config(&self) -> PlotConfig {
        let mut config = PlotConfig::default();
        if let Some([start, end]) = self.x_limits.as_deref() {
            config.x_limits = (*start as f64, *end as f64);
        }
        if let Some([start, end]) = self.y_limits.as_deref() {
            config.y_limits = Some((*start, *end));
        }
        config
    }

    pub fn batch_options(&self) -> BatchOptions {
        let extraction = if self.legacy_rows {
            Extraction::legacy()
        } else {
            Extraction::Markers {
                start: self.start_marker.clone(),
                end: self.end_marker.clone(),
                policy: self.marker_policy.into(),
            }
        };
        BatchOptions { extraction }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("irviz").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["a.csv"]);
        assert_eq!(cli.files, vec![PathBuf::from("a.csv")]);
        assert_eq!(cli.plot_config(), PlotConfig::default());
        assert_eq!(cli.batch_options().extraction, Extraction::default());
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn axis_limits_before_and_after_files() {
        let cli = parse(&["-x", "3500", "600", "a.csv", "b.csv", "-y", "0", "1.1"]);
        assert_eq!(cli.files.len(), 2);
        let cfg = cli.plot_config();
        assert_eq!(cfg.x_limits, (3500.0, 600.0));
        assert_eq!(cfg.y_limits, Some((0.0, 1.1)));
    }

    #[test]
    fn repeated_limits_keep_the_last_pair() {
        let cli = parse(&["-x", "3000", "600", "-x", "2000", "700", "a.csv"]);
        assert_eq!(cli.plot_config().x_limits, (2000.0, 700.0));
        let cli = parse(&["-y", "0", "1", "a.csv", "-y", "0.2", "0.9"]);
        assert_eq!(cli.plot_config().y_limits, Some((0.2, 0.9)));
        assert_eq!(cli.files, vec![PathBuf::from("a.csv")]);
    }

    #[test]
    fn negative_y_limit() {
        let cli = parse(&["-y", "-0.1", "1", "a.csv"]);
        assert_eq!(cli.plot_config().y_limits, Some((-0.1, 1.0)));
    }

    #[test]
    fn x_limits_must_be_integers() {
        let res = Cli::try_parse_from(["irviz", "-x", "4000.5", "500", "a.csv"]);
        assert!(res.is_err());
    }

    #[test]
    fn no_files_parses_to_empty_list() {
        let cli = parse(&[]);
        assert!(cli.files.is_empty());
    }

    #[test]
    fn legacy_rows_selects_fixed_extraction() {
        let cli = parse(&["--legacy-rows", "a.csv"]);
        assert_eq!(cli.batch_options().extraction, Extraction::legacy());
    }

    #[test]
    fn lenient_marker_policy() {
        let cli = parse(&["--marker-policy", "first", "a.csv"]);
        match cli.batch_options().extraction {
            Extraction::Markers { policy, .. } => assert_eq!(policy, MarkerPolicy::First),
            other => panic!("unexpected extraction: {other:?}"),
        }
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(parse(&["-vv"]).log_level(), LevelFilter::Trace);
        assert_eq!(parse(&["-q"]).log_level(), LevelFilter::Warn);
    }
}
