//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use chiton_paths::Cell;
use std::path::{Path, PathBuf};

/// Tiling factor of the puzzle's second part
pub const PART_TWO_MULTIPLIER: usize = 5;

/// One map size to solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSpec {
    /// Display label, e.g. `Part 2` or `x3`
    pub label: String,
    /// Tiling factor applied to the base grid
    pub multiplier: usize,
}

impl RunSpec {
    /// Run for a puzzle part (1 or 2)
    pub fn part(part: u8) -> Self {
        let multiplier = if part == 2 { PART_TWO_MULTIPLIER } else { 1 };
        Self {
            label: format!("Part {}", part),
            multiplier,
        }
    }

    /// Run for an explicit tiling factor
    pub fn multiplied(multiplier: usize) -> Self {
        Self {
            label: format!("x{}", multiplier),
            multiplier,
        }
    }
}

/// Resolved runtime configuration
pub struct Config {
    /// Grid file
    pub input: PathBuf,
    /// Runs in execution order
    pub runs: Vec<RunSpec>,
    /// Start cell (None = top-left)
    pub start: Option<Cell>,
    /// End cell (None = bottom-right)
    pub end: Option<Cell>,
    /// Report file path
    pub output: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let runs = match (args.multiply, args.part) {
            (Some(multiplier), _) => {
                let multiplier = usize::try_from(multiplier).map_err(|_| {
                    CliError::Config(format!("Multiplier {} is too large", multiplier))
                })?;
                vec![RunSpec::multiplied(multiplier)]
            }
            (None, Some(part)) => vec![RunSpec::part(part)],
            (None, None) => vec![RunSpec::part(1), RunSpec::part(2)],
        };

        Ok(Config {
            input: expand_tilde(&args.input),
            runs,
            start: args.start,
            end: args.end,
            output: args.output.as_deref().map(expand_tilde),
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(std::iter::once("chiton").chain(argv.iter().copied()))
            .unwrap();
        Config::from_args(args).unwrap()
    }

    #[test]
    fn test_defaults_run_both_parts() {
        let config = config(&[]);

        assert_eq!(config.input, PathBuf::from("input.txt"));
        assert_eq!(config.runs, vec![RunSpec::part(1), RunSpec::part(2)]);
        assert_eq!(config.runs[1].multiplier, PART_TWO_MULTIPLIER);
        assert_eq!(config.start, None);
        assert_eq!(config.end, None);
        assert!(config.output.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn test_multiply_runs_once() {
        let config = config(&["--multiply", "3", "-s", "4", "-e", "10", "-q"]);

        assert_eq!(config.runs, vec![RunSpec::multiplied(3)]);
        assert_eq!(config.runs[0].label, "x3");
        assert_eq!(config.start, Some(4));
        assert_eq!(config.end, Some(10));
        assert!(config.quiet);
    }

    #[test]
    fn test_single_part() {
        let config = config(&["-p", "2", "-i", "map.txt", "-o", "out/report.txt"]);

        assert_eq!(config.runs, vec![RunSpec::part(2)]);
        assert_eq!(config.input, PathBuf::from("map.txt"));
        assert_eq!(config.output, Some(PathBuf::from("out/report.txt")));
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        assert!(Args::try_parse_from(["chiton", "-m", "2", "-p", "1"]).is_err());
        assert!(Args::try_parse_from(["chiton", "-m", "0"]).is_err());
        assert!(Args::try_parse_from(["chiton", "-p", "3"]).is_err());
        assert!(Args::try_parse_from(["chiton", "-s", "-1"]).is_err());
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("a/b.txt")), PathBuf::from("a/b.txt"));
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/input.txt")), home.join("input.txt"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
