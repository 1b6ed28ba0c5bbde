//! Command-line argument parsing for the discovery demo.

/// Options for a demo run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Make the demo upstream reject every query
    pub fail_refresh: bool,
    /// Print every snapshot as JSON instead of a summary
    pub json: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the demo (default)
    Run(RunOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use game_discovery::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["discovery".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    for arg in args.skip(1) {
        // Skip the program name
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--fail-refresh" => options.fail_refresh = true,
            "--json" => options.json = true,
            _ => {}
        }
    }
    CliCommand::Run(options)
}

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
Usage: discovery [OPTIONS]

Options:
  --fail-refresh  Make the demo upstream fail so the refresh error path runs
  --json          Print every published snapshot as JSON
  -V, --version   Print version
  -h, --help      Print this help

Environment:
  DISCOVERY_PAGE_SIZE        Games per category (default 20)
  DISCOVERY_REFRESH_ON_LOAD  Refresh after the initial load (default true)
  DISCOVERY_DEMO_LATENCY_MS  Demo upstream latency (default 300)
  RUST_LOG                   Log filter (default info)";

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let args: Vec<String> = std::iter::once("discovery")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run(RunOptions::default()));
    }

    #[test]
    fn test_parse_run_options() {
        assert_eq!(
            parse(&["--json", "--fail-refresh"]),
            CliCommand::Run(RunOptions {
                fail_refresh: true,
                json: true,
            })
        );
    }

    #[test]
    fn test_version_wins_over_run_options() {
        assert_eq!(parse(&["--fail-refresh", "--version"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::Run(RunOptions::default()));
    }
}
