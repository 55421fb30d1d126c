//! Command-line argument parsing.

/// Options for a normal TUI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// `--api-url URL` or `--api-url=URL`
    pub api_url: Option<String>,
}

/// What the process should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Start the TUI
    Run(RunOptions),
}

/// Parse command-line arguments (program name first).
///
/// `--version` and `--help` win over everything else. Unknown arguments are
/// ignored, as is `--api-url` without a value.
///
/// ```
/// use greenlens::cli::args::{parse_args, CliCommand, RunOptions};
///
/// let args = vec!["greenlens".to_string(), "--api-url".to_string(), "http://host:5000".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Run(RunOptions { api_url: Some("http://host:5000".to_string()) })
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api-url" => {
                if let Some(value) = args.next_if(|next| !next.starts_with("--")) {
                    options.api_url = Some(value);
                }
            }
            other => {
                if let Some(value) = other.strip_prefix("--api-url=") {
                    if !value.is_empty() {
                        options.api_url = Some(value.to_string());
                    }
                }
            }
        }
    }
    CliCommand::Run(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["greenlens".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    fn run_with(url: Option<&str>) -> CliCommand {
        CliCommand::Run(RunOptions {
            api_url: url.map(str::to_string),
        })
    }

    #[test]
    fn test_no_args_runs_tui() {
        assert_eq!(parse(&[]), run_with(None));
    }

    #[test]
    fn test_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_version_wins_over_api_url() {
        assert_eq!(
            parse(&["--api-url", "http://x:5000", "--version"]),
            CliCommand::Version
        );
    }

    #[test]
    fn test_api_url_forms() {
        assert_eq!(
            parse(&["--api-url", "http://x:5000"]),
            run_with(Some("http://x:5000"))
        );
        assert_eq!(
            parse(&["--api-url=http://y:5000"]),
            run_with(Some("http://y:5000"))
        );
    }

    #[test]
    fn test_api_url_without_value_is_ignored() {
        assert_eq!(parse(&["--api-url"]), run_with(None));
        assert_eq!(parse(&["--api-url="]), run_with(None));
        assert_eq!(parse(&["--api-url", "--version"]), CliCommand::Version);
    }

    #[test]
    fn test_unknown_args_ignored() {
        assert_eq!(parse(&["--frobnicate", "extra"]), run_with(None));
    }
}
