//! Command-line surface for `greenlens`.
//!
//! Flags are handled before the terminal is touched, so `--version` and
//! `--help` print to a normal stdout.
//!
//! ```ignore
//! match greenlens::cli::parse_args(std::env::args()) {
//!     CliCommand::Version => println!("{}", version_line()),
//!     CliCommand::Help => print!("{}", HELP),
//!     CliCommand::Run(options) => { /* start the TUI */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{version_line, VERSION};

/// Usage text for `--help`.
pub const HELP: &str = "\
greenlens: terminal client for the GreenLens waste-scanning service

USAGE:
    greenlens [--api-url URL]

OPTIONS:
    --api-url URL    Backend to talk to (default http://localhost:5000)
    -V, --version    Print version and exit
    -h, --help       Print this help and exit

ENVIRONMENT:
    GREENLENS_API_URL    Backend URL, overridden by --api-url
    GREENLENS_LOG        Log filter, e.g. greenlens=debug (falls back to RUST_LOG)
    GREENLENS_LOG_FILE   Log file path
";
