//! Command line front end for `apigen`.
//!
//! Reads a sherpadoc document, generates the Go client and writes it out.
//! Nothing is written unless generation succeeds.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use apigen_core::{generate, GenerateOptions};
use clap::{CommandFactory, Parser};
use tempfile::NamedTempFile;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Exit status for generation and I/O failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for invalid arguments or options.
pub const EXIT_USAGE: i32 = 2;

/// Crates whose log level a plain `APIGEN_LOG` value sets.
const LOG_TARGETS: [&str; 2] = ["apigen_core", "apigen_cli"];

#[derive(Parser, Debug)]
#[command(
    name = "apigen",
    version,
    about = "Generate a typed Go client from a sherpadoc API description"
)]
struct Cli {
    /// Go package name of the generated client, e.g. Example
    #[arg(value_name = "PACKAGE")]
    package: String,

    /// Default base URL of the API, ending in a slash
    #[arg(value_name = "BASE_URL")]
    base_url: String,

    /// Sherpadoc JSON file to read [default: stdin]
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Go file to write [default: stdout]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Run the CLI with `args` (including the program name) and return the exit status.
pub fn run_cli(args: Vec<String>) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            return code;
        }
    };

    let options = match GenerateOptions::new(&cli.package, &cli.base_url) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}\n");
            eprintln!("{}", Cli::command().render_usage());
            return EXIT_USAGE;
        }
    };

    match run(&cli, &options) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            EXIT_FAILURE
        }
    }
}

fn run(cli: &Cli, options: &GenerateOptions) -> Result<(), String> {
    let schema = read_input(cli.input.as_deref())?;
    let code = generate(&schema, options).map_err(|e| e.to_string())?;
    match &cli.output {
        Some(path) => write_atomic(path, &code),
        None => std::io::stdout()
            .lock()
            .write_all(code.as_bytes())
            .map_err(|e| format!("writing to stdout: {e}")),
    }
}

fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Reading schema");
            std::fs::read_to_string(path)
                .map_err(|e| format!("reading {}: {e}", path.display()))
        }
        None => {
            debug!("Reading schema from stdin");
            let mut schema = String::new();
            std::io::stdin()
                .read_to_string(&mut schema)
                .map_err(|e| format!("reading stdin: {e}"))?;
            Ok(schema)
        }
    }
}

/// Write through a temporary file in the destination directory, so readers
/// never observe a partially written file.
fn write_atomic(path: &Path, contents: &str) -> Result<(), String> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)
        .map_err(|e| format!("creating temporary file in {}: {e}", dir.display()))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| format!("writing temporary file: {e}"))?;
    file.persist(path)
        .map_err(|e| format!("writing {}: {}", path.display(), e.error))?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote client");
    Ok(())
}

/// Install the stderr log subscriber.
///
/// `APIGEN_LOG` controls the level: "trace", "debug", "info", "warn", "error"
/// for the apigen crates, or a full filter spec like "apigen_core=debug".
pub fn init_tracing() {
    let filter = log_filter(std::env::var("APIGEN_LOG").ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn log_filter(env: Option<&str>) -> String {
    let for_targets = |level: &str| {
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    };
    match env {
        Some(level) if is_plain_level(level) => for_targets(level),
        Some(spec) => spec.to_string(),
        None => for_targets("info"),
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(None), "apigen_core=info,apigen_cli=info");
        assert_eq!(
            log_filter(Some("DEBUG")),
            "apigen_core=DEBUG,apigen_cli=DEBUG"
        );
        assert_eq!(log_filter(Some("apigen_core=trace")), "apigen_core=trace");
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["apigen", "Example", "https://example.com/", "-o", "out.go"])
            .unwrap();
        assert_eq!(cli.package, "Example");
        assert_eq!(cli.base_url, "https://example.com/");
        assert_eq!(cli.input, None);
        assert_eq!(cli.output, Some(PathBuf::from("out.go")));

        assert!(Cli::try_parse_from(["apigen", "Example"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
