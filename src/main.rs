use clap::{Parser, ValueEnum};
use clap::error::ErrorKind;
use hdrgen::error::EXIT_USAGE;
use hdrgen::{
    GeneratorConfig, GuardToken, HEADER_TEMPLATE, PLACEHOLDER, Result, find_placeholders,
    generate_header_file,
};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const LONG_HELP: &str = r#"
The include guard is built from the file name only: the directory part is
dropped, dots become underscores and letters are uppercased.

Examples:
  # Write rect.hpp guarded by HEADER_RECT_HPP_INCLUDED
  hdrgen rect.hpp
  # Guard is MY_THING_H, file goes to include/api/My.Thing.h
  hdrgen include/api/My.Thing.h
  # Print the header to stdout without writing it
  hdrgen --dry-run rect.hpp
  # Show the derived guard and the template placeholders
  hdrgen --list rect.hpp
  # Same, as JSON for scripting
  hdrgen --list=json rect.hpp

Exit status:
  0  header generated
  1  missing or unusable header path
  2  header could not be written
"#;

/// Generate a C++ header with an include guard derived from its file name.
///
/// Copyright 2026 the hdrgen authors.
/// Licensed under the EUPL v1.2.
#[derive(Parser, Debug)]
#[command(
    name = "hdrgen",
    version,
    about = "Generate a C++ header with an include guard derived from its file name.",
    after_long_help = LONG_HELP
)]
struct Cli {
    /// Path of the header file to generate (overwritten if it exists)
    #[arg(value_name = "HEADER_PATH")]
    header_path: PathBuf,

    /// Print the generated header to stdout instead of writing it
    #[arg(long, conflicts_with = "list")]
    dry_run: bool,

    /// Print the derived guard and template placeholders, then exit (formats: plain, json)
    #[arg(
        long,
        value_name = "FORMAT",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "plain",
        conflicts_with = "dry_run"
    )]
    list: Option<ListFormat>,

    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq)]
enum ListFormat {
    /// Human-readable summary
    Plain,
    /// JSON output for scripting
    Json,
}

#[derive(Serialize)]
struct HeaderInfo {
    header: String,
    token: String,
    guard: String,
    placeholders: Vec<PlaceholderInfo>,
}

#[derive(Serialize)]
struct PlaceholderInfo {
    marker: &'static str,
    start: usize,
    end: usize,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_USAGE,
            };
            // Printing can only fail if stderr/stdout is gone
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging(cli.quiet, cli.verbose);

    let result = if let Some(format) = cli.list {
        list_header(&cli.header_path, format)
    } else {
        let config = GeneratorConfig {
            dry_run: cli.dry_run,
        };
        generate(&cli.header_path, &config)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(e.exit_code());
    }
}

fn init_logging(quiet: bool, verbose: u8) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn generate(header_path: &Path, config: &GeneratorConfig) -> Result<()> {
    let content = generate_header_file(header_path, config)?;

    if config.dry_run {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

fn list_header(header_path: &Path, format: ListFormat) -> Result<()> {
    let token = GuardToken::from_path(&header_path.to_string_lossy())?;
    let info = HeaderInfo {
        header: header_path.display().to_string(),
        guard: format!("HEADER_{token}_INCLUDED"),
        token: token.to_string(),
        placeholders: find_placeholders(HEADER_TEMPLATE, PLACEHOLDER)
            .into_iter()
            .map(|span| PlaceholderInfo {
                marker: PLACEHOLDER,
                start: span.start,
                end: span.end,
            })
            .collect(),
    };

    let mut stdout = io::stdout().lock();
    match format {
        ListFormat::Plain => {
            writeln!(stdout, "Header: {}", info.header)?;
            writeln!(stdout, "Token: {}", info.token)?;
            writeln!(stdout, "Guard: {}", info.guard)?;
            for placeholder in &info.placeholders {
                writeln!(
                    stdout,
                    "Placeholder {} at {}..{}",
                    placeholder.marker, placeholder.start, placeholder.end
                )?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&info)?;
            writeln!(stdout, "{json}")?;
        }
    }
    stdout.flush()?;

    Ok(())
}
