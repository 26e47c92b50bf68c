//! Listrec - similar-listing recommendations from free-text remarks
//!
//! Cleans listing remarks, vectorizes them with stemmed n-gram TF-IDF and
//! prints the three most similar listings for every listing.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use listrec_core::error::{ExitCode as ListrecExitCode, ListrecError};
use listrec_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(ListrecExitCode::Success as u8),
        Err(e) => {
            tracing::debug!(
                error_type = e.error_type(),
                elapsed = ?start.elapsed(),
                "command_failed"
            );
            report_error(&cli, &e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Clap failed before `Cli.format` exists, so `--format json` is read from argv
fn report_parse_error(err: clap::Error) -> ExitCode {
    if !matches!(argv_format().as_deref(), Some("json")) {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => ListrecError::UsageError(err.to_string()),
        _ => ListrecError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

fn report_error(cli: &Cli, e: &ListrecError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
        return;
    }
    if cli.quiet {
        return;
    }
    eprintln!("error: {}", e);
    if let Some(hint) = hint(e) {
        eprintln!("hint: {}", hint);
    }
}

/// Follow-up advice for errors caused by the dataset or its field mapping
fn hint(e: &ListrecError) -> Option<&'static str> {
    match e {
        ListrecError::AlternateNotFound { .. } => {
            Some("check the id, or pass --alt-data with the file that holds it")
        }
        ListrecError::AlternateAmbiguous { .. } => {
            Some("ids must be unique; check [dataset] id_field in listrec.toml")
        }
        ListrecError::DuplicateLabel { .. } => {
            Some("the alternate listing is already part of the ranked corpus")
        }
        ListrecError::InvalidDataset { .. } => {
            Some("listing files are a JSON array or JSON Lines (.jsonl, .ndjson)")
        }
        ListrecError::EmptyVocabulary => {
            Some("every term was a stopword; try --no-extra-stopwords or more listings")
        }
        ListrecError::TaggerUnavailable => {
            Some("download en_tokenizer.bin from the nlprule releases")
        }
        _ => None,
    }
}

/// Last `--format` value on the command line, if any
fn argv_format() -> Option<String> {
    let mut format = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if let Some(value) = arg.strip_prefix("--format=") {
            format = Some(value.to_string());
        } else if arg == "--format" {
            format = args.next();
        }
    }
    format
}
