mod cli;

use anyhow::Context;
use cli::Args;
use owo_colors::OwoColorize;
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use text_joiner::config::{discover_config, load_config_from_path, resolve_settings, ConfigFile};
use text_joiner::prelude::*;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let exit_code = match run(&args) {
        Ok(code) => code,
        Err(e) => {
            print_error_chain("An error occurred", e.as_ref());
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(args.overrides(), config.as_ref())?;

    let request = JoinRequest::new(
        args.first.as_str(),
        args.second.as_str(),
        args.output.as_str(),
    )?
    .with_separators(settings.separators.clone());
    let output_key = request.output_key().to_string();

    // Create adapters (Dependency Injection)
    let storage = FileSystemStorage::new().with_read_strategy(settings.read_strategy);
    let result = if args.quiet {
        execute(storage, QuietProgressReporter::new(), request)
    } else {
        execute(storage, StderrProgressReporter::new(), request)
    };

    let report = JoinReport::from_result(&result, &output_key);
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&report)?;
    io::stdout()
        .write_all(formatted_output.as_bytes())
        .context("Failed to write to stdout")?;

    // The progress reporter has already described a failure on stderr
    match result {
        Ok(_) => Ok(ExitCode::Success),
        Err(_) => Ok(ExitCode::JoinFailed),
    }
}

fn execute<S, PR>(storage: S, progress_reporter: PR, request: JoinRequest) -> JoinResult
where
    S: TextStorage,
    PR: ProgressReporter,
{
    JoinFilesUseCase::new(storage, progress_reporter).join(request)
}

fn load_config(explicit_path: Option<&str>) -> Result<Option<ConfigFile>> {
    match explicit_path {
        Some(path) => load_config_from_path(Path::new(path)).map(Some),
        None => {
            let current_dir =
                std::env::current_dir().context("Failed to determine the current directory")?;
            discover_config(&current_dir)
        }
    }
}

fn print_error_chain(headline: &str, error: &dyn Error) {
    eprintln!("\n{} {}:\n", "❌".red(), headline.red().bold());
    eprintln!("{}", error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("\nCaused by: {}", err);
        source = err.source();
    }

    eprintln!();
}
