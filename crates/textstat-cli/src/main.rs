use std::process::ExitCode;

use clap::Parser;

mod analyze_cmd;
mod cli;
mod count_cmd;
mod error;
mod input;
mod logging;
mod shared;

use analyze_cmd::run_analyze;
use cli::{Cli, Commands};
use count_cmd::run_count;
use error::{output_format_hint, parse_output_format, render_error};
use logging::{ConsoleLog, LogSink, NullLog};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let sink: Box<dyn LogSink> = if cli.quiet {
        Box::new(NullLog)
    } else {
        Box::new(ConsoleLog)
    };

    match cli.command {
        Commands::Analyze(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_analyze(args, output_format, sink.as_ref()) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Count(args) => {
            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_count(args, output_format, sink.as_ref()) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
    }
}
