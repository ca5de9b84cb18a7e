use std::process::ExitCode;

use serde::Serialize;
use textstat_core::{count_characters, count_words};

use crate::cli::CountArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::logging::LogSink;
use crate::shared::read_input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountKind {
    Chars,
    Words,
}

pub fn parse_count_kind(s: &str) -> CliResult<CountKind> {
    match s.to_lowercase().as_str() {
        "chars" => Ok(CountKind::Chars),
        "words" => Ok(CountKind::Words),
        _ => Err(CliError::input(format!(
            "Invalid kind '{}'. Expected: chars, words",
            s
        ))),
    }
}

#[derive(Debug, Serialize)]
struct CountResult {
    kind: &'static str,
    count: usize,
}

pub fn run_count(
    args: CountArgs,
    output_format: OutputFormat,
    sink: &dyn LogSink,
) -> CliResult<ExitCode> {
    let kind = parse_count_kind(&args.kind)?;

    if args.no_spaces && kind == CountKind::Words {
        return Err(CliError::input(
            "--no-spaces applies to --kind chars only".to_string(),
        ));
    }

    let text = read_input(&args.text, &args.input, sink)?;

    let result = match kind {
        CountKind::Chars => CountResult {
            kind: "chars",
            count: count_characters(&text, !args.no_spaces),
        },
        CountKind::Words => CountResult {
            kind: "words",
            count: count_words(&text),
        },
    };

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{}", result.count);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_INPUT_ERROR;
    use crate::logging::NullLog;

    #[test]
    fn parse_count_kind_accepts_known_values() {
        assert_eq!(parse_count_kind("chars").unwrap(), CountKind::Chars);
        assert_eq!(parse_count_kind("WORDS").unwrap(), CountKind::Words);
    }

    #[test]
    fn parse_count_kind_rejects_unknown_values() {
        let err = parse_count_kind("lines").unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INPUT_ERROR);
    }

    #[test]
    fn no_spaces_with_words_is_an_input_error() {
        let args = CountArgs {
            kind: "words".to_string(),
            no_spaces: true,
            input: "-".to_string(),
            text: Some("Ala ma kota".to_string()),
            output_format: "text".to_string(),
        };

        let err = run_count(args, OutputFormat::Text, &NullLog).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INPUT_ERROR);
    }
}
