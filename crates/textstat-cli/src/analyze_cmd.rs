use std::fs;
use std::process::ExitCode;

use textstat_core::{TextStatistics, analyze};

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::logging::LogSink;
use crate::shared::read_input;

pub fn run_analyze(
    args: AnalyzeArgs,
    output_format: OutputFormat,
    sink: &dyn LogSink,
) -> CliResult<ExitCode> {
    let text = read_input(&args.text, &args.input, sink)?;

    if text.trim().is_empty() {
        sink.log("Input is empty; reporting zero statistics");
    }

    let stats = analyze(&text);

    match output_format {
        OutputFormat::Json => {
            let json = to_pretty_json(&stats)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print!("{}", render_text(&stats));
        }
    }

    if let Some(path) = &args.save {
        let json = to_pretty_json(&stats)?;
        fs::write(path, json)
            .map_err(|e| CliError::runtime(format!("Failed to write '{}': {}", path, e)))?;
        sink.log(&format!("Results saved to '{}'", path));
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn to_pretty_json(stats: &TextStatistics) -> CliResult<String> {
    serde_json::to_string_pretty(stats)
        .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))
}

fn render_text(stats: &TextStatistics) -> String {
    let mut out = String::new();
    let mut line = |label: &str, value: String| {
        out.push_str(&format!("{:<28}{}\n", label, value));
    };

    line("Characters (with spaces):", stats.characters_with_spaces.to_string());
    line(
        "Characters (no spaces):",
        stats.characters_without_spaces.to_string(),
    );
    line("Letters:", stats.letters.to_string());
    line("Digits:", stats.digits.to_string());
    line("Punctuation:", stats.punctuation.to_string());
    line("Words:", stats.word_count.to_string());
    line("Unique words:", stats.unique_word_count.to_string());
    line("Most common word:", stats.most_common_word.clone());
    line(
        "Average word length:",
        format!("{:.2}", stats.average_word_length),
    );
    line("Longest word:", stats.longest_word.clone());
    line("Shortest word:", stats.shortest_word.clone());
    line("Sentences:", stats.sentence_count.to_string());
    line(
        "Average words/sentence:",
        format!("{:.2}", stats.average_words_per_sentence),
    );
    line("Longest sentence:", stats.longest_sentence.clone());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rendering_lists_every_field() {
        let stats = analyze("kot kot pies. Pies śpi!");
        let rendered = render_text(&stats);

        assert_eq!(rendered.lines().count(), 14);
        assert!(rendered.contains("Most common word:"));
        assert!(rendered.contains("kot"));
        assert!(rendered.contains("Longest sentence:"));
    }

    #[test]
    fn text_rendering_uses_two_decimal_averages() {
        let stats = analyze("One two three. Four five six.");
        let rendered = render_text(&stats);

        assert!(rendered.contains("Average words/sentence:     3.00"));
    }

    #[test]
    fn zero_record_renders_empty_strings() {
        let rendered = render_text(&TextStatistics::default());

        assert!(rendered.contains("Average word length:        0.00"));
        assert_eq!(rendered.lines().count(), 14);
    }
}
