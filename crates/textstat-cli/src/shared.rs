use crate::error::CliResult;
use crate::input::resolve_input;
use crate::logging::LogSink;

/// Read the text both subcommands operate on.
///
/// File loads are announced through the sink; stdin and inline text are not,
/// to keep piped usage quiet.
pub fn read_input(text: &Option<String>, input: &str, sink: &dyn LogSink) -> CliResult<String> {
    let source = resolve_input(text, input);
    let content = source.read()?;

    if text.is_none() && input != "-" {
        sink.log(&format!(
            "Loaded {} characters from '{}'",
            content.chars().count(),
            input
        ));
    }

    Ok(content)
}
