use clap::{Parser, Subcommand};

/// Text statistics tool
#[derive(Parser, Debug)]
#[command(name = "textstat")]
#[command(about = "Compute descriptive statistics over natural-language text")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress progress messages
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze text and report the full statistics record
    Analyze(AnalyzeArgs),
    /// Count characters or words without the full analysis
    Count(CountArgs),
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Analyze this string instead of reading an input source
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Also write the record as pretty-printed JSON to this path
    #[arg(long)]
    pub save: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct CountArgs {
    /// What to count: chars, words
    #[arg(long, default_value = "words")]
    pub kind: String,

    /// Exclude whitespace characters (chars only)
    #[arg(long)]
    pub no_spaces: bool,

    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Count this string instead of reading an input source
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}
