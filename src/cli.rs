use clap::Parser;
use text_joiner::adapters::outbound::filesystem::ReadStrategy;
use text_joiner::application::dto::OutputFormat;
use text_joiner::config::SettingsOverrides;

/// Join two text files into a third
#[derive(Parser, Debug)]
#[command(name = "text-joiner")]
#[command(version)]
#[command(
    about = "Join two text files with a separator and suffix",
    long_about = "Reads FIRST and SECOND, writes FIRST + SEPARATOR + SECOND + SUFFIX to OUTPUT.\n\
                  The output is only written when both inputs were read successfully."
)]
pub struct Args {
    /// First input file
    pub first: String,

    /// Second input file
    pub second: String,

    /// Output file (overwritten if it exists)
    #[arg(short, long)]
    pub output: String,

    /// Text inserted between the two contents [default: " "]
    #[arg(short, long, allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Text appended after the second content [default: "!"]
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Report format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// How input files are read: buffered or staged [default: buffered]
    #[arg(long, value_name = "STRATEGY")]
    pub read_strategy: Option<ReadStrategy>,

    /// Path to a config file (defaults to ./text-joiner.config.yml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            separator: self.separator.clone(),
            suffix: self.suffix.clone(),
            format: self.format,
            read_strategy: self.read_strategy,
        }
    }
}
