use clap::{Parser, Subcommand, ValueEnum};
use page::{OutputFormat, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "cppjava")]
#[command(
    author,
    version,
    about = "Generate the C++ vs Java comparison page"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the comparison page
    Render {
        /// Configuration file path (defaults to cppjava.toml when present)
        #[clap(short, long)]
        config: Option<String>,

        /// Output file, or - for stdout
        #[clap(short, long, default_value = "index.html")]
        output: String,

        /// Output format (detected from the output file extension when omitted)
        #[clap(short, long, value_enum)]
        format: Option<FormatType>,

        /// Show line numbers in code blocks, overriding the configuration
        #[clap(long, default_value_t = false)]
        line_numbers: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// List catalog entries in display order
    List {
        /// Configuration file path (defaults to cppjava.toml when present)
        #[clap(short, long)]
        config: Option<String>,
    },

    /// Check the configured catalog for authoring mistakes
    Check {
        /// Configuration file path (defaults to cppjava.toml when present)
        #[clap(short, long)]
        config: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Write a default configuration file
    Init {
        /// Where to write the configuration
        #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: String,

        /// Also write the built-in catalog as TOML to this file
        #[clap(long)]
        catalog: Option<String>,

        /// Overwrite existing files
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatType {
    /// Standalone HTML document
    Html,

    /// Page structure as JSON
    Json,
}

impl From<FormatType> for OutputFormat {
    fn from(format: FormatType) -> Self {
        match format {
            FormatType::Html => OutputFormat::Html,
            FormatType::Json => OutputFormat::Json,
        }
    }
}
