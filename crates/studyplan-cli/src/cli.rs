use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use studyplan_core::VERSION;

/// Studyplan - split study hours across subjects and days, then save the plan
/// as an encrypted document, a spreadsheet, or a CSV file
#[derive(Parser)]
#[command(name = "studyplan")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Working directory holding schedules, the key file and the action log
    #[arg(short, long, global = true, env = "STUDYPLAN_DIR")]
    pub dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a schedule and optionally save it
    Generate(GenerateArgs),

    /// Load and display a saved schedule
    Show(ShowArgs),

    /// Load a schedule and save it in another format
    Convert(ConvertArgs),

    /// List saved schedules in the working directory
    List(ListArgs),

    /// Delete a saved schedule
    Delete(DeleteArgs),

    /// Show the action log
    History(HistoryArgs),

    /// Print the resolved configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `generate` command
#[derive(Args)]
pub struct GenerateArgs {
    /// Comma-separated subjects (e.g. "Math, History")
    #[arg(short, long)]
    pub subjects: String,

    /// Study hours available per day (defaults to config)
    #[arg(long)]
    pub hours: Option<f64>,

    /// Number of days to plan (defaults to config)
    #[arg(long)]
    pub days: Option<u32>,

    /// Save the schedule under this name
    #[arg(long, value_name = "NAME")]
    pub save: Option<String>,

    /// Format to save in: json, xlsx, or csv (defaults to config)
    #[arg(long)]
    pub format: Option<String>,

    /// Overwrite an existing file without asking
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Schedule file (.json, .xlsx, or .csv)
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `convert` command
#[derive(Args)]
pub struct ConvertArgs {
    /// Schedule file to read
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Destination name or path
    #[arg(value_name = "DEST")]
    pub destination: String,

    /// Destination format (inferred from DEST when omitted)
    #[arg(long)]
    pub format: Option<String>,

    /// Overwrite an existing file without asking
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Schedule file to delete
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `history` command
#[derive(Args)]
pub struct HistoryArgs {
    /// Show only the most recent N actions
    #[arg(long)]
    pub limit: Option<usize>,
}
