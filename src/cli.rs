//! Command-line interface definition using clap.

use clap::Parser;

/// Parse an exported chat log into a CSV record table.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt -o records.csv
    chatlens chat.txt --stats
    chatlens chat.txt -m whatsapp")]
pub struct Args {
    /// Path to the exported chat file
    pub input: String,

    /// Messenger the export came from
    #[arg(short, long, default_value = "whatsapp")]
    pub messenger: String,

    /// Path to the CSV output file
    #[arg(short, long, default_value = "records.csv")]
    pub output: String,

    /// Print a summary instead of writing a CSV file
    #[arg(long)]
    pub stats: bool,
}
