use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
/// CLI application to compute working hours from extracted timesheet entries
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute working hours, overtime and due time from timesheet entries",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Compute hours for a single start/end pair
    Calc {
        /// Start time (HH:MM, 24-hour)
        start: String,
        /// End time (HH:MM, 24-hour); earlier than start means past midnight
        end: String,
    },

    /// Analyze a file of extracted entries (JSON or CSV)
    Analyze {
        /// Entries file: {"entries":[{date,startTime,endTime}]}, a JSON array, or CSV
        file: String,

        /// Restrict to a period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2024")
        /// - YYYY-MM              → entire month (e.g. "2024-01")
        /// - YYYY-MM-DD           → specific day (e.g. "2024-01-02")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range          (e.g. "2024-01:2024-03")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range           (e.g. "2024-01-01:2024-01-10")
        ///
        /// Special value:
        /// - all                   → every entry (same as omitting it)
        #[arg(long, short, help = "Restrict to a period (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)")]
        period: Option<String>,

        /// Append a natural-language summary
        #[arg(long)]
        summary: bool,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Correct one day's start/end time and show the recomputed report
    Edit {
        /// Entries file (JSON or CSV)
        file: String,

        /// Day to edit: a date (YYYY-MM-DD) or a 1-based row number
        #[arg(long)]
        day: String,

        /// New start time (HH:MM)
        #[arg(long = "in")]
        start: String,

        /// New end time (HH:MM)
        #[arg(long = "out")]
        end: String,

        /// Save the corrected entries back to the file
        #[arg(long)]
        write: bool,

        /// Regenerate the summary after the correction
        #[arg(long)]
        summary: bool,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export the computed report in various formats
    Export {
        /// Entries file (JSON or CSV)
        input: String,

        /// Export format: csv, json, xlsx, pdf
        #[arg(long, value_name = "FORMAT", default_value = "csv")]
        format: String,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same formats as `analyze --period`)
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Include the summary in the exported report
        #[arg(long)]
        summary: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
