use clap::{Parser, Subcommand};
use std::path::PathBuf;

const GIT_HASH: &str = env!("GIT_HASH");

fn version_string() -> String {
    if GIT_HASH.is_empty() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{}+{}", env!("CARGO_PKG_VERSION"), GIT_HASH)
    }
}

#[derive(Parser, Debug)]
#[command(name = "opsdesk")]
#[command(about = "Business operations console: leads, tickets, assets and more", long_about = None)]
#[command(version = version_string().leak() as &'static str)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records of a module
    #[command(alias = "ls")]
    List {
        /// Module to list (leads, clients, assets, tickets, ...)
        module: String,

        /// Narrow by exact field value, e.g. -f status=Qualified
        #[arg(short, long, value_name = "FIELD=VALUE")]
        filter: Vec<String>,

        /// Case-insensitive search term
        #[arg(short, long)]
        search: Option<String>,

        /// View mode: table or cards
        #[arg(long)]
        view: Option<String>,
    },

    /// Export the visible records of a module
    Export {
        module: String,

        /// Output format: csv, xls or pdf
        #[arg(short = 'F', long, default_value = "csv")]
        format: String,

        #[arg(short, long, value_name = "FIELD=VALUE")]
        filter: Vec<String>,

        #[arg(short, long)]
        search: Option<String>,

        /// Directory to write the artifact into
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Generate the KPI report for a date range
    Report {
        /// Start of the range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End of the range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Also write the report as an artifact in this format
        #[arg(short = 'F', long)]
        format: Option<String>,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Export the KPI summary for a date range
    Summary {
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,

        #[arg(short = 'F', long, default_value = "csv")]
        format: String,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Bulk-import leads from a CSV file
    Import {
        /// CSV file with a header row
        file: PathBuf,
    },

    /// Create a lead
    NewLead {
        /// Company name
        company: String,

        #[arg(long)]
        contact: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "Website")]
        source: String,

        /// Initial status (defaults to New)
        #[arg(long)]
        status: Option<String>,

        /// Owner (defaults to the current user)
        #[arg(long)]
        owner: Option<String>,
    },

    /// Assign a ticket to a team member
    Assign {
        ticket: String,
        assignee: String,
    },

    /// Move a ticket to a new workflow state
    Status {
        ticket: String,
        /// Target state, e.g. Verified or "Quality Check"
        status: String,
    },

    /// Delete one record permanently
    #[command(alias = "rm")]
    Delete {
        module: String,
        id: String,
    },

    /// Archive every dataset as JSON in a tar.gz
    Backup {
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show or change configuration
    Config {
        /// Config key (omit to list all)
        key: Option<String>,

        /// New value (omit to show the current one)
        value: Option<String>,
    },
}
