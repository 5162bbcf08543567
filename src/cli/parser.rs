use crate::export::ExportProvider;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Review weekly timesheets, approve entries and export payroll",
    long_about = None
)]
pub struct Cli {
    /// Override dataset path (useful for tests or a custom dataset)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which week to show.
#[derive(Args, Debug, Clone, Default)]
pub struct WeekArgs {
    /// Any date inside the week (YYYY-MM-DD); defaults to today
    #[arg(long = "week", value_name = "DATE")]
    pub week: Option<String>,

    /// Move by N weeks from --week (negative goes back)
    #[arg(long = "offset", default_value_t = 0, allow_hyphen_values = true)]
    pub offset: i64,
}

/// Facet filters applied to the week's entries.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive match on employee name or job title
    #[arg(long = "search", short = 's')]
    pub search: Option<String>,

    /// Employee id, or "all"
    #[arg(long = "employee", value_name = "ID")]
    pub employee: Option<String>,

    /// pending | approved | rejected | all
    #[arg(long = "status")]
    pub status: Option<String>,

    /// Single day inside the week (YYYY-MM-DD)
    #[arg(long = "day", value_name = "DATE")]
    pub day: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty dataset
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// List the week's time entries
    List {
        #[command(flatten)]
        week: WeekArgs,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "notes", help = "Show entry notes under each row")]
        notes: bool,
    },

    /// Weekly totals, daily chart and per-employee breakdown
    Summary {
        #[command(flatten)]
        week: WeekArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Approve one or more pending entries
    Approve {
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Reject one or more pending entries
    Reject {
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Approve or reject every pending entry matching the filters
    Review {
        #[command(flatten)]
        week: WeekArgs,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "approve", conflicts_with = "reject", required_unless_present = "reject")]
        approve: bool,

        #[arg(long = "reject")]
        reject: bool,
    },

    /// Show payroll entries built from the week's approved hours
    Payroll {
        #[command(flatten)]
        week: WeekArgs,
    },

    /// Export the week's payroll
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportProvider,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        week: WeekArgs,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
