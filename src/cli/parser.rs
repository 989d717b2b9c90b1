use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
#[derive(Parser, Debug)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A time-clock front end: register employees and record clock-in/out events against a remote API",
    long_about = None
)]
pub struct Cli {
    /// Override the remote API base URL
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing keys with their default values")]
        migrate: bool,
    },

    /// List employees
    Employees {
        #[arg(long = "details", help = "Show department, admission date and tenure")]
        details: bool,
    },

    /// Show clock events, most recent first
    Events {
        #[arg(
            long = "employee",
            value_name = "ID",
            help = "Only events of this employee id"
        )]
        employee: Option<String>,
    },

    /// Register a new employee
    AddEmployee {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long = "job-title", default_value = "")]
        job_title: String,

        #[arg(long, default_value = "")]
        department: String,

        /// Admission date (YYYY-MM-DD)
        #[arg(long = "admission", default_value = "")]
        admission: String,
    },

    /// Record a clock event
    Clock {
        /// Employee id
        #[arg(long = "employee", value_name = "ID", default_value = "")]
        employee: String,

        /// in, lunch-out, lunch-in or out
        #[arg(long = "kind", default_value = "")]
        kind: String,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long = "date")]
        date: Option<String>,

        /// Time (HH:MM), defaults to now
        #[arg(long = "time")]
        time: Option<String>,

        #[arg(long = "note")]
        note: Option<String>,

        /// on-site (default) or remote
        #[arg(long = "location")]
        location: Option<String>,

        #[arg(long = "confirm", help = "Confirm the information is correct")]
        confirm: bool,
    },

    /// Interactive session: commands read from stdin share one in-memory state
    Shell,
}
