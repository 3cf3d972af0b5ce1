use clap::{Parser, Subcommand};

/// Command-line interface definition for dbcheck
/// CLI application to verify database connectivity and logging setup
#[derive(Parser)]
#[command(
    name = "dbcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Verify MySQL connectivity and logging setup, rendering a fixed query as an HTML table",
    long_about = None
)]
pub struct Cli {
    /// Override the store host (default: DB_HOST)
    #[arg(global = true, long = "host")]
    pub host: Option<String>,

    /// Override the schema name (default: DB_DATABASE)
    #[arg(global = true, long = "database")]
    pub database: Option<String>,

    /// Override the credential identity (default: DB_USER)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Override the credential secret (default: DB_PASSWORD)
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query the store and print the report as an HTML table
    Report,

    /// Emit a single test record through the logging pipeline
    Log {
        #[arg(
            long = "level",
            default_value = "debug",
            help = "Minimum severity the stdout handler lets through"
        )]
        level: String,
    },

    /// Inspect the resolved configuration
    Config {
        #[arg(
            long = "print",
            help = "Print the resolved configuration (password redacted)"
        )]
        print_config: bool,
    },
}
