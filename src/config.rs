use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DB_PATH: &str = "property_data.sqlite3";
pub const DEFAULT_SCHEMA_PATH: &str = "sql/schema.sql";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Track property prices", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the tracker backend (JSON API, export and HTML dashboard)
    Serve(ServeArgs),
    /// Load and print every tracked property
    List(ClientArgs),
    /// Track a new property, or record a new price for a tracked one
    Add {
        #[command(flatten)]
        client: ClientArgs,
        #[arg(long)]
        zpid: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        bedrooms: String,
        #[arg(long)]
        bathrooms: String,
        #[arg(long)]
        sqft: String,
    },
    /// Record a new price for a tracked property
    Update {
        #[command(flatten)]
        client: ClientArgs,
        #[arg(long)]
        zpid: String,
        #[arg(long)]
        price: String,
    },
    /// Print the price history of a tracked property
    History {
        #[command(flatten)]
        client: ClientArgs,
        #[arg(long)]
        zpid: String,
    },
    /// Download the xlsx export
    Export {
        #[command(flatten)]
        client: ClientArgs,
        /// Where to write the workbook
        #[arg(long, short, default_value = "property_export.xlsx")]
        out: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "PROPERTY_TRACKER_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
    /// SQLite database file
    #[arg(long, env = "PROPERTY_TRACKER_DB", default_value = DEFAULT_DB_PATH)]
    pub db: String,
    /// Schema applied at startup
    #[arg(long, default_value = DEFAULT_SCHEMA_PATH)]
    pub schema: String,
    /// Worker threads
    #[arg(long, default_value_t = 8)]
    pub workers: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Base URL of the tracker backend
    #[arg(long, env = "PROPERTY_TRACKER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,
}
