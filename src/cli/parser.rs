use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rFacility
/// CLI application to find nearby facilities and check their opening hours
#[derive(Parser)]
#[command(
    name = "rfacility",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find nearby facilities (lactation rooms, changing stations, restrooms) and check their opening hours",
    long_about = None
)]
pub struct Cli {
    /// Override catalog path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a listing is measured from.
#[derive(Args, Debug, Clone, Default)]
pub struct OriginArgs {
    /// Origin as LAT,LON
    #[arg(long = "near", value_name = "LAT,LON", allow_hyphen_values = true, conflicts_with = "here")]
    pub near: Option<String>,

    /// Use the configured current position
    #[arg(long = "here")]
    pub here: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the catalog and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a facility with its location and opening hours
    Add {
        /// Facility type (code or name, e.g. lactation, diaper, baby, accessible, family, ladies, mens, unisex)
        #[arg(long = "type", value_name = "TYPE")]
        facility_type: String,

        #[arg(long)]
        floor: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        building: Option<String>,

        #[arg(long)]
        block: Option<String>,

        #[arg(long)]
        road: Option<String>,

        /// Street address
        #[arg(long)]
        address: Option<String>,

        #[arg(long = "postal-code")]
        postal_code: Option<String>,

        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,

        /// Use the configured current position (address fields become placeholders)
        #[arg(long = "here", conflicts_with_all = ["lat", "from_search"])]
        here: bool,

        /// Copy the location of a known address matching this text
        #[arg(long = "from-search", value_name = "QUERY", conflicts_with = "lat")]
        from_search: Option<String>,

        /// Opening time (e.g. 09:00, 9:30 AM)
        #[arg(long = "opens")]
        opens: Option<String>,

        /// Closing time (e.g. 17:00, 5:30 PM)
        #[arg(long = "closes")]
        closes: Option<String>,
    },

    /// List facilities as cards
    List {
        #[command(flatten)]
        origin: OriginArgs,

        /// Only facilities whose opening hours include the current time
        #[arg(long = "open-now")]
        open_now: bool,

        /// Show the full opening range instead of "Open until" / "Opens at"
        #[arg(long = "exact")]
        exact: bool,

        #[arg(long = "type", value_name = "TYPE")]
        facility_type: Option<String>,

        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },

    /// Delete a facility by id
    Del {
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Search known addresses
    Search { query: String },

    /// Time utilities: parse, validate, format and evaluate opening hours
    Hours {
        #[command(subcommand)]
        action: HoursCommands,
    },
}

#[derive(Subcommand)]
pub enum HoursCommands {
    /// Parse a time into HH:MM:SS and seconds since midnight
    Parse { text: String },

    /// Validate an opening/closing pair
    Check {
        start: String,
        end: String,

        #[arg(long = "min-time")]
        min_time: Option<String>,

        #[arg(long = "max-time")]
        max_time: Option<String>,

        #[arg(long = "minutes-step")]
        minutes_step: Option<f64>,

        /// Overrides --minutes-step
        #[arg(long = "seconds-step")]
        seconds_step: Option<f64>,

        /// Hours that may not be selected (comma separated)
        #[arg(long = "disable-hours", value_delimiter = ',')]
        disable_hours: Vec<u32>,

        #[arg(long = "disable-minutes", value_delimiter = ',')]
        disable_minutes: Vec<u32>,

        #[arg(long = "disable-seconds", value_delimiter = ',')]
        disable_seconds: Vec<u32>,

        #[arg(long)]
        json: bool,
    },

    /// Format a range for display (12-hour clock)
    Format { start: String, end: String },

    /// Tell whether a range is open now
    Status {
        start: String,
        end: String,

        /// Evaluate at this time of day instead of now
        #[arg(long = "at")]
        at: Option<String>,
    },
}
