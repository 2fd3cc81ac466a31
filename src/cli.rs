use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tile_quote::pricing::models::{AreaType, Complexity, MaterialType};

#[derive(Parser, Debug)]
#[command(name = "tile-quote", version, about = "Tiling works pricing service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service (default)
    Serve {
        /// Bind host override
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Bind port override
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },

    /// Compute a one-off estimate without starting the server
    Quote(QuoteArgs),

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration (secrets redacted)
    Show,
    /// Validate the configuration and exit
    Validate,
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    #[arg(long, value_enum, default_value = "bathroom")]
    pub area_type: AreaType,

    #[arg(long, value_enum, default_value = "tile")]
    pub material: MaterialType,

    /// Tiled area, m²
    #[arg(long, default_value_t = 6.0)]
    pub area: f64,

    #[arg(long, value_enum, default_value = "normal")]
    pub complexity: Complexity,

    #[arg(long)]
    pub demolition: bool,

    #[arg(long)]
    pub prep: bool,

    #[arg(long)]
    pub adhesive: bool,

    #[arg(long)]
    pub grout: bool,

    #[arg(long)]
    pub waterproofing: bool,

    /// Waterproofed area, m² (defaults to the tiled area)
    #[arg(long)]
    pub waterproofing_area: Option<f64>,

    /// 45° miter cuts, linear meters
    #[arg(long, default_value_t = 0.0)]
    pub miter_lm: f64,

    /// Silicone sealant joints, linear meters
    #[arg(long, default_value_t = 0.0)]
    pub silicone_lm: f64,

    /// Apply the turnkey package discount
    #[arg(long)]
    pub turnkey: bool,

    /// Price against a saved table instead of the built-in defaults
    #[arg(long)]
    pub prices: Option<PathBuf>,
}
