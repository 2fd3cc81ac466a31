use anyhow::{Context, Result};
use clap::Parser;

mod cli;

use tile_quote::{
    config::load_config,
    init_tracing,
    pricing::{
        self,
        models::{JobSpec, PriceTable},
    },
    server,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    match args.command.unwrap_or(cli::Commands::Serve {
        host: None,
        port: None,
    }) {
        cli::Commands::Serve { host, port } => {
            let mut config = load_config()?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::start_server(config).await?;
        }
        cli::Commands::Quote(args) => {
            run_quote(args)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => config_show()?,
            cli::ConfigCommands::Validate => config_validate()?,
        },
        cli::Commands::Version => {
            println!("tile-quote v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn run_quote(args: cli::QuoteArgs) -> Result<()> {
    let table = match &args.prices {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading price table from {}", path.display()))?;
            serde_json::from_str::<PriceTable>(&raw)
                .with_context(|| format!("parsing price table from {}", path.display()))?
        }
        None => PriceTable::default(),
    };

    let spec = JobSpec {
        area_type: args.area_type,
        material: args.material,
        area: args.area,
        complexity: args.complexity,
        demolition: args.demolition,
        prep: args.prep,
        adhesive: args.adhesive,
        grout: args.grout,
        waterproofing: args.waterproofing,
        waterproofing_area: args.waterproofing_area,
        miter_lm: args.miter_lm,
        silicone_lm: args.silicone_lm,
        turnkey: args.turnkey,
    };

    let breakdown = pricing::compute_cost(&table, &spec);

    for item in &breakdown.items {
        println!("{:<16} {:>10} ₽", item.kind.to_string(), item.amount);
    }
    if breakdown.discount > 0 {
        println!("{:<16} {:>10} ₽", "discount", -breakdown.discount);
    }
    println!("{:<16} {:>10} ₽", "total", breakdown.total);

    Ok(())
}

fn config_show() -> Result<()> {
    let config = load_config()?;
    // AdminCredentials and the storage token are #[serde(skip)], so the
    // dump cannot leak secrets.
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn config_validate() -> Result<()> {
    load_config()?;
    println!("configuration OK");
    Ok(())
}
