use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use talkmap_core::{pause::ThreadSleep, usecases};

mod config;
mod gateways;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (default: talkmap.toml if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    let config::Config {
        talkmap,
        geocoding,
        static_table,
    } = cfg;

    let geo_gw = gateways::geocoding_gateway(geocoding.gateway)?;
    let resolver =
        usecases::LocationResolver::new(static_table, geo_gw, ThreadSleep, geocoding.retry);

    if let Some(summary) = usecases::generate_talkmap(&talkmap, &resolver)? {
        println!();
        println!(
            "Generated talkmap with {} unique locations",
            summary.unique_locations
        );
        println!("Output written to: {}", summary.output_file.display());
    }
    Ok(())
}
