mod api;
mod config;
mod forecast;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cn-weather", about = "Ultra-short-term weather forecast lookup for Chinese regions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the forecast for a region by grid coordinates
    Forecast {
        /// Province name (e.g. 北京市)
        #[arg(long)]
        province: String,
        /// City name (e.g. 北京市)
        #[arg(long)]
        city: String,
        /// District name (e.g. 朝阳区)
        #[arg(long)]
        district: String,
        /// Forecast grid X coordinate
        #[arg(long)]
        nx: i32,
        /// Forecast grid Y coordinate
        #[arg(long)]
        ny: i32,
    },
    /// Fetch the forecast for a built-in preset location
    Preset {
        /// Preset name (see `locations`)
        name: String,
    },
    /// List the built-in preset locations
    Locations,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cn_weather=info".into()),
        )
        .init();

    // Load .env if present (override system env vars)
    dotenvy::dotenv_override().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Forecast { province, city, district, nx, ny } => {
            let client = api::client::WeatherClient::new()?;
            let report = forecast::get_forecast(&client, &province, &city, &district, nx, ny).await;
            println!("{}", report);
        }
        Commands::Preset { name } => {
            let loc = config::preset_location(&name)
                .ok_or_else(|| anyhow::anyhow!("Unknown preset location: {}", name))?;
            let client = api::client::WeatherClient::new()?;
            let report =
                forecast::get_forecast(&client, loc.province, loc.city, loc.district, loc.nx, loc.ny)
                    .await;
            println!("{}", report);
        }
        Commands::Locations => {
            println!("{:<10} {:<10} {:<10} {:<12} {:>4} {:>4}", "Name", "Province", "City", "District", "nx", "ny");
            for (name, loc) in config::PRESET_LOCATIONS {
                println!(
                    "{:<10} {:<10} {:<10} {:<12} {:>4} {:>4}",
                    name, loc.province, loc.city, loc.district, loc.nx, loc.ny
                );
            }
        }
    }

    Ok(())
}
