use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use common::{ChartType, COMMODITIES, LOCATIONS};
use frontend::{ApiClient, AppSettings};
use tokio::io::AsyncWriteExt;
use tracing::info;

pub mod commands;

use commands::{predict, render, rows, watch, CommandContext, FilterArgs};

#[derive(Parser)]
#[command(name = "agristock")]
#[command(about = "Commodity price dashboard: price history, predictions and charts")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    ///
    /// Defaults to ./agristock.toml when present.
    #[arg(short, long, global = true, env = "AGRISTOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the price API (e.g., http://localhost:5000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Date used as "today" for relative ranges and prediction targets
    ///
    /// Format: YYYY-MM-DD. Defaults to the local calendar date.
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard as a standalone HTML page
    Render {
        #[command(flatten)]
        filters: FilterArgs,

        /// Chart style
        #[arg(long, default_value = "line")]
        chart: ChartType,

        /// Request a prediction for the selected commodity and location first
        #[arg(long)]
        predict: bool,

        /// Output file; the page is written to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the filtered display rows as JSON
    Rows {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Re-render the dashboard to a file, refreshing the price history periodically
    Watch {
        #[command(flatten)]
        filters: FilterArgs,

        /// Chart style
        #[arg(long, default_value = "line")]
        chart: ChartType,

        /// Seconds between refreshes
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,

        /// Stop after this many updates; runs until interrupted when omitted
        #[arg(long)]
        count: Option<u32>,

        /// Output file rewritten on every refresh
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Request a price prediction one week out and print it as JSON
    Predict {
        /// Commodity to forecast (e.g., Wheat)
        #[arg(long, value_parser = PossibleValuesParser::new(COMMODITIES))]
        commodity: String,

        /// Location to forecast (e.g., North Farm)
        #[arg(long, value_parser = PossibleValuesParser::new(LOCATIONS))]
        location: String,
    },
}

impl Cli {
    pub async fn run(self, mut settings: AppSettings) -> Result<()> {
        if let Some(api_url) = self.api_url {
            settings.api_base_url = api_url;
        }
        info!("Using price API at {}", settings.api_base_url);

        let ctx = CommandContext {
            client: ApiClient::new(settings)?,
            clock: compute::default_clock(self.today),
        };

        match self.command {
            Commands::Render { filters, chart, predict, output } => {
                let page = render(&ctx, &filters, chart, predict).await?;
                match output {
                    Some(path) => {
                        tokio::fs::write(&path, page).await?;
                        info!("Dashboard written to {}", path.display());
                    }
                    None => write_stdout(&page).await?,
                }
            }
            Commands::Rows { filters } => {
                let json = rows(&ctx, &filters).await?;
                write_stdout(&json).await?;
            }
            Commands::Watch { filters, chart, interval, count, output } => {
                let written =
                    watch(&ctx, &filters, chart, Duration::from_secs(interval), count, &output).await?;
                info!("Watch finished after {} updates", written);
            }
            Commands::Predict { commodity, location } => {
                let json = predict(&ctx, &commodity, &location).await?;
                write_stdout(&json).await?;
            }
        }
        Ok(())
    }
}

async fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await?;
    Ok(())
}
