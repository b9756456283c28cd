use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use ::predict::DateSelection;

pub mod commands;

use crate::config::ServeConfig;
use commands::{check, predict, serve};

#[derive(Parser)]
#[command(name = "stockcast")]
#[command(about = "BBRI stock prediction gateway and terminal client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// A target date entered as separate fields, like the web form.
#[derive(Args, Debug, Clone, Copy)]
pub struct DateArgs {
    /// Day of month (1-31)
    #[arg(short, long)]
    pub day: u32,

    /// Month (1-12)
    #[arg(short, long)]
    pub month: u32,

    /// Year
    #[arg(short, long)]
    pub year: i32,

    /// Reference date used as "today" (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

impl DateArgs {
    pub fn selection(&self) -> DateSelection {
        DateSelection::new(self.day, self.month, self.year)
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the gateway server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,

        /// Base URL of the forecasting service
        #[arg(short, long, env = "UPSTREAM_URL", default_value = "http://127.0.0.1:8000")]
        upstream_url: String,

        /// Directory with the built frontend, served for every non-API path
        #[arg(short, long, env = "STATIC_DIR")]
        static_dir: Option<std::path::PathBuf>,

        /// Seconds to wait for one forecast
        #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 120)]
        request_timeout_secs: u64,
    },
    /// Check a target date against the prediction window
    Check {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Request a forecast and print the result
    Predict {
        #[command(flatten)]
        date: DateArgs,

        /// Base URL of the gateway or the forecasting service
        #[arg(short, long, env = "API_URL", default_value = "http://127.0.0.1:3000")]
        api_url: String,

        /// Seconds to wait for the forecast
        #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 120)]
        request_timeout_secs: u64,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                upstream_url,
                static_dir,
                request_timeout_secs,
            } => {
                let config = ServeConfig::new(bind_address, upstream_url, static_dir, request_timeout_secs);
                serve(config).await?;
            }
            Commands::Check { date } => {
                check(&date)?;
            }
            Commands::Predict {
                date,
                api_url,
                request_timeout_secs,
            } => {
                predict(&date, &api_url, request_timeout_secs).await?;
            }
        }
        Ok(())
    }
}
