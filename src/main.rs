mod app;
mod config;
mod models;
mod services;
mod ui;
mod utils;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::process::ExitCode;
use std::time::Duration;

use app::{RideForm, SubmitAction};
use config::Config;
use services::HttpRideApi;

#[derive(Parser)]
#[command(name = "ride-groups", version, about = "Terminal client for the travel-company ride-share API")]
struct Cli {
    /// Base URL of the ride-share backend
    #[arg(long, global = true, env = "RIDE_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Post a new ride and refresh the group listing
    Post {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        destination: String,
        /// Phone number, 10-15 digits
        #[arg(long)]
        contact: String,
        /// Number of passengers, 1-8
        #[arg(long)]
        passengers: Option<u32>,
    },
    /// Show riders grouped by destination
    Groups,
    /// Re-load the group listing on an interval
    Watch {
        /// Seconds between refreshes (minimum 5)
        #[arg(long, default_value_t = 30)]
        interval: u64,
    },
    /// Join an existing ride group
    Join { ride_id: i64 },
    /// Cancel a booking
    Cancel { booking_id: i64 },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cli = Cli::parse();
    let config = Config::load(cli.base_url);

    log::info!("🚀 ride-groups client, backend: {}", config.base_url);

    let api = match HttpRideApi::new(&config) {
        Ok(api) => api,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Post {
            name,
            location,
            destination,
            contact,
            passengers,
        } => {
            let mut form = RideForm {
                name,
                location,
                destination,
                contact,
                passengers,
            };
            match app::submit_ride(&mut form, &api).await {
                SubmitAction::Accepted { message, groups_view } => {
                    log::info!("✅ {}", message);
                    print!("{}", groups_view);
                    ExitCode::SUCCESS
                }
                SubmitAction::Rejected { reason } => {
                    log::error!("{}", reason);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Groups => {
            print!("{}", app::load_groups(&api).await);
            ExitCode::SUCCESS
        }
        Command::Watch { interval } => {
            let interval = interval.max(5);
            loop {
                let view = app::load_groups(&api).await;
                // Full replace of the previous tick's output
                print!("\x1B[2J\x1B[1;1H");
                println!("Ride groups - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
                println!();
                print!("{}", view);
                tokio::time::sleep(Duration::from_secs(interval)).await;
            }
        }
        Command::Join { ride_id } => match app::join_ride(&api, ride_id).await {
            Ok(message) => {
                log::info!("✅ {}", message);
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("{}", err);
                ExitCode::FAILURE
            }
        },
        Command::Cancel { booking_id } => match app::cancel_booking(&api, booking_id).await {
            Ok(message) => {
                log::info!("✅ {}", message);
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("{}", err);
                ExitCode::FAILURE
            }
        },
    }
}
