use std::process::ExitCode;

use wmata_client::api::{WmataClient, WmataConfig};
use wmata_client::gtfs::{StaticData, StationDirectory};
use wmata_client::planner;

/// How many upcoming departures to print.
const MAX_TRIPS: usize = 5;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("WMATA_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: WMATA_API_KEY not set. API calls will fail.");
        String::new()
    });

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [from_name, to_name] = args.as_slice() else {
        eprintln!("Usage: wmata-client <from station name> <to station name>");
        return ExitCode::FAILURE;
    };

    let config = WmataConfig::new(api_key);
    let client = WmataClient::new(config).expect("Failed to create WMATA client");

    // Make sure the stops table exists before resolving names
    let static_data = StaticData::new("data");
    if !static_data.stops_path().exists() {
        println!("Rebuilding GTFS static data...");
        if let Err(e) = static_data.rebuild(&client) {
            eprintln!("Failed to rebuild GTFS static data: {e}");
            return ExitCode::FAILURE;
        }
    }

    let directory = StationDirectory::new(static_data.stops_path());

    let from = match directory.resolve_code(from_name) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let to = match directory.resolve_code(to_name) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Next departures {from} -> {to}:");

    match planner::next_departures(&client, &from, &to, MAX_TRIPS) {
        Ok(departures) if departures.is_empty() => {
            println!("  no upcoming trains");
            ExitCode::SUCCESS
        }
        Ok(departures) => {
            for d in departures {
                println!(
                    "  depart {}  arrive {}  ({} min)",
                    d.departs_at.format("%H:%M"),
                    d.arrives_at.format("%H:%M"),
                    d.duration_min
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to plan trip: {e}");
            ExitCode::FAILURE
        }
    }
}
