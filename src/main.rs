/* 3rd party libraries */
use clap::{ArgAction, Parser};
use crossbeam_channel as cbc;
use log::info;
use serde::Serialize;

/* Custom libraries */
use elevator::config;
use elevator::scenario;
use elevator::shared::{ElevatorMetrics, StopEvent, StopKind, Strategy};
use elevator::unwrap_or_exit;
use elevator::{Clock, ElevatorController};

#[derive(Serialize)]
struct RunReport {
    strategy: Strategy,
    metrics: ElevatorMetrics,
    stops: Vec<StopEvent>,
}

/// Simulates a single elevator car serving a batch of ride requests
#[derive(Parser)]
#[clap(name = "elevator-sim")]
struct Args {
    /// Controller configuration (TOML); missing file means defaults
    #[clap(long, value_name = "PATH", value_parser, default_value = "config.toml")]
    config: String,

    /// Ride requests to serve (TOML)
    #[clap(long, value_name = "PATH", value_parser)]
    scenario: String,

    /// Overrides the configured strategy
    #[clap(long, value_parser = parse_strategy)]
    strategy: Option<Strategy>,

    /// Pins the clock to this hour of day
    #[clap(long, value_parser = clap::value_parser!(u32).range(0..24))]
    hour: Option<u32>,

    /// Runs both strategies on the same scenario
    #[clap(long, action = ArgAction::SetTrue)]
    compare: bool,
}

fn parse_strategy(name: &str) -> Result<Strategy, String> {
    name.parse()
}

fn build_clock(hour: Option<u32>, clock_config: &config::ClockConfig) -> Box<dyn Clock> {
    match hour {
        Some(hour) => Box::new(unwrap_or_exit!(config::fixed_clock(hour))),
        None => unwrap_or_exit!(clock_config.build()),
    }
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Load the configuration and the requests
    let config = unwrap_or_exit!(config::load_config_or_default(&args.config));
    let scenario = unwrap_or_exit!(scenario::load_scenario(&args.scenario));
    let strategy = args.strategy.unwrap_or(config.controller.strategy);

    let strategies = if args.compare {
        vec![Strategy::Ordered, Strategy::NearestAction]
    } else {
        vec![strategy]
    };

    let mut reports = Vec::new();
    for strategy in strategies {
        let (stop_tx, stop_rx) = cbc::unbounded::<StopEvent>();
        let mut controller = ElevatorController::new(build_clock(args.hour, &config.clock), strategy)
            .with_start_floor(config.controller.start_floor)
            .with_stop_event_tx(stop_tx);

        for passenger in scenario.clone().into_passengers() {
            controller.request_ride(passenger);
        }
        controller.process_all_requests();

        let stops: Vec<StopEvent> = stop_rx.try_iter().collect();
        for stop in &stops {
            match (stop.kind, &stop.passenger) {
                (StopKind::Pickup, Some(name)) => info!("[{}] floor {}: pick up {}", strategy, stop.floor, name),
                (StopKind::Dropoff, Some(name)) => info!("[{}] floor {}: drop off {}", strategy, stop.floor, name),
                _ => info!("[{}] floor {}: park in lobby", strategy, stop.floor),
            }
        }

        let metrics = controller.metrics();
        info!(
            "[{}] done: {} floor(s) traversed, {} stop(s), parked at floor {}",
            strategy, metrics.total_floors_traversed, metrics.total_stops_made, metrics.current_floor
        );

        reports.push(RunReport { strategy, metrics, stops });
    }

    println!("{}", unwrap_or_exit!(serde_json::to_string_pretty(&reports)));
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod args_tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["elevator-sim", "--scenario", "s.toml"]).unwrap();

        assert_eq!(args.config, "config.toml");
        assert_eq!(args.scenario, "s.toml");
        assert_eq!(args.strategy, None);
        assert_eq!(args.hour, None);
        assert!(!args.compare);
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "elevator-sim", "--scenario", "s.toml", "--strategy", "efficient", "--hour", "9", "--compare",
        ])
        .unwrap();

        assert_eq!(args.strategy, Some(Strategy::NearestAction));
        assert_eq!(args.hour, Some(9));
        assert!(args.compare);
    }

    #[test]
    fn test_args_rejects_missing_scenario_and_bad_values() {
        assert!(Args::try_parse_from(["elevator-sim"]).is_err());
        assert!(Args::try_parse_from(["elevator-sim", "--scenario", "s.toml", "--hour", "24"]).is_err());
        assert!(Args::try_parse_from(["elevator-sim", "--scenario", "s.toml", "--strategy", "random"]).is_err());
    }
}
