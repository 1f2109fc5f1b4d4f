/*
 * Integration tests driving the public API with the bundled scenario files.
 *
 * The tests follows the Arrange, Act, Assert pattern.
 */
use crossbeam_channel::unbounded;
use elevator::config;
use elevator::scenario::load_scenario;
use elevator::{ElevatorController, ElevatorMetrics, FixedClock, StopEvent, StopKind, Strategy};

fn run_scenario_file(path: &str, hour: u32, strategy: Strategy) -> (ElevatorMetrics, Vec<StopEvent>) {
    let scenario = load_scenario(path).unwrap();
    let (stop_tx, stop_rx) = unbounded::<StopEvent>();
    let mut controller = ElevatorController::new(Box::new(FixedClock::at_hour(hour).unwrap()), strategy)
        .with_stop_event_tx(stop_tx);

    for passenger in scenario.into_passengers() {
        controller.request_ride(passenger);
    }
    controller.process_all_requests();

    (controller.metrics(), stop_rx.try_iter().collect())
}

#[test]
fn test_two_riders_ordered_afternoon() {
    // Act
    let (metrics, stops) = run_scenario_file("scenarios/two_riders.toml", 15, Strategy::Ordered);

    // Assert
    assert_eq!(
        metrics,
        ElevatorMetrics { current_floor: 2, total_floors_traversed: 16, total_stops_made: 4 }
    );
    let floors: Vec<i32> = stops.iter().map(|s| s.floor).collect();
    assert_eq!(floors, vec![3, 9, 6, 2]);
}

#[test]
fn test_two_riders_ordered_morning_parks_in_lobby() {
    // Act
    let (metrics, stops) = run_scenario_file("scenarios/two_riders.toml", 9, Strategy::Ordered);

    // Assert
    assert_eq!(
        metrics,
        ElevatorMetrics { current_floor: 0, total_floors_traversed: 18, total_stops_made: 5 }
    );
    assert_eq!(stops.last().map(|s| s.kind), Some(StopKind::Lobby));
}

#[test]
fn test_crossing_paths_nearest_action_beats_ordered() {
    // Act
    let (ordered, _) = run_scenario_file("scenarios/crossing_paths.toml", 15, Strategy::Ordered);
    let (nearest, nearest_stops) =
        run_scenario_file("scenarios/crossing_paths.toml", 15, Strategy::NearestAction);

    // Assert
    assert_eq!(ordered.total_floors_traversed, 28);
    assert_eq!(nearest.total_floors_traversed, 16);
    assert_eq!(nearest.total_stops_made, 6);

    let visited: Vec<(StopKind, i32)> = nearest_stops.iter().map(|s| (s.kind, s.floor)).collect();
    assert_eq!(
        visited,
        vec![
            (StopKind::Pickup, 2),
            (StopKind::Pickup, 5),
            (StopKind::Pickup, 7),
            (StopKind::Dropoff, 8),
            (StopKind::Dropoff, 1),
            (StopKind::Dropoff, 0),
        ]
    );
}

#[test]
fn test_bundled_config_parses() {
    let config = config::load_config("config.toml").unwrap();

    assert_eq!(config.controller.strategy, Strategy::Ordered);
    assert_eq!(config.controller.start_floor, 0);
    assert_eq!(config.clock.fixed_hour, None);
}
