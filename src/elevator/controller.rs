/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info};
use std::rc::Rc;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::clock::Clock;
use crate::elevator::scheduler;
use crate::shared::{Action, ActionType, ElevatorMetrics, PassengerRef, StopEvent, StopKind, Strategy};

const LOBBY_FLOOR: i32 = 0;
const LOBBY_RETURN_CUTOFF_HOUR: u32 = 12;

/**
 * Single elevator car serving ride requests.
 *
 * The `ElevatorController` moves the car between floors, boards and unloads
 * passengers, and keeps the distance and stop counters. Requests are served
 * either strictly in arrival order or by always taking the nearest action.
 *
 * # Fields
 * - `current_floor`:           Where the car is right now.
 * - `requests`:                Passengers waiting for pickup, in arrival order.
 * - `current_riders`:          Passengers aboard, in boarding order.
 * - `total_floors_traversed`:  Sum of absolute floor deltas of every move.
 * - `total_stops_made`:        One per pickup, dropoff and lobby return.
 * - `strategy`:                How `process_all_requests` orders the work.
 * - `clock`:                   Local time source for the idle rule.
 * - `stop_event_tx`:           Optional sink notified on every counted stop.
 *
 */
pub struct ElevatorController {
    // Car state
    current_floor: i32,
    requests: Vec<PassengerRef>,
    current_riders: Vec<PassengerRef>,

    // Metrics
    total_floors_traversed: u64,
    total_stops_made: u64,

    // Fixed at construction
    strategy: Strategy,
    clock: Box<dyn Clock>,
    stop_event_tx: Option<cbc::Sender<StopEvent>>,
}

impl ElevatorController {
    pub fn new(clock: Box<dyn Clock>, strategy: Strategy) -> ElevatorController {
        ElevatorController {
            current_floor: LOBBY_FLOOR,
            requests: Vec::new(),
            current_riders: Vec::new(),
            total_floors_traversed: 0,
            total_stops_made: 0,
            strategy,
            clock,
            stop_event_tx: None,
        }
    }

    /// Ordered strategy with the given clock.
    pub fn with_clock(clock: Box<dyn Clock>) -> ElevatorController {
        ElevatorController::new(clock, Strategy::default())
    }

    /// Places the car on `floor` before any work starts. Not a movement, so
    /// nothing is added to the distance counter.
    pub fn with_start_floor(mut self, floor: i32) -> ElevatorController {
        self.current_floor = floor;
        self
    }

    pub fn with_stop_event_tx(mut self, stop_event_tx: cbc::Sender<StopEvent>) -> ElevatorController {
        self.stop_event_tx = Some(stop_event_tx);
        self
    }

    /***************************************/
    /*             Accessors               */
    /***************************************/
    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn pending_requests(&self) -> &[PassengerRef] {
        &self.requests
    }

    pub fn current_riders(&self) -> &[PassengerRef] {
        &self.current_riders
    }

    pub fn total_floors_traversed(&self) -> u64 {
        self.total_floors_traversed
    }

    pub fn total_stops_made(&self) -> u64 {
        self.total_stops_made
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn metrics(&self) -> ElevatorMetrics {
        ElevatorMetrics {
            current_floor: self.current_floor,
            total_floors_traversed: self.total_floors_traversed,
            total_stops_made: self.total_stops_made,
        }
    }

    /***************************************/
    /*             Requests                */
    /***************************************/
    pub fn request_ride(&mut self, passenger: PassengerRef) {
        debug!(
            "Ride requested by {} ({} -> {})",
            passenger.name, passenger.origin_floor, passenger.destination_floor
        );
        self.requests.push(passenger);
    }

    /// Serves the head of the queue with a full pickup and dropoff.
    /// Returns false when nobody is waiting.
    pub fn process_next_request(&mut self) -> bool {
        let next_passenger = match self.requests.first() {
            Some(passenger) => passenger.clone(),
            None => return false,
        };

        self.pickup(&next_passenger);
        self.dropoff(&next_passenger);
        true
    }

    /// Runs the configured strategy until there is no work left, then applies
    /// the idle rule once.
    pub fn process_all_requests(&mut self) {
        info!(
            "Processing {} request(s) with {} strategy",
            self.requests.len(),
            self.strategy
        );

        match self.strategy {
            Strategy::Ordered => while self.process_next_request() {},
            Strategy::NearestAction => self.process_all_requests_efficiently(),
        }

        self.handle_idle_state();
    }

    fn process_all_requests_efficiently(&mut self) {
        while !self.requests.is_empty() || !self.current_riders.is_empty() {
            let next_action = match self.select_next_efficient_action() {
                Some(action) => action,
                None => break,
            };

            match next_action.action_type {
                ActionType::Pickup => self.pickup(&next_action.passenger),
                ActionType::Dropoff => self.dropoff(&next_action.passenger),
            }
        }
    }

    pub fn select_next_efficient_action(&self) -> Option<Action> {
        scheduler::select_next_action(self.current_floor, &self.requests, &self.current_riders)
    }

    /***************************************/
    /*         Movement and stops          */
    /***************************************/
    pub fn move_to_floor(&mut self, target_floor: i32) {
        let floors_moved = (i64::from(target_floor) - i64::from(self.current_floor)).unsigned_abs();
        debug!("Moving {} -> {} ({} floor(s))", self.current_floor, target_floor, floors_moved);

        self.total_floors_traversed += floors_moved;
        self.current_floor = target_floor;
    }

    pub fn pickup(&mut self, passenger: &PassengerRef) {
        self.move_to_floor(passenger.origin_floor);
        self.remove_request(passenger);

        if !contains(&self.current_riders, passenger) {
            self.current_riders.push(passenger.clone());
        }

        self.record_stop(StopKind::Pickup, Some(passenger));
    }

    pub fn dropoff(&mut self, passenger: &PassengerRef) {
        self.move_to_floor(passenger.destination_floor);
        self.remove_rider(passenger);
        self.record_stop(StopKind::Dropoff, Some(passenger));
    }

    /// Removes the first queued occurrence of `passenger`, if any.
    pub fn remove_request(&mut self, passenger: &PassengerRef) {
        remove_first(&mut self.requests, passenger);
    }

    /// Removes the first occurrence of `passenger` among the riders, if any.
    pub fn remove_rider(&mut self, passenger: &PassengerRef) {
        remove_first(&mut self.current_riders, passenger);
    }

    fn record_stop(&mut self, kind: StopKind, passenger: Option<&PassengerRef>) {
        self.total_stops_made += 1;
        debug!("Stop #{} at floor {} ({:?})", self.total_stops_made, self.current_floor, kind);

        if let Some(tx) = &self.stop_event_tx {
            // A dropped receiver only means nobody is listening anymore.
            let _ = tx.send(StopEvent {
                kind,
                floor: self.current_floor,
                passenger: passenger.map(|p| p.name.clone()),
            });
        }
    }

    /***************************************/
    /*             Idle rule               */
    /***************************************/
    pub fn should_return_to_lobby(&self) -> bool {
        self.clock.hour() < LOBBY_RETURN_CUTOFF_HOUR
    }

    /// Before noon an idle car parks in the lobby; afterwards it stays put.
    pub fn handle_idle_state(&mut self) {
        if !self.current_riders.is_empty() || !self.requests.is_empty() {
            return;
        }

        if self.should_return_to_lobby() && self.current_floor != LOBBY_FLOOR {
            info!("Idle before noon, returning to lobby from floor {}", self.current_floor);
            self.move_to_floor(LOBBY_FLOOR);
            self.record_stop(StopKind::Lobby, None);
        }
    }

    pub fn reset_state(&mut self) {
        self.current_floor = LOBBY_FLOOR;
        self.requests.clear();
        self.current_riders.clear();
        self.total_floors_traversed = 0;
        self.total_stops_made = 0;
    }
}

fn contains(passengers: &[PassengerRef], passenger: &PassengerRef) -> bool {
    passengers.iter().any(|p| Rc::ptr_eq(p, passenger))
}

fn remove_first(passengers: &mut Vec<PassengerRef>, passenger: &PassengerRef) {
    if let Some(index) = passengers.iter().position(|p| Rc::ptr_eq(p, passenger)) {
        passengers.remove(index);
    }
}
