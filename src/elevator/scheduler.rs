/*
* Candidate selection for the nearest-action strategy.
*/
use feruca::Collator;
use std::cmp::Ordering;

use crate::shared::{Action, ActionType, PassengerRef};

// Every waiting passenger is a pickup at their origin, every rider a dropoff at
// their destination.
pub fn candidate_actions(requests: &[PassengerRef], riders: &[PassengerRef]) -> Vec<Action> {
    let pickups = requests.iter().map(|passenger| Action {
        action_type: ActionType::Pickup,
        passenger: passenger.clone(),
        target_floor: passenger.origin_floor,
    });

    let dropoffs = riders.iter().map(|passenger| Action {
        action_type: ActionType::Dropoff,
        passenger: passenger.clone(),
        target_floor: passenger.destination_floor,
    });

    pickups.chain(dropoffs).collect()
}

/// Total order over candidate actions seen from `current_floor`:
/// distance, then dropoff before pickup, then lower target floor, then name.
pub fn compare_actions(
    collator: &mut Collator,
    current_floor: i32,
    first: &Action,
    second: &Action,
) -> Ordering {
    let first_distance = (i64::from(first.target_floor) - i64::from(current_floor)).abs();
    let second_distance = (i64::from(second.target_floor) - i64::from(current_floor)).abs();

    first_distance
        .cmp(&second_distance)
        .then_with(|| first.action_type.cmp(&second.action_type))
        .then_with(|| first.target_floor.cmp(&second.target_floor))
        .then_with(|| compare_names(collator, &first.passenger.name, &second.passenger.name))
}

// Unicode collation with the CLDR root order: accents sort with their base
// letter and lowercase precedes uppercase.
pub fn compare_names(collator: &mut Collator, first: &str, second: &str) -> Ordering {
    collator.collate(first, second)
}

/// Picks the best next action, or `None` when nobody is waiting or riding.
/// The candidate list is rebuilt on every call.
pub fn select_next_action(
    current_floor: i32,
    requests: &[PassengerRef],
    riders: &[PassengerRef],
) -> Option<Action> {
    let mut collator = Collator::default();

    candidate_actions(requests, riders)
        .into_iter()
        .min_by(|first, second| compare_actions(&mut collator, current_floor, first, second))
}
