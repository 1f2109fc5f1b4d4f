/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A ride request: who is travelling, where they wait and where they leave.
#[derive(Debug, Clone)]
pub struct Passenger {
    pub name: String,
    pub origin_floor: i32,
    pub destination_floor: i32,
}

impl Passenger {
    pub fn new(name: impl Into<String>, origin_floor: i32, destination_floor: i32) -> Passenger {
        Passenger {
            name: name.into(),
            origin_floor,
            destination_floor,
        }
    }

    /// Allocates a new passenger handle. Two handles are the same passenger
    /// only if they point at the same allocation.
    pub fn new_ref(
        name: impl Into<String>,
        origin_floor: i32,
        destination_floor: i32,
    ) -> PassengerRef {
        Rc::new(Passenger::new(name, origin_floor, destination_floor))
    }
}

pub type PassengerRef = Rc<Passenger>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    #[serde(rename = "ordered", alias = "fifo")]
    Ordered,
    #[serde(rename = "nearest-action", alias = "efficient")]
    NearestAction,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Strategy::Ordered => "ordered",
            Strategy::NearestAction => "nearest-action",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ordered" | "fifo" => Ok(Strategy::Ordered),
            "nearest-action" | "efficient" => Ok(Strategy::NearestAction),
            other => Err(format!("unknown strategy '{}'", other)),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    // Declaration order is the tie-break order: dropoff wins over pickup.
    Dropoff,
    Pickup,
}

/// One candidate step for the nearest-action strategy.
#[derive(Debug, Clone)]
pub struct Action {
    pub action_type: ActionType,
    pub passenger: PassengerRef,
    pub target_floor: i32,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Pickup,
    Dropoff,
    Lobby,
}

/// Emitted for every counted stop.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StopEvent {
    pub kind: StopKind,
    pub floor: i32,
    pub passenger: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElevatorMetrics {
    #[serde(rename = "currentFloor")]
    pub current_floor: i32,
    #[serde(rename = "totalFloorsTraversed")]
    pub total_floors_traversed: u64,
    #[serde(rename = "totalStopsMade")]
    pub total_stops_made: u64,
}
