pub mod macros;
pub mod structs;

pub use structs::Action;
pub use structs::ActionType;
pub use structs::ElevatorMetrics;
pub use structs::Passenger;
pub use structs::PassengerRef;
pub use structs::StopEvent;
pub use structs::StopKind;
pub use structs::Strategy;
