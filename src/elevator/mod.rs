pub mod clock;
pub mod controller;
pub mod scheduler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::ElevatorController;
