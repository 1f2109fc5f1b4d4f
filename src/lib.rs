pub mod config;
pub mod elevator;
pub mod error;
pub mod scenario;
pub mod shared;

pub use elevator::{Clock, ElevatorController, FixedClock, SystemClock};
pub use shared::{ElevatorMetrics, Passenger, PassengerRef, StopEvent, StopKind, Strategy};
pub use error::LoadError;
