pub mod macros;
pub mod passenger;
pub mod structs;

pub use passenger::Passenger;
pub use structs::Behaviour;
pub use structs::BuildingSnapshot;
pub use structs::Direction;
pub use structs::ElevatorSnapshot;
pub use structs::FloorSnapshot;
pub use structs::PassengerEvent;
pub use structs::PassengerState;
pub use structs::TickReport;
