pub mod building;
pub mod dispatch;
pub mod floor;

mod floor_tests;
mod invariant_tests;

pub use building::Building;
pub use dispatch::{CallOrigin, HallCall};
pub use floor::Floor;
