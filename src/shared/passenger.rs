/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, PassengerState};

/**
 * A single trip request.
 *
 * Origin and destination never change after creation. The state only moves forward,
 * `Waiting -> InElevator -> Arrived`, and only the container currently holding the
 * passenger (a floor or an elevator) can advance it.
 *
 * # Fields
 * - `id`:                  Unique id handed out by the building, never reused.
 * - `origin_floor`:        Floor where the passenger entered the simulation.
 * - `destination_floor`:   Floor the passenger wants to reach.
 * - `state`:               Current lifecycle stage.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    id: u64,
    origin_floor: u8,
    destination_floor: u8,
    state: PassengerState,
}

impl Passenger {
    pub(crate) fn new(id: u64, origin_floor: u8, destination_floor: u8) -> Passenger {
        Passenger {
            id,
            origin_floor,
            destination_floor,
            state: PassengerState::Waiting,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn origin_floor(&self) -> u8 {
        self.origin_floor
    }

    pub fn destination_floor(&self) -> u8 {
        self.destination_floor
    }

    pub fn state(&self) -> PassengerState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        Direction::between(self.origin_floor, self.destination_floor)
    }

    /// Whether this passenger may step into an elevator committed to `elevator_direction`.
    pub fn can_board(&self, elevator_direction: Direction) -> bool {
        match self.direction() {
            Direction::Up => elevator_direction != Direction::Down,
            Direction::Down => elevator_direction != Direction::Up,
            Direction::Stationary => elevator_direction == Direction::Stationary,
        }
    }

    pub(crate) fn board(&mut self) {
        debug_assert_eq!(self.state, PassengerState::Waiting);
        self.state = PassengerState::InElevator;
    }

    pub(crate) fn alight(&mut self) {
        debug_assert_eq!(self.state, PassengerState::InElevator);
        self.state = PassengerState::Arrived;
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Passenger {}: {} -> {} ({})",
            self.id, self.origin_floor, self.destination_floor, self.state
        )
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
