/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, FloorSnapshot, Passenger};

/**
 * One level of the building.
 *
 * Holds the passengers waiting at this level in arrival order. The hall call buttons are
 * derived from that queue: `up_button` is lit iff somebody waiting wants to go higher,
 * `down_button` iff somebody wants to go lower. Every mutation recomputes them.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    floor_number: u8,
    waiting: Vec<Passenger>,
    up_button: bool,
    down_button: bool,
}

impl Floor {
    pub fn new(floor_number: u8) -> Floor {
        Floor {
            floor_number,
            waiting: Vec::new(),
            up_button: false,
            down_button: false,
        }
    }

    pub fn floor_number(&self) -> u8 {
        self.floor_number
    }

    pub fn waiting_passengers(&self) -> &[Passenger] {
        &self.waiting
    }

    pub fn up_button_pressed(&self) -> bool {
        self.up_button
    }

    pub fn down_button_pressed(&self) -> bool {
        self.down_button
    }

    /// Whether anybody waiting here wants to travel in `direction`.
    pub fn has_waiting(&self, direction: Direction) -> bool {
        self.waiting
            .iter()
            .any(|p| Direction::between(self.floor_number, p.destination_floor()) == direction)
    }

    pub fn add_passenger(&mut self, passenger: Passenger) {
        self.waiting.push(passenger);
        self.refresh_buttons();
    }

    pub fn remove_passenger(&mut self, passenger_id: u64) -> Option<Passenger> {
        let index = self.waiting.iter().position(|p| p.id() == passenger_id)?;
        let passenger = self.waiting.remove(index);
        self.refresh_buttons();
        Some(passenger)
    }

    /// Removes the first waiting passenger allowed into an elevator committed to
    /// `elevator_direction`, together with its queue position.
    pub(crate) fn take_next_boarding(
        &mut self,
        elevator_direction: Direction,
    ) -> Option<(usize, Passenger)> {
        let index = self
            .waiting
            .iter()
            .position(|p| p.can_board(elevator_direction))?;
        let passenger = self.waiting.remove(index);
        self.refresh_buttons();
        Some((index, passenger))
    }

    /// Puts a passenger back at the queue position it was taken from.
    pub(crate) fn reinsert(&mut self, index: usize, passenger: Passenger) {
        let index = index.min(self.waiting.len());
        self.waiting.insert(index, passenger);
        self.refresh_buttons();
    }

    pub fn snapshot(&self) -> FloorSnapshot {
        FloorSnapshot {
            floor: self.floor_number,
            waiting: self.waiting.clone(),
            up_button: self.up_button,
            down_button: self.down_button,
        }
    }

    fn refresh_buttons(&mut self) {
        self.up_button = self.has_waiting(Direction::Up);
        self.down_button = self.has_waiting(Direction::Down);
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Floor {}: {} waiting",
            self.floor_number,
            self.waiting.len()
        )
    }
}
