/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::collections::BTreeSet;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Behaviour, Direction, ElevatorSnapshot, Passenger};

enum Event {
    NoDestinations,
    StopReached(u8),
    Travel(u8),
}

/**
 * Motion state machine for a single elevator car.
 *
 * The elevator advances at most one floor per call to `step`. Doors are open for exactly
 * one step after a stop is reached, the building performs the passenger exchange during
 * that window, and the next `step` implicitly closes them again.
 *
 * # Fields
 * - `id`:              Immutable elevator id, 1-based in creation order.
 * - `capacity`:        Maximum number of passengers on board.
 * - `current_floor`:   Floor the car is at.
 * - `direction`:       Committed direction of travel.
 * - `behaviour`:       Stopped, moving or doors open.
 * - `passengers`:      Passengers on board, in boarding order.
 * - `destinations`:    Pending stop floors, ascending and without duplicates.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elevator {
    id: u8,
    capacity: usize,
    current_floor: u8,
    direction: Direction,
    behaviour: Behaviour,
    passengers: Vec<Passenger>,
    destinations: BTreeSet<u8>,
}

impl Elevator {
    pub fn new(id: u8, capacity: usize, starting_floor: u8) -> Elevator {
        Elevator {
            id,
            capacity,
            current_floor: starting_floor,
            direction: Direction::Stationary,
            behaviour: Behaviour::Stopped,
            passengers: Vec::new(),
            destinations: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn behaviour(&self) -> Behaviour {
        self.behaviour
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Pending stops in ascending order.
    pub fn destinations(&self) -> Vec<u8> {
        self.destinations.iter().copied().collect()
    }

    pub fn has_destination(&self, floor: u8) -> bool {
        self.destinations.contains(&floor)
    }

    pub fn is_idle(&self) -> bool {
        self.destinations.is_empty() && self.passengers.is_empty()
    }

    pub fn doors_open_at(&self, floor: u8) -> bool {
        self.behaviour == Behaviour::DoorsOpen && self.current_floor == floor
    }

    pub fn can_add_passenger(&self) -> bool {
        self.passengers.len() < self.capacity
    }

    /// Takes a passenger on board. A full car hands the passenger back untouched.
    pub fn add_passenger(&mut self, mut passenger: Passenger) -> Result<(), Passenger> {
        if !self.can_add_passenger() {
            return Err(passenger);
        }

        passenger.board();
        self.destinations.insert(passenger.destination_floor());
        self.passengers.push(passenger);
        Ok(())
    }

    pub fn remove_passenger(&mut self, passenger_id: u64) -> Option<Passenger> {
        let index = self.passengers.iter().position(|p| p.id() == passenger_id)?;
        let mut passenger = self.passengers.remove(index);
        passenger.alight();
        Some(passenger)
    }

    /// Removes every passenger whose destination is the current floor, in boarding order.
    pub fn unload_at_current_floor(&mut self) -> Vec<Passenger> {
        let floor = self.current_floor;
        let (mut leaving, staying): (Vec<Passenger>, Vec<Passenger>) = self
            .passengers
            .drain(..)
            .partition(|p| p.destination_floor() == floor);
        self.passengers = staying;

        for passenger in leaving.iter_mut() {
            passenger.alight();
        }
        leaving
    }

    pub fn go_to_floor(&mut self, floor: u8) {
        if self.destinations.insert(floor) {
            debug!("Elevator {} added stop at floor {}", self.id, floor);
        }
    }

    /// Advances the state machine one tick and returns the resulting behaviour.
    pub fn step(&mut self) -> Behaviour {
        let event = self.next_event();
        self.handle_event(event);
        self.behaviour
    }

    /// The stop the elevator is currently heading for.
    pub fn next_destination(&self) -> Option<u8> {
        if self.destinations.is_empty() {
            return None;
        }

        let floor = self.current_floor;

        // Keep going up while there are stops at or above us
        if matches!(self.direction, Direction::Up | Direction::Stationary) {
            if let Some(&next) = self.destinations.range(floor..).next() {
                return Some(next);
            }
        }

        // Keep going down while there are stops at or below us
        if matches!(self.direction, Direction::Down | Direction::Stationary) {
            if let Some(&next) = self.destinations.range(..=floor).next_back() {
                return Some(next);
            }
        }

        // Reverse towards the closest stop
        self.destinations
            .iter()
            .copied()
            .min_by_key(|&f| f.abs_diff(floor))
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            id: self.id,
            floor: self.current_floor,
            direction: self.direction,
            behaviour: self.behaviour,
            capacity: self.capacity,
            passengers: self.passengers.clone(),
            destinations: self.destinations(),
        }
    }

    fn next_event(&self) -> Event {
        match self.next_destination() {
            None => Event::NoDestinations,
            Some(floor) if floor == self.current_floor => Event::StopReached(floor),
            Some(floor) => Event::Travel(floor),
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::NoDestinations => {
                self.behaviour = Behaviour::Stopped;
                self.direction = Direction::Stationary;
            }
            Event::StopReached(floor) => {
                self.destinations.remove(&floor);
                self.behaviour = Behaviour::DoorsOpen;
                self.direction = Direction::Stationary;
                debug!("Elevator {} opened doors at floor {}", self.id, floor);
            }
            Event::Travel(target) => {
                self.behaviour = Behaviour::Moving;
                self.direction = Direction::between(self.current_floor, target);
                match self.direction {
                    Direction::Up => self.current_floor += 1,
                    Direction::Down => self.current_floor -= 1,
                    Direction::Stationary => (),
                }
                debug!(
                    "Elevator {} moved {:?} to floor {} (heading for {})",
                    self.id, self.direction, self.current_floor, target
                );
            }
        }
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elevator {}: Floor {} {} ({}) - Passengers: {}/{}",
            self.id,
            self.current_floor,
            self.direction.symbol(),
            self.behaviour,
            self.passengers.len(),
            self.capacity
        )
    }
}
