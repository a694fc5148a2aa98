/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::dispatch::{self, CallOrigin, HallCall};
use crate::building::Floor;
use crate::config::BuildingConfig;
use crate::elevator::Elevator;
use crate::error::SimulationError;
use crate::shared::{Behaviour, BuildingSnapshot, Direction, Passenger, PassengerEvent, TickReport};

/**
 * Owns every floor and elevator and advances the simulation.
 *
 * `request_elevator` and `tick` are the only mutating entry points besides the manual
 * `send_elevator`. All iteration happens in creation order, so a fixed sequence of calls
 * always produces the same events and state.
 *
 * # Fields
 * - `floors`:              Floors 1..=n, stored at index `floor - 1`.
 * - `elevators`:           Elevators with ids 1..=m, in creation order.
 * - `next_passenger_id`:   Monotonic id counter, never reused.
 * - `tick`:                Number of completed ticks.
 * - `delivered`:           Passengers that reached their destination, in arrival order.
 * - `pending_calls`:       Residual hall calls no elevator could take yet.
 */
#[derive(Debug, Clone)]
pub struct Building {
    floors: Vec<Floor>,
    elevators: Vec<Elevator>,
    next_passenger_id: u64,
    tick: u64,
    delivered: Vec<Passenger>,
    pending_calls: VecDeque<HallCall>,
}

impl Building {
    pub fn new(n_floors: u8, n_elevators: u8, capacity: usize) -> Result<Building, SimulationError> {
        Building::from_config(&BuildingConfig {
            n_floors,
            n_elevators,
            capacity,
            start_floor: 1,
        })
    }

    pub fn from_config(config: &BuildingConfig) -> Result<Building, SimulationError> {
        check_positive("floor count", config.n_floors as u64)?;
        check_positive("elevator count", config.n_elevators as u64)?;
        check_positive("elevator capacity", config.capacity as u64)?;
        if config.start_floor < 1 || config.start_floor > config.n_floors {
            return Err(SimulationError::InvalidFloor {
                floor: config.start_floor,
                n_floors: config.n_floors,
            });
        }

        let floors = (1..=config.n_floors).map(Floor::new).collect();
        let elevators = (1..=config.n_elevators)
            .map(|id| Elevator::new(id, config.capacity, config.start_floor))
            .collect();

        Ok(Building {
            floors,
            elevators,
            next_passenger_id: 1,
            tick: 0,
            delivered: Vec::new(),
            pending_calls: VecDeque::new(),
        })
    }

    pub fn n_floors(&self) -> u8 {
        self.floors.len() as u8
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor(&self, floor_number: u8) -> Option<&Floor> {
        let index = (floor_number as usize).checked_sub(1)?;
        self.floors.get(index)
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, elevator_id: u8) -> Option<&Elevator> {
        self.elevators.iter().find(|e| e.id() == elevator_id)
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn delivered_passengers(&self) -> &[Passenger] {
        &self.delivered
    }

    /// No passenger is waiting or travelling and no elevator has a pending stop.
    pub fn is_idle(&self) -> bool {
        self.floors.iter().all(|f| f.waiting_passengers().is_empty())
            && self.elevators.iter().all(|e| e.is_idle())
            && self.pending_calls.is_empty()
    }

    /**
     * Adds `count` passengers travelling from `origin` to `destination` and dispatches an
     * elevator to pick them up.
     *
     * Returns the ids of the new passengers. A rejected request changes nothing.
     */
    pub fn request_elevator(
        &mut self,
        origin: u8,
        destination: u8,
        count: u32,
    ) -> Result<Vec<u64>, SimulationError> {
        if let Err(e) = self.validate_request(origin, destination, count) {
            warn!("Rejected request {} -> {} x{}: {}", origin, destination, count, e);
            return Err(e);
        }

        let floor = &mut self.floors[origin as usize - 1];
        let mut ids = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let id = self.next_passenger_id;
            self.next_passenger_id += 1;
            floor.add_passenger(Passenger::new(id, origin, destination));
            ids.push(id);
        }
        info!(
            "Request accepted: {} passenger(s) from floor {} to floor {}",
            count, origin, destination
        );

        self.dispatch_elevator(origin, Direction::between(origin, destination));
        Ok(ids)
    }

    /// Sends the best elevator for a hall call at `floor`. Returns the chosen elevator id.
    pub fn dispatch_elevator(&mut self, floor: u8, direction: Direction) -> Option<u8> {
        self.dispatch_call(HallCall { floor, direction }, CallOrigin::Request)
    }

    /// Adds `floor` to the stops of one specific elevator.
    pub fn send_elevator(&mut self, elevator_id: u8, floor: u8) -> Result<(), SimulationError> {
        self.check_floor(floor)?;
        let elevator = self
            .elevators
            .iter_mut()
            .find(|e| e.id() == elevator_id)
            .ok_or(SimulationError::UnknownElevator(elevator_id))?;
        elevator.go_to_floor(floor);
        Ok(())
    }

    /**
     * Advances every elevator one step and exchanges passengers wherever doors opened.
     *
     * Residual calls that could not be assigned during an exchange are retried once all
     * elevators have moved.
     */
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;
        let mut report = TickReport::new(self.tick);

        for index in 0..self.elevators.len() {
            if self.elevators[index].step() == Behaviour::DoorsOpen {
                self.exchange_passengers(index, &mut report);
            }
        }

        self.retry_pending_calls();
        report
    }

    pub fn snapshot(&self) -> BuildingSnapshot {
        BuildingSnapshot {
            tick: self.tick,
            floors: self.floors.iter().map(Floor::snapshot).collect(),
            elevators: self.elevators.iter().map(Elevator::snapshot).collect(),
            delivered: self.delivered.len(),
        }
    }

    fn exchange_passengers(&mut self, index: usize, report: &mut TickReport) {
        let elevator = &mut self.elevators[index];
        let floor_number = elevator.current_floor();
        let floor = &mut self.floors[floor_number as usize - 1];

        // Alight
        for passenger in elevator.unload_at_current_floor() {
            info!(
                "Passenger {} arrived at floor {}",
                passenger.id(),
                floor_number
            );
            report.arrived.push(PassengerEvent {
                passenger_id: passenger.id(),
                elevator_id: elevator.id(),
                floor: floor_number,
            });
            self.delivered.push(passenger);
        }

        // Board in queue order until the car is full
        let direction = elevator.direction();
        while elevator.can_add_passenger() {
            let Some((position, passenger)) = floor.take_next_boarding(direction) else {
                break;
            };
            let passenger_id = passenger.id();
            if let Err(passenger) = elevator.add_passenger(passenger) {
                floor.reinsert(position, passenger);
                break;
            }
            info!(
                "Passenger {} boarded elevator {} at floor {}",
                passenger_id,
                elevator.id(),
                floor_number
            );
            report.boarded.push(PassengerEvent {
                passenger_id,
                elevator_id: elevator.id(),
                floor: floor_number,
            });
        }

        // Left-behind passengers get another elevator
        let residual: Vec<HallCall> = [Direction::Up, Direction::Down]
            .into_iter()
            .filter(|&d| floor.has_waiting(d))
            .map(|direction| HallCall {
                floor: floor_number,
                direction,
            })
            .collect();

        for call in residual {
            debug!(
                "Residual call at floor {} going {:?}",
                call.floor, call.direction
            );
            if self.dispatch_call(call, CallOrigin::Residual).is_none() {
                self.park_call(call);
            }
        }
    }

    fn retry_pending_calls(&mut self) {
        let calls: Vec<HallCall> = self.pending_calls.drain(..).collect();
        for call in calls {
            if !self.floors[call.floor as usize - 1].has_waiting(call.direction) {
                continue;
            }
            if self.dispatch_call(call, CallOrigin::Residual).is_none() {
                self.park_call(call);
            }
        }
    }

    fn park_call(&mut self, call: HallCall) {
        if !self.pending_calls.contains(&call) {
            debug!(
                "No elevator free for floor {} going {:?}, retrying next tick",
                call.floor, call.direction
            );
            self.pending_calls.push_back(call);
        }
    }

    fn dispatch_call(&mut self, call: HallCall, origin: CallOrigin) -> Option<u8> {
        let index = dispatch::select_elevator(&self.elevators, call, origin)?;
        let elevator = &mut self.elevators[index];
        elevator.go_to_floor(call.floor);
        debug!(
            "Dispatched elevator {} (floor {}) to floor {} going {:?}",
            elevator.id(),
            elevator.current_floor(),
            call.floor,
            call.direction
        );
        Some(elevator.id())
    }

    fn validate_request(&self, origin: u8, destination: u8, count: u32) -> Result<(), SimulationError> {
        self.check_floor(origin)?;
        self.check_floor(destination)?;
        if origin == destination {
            return Err(SimulationError::SameFloor(origin));
        }
        check_positive("passenger count", count as u64)
    }

    fn check_floor(&self, floor: u8) -> Result<(), SimulationError> {
        if floor < 1 || floor > self.n_floors() {
            return Err(SimulationError::InvalidFloor {
                floor,
                n_floors: self.n_floors(),
            });
        }
        Ok(())
    }
}

fn check_positive(name: &'static str, value: u64) -> Result<(), SimulationError> {
    if value == 0 {
        return Err(SimulationError::OutOfRange { name, value });
    }
    Ok(())
}
