/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Passenger;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    #[serde(rename = "stopped")]
    Stopped,
    #[serde(rename = "moving")]
    Moving,
    #[serde(rename = "doorsOpen")]
    DoorsOpen,
}

impl fmt::Display for Behaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Behaviour::Stopped => write!(f, "Stopped"),
            Behaviour::Moving => write!(f, "Moving"),
            Behaviour::DoorsOpen => write!(f, "DoorsOpen"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stationary,
}

impl Direction {
    /// Direction of travel from `from` to `to`. Equal floors give `Stationary`.
    pub fn between(from: u8, to: u8) -> Direction {
        if to > from {
            Direction::Up
        } else if to < from {
            Direction::Down
        } else {
            Direction::Stationary
        }
    }

    pub fn symbol(&self) -> &'static str {
        match *self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Stationary => "•",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PassengerState {
    Waiting,
    InElevator,
    Arrived,
}

impl fmt::Display for PassengerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PassengerState::Waiting => write!(f, "Waiting"),
            PassengerState::InElevator => write!(f, "InElevator"),
            PassengerState::Arrived => write!(f, "Arrived"),
        }
    }
}

/// A single boarding or arrival observed during a tick.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PassengerEvent {
    pub passenger_id: u64,
    pub elevator_id: u8,
    pub floor: u8,
}

/// Everything that happened to passengers during one tick, in elevator order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TickReport {
    pub tick: u64,
    pub arrived: Vec<PassengerEvent>,
    pub boarded: Vec<PassengerEvent>,
}

impl TickReport {
    pub fn new(tick: u64) -> TickReport {
        TickReport {
            tick,
            arrived: Vec::new(),
            boarded: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.arrived.is_empty() && self.boarded.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FloorSnapshot {
    pub floor: u8,
    pub waiting: Vec<Passenger>,
    pub up_button: bool,
    pub down_button: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ElevatorSnapshot {
    pub id: u8,
    pub floor: u8,
    pub direction: Direction,
    pub behaviour: Behaviour,
    pub capacity: usize,
    pub passengers: Vec<Passenger>,
    pub destinations: Vec<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildingSnapshot {
    pub tick: u64,
    pub floors: Vec<FloorSnapshot>,
    pub elevators: Vec<ElevatorSnapshot>,
    pub delivered: usize,
}
