/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::Building;
use crate::shared::TickReport;

/***************************************/
/*             Public API              */
/***************************************/

/// Text status view: every elevator, then floors that have somebody waiting.
pub fn render_status(building: &Building) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== ELEVATOR SYSTEM STATUS ===");
    let _ = writeln!(out, "Tick: {}", building.tick_count());
    let _ = writeln!(out);

    let _ = writeln!(out, "ELEVATORS:");
    for elevator in building.elevators() {
        let _ = writeln!(out, "  {}", elevator);
        let destinations = elevator.destinations();
        if !destinations.is_empty() {
            let floors: Vec<String> = destinations.iter().map(u8::to_string).collect();
            let _ = writeln!(out, "    Destinations: [{}]", floors.join(", "));
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "FLOORS WITH WAITING PASSENGERS:");
    for floor in building
        .floors()
        .iter()
        .filter(|f| !f.waiting_passengers().is_empty())
    {
        let _ = writeln!(out, "  {}", floor);
        for passenger in floor.waiting_passengers() {
            let _ = writeln!(out, "    {}", passenger);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Delivered: {}", building.delivered_passengers().len());
    out
}

/// One line per boarding and arrival, arrivals first.
pub fn render_events(report: &TickReport) -> Vec<String> {
    let arrived = report.arrived.iter().map(|e| {
        format!(
            "Passenger {} arrived at floor {} (elevator {})",
            e.passenger_id, e.floor, e.elevator_id
        )
    });
    let boarded = report.boarded.iter().map(|e| {
        format!(
            "Passenger {} boarded elevator {} at floor {}",
            e.passenger_id, e.elevator_id, e.floor
        )
    });
    arrived.chain(boarded).collect()
}

pub const HELP: &str =
    "Commands: [r <from> <to> [n]] request, [g <elevator> <floor>] send, [s] status, [q] quit, [Enter] next tick";

/***************************************/
/*             Unit tests              */
/***************************************/
