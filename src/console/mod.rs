pub mod command;
pub mod render;

mod command_tests;

pub use command::Command;

/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info, warn};
use std::io::BufRead;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::Building;
use crate::config::SimulationConfig;

/**
 * Text shell around a `Building`.
 *
 * Commands arrive on a channel fed by `read_commands`. Whenever no command arrives for
 * `tick_interval`, the simulation advances one tick on its own, so a quiet operator still
 * sees the elevators move.
 *
 * # Fields
 * - `building`:        The simulated building.
 * - `command_rx`:      Parsed operator commands.
 * - `tick_interval`:   Pause between automatic ticks.
 * - `max_ticks`:       Stop after this many ticks, if set.
 * - `json_output`:     Print snapshots as JSON instead of the text view.
 */
pub struct Console {
    building: Building,
    command_rx: cbc::Receiver<Command>,
    tick_interval: Duration,
    max_ticks: Option<u64>,
    json_output: bool,
}

impl Console {
    pub fn new(
        building: Building,
        config: &SimulationConfig,
        command_rx: cbc::Receiver<Command>,
    ) -> Console {
        Console {
            building,
            command_rx,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            max_ticks: config.max_ticks,
            json_output: config.json_output,
        }
    }

    /// Runs until `q`, the tick limit, or closed input without a tick limit.
    /// Returns the building in its final state.
    pub fn run(mut self) -> Building {
        info!(
            "Simulation started: {} floors, {} elevators",
            self.building.n_floors(),
            self.building.elevators().len()
        );
        self.print_status();
        println!("{}", render::HELP);

        while !self.limit_reached() {
            let keep_running = cbc::select! {
                recv(self.command_rx) -> command => {
                    match command {
                        Ok(command) => self.handle_command(command),
                        Err(_) => self.handle_input_closed(),
                    }
                }
                default(self.tick_interval) => {
                    self.advance();
                    true
                }
            };

            if !keep_running {
                break;
            }
        }

        info!("Simulation stopped after {} ticks", self.building.tick_count());
        self.building
    }

    fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::Request {
                origin,
                destination,
                passengers,
            } => match self.building.request_elevator(origin, destination, passengers) {
                Ok(ids) => println!("Elevator requested for passengers {:?}", ids),
                Err(e) => println!("Request rejected: {}", e),
            },
            Command::Send { elevator, floor } => {
                if let Err(e) = self.building.send_elevator(elevator, floor) {
                    println!("Send rejected: {}", e);
                }
            }
            Command::Advance => self.advance(),
            Command::Status => self.print_status(),
            Command::Quit => return false,
        }
        true
    }

    // Without a tick limit nobody could stop the loop any more
    fn handle_input_closed(&mut self) -> bool {
        self.command_rx = cbc::never();
        if self.max_ticks.is_none() {
            info!("Input closed, stopping");
            return false;
        }
        true
    }

    fn advance(&mut self) {
        let report = self.building.tick();
        if self.json_output {
            match serde_json::to_string(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to serialize tick report: {}", e),
            }
        } else {
            for line in render::render_events(&report) {
                println!("{}", line);
            }
        }
        self.print_status();
    }

    fn print_status(&self) {
        if self.json_output {
            match serde_json::to_string(&self.building.snapshot()) {
                Ok(json) => println!("{}", json),
                Err(e) => error!("Failed to serialize snapshot: {}", e),
            }
        } else {
            print!("{}", render::render_status(&self.building));
        }
    }

    fn limit_reached(&self) -> bool {
        self.max_ticks
            .map_or(false, |max| self.building.tick_count() >= max)
    }
}

/// Reads operator commands from `input` line by line until it closes or the console quits.
pub fn read_commands<R: BufRead>(input: R, command_tx: cbc::Sender<Command>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Error reading console input: {}", e);
                return;
            }
        };

        match line.parse::<Command>() {
            Ok(command) => {
                if command_tx.send(command).is_err() {
                    return;
                }
            }
            Err(e) => warn!("{}", e),
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
