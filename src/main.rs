/* 3rd party libraries */
use clap::{Arg, ArgMatches, Command};
use crossbeam_channel as cbc;
use log::{info, warn};
use std::io;
use std::path::Path;
use std::thread::Builder;

/* Custom libraries */
use elevator_sim::config::{self, Config};
use elevator_sim::console::{self, Console};
use elevator_sim::unwrap_or_exit;
use elevator_sim::Building;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn cli() -> Command<'static> {
    Command::new("elevator-sim")
        .about("Discrete-tick multi-elevator building simulator")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("floors")
                .long("floors")
                .takes_value(true)
                .help("Number of floors"),
        )
        .arg(
            Arg::new("elevators")
                .long("elevators")
                .takes_value(true)
                .help("Number of elevators"),
        )
        .arg(
            Arg::new("capacity")
                .long("capacity")
                .takes_value(true)
                .help("Passenger capacity of every elevator"),
        )
        .arg(
            Arg::new("ticks")
                .long("ticks")
                .takes_value(true)
                .help("Stop after this many ticks"),
        )
        .arg(
            Arg::new("interval-ms")
                .long("interval-ms")
                .takes_value(true)
                .help("Milliseconds between automatic ticks"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print tick reports and snapshots as JSON"),
        )
}

fn parse_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, String> {
    match matches.value_of(name) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid value '{}' for --{}", value, name)),
        None => Ok(None),
    }
}

fn load_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = match matches.value_of("config") {
        Some(path) => config::load_config(Path::new(path)).map_err(|e| e.to_string())?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            config::load_config(Path::new(DEFAULT_CONFIG_PATH)).map_err(|e| e.to_string())?
        }
        None => {
            info!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    // Command line flags override the file
    if let Some(n_floors) = parse_arg(matches, "floors")? {
        config.building.n_floors = n_floors;
    }
    if let Some(n_elevators) = parse_arg(matches, "elevators")? {
        config.building.n_elevators = n_elevators;
    }
    if let Some(capacity) = parse_arg(matches, "capacity")? {
        config.building.capacity = capacity;
    }
    if let Some(max_ticks) = parse_arg(matches, "ticks")? {
        config.simulation.max_ticks = Some(max_ticks);
    }
    if let Some(interval) = parse_arg(matches, "interval-ms")? {
        config.simulation.tick_interval_ms = interval;
    }
    if matches.is_present("json") {
        config.simulation.json_output = true;
    }
    Ok(config)
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load the configuration
    let matches = cli().get_matches();
    let config = unwrap_or_exit!(load_config(&matches));

    // Create the building and seed the initial traffic
    let mut building = unwrap_or_exit!(Building::from_config(&config.building));
    for request in &config.simulation.initial_requests {
        if let Err(e) =
            building.request_elevator(request.origin, request.destination, request.passengers)
        {
            warn!("Skipping initial request: {}", e);
        }
    }

    // Start the console input thread
    let (command_tx, command_rx) = cbc::unbounded::<console::Command>();
    let input_thread = Builder::new().name("console_input".into());
    unwrap_or_exit!(input_thread.spawn(move || console::read_commands(io::stdin().lock(), command_tx)));

    // Run the simulation loop on the main thread
    let building = Console::new(building, &config.simulation, command_rx).run();
    info!(
        "{} passengers delivered in {} ticks",
        building.delivered_passengers().len(),
        building.tick_count()
    );
}
