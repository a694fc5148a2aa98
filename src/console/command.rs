/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::str::FromStr;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/

/// One line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Request {
        origin: u8,
        destination: u8,
        passengers: u32,
    },
    Send {
        elevator: u8,
        floor: u8,
    },
    Advance,
    Status,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', expected r, g, s, q or an empty line")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a valid number")]
    NotANumber(String),
}

const REQUEST_USAGE: &str = "r <from> <to> [passengers]";
const SEND_USAGE: &str = "g <elevator> <floor>";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Command, CommandError> {
        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(Command::Advance);
        };
        let args: Vec<&str> = words.collect();

        match keyword.to_ascii_lowercase().as_str() {
            "r" | "request" => match args.as_slice() {
                [origin, destination] => Ok(Command::Request {
                    origin: number(origin)?,
                    destination: number(destination)?,
                    passengers: 1,
                }),
                [origin, destination, passengers] => Ok(Command::Request {
                    origin: number(origin)?,
                    destination: number(destination)?,
                    passengers: number(passengers)?,
                }),
                _ => Err(CommandError::Usage(REQUEST_USAGE)),
            },
            "g" | "goto" => match args.as_slice() {
                [elevator, floor] => Ok(Command::Send {
                    elevator: number(elevator)?,
                    floor: number(floor)?,
                }),
                _ => Err(CommandError::Usage(SEND_USAGE)),
            },
            "s" | "status" => Ok(Command::Status),
            "q" | "quit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn number<T: FromStr>(word: &str) -> Result<T, CommandError> {
    word.parse()
        .map_err(|_| CommandError::NotANumber(word.to_string()))
}
