/*
 * Unit tests for console command parsing
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_parse_empty_line_advances
 * - test_parse_request
 * - test_parse_request_default_passengers
 * - test_parse_send
 * - test_parse_status_and_quit
 * - test_parse_errors
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    use crate::console::command::CommandError;
    use crate::console::Command;

    #[test]
    fn test_parse_empty_line_advances() {
        assert_eq!("".parse::<Command>(), Ok(Command::Advance));
        assert_eq!("   \t".parse::<Command>(), Ok(Command::Advance));
    }

    #[test]
    fn test_parse_request() {
        // Act
        let command = "R 3 8 2".parse::<Command>();

        // Assert
        assert_eq!(
            command,
            Ok(Command::Request {
                origin: 3,
                destination: 8,
                passengers: 2
            })
        );
    }

    #[test]
    fn test_parse_request_default_passengers() {
        assert_eq!(
            "request 7 2".parse::<Command>(),
            Ok(Command::Request {
                origin: 7,
                destination: 2,
                passengers: 1
            })
        );
    }

    #[test]
    fn test_parse_send() {
        assert_eq!(
            "g 2 9".parse::<Command>(),
            Ok(Command::Send {
                elevator: 2,
                floor: 9
            })
        );
    }

    #[test]
    fn test_parse_status_and_quit() {
        assert_eq!("s".parse::<Command>(), Ok(Command::Status));
        assert_eq!("Q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!(" quit ".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".parse::<Command>(),
            Err(CommandError::Unknown("x".to_string()))
        );
        assert!(matches!(
            "r 1".parse::<Command>(),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            "g 1 2 3".parse::<Command>(),
            Err(CommandError::Usage(_))
        ));
        assert_eq!(
            "r one 5".parse::<Command>(),
            Err(CommandError::NotANumber("one".to_string()))
        );
        assert_eq!(
            "r 1 300".parse::<Command>(),
            Err(CommandError::NotANumber("300".to_string()))
        );
    }
}
