/*
 * Unit tests for floors
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_floor_new
 * - test_floor_add_passenger_up
 * - test_floor_add_passenger_down
 * - test_floor_remove_passenger
 * - test_floor_take_next_boarding_respects_direction
 * - test_floor_reinsert_keeps_order
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    use crate::building::Floor;
    use crate::shared::Direction::{Down, Stationary, Up};
    use crate::shared::Passenger;

    #[test]
    fn test_floor_new() {
        // Arrange & Act
        let floor = Floor::new(5);

        // Assert
        assert_eq!(floor.floor_number(), 5);
        assert!(floor.waiting_passengers().is_empty());
        assert!(!floor.up_button_pressed());
        assert!(!floor.down_button_pressed());
    }

    #[test]
    fn test_floor_add_passenger_up() {
        // Arrange
        let mut floor = Floor::new(5);

        // Act
        floor.add_passenger(Passenger::new(1, 5, 8));

        // Assert
        assert_eq!(floor.waiting_passengers().len(), 1);
        assert!(floor.up_button_pressed());
        assert!(!floor.down_button_pressed());
    }

    #[test]
    fn test_floor_add_passenger_down() {
        // Arrange
        let mut floor = Floor::new(5);

        // Act
        floor.add_passenger(Passenger::new(1, 5, 2));

        // Assert
        assert!(!floor.up_button_pressed());
        assert!(floor.down_button_pressed());
    }

    #[test]
    fn test_floor_remove_passenger() {
        // Arrange
        let mut floor = Floor::new(5);
        floor.add_passenger(Passenger::new(1, 5, 8));
        floor.add_passenger(Passenger::new(2, 5, 1));

        // Act
        let removed = floor.remove_passenger(1);
        let missing = floor.remove_passenger(1);

        // Assert
        assert_eq!(removed.map(|p| p.id()), Some(1));
        assert!(missing.is_none());
        assert_eq!(floor.waiting_passengers().len(), 1);
        assert!(!floor.up_button_pressed());
        assert!(floor.down_button_pressed());
    }

    #[test]
    fn test_floor_take_next_boarding_respects_direction() {
        // Arrange
        let mut floor = Floor::new(4);
        floor.add_passenger(Passenger::new(1, 4, 2));
        floor.add_passenger(Passenger::new(2, 4, 9));
        floor.add_passenger(Passenger::new(3, 4, 6));

        // Act
        let first_up = floor.take_next_boarding(Up);
        let first_any = floor.take_next_boarding(Stationary);
        let next_down = floor.take_next_boarding(Down);

        // Assert
        assert_eq!(first_up.map(|(i, p)| (i, p.id())), Some((1, 2)));
        assert_eq!(first_any.map(|(i, p)| (i, p.id())), Some((0, 1)));
        assert!(next_down.is_none());
        assert!(floor.up_button_pressed());
        assert!(!floor.down_button_pressed());
    }

    #[test]
    fn test_floor_reinsert_keeps_order() {
        // Arrange
        let mut floor = Floor::new(1);
        floor.add_passenger(Passenger::new(1, 1, 3));
        floor.add_passenger(Passenger::new(2, 1, 4));
        floor.add_passenger(Passenger::new(3, 1, 5));
        let (position, passenger) = floor.take_next_boarding(Up).unwrap();

        // Act
        floor.reinsert(position, passenger);

        // Assert
        let ids: Vec<u64> = floor.waiting_passengers().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(floor.up_button_pressed());
    }
}
