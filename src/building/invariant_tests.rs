/*
 * Property tests for the building
 *
 * Random request/tick scripts are replayed against small buildings and the
 * structural invariants are checked after every step.
 *
 * Tests:
 * - prop_capacity_never_exceeded
 * - prop_buttons_match_waiting_passengers
 * - prop_passengers_conserved_and_unique
 * - prop_lifecycle_moves_forward
 * - prop_replay_is_deterministic
 */

/***************************************/
/*           Property tests            */
/***************************************/
#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::collections::HashMap;

    use crate::building::Building;
    use crate::shared::{BuildingSnapshot, PassengerState, TickReport};

    #[derive(Debug, Clone)]
    enum Op {
        Request(u8, u8, u32),
        Tick,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            1 => (0u8..=9, 0u8..=9, 0u32..=5).prop_map(|(o, d, c)| Op::Request(o, d, c)),
            3 => Just(Op::Tick),
        ]
    }

    fn script_strategy() -> impl Strategy<Value = ((u8, u8, usize), Vec<Op>)> {
        ((2u8..=8, 1u8..=3, 1usize..=4), prop::collection::vec(op_strategy(), 0..120))
    }

    fn apply(building: &mut Building, op: &Op) -> Option<TickReport> {
        match *op {
            Op::Request(origin, destination, count) => {
                let _ = building.request_elevator(origin, destination, count);
                None
            }
            Op::Tick => Some(building.tick()),
        }
    }

    fn rank(state: PassengerState) -> u8 {
        match state {
            PassengerState::Waiting => 0,
            PassengerState::InElevator => 1,
            PassengerState::Arrived => 2,
        }
    }

    /// Every passenger id with its state, asserting each id is held by exactly one container.
    fn locate_passengers(building: &Building) -> HashMap<u64, PassengerState> {
        let mut seen = HashMap::new();
        for floor in building.floors() {
            for p in floor.waiting_passengers() {
                assert_eq!(p.state(), PassengerState::Waiting);
                assert_eq!(p.origin_floor(), floor.floor_number());
                assert!(seen.insert(p.id(), p.state()).is_none());
            }
        }
        for elevator in building.elevators() {
            for p in elevator.passengers() {
                assert_eq!(p.state(), PassengerState::InElevator);
                assert!(elevator.has_destination(p.destination_floor())
                    || elevator.current_floor() == p.destination_floor());
                assert!(seen.insert(p.id(), p.state()).is_none());
            }
        }
        for p in building.delivered_passengers() {
            assert_eq!(p.state(), PassengerState::Arrived);
            assert!(seen.insert(p.id(), p.state()).is_none());
        }
        seen
    }

    fn replay(params: (u8, u8, usize), ops: &[Op]) -> (BuildingSnapshot, Vec<TickReport>) {
        let mut building = Building::new(params.0, params.1, params.2).unwrap();
        let reports = ops.iter().filter_map(|op| apply(&mut building, op)).collect();
        (building.snapshot(), reports)
    }

    proptest! {
        #[test]
        fn prop_capacity_never_exceeded((params, ops) in script_strategy()) {
            let mut building = Building::new(params.0, params.1, params.2).unwrap();
            for op in &ops {
                apply(&mut building, op);
                for elevator in building.elevators() {
                    prop_assert!(elevator.passengers().len() <= elevator.capacity());
                }
            }
        }

        #[test]
        fn prop_buttons_match_waiting_passengers((params, ops) in script_strategy()) {
            let mut building = Building::new(params.0, params.1, params.2).unwrap();
            for op in &ops {
                apply(&mut building, op);
                for floor in building.floors() {
                    let number = floor.floor_number();
                    let wants_up = floor.waiting_passengers().iter().any(|p| p.destination_floor() > number);
                    let wants_down = floor.waiting_passengers().iter().any(|p| p.destination_floor() < number);
                    prop_assert_eq!(floor.up_button_pressed(), wants_up);
                    prop_assert_eq!(floor.down_button_pressed(), wants_down);
                }
            }
        }

        #[test]
        fn prop_passengers_conserved_and_unique((params, ops) in script_strategy()) {
            let mut building = Building::new(params.0, params.1, params.2).unwrap();
            let mut created = 0usize;
            for op in &ops {
                if let Op::Request(origin, destination, count) = *op {
                    if building.request_elevator(origin, destination, count).is_ok() {
                        created += count as usize;
                    }
                } else {
                    apply(&mut building, op);
                }
                prop_assert_eq!(locate_passengers(&building).len(), created);
            }
        }

        #[test]
        fn prop_lifecycle_moves_forward((params, ops) in script_strategy()) {
            let mut building = Building::new(params.0, params.1, params.2).unwrap();
            let mut last: HashMap<u64, PassengerState> = HashMap::new();
            for op in &ops {
                apply(&mut building, op);
                for (id, state) in locate_passengers(&building) {
                    if let Some(previous) = last.get(&id) {
                        // one tick moves a passenger at most one stage forward
                        prop_assert!(rank(state) >= rank(*previous));
                        prop_assert!(rank(state) - rank(*previous) <= 1);
                    } else {
                        prop_assert_eq!(state, PassengerState::Waiting);
                    }
                    last.insert(id, state);
                }
            }
        }

        #[test]
        fn prop_replay_is_deterministic((params, ops) in script_strategy()) {
            let first = replay(params, &ops);
            let second = replay(params, &ops);
            prop_assert_eq!(first, second);
        }
    }
}
