/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A hall call: somebody at `floor` wants to travel in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallCall {
    pub floor: u8,
    pub direction: Direction,
}

/// Where a hall call comes from.
///
/// Residual calls are raised from inside a passenger exchange for passengers the exchanging
/// car could not take. Cars with their doors open at the calling floor are skipped for those,
/// otherwise a full car would be sent back to the floor it is standing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOrigin {
    Request,
    Residual,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Nearest capable elevator heuristic.
 *
 * Among cars with spare capacity, picks the closest "good candidate": a stationary car, or
 * one already moving in the call direction that has not passed the calling floor yet. If no
 * car qualifies, falls back to the closest car regardless of load or direction. Ties go to
 * the car created first.
 *
 * Returns the index of the chosen car, or `None` if every car was skipped.
 */
pub fn select_elevator(elevators: &[Elevator], call: HallCall, origin: CallOrigin) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (index, elevator) in elevators.iter().enumerate() {
        if !is_eligible(elevator, call, origin)
            || !elevator.can_add_passenger()
            || !is_good_candidate(elevator, call)
        {
            continue;
        }

        let distance = elevator.current_floor().abs_diff(call.floor);
        if best.map_or(true, |(_, min_distance)| distance < min_distance) {
            best = Some((index, distance));
        }
    }

    if let Some((index, _)) = best {
        return Some(index);
    }

    // Nobody qualifies, take the closest car even if it is full
    elevators
        .iter()
        .enumerate()
        .filter(|(_, elevator)| is_eligible(elevator, call, origin))
        .min_by_key(|(_, elevator)| elevator.current_floor().abs_diff(call.floor))
        .map(|(index, _)| index)
}

pub fn is_good_candidate(elevator: &Elevator, call: HallCall) -> bool {
    let floor = elevator.current_floor();
    match elevator.direction() {
        Direction::Stationary => true,
        Direction::Up => call.direction == Direction::Up && floor <= call.floor,
        Direction::Down => call.direction == Direction::Down && floor >= call.floor,
    }
}

fn is_eligible(elevator: &Elevator, call: HallCall, origin: CallOrigin) -> bool {
    match origin {
        CallOrigin::Request => true,
        CallOrigin::Residual => !elevator.doors_open_at(call.floor),
    }
}
