/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Floor, RouteResult};

/***************************************/
/*             Constants               */
/***************************************/
/// Time units spent per floor of vertical distance.
pub const SINGLE_FLOOR_TRAVEL_TIME: u64 = 10;

/**
 * Plans the route of a single elevator car.
 *
 * The car goes in one direction until the last requested floor on that side, then reverses and
 * covers the other side. The first direction is towards the closer end of the requested floors;
 * on a tie the car goes down first.
 *
 * # Arguments
 * - `start_floor`:     The floor the car is standing at.
 * - `target_floors`:   The floors to visit. Duplicates and the start floor itself are allowed.
 *
 * # Returns
 * A `RouteResult` whose first floor is `start_floor`, containing every distinct floor once.
 *
 * The caller must pass a positive start floor. Passing only the start floor as target gives a
 * single-floor route with zero travel time.
 */
pub fn plan(start_floor: Floor, target_floors: &[Floor]) -> RouteResult {
    debug_assert!(start_floor > 0, "floors are positive integers");

    let sorted = normalize(start_floor, target_floors);
    let start_idx = match sorted.binary_search(&start_floor) {
        Ok(idx) => idx,
        Err(_) => unreachable!("start floor is part of the normalized list"),
    };

    if sorted.len() == 1 {
        return RouteResult {
            total_travel_time: 0,
            floors_visited_order: sorted,
        };
    }

    let direction = choose_direction(&sorted, start_idx);
    debug!(
        "Start floor {} at index {} of {:?}, going {:?} then {:?}",
        start_floor,
        start_idx,
        sorted,
        direction,
        direction.opposite()
    );

    let (first_leg, second_leg) = split_legs(&sorted, start_idx, direction);
    let turning_floor = *first_leg.last().unwrap_or(&start_floor);
    let total_travel_time =
        leg_travel_time(start_floor, &first_leg) + leg_travel_time(turning_floor, &second_leg);

    let mut floors_visited_order = first_leg;
    floors_visited_order.extend(second_leg);

    RouteResult {
        total_travel_time,
        floors_visited_order,
    }
}

/// Start floor and targets, deduplicated and sorted ascending.
pub fn normalize(start_floor: Floor, target_floors: &[Floor]) -> Vec<Floor> {
    let mut sorted = Vec::with_capacity(target_floors.len() + 1);
    sorted.push(start_floor);
    sorted.extend_from_slice(target_floors);
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

/**
 * Picks the direction of the first leg.
 *
 * Up when the start is the lowest floor, down when it is the highest. Otherwise towards the
 * closer end, down on a tie.
 */
pub fn choose_direction(sorted: &[Floor], start_idx: usize) -> Direction {
    if start_idx == 0 {
        return Direction::Up;
    }
    if start_idx == sorted.len() - 1 {
        return Direction::Down;
    }

    let start_floor = sorted[start_idx];
    let dist_to_low = start_floor - sorted[0];
    let dist_to_high = sorted[sorted.len() - 1] - start_floor;

    if dist_to_low <= dist_to_high {
        Direction::Down
    } else {
        Direction::Up
    }
}

/**
 * Splits the sorted floors into the two legs of the journey.
 *
 * Down first: start floor down to the lowest, then the floors above the start going up.
 * Up first: start floor up to the highest, then the floors below the start going down.
 * The start floor is always the first floor of the first leg.
 */
fn split_legs(sorted: &[Floor], start_idx: usize, direction: Direction) -> (Vec<Floor>, Vec<Floor>) {
    match direction {
        Direction::Down => {
            let first_leg = (0..=start_idx).rev().map(|idx| sorted[idx]).collect();
            let second_leg = ((start_idx + 1)..sorted.len()).map(|idx| sorted[idx]).collect();
            (first_leg, second_leg)
        }
        Direction::Up => {
            let first_leg = (start_idx..sorted.len()).map(|idx| sorted[idx]).collect();
            let second_leg = (0..start_idx).rev().map(|idx| sorted[idx]).collect();
            (first_leg, second_leg)
        }
    }
}

/// Travel time from `from` to the last floor of a monotonic leg. Zero for an empty leg.
fn leg_travel_time(from: Floor, leg: &[Floor]) -> u64 {
    match leg.last() {
        Some(&to) => u64::from(from.abs_diff(to)) * SINGLE_FLOOR_TRAVEL_TIME,
        None => 0,
    }
}
