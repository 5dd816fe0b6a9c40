/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A building level. Always a positive integer.
pub type Floor = u32;

/// Direction of the first leg of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match *self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/**
 * A validated request for a route.
 *
 * # Fields
 * - `start_floor`:     The floor the elevator is standing at.
 * - `target_floors`:   The floors to visit, as entered. May contain duplicates and the start floor.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start_floor: Floor,
    pub target_floors: Vec<Floor>,
}

impl RouteRequest {
    pub fn new(start_floor: Floor, target_floors: Vec<Floor>) -> RouteRequest {
        RouteRequest {
            start_floor,
            target_floors,
        }
    }
}

/**
 * The planned route.
 *
 * # Fields
 * - `floors_visited_order`:    Every floor of the request exactly once, starting with the start floor.
 * - `total_travel_time`:       Sum of the travel time of each leg.
 */
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    #[serde(rename = "totalTravelTime")]
    pub total_travel_time: u64,
    #[serde(rename = "floorsVisitedOrder")]
    pub floors_visited_order: Vec<Floor>,
}

impl RouteResult {
    /// Floors joined with commas, e.g. `5,1,9`.
    pub fn floors_csv(&self) -> String {
        self.floors_visited_order
            .iter()
            .map(|floor| floor.to_string())
            .collect::<Vec<String>>()
            .join(",")
    }
}
