/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Floor, RouteRequest};

/***************************************/
/*               Errors                */
/***************************************/
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Too few arguments.")]
    TooFewArguments,

    #[error("Invalid input. Too many arguments.")]
    TooManyArguments,

    #[error("Invalid input. Starting floor must be a single value. You entered: {0}")]
    StartFloorNotSingle(String),

    #[error("Starting floor must be a positive integer no greater than {}. You entered: {0}", Floor::MAX)]
    InvalidStartFloor(String),

    #[error("All floors to visit must be positive integers no greater than {}. You entered: {0}", Floor::MAX)]
    InvalidTargetFloors(String),

    #[error("You must enter at least one floor to visit, and it must be different from the starting floor. You entered: {0}")]
    NoDistinctTargetFloor(String),
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Turns the raw command line inputs into a route request.
 *
 * Expects exactly two inputs, `start=<floor>` and `floor=<floor>,<floor>,...`. The `start=` and
 * `floor=` prefixes are optional and a single trailing comma is ignored.
 */
pub fn validate_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<RouteRequest, InputError> {
    if inputs.len() < 2 {
        return Err(InputError::TooFewArguments);
    }
    if inputs.len() > 2 {
        return Err(InputError::TooManyArguments);
    }

    let raw_start = inputs[0].as_ref();
    let raw_floors = inputs[1].as_ref();

    let start_str = strip_input(raw_start, "start=");
    if start_str.contains(',') {
        return Err(InputError::StartFloorNotSingle(raw_start.to_string()));
    }
    let start_floor =
        parse_floor(start_str).ok_or_else(|| InputError::InvalidStartFloor(raw_start.to_string()))?;

    let floors_str = strip_input(raw_floors, "floor=");
    let target_floors = floors_str
        .split(',')
        .map(parse_floor)
        .collect::<Option<Vec<Floor>>>()
        .ok_or_else(|| InputError::InvalidTargetFloors(raw_floors.to_string()))?;

    if !target_floors.iter().any(|&floor| floor != start_floor) {
        return Err(InputError::NoDistinctTargetFloor(raw_floors.to_string()));
    }

    Ok(RouteRequest::new(start_floor, target_floors))
}

/***************************************/
/*          Private helpers            */
/***************************************/
fn strip_input<'a>(input: &'a str, prefix: &str) -> &'a str {
    let value = input.trim();
    let value = value.strip_prefix(prefix).unwrap_or(value);
    value.strip_suffix(',').unwrap_or(value)
}

fn parse_floor(value: &str) -> Option<Floor> {
    match value.trim().parse::<Floor>() {
        Ok(floor) if floor > 0 => Some(floor),
        _ => None,
    }
}
