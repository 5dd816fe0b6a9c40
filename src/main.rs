/* 3rd party libraries */
use log::info;

/* Custom libraries */
use shared::RouteRequest;

/* Modules */
mod cli;
mod config;
mod elevator;
mod shared;

/* Main */
fn main() {
    let matches = cli::build_cli().get_matches();

    // Load the configuration
    let config = crate::unwrap_or_exit!(config::load_config(cli::config_path(&matches)));

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let (format, color) = cli::resolve_output(&matches, &config);
    if !color {
        colored::control::set_override(false);
    }

    // Validate the inputs before planning
    let inputs = cli::raw_inputs(&matches);
    let request: RouteRequest = crate::unwrap_or_exit!(cli::validate_inputs(&inputs));
    info!(
        "Planning route from floor {} to floors {:?}",
        request.start_floor, request.target_floors
    );

    let result = elevator::plan(request.start_floor, &request.target_floors);
    info!(
        "Route {:?} takes {} time units",
        result.floors_visited_order, result.total_travel_time
    );

    let output = crate::unwrap_or_exit!(cli::render(&result, format, color));
    println!("{}", output);
}
