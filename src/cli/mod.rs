pub mod output;
pub mod validation;

pub use output::{render, OutputFormat};
pub use validation::validate_inputs;

/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use std::fmt::Display;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;

pub const USAGE: &str = "To run the elevator program, run the following command: \
elevator-route start=<startingFloor> floor=<floorToVisit1,floorToVisit2,floorToVisit3,etc>";

/// Command line definition. The inputs are counted and parsed by `validate_inputs`, not by clap,
/// so values like `-3` are passed through as inputs. Options go before the inputs.
pub fn build_cli() -> Command<'static> {
    Command::new("elevator-route")
        .about("Plans the visiting order and travel time of an elevator")
        .after_help(USAGE)
        .arg(
            Arg::new("inputs")
                .value_name("INPUTS")
                .help("start=<floor> floor=<floor>,<floor>,...")
                .multiple_values(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .takes_value(true)
                .help("Path to the configuration file [default: config.toml]"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the route as JSON"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output"),
        )
}

/// The raw inputs, in the order given on the command line.
pub fn raw_inputs(matches: &ArgMatches) -> Vec<&str> {
    matches
        .values_of("inputs")
        .map(|values| values.collect())
        .unwrap_or_default()
}

/// The configuration file given with `--config`, if any.
pub fn config_path(matches: &ArgMatches) -> Option<&Path> {
    matches.value_of("config").map(Path::new)
}

/**
 * Output format and color, from the configuration and the command line flags.
 *
 * `--json` overrides the configured format. Colors are on only when the configuration enables
 * them and `--no-color` is absent.
 */
pub fn resolve_output(matches: &ArgMatches, config: &Config) -> (OutputFormat, bool) {
    let format = if matches.is_present("json") {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let color = config.output.color && !matches.is_present("no-color");

    (format, color)
}

/// The error in red followed by the usage hint in yellow.
pub fn error_report<E: Display>(error: &E) -> String {
    format!("{}\n{}", format!("Error: {}", error).red(), USAGE.yellow())
}
