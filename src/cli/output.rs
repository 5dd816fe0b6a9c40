/***************************************/
/*        3rd party libraries          */
/***************************************/
use colored::Colorize;
use serde::Deserialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::RouteResult;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Renders a planned route for stdout.
 *
 * `Plain` prints `<time> <floors>` on the first line, followed by a labelled time (green) and
 * a labelled floor order (blue). `Json` prints the result as a single JSON object.
 */
pub fn render(result: &RouteResult, format: OutputFormat, color: bool) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(result),
        OutputFormat::Plain => {
            let floors = result.floors_csv();
            let time_line = format!("total travel time: {}", result.total_travel_time);
            let order_line = format!("floors visited in order: {}", floors);

            let (time_line, order_line) = if color {
                (time_line.green().to_string(), order_line.blue().to_string())
            } else {
                (time_line, order_line)
            };

            Ok(format!(
                "{} {}\n{}\n{}",
                result.total_travel_time, floors, time_line, order_line
            ))
        }
    }
}
