/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a `Result`, or prints the error in red and the usage hint in yellow and exits.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::debug!("{}", e);
                eprintln!("{}", $crate::cli::error_report(&e));
                std::process::exit(1);
            }
        }
    };
}
