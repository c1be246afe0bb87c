use courtforms_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init();

    if let Err(err) = Cli::run_from_args() {
        eprintln!("courtforms error: {:#}", err);
        std::process::exit(1);
    }
}
