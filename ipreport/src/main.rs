mod application;
mod presentation;

use ipreport_core::logging::init_logging;

fn main() {
    init_logging();

    if let Err(e) = application::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
