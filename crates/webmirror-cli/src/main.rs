use webmirror_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    // Parse CLI and run the mirror.
    if let Err(err) = cli::run_from_args() {
        eprintln!("webmirror error: {:#}", err);
        std::process::exit(1);
    }
}
