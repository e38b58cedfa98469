//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = travelord_cli::run() {
        eprintln!("travelord: {err}");
        std::process::exit(1);
    }
}
