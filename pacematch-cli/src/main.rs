//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = pacematch_cli::run() {
        eprintln!("pacematch: {err}");
        std::process::exit(1);
    }
}
