//! Loopmark binary entry point.

fn main() {
    if let Err(err) = loopmark_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
