fn main() {
    if let Err(error) = slipway_cli::run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
