fn main() {
    if let Err(e) = payload_inspect::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
