use std::process;

fn main() {
    if let Err(e) = devrun::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
