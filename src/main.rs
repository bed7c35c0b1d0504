use std::process;

fn main() {
    if let Err(error) = spritepack::run() {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}
