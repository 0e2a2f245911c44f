fn main() {
    if let Err(err) = sheet_average::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
