fn main() {
    if let Err(err) = folio_workday::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
