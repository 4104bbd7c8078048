//! Binary entrypoint for the fixed-list generator

fn main() {
    if let Err(err) = appicon_cli::run_convert_icon() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
