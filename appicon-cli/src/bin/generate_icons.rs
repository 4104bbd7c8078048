//! Binary entrypoint for the asset-catalog generator

fn main() {
    match appicon_cli::run_generate_icons() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
