//! `apigen`: generate a typed Go client from a sherpadoc API description.
//!
//! ```text
//! apigen Example https://example.com/example/ -i example.json -o example.go
//! ```
//!
//! Set `APIGEN_LOG=debug` for per-section progress on stderr.

fn main() {
    apigen_cli::init_tracing();
    std::process::exit(apigen_cli::run_cli(std::env::args().collect()));
}
