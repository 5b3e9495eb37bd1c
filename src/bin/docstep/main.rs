mod app;
mod bootstrap;
mod clap_app;
mod directories;

use app::App;
use docstep::error::*;
use std::process;

/// Renders the requested document, returning `Err(..)` on the first failure.
fn run() -> Result<()> {
    App::new().start()
}

fn main() {
    if let Err(error) = run() {
        let stderr = std::io::stderr();
        default_error_handler(&error, &mut stderr.lock());
        process::exit(1);
    }
}
