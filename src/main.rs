//! kcal-tools
//!
//! An interactive console for daily energy math: TDEE estimation, food
//! tracking, and kcal/kJ conversion.

use std::io::{stdin, stdout};

use tracing_subscriber::EnvFilter;

use kcal_tools::build_info;
use kcal_tools::console::{OutputMode, Session};

/// Get the output mode from environment or use the text default
fn get_output_mode() -> OutputMode {
    std::env::var("KCAL_TOOLS_OUTPUT")
        .ok()
        .and_then(|value| OutputMode::from_str(&value))
        .unwrap_or_default()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to keep result text on stdout clean)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kcal_tools=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Type 'help' for commands, 'quit' to leave.");

    let mode = get_output_mode();
    tracing::info!(?mode, "starting console session");

    let mut session = Session::new(mode);
    session.run(stdin().lock(), stdout().lock())?;

    Ok(())
}
