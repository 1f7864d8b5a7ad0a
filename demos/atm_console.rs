//! Interactive ATM Console
//!
//! Serves one customer at the terminal, then prints the session journal.
//!
//! Key concepts:
//! - A fresh SessionMachine per customer
//! - Menu letters mapped to transitions by the driver
//! - Vetoes shown to the customer, who may try again
//!
//! Run with: cargo run --example atm_console [config.json]
//! Set RUST_LOG=debug to see every committed transition on stderr.

use atm_session::atm::SessionMachine;
use atm_session::config::SessionConfig;
use atm_session::driver::{run_session, ConsoleInput};
use std::error::Error;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };

    println!("=== ATM ===");
    println!("Card inserted. Leave the PIN blank to take it back.\n");

    let mut session = SessionMachine::from_config(&config)?;
    let mut console = ConsoleInput::stdio();
    run_session(&mut session, &mut console, &mut io::stdout())?;

    println!("\n=== Session journal ===");
    println!("{}", session.journal().to_json()?);

    Ok(())
}
