//! Points Ledger CLI
//!
//! Runs a single earn, redeem, or help command against a fresh in-memory
//! ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- earn user123 50
//! cargo run -- redeem user123 10
//! cargo run -- help
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace balance changes (default: `warn`)

use points_ledger::{cli, PointsStore};
use std::env;
use std::io::{self, IsTerminal};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if !io::stdout().is_terminal() || !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let mut store = PointsStore::new();

    if let Err(e) = cli::run(&args, &mut store) {
        log::debug!("Command failed: {:?}", e);
        cli::report_error(&e, store.notifier());
        process::exit(1);
    }
}
