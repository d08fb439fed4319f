//! CLI smoke and snapshot-inspection entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `homestock_core` linkage.
//! - Print a deterministic summary of a snapshot file when one is given.

use homestock_core::{laundry_summary, JsonFileStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("homestock_core ping={}", homestock_core::ping());
    println!("homestock_core version={}", homestock_core::core_version());

    let Some(snapshot_path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match JsonFileStore::new(&snapshot_path).load() {
        Ok(Some(state)) => {
            let laundry = laundry_summary(&state);
            println!("snapshot entities={}", state.len());
            println!(
                "snapshot laundry dirty={} washing={} clean={}",
                laundry.dirty, laundry.washing, laundry.clean
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("snapshot not found at {snapshot_path}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("failed to load snapshot: {err}");
            ExitCode::FAILURE
        }
    }
}
