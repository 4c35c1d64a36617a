//! # Nimbus Sample
//!
//! Declares the [`LandingZone`] into an in-memory stack and prints the stack export as
//! JSON.
//!
//! ```bash
//! RUST_LOG=info NIMBUS_STACK=prod cargo run -p nimbus-sample
//! ```

use nimbus::tracing::setup_tracing;
use nimbus_sample::landing_zone::LandingZone;
use nimbus_sample::{Stack, StackConfig};
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StackConfig::from_env();
    info!(project = %config.project, stack = %config.stack, "Declaring stack");

    let stack = Stack::new(&config);
    if let Err(e) = LandingZone::declare(&stack) {
        error!(error = %e, "Declaration failed");
        return Err(e.into());
    }

    println!("{}", serde_json::to_string_pretty(&stack.export())?);
    Ok(())
}
