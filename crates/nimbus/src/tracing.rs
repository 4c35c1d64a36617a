//! # Observability
//!
//! Builders log through `tracing`. Nothing is printed unless the application installs a
//! subscriber; [`setup_tracing`] is the one we use in binaries and demos.
//!
//! ## What Gets Traced
//!
//! - **Configure** (`trace`): how many settings were applied
//! - **Register** (`debug`): name, full input payload and options
//! - **Outcome** (`info` / `warn`): the resource was registered, or the constructor's error
//! - **Unnamed resources** (`warn`): registering with an empty name
//!
//! Every event carries a `resource_type` field holding the short type name of the resource.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo run -p nimbus-sample
//!
//! # Full payloads as they are handed to constructors
//! RUST_LOG=debug cargo run -p nimbus-sample
//!
//! # Only the builder, very verbose
//! RUST_LOG=nimbus=trace cargo run -p nimbus-sample
//! ```
//!
//! With `RUST_LOG=debug` a registration looks like:
//!
//! ```text
//! DEBUG Register resource_type="Bucket" name=assets options=1
//!  INFO Registered resource_type="Bucket" name=assets
//! ```

/// Initializes the global subscriber, filtered by `RUST_LOG`.
///
/// Panics if a global subscriber is already set, so call it once from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
