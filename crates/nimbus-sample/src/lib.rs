//! # Nimbus Sample
//!
//! A toy provisioning SDK and a stack declared with [`nimbus`] builders.
//!
//! - **[stack]**: the in-memory [`Stack`] that plays the provisioning backend
//! - **[options]**: [`StackOption`] and how a staged list resolves
//! - **[resources]**: `Bucket` and `Network` constructors
//! - **[presets]**: reusable configurators
//! - **[landing_zone]**: the declaration the binary runs
//!
//! ## Testing
//!
//! See [`nimbus::mock`] for testing declarations without a stack.

pub mod config;
pub mod error;
pub mod landing_zone;
pub mod options;
pub mod presets;
pub mod resources;
pub mod stack;

pub use config::StackConfig;
pub use error::CloudError;
pub use options::{ResolvedOptions, StackOption};
pub use stack::{Stack, StackExport, Urn};
