//! # Presets
//!
//! Reusable [`Config`] implementations. Each one writes a single concern into an input
//! payload, so a declaration reads as a list of intentions:
//!
//! ```rust
//! use nimbus::{with_config, with_name, ResourceBuilder};
//! use nimbus_sample::presets::{Expiring, Tagged, Versioned};
//! use nimbus_sample::resources::Bucket;
//! use nimbus_sample::{Stack, StackConfig};
//!
//! let stack = Stack::new(&StackConfig::default());
//! let bucket = ResourceBuilder::build(Bucket::new)
//!     .with([
//!         with_name("backups"),
//!         with_config(Versioned),
//!         with_config(Expiring(30)),
//!         with_config(Tagged::new("team", "storage")),
//!     ])
//!     .register(&stack)
//!     .unwrap();
//! assert!(bucket.versioning);
//! ```

use crate::resources::{BucketArgs, NetworkArgs};
use nimbus::Config;

/// Turns on object versioning.
pub struct Versioned;

impl Config<BucketArgs> for Versioned {
    fn configure(&self, input: &mut BucketArgs) {
        input.versioning = true;
    }
}

/// Expires objects after the given number of days.
pub struct Expiring(pub u32);

impl Config<BucketArgs> for Expiring {
    fn configure(&self, input: &mut BucketArgs) {
        input.lifecycle_days = Some(self.0);
    }
}

/// Sets one tag, replacing any earlier value for the same key.
pub struct Tagged {
    key: String,
    value: String,
}

impl Tagged {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Config<BucketArgs> for Tagged {
    fn configure(&self, input: &mut BucketArgs) {
        input.tags.insert(self.key.clone(), self.value.clone());
    }
}

impl Config<NetworkArgs> for Tagged {
    fn configure(&self, input: &mut NetworkArgs) {
        input.tags.insert(self.key.clone(), self.value.clone());
    }
}

/// Adds a subnet block to a network.
pub struct Subnet(pub String);

impl Subnet {
    pub fn new(cidr: impl Into<String>) -> Self {
        Self(cidr.into())
    }
}

impl Config<NetworkArgs> for Subnet {
    fn configure(&self, input: &mut NetworkArgs) {
        if !input.subnets.contains(&self.0) {
            input.subnets.push(self.0.clone());
        }
    }
}
