//! Sample resource types. Each `new` function follows the constructor shape
//! [`ResourceBuilder`](nimbus::ResourceBuilder) expects:
//! `(&Stack, name, &Args, Vec<StackOption>) -> Result<Resource, CloudError>`.

pub mod bucket;
pub mod network;

pub use bucket::{Bucket, BucketArgs};
pub use network::{Network, NetworkArgs};
