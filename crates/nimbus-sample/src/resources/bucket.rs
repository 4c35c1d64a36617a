use crate::error::CloudError;
use crate::options::StackOption;
use crate::stack::{Stack, Urn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Desired state of an object storage bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketArgs {
    pub versioning: bool,
    pub public_access: bool,
    pub tags: BTreeMap<String, String>,
    /// Days after which objects expire. `None` keeps objects forever.
    pub lifecycle_days: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Bucket {
    pub urn: Urn,
    pub name: String,
    pub versioning: bool,
}

impl Bucket {
    pub const TYPE: &'static str = "storage:Bucket";

    pub fn new(
        stack: &Stack,
        name: &str,
        args: &BucketArgs,
        options: Vec<StackOption>,
    ) -> Result<Self, CloudError> {
        if args.lifecycle_days == Some(0) {
            return Err(CloudError::InvalidInput {
                field: "lifecycle_days",
                reason: "must be at least one day".to_string(),
            });
        }
        let urn = stack.record(Self::TYPE, name, args, options)?;
        Ok(Self {
            urn,
            name: name.to_string(),
            versioning: args.versioning,
        })
    }
}
