//! # Landing Zone
//!
//! A small but complete declaration: one network and two buckets wired together with
//! stack options. It is what the sample binary deploys and what the integration tests
//! check.
//!
//! ```text
//! net:Network core (10.0.0.0/16, two subnets, protected)
//! ├── storage:Bucket assets (versioned, depends on core)
//! └── storage:Bucket logs   (expires after 30 days, parent core)
//! ```

use crate::error::CloudError;
use crate::options::StackOption;
use crate::presets::{Expiring, Subnet, Tagged, Versioned};
use crate::resources::{Bucket, Network, NetworkArgs};
use crate::stack::Stack;
use nimbus::{with_config, with_name, with_resource_options, ResourceBuilder};
use tracing::{info, info_span};

pub const NETWORK_CIDR: &str = "10.0.0.0/16";
pub const SUBNETS: [&str; 2] = ["10.0.1.0/24", "10.0.2.0/24"];
pub const LOG_RETENTION_DAYS: u32 = 30;

#[derive(Debug)]
pub struct LandingZone {
    pub network: Network,
    pub assets: Bucket,
    pub logs: Bucket,
}

impl LandingZone {
    /// Declares every resource of the landing zone in `stack`.
    ///
    /// Stops at the first constructor failure and returns it unchanged.
    pub fn declare(stack: &Stack) -> Result<Self, CloudError> {
        let _span = info_span!(
            "landing_zone",
            project = stack.project(),
            stack = stack.name()
        )
        .entered();

        let mut network = ResourceBuilder::build(Network::new);
        network.configure([
            with_name("core"),
            with_config(|args: &mut NetworkArgs| args.cidr = NETWORK_CIDR.to_string()),
        ]);
        for subnet in SUBNETS {
            network.configure([with_config(Subnet::new(subnet))]);
        }
        let network = network
            .with([
                with_config(Tagged::new("env", stack.name())),
                with_resource_options([StackOption::Protect(true)]),
            ])
            .register(stack)?;

        let assets = ResourceBuilder::build(Bucket::new)
            .with([
                with_name("assets"),
                with_config(Versioned),
                with_config(Tagged::new("env", stack.name())),
                with_resource_options([
                    StackOption::DependsOn(network.urn.clone()),
                    StackOption::RetainOnDelete(true),
                ]),
            ])
            .register(stack)?;

        let logs = ResourceBuilder::build(Bucket::new)
            .with([
                with_name("logs"),
                with_config(Expiring(LOG_RETENTION_DAYS)),
                with_config(Tagged::new("env", stack.name())),
                with_resource_options([StackOption::Parent(network.urn.clone())]),
                with_resource_options([StackOption::IgnoreChanges(vec!["tags".to_string()])]),
            ])
            .register(stack)?;

        info!(resources = stack.len(), "Landing zone declared");
        Ok(Self {
            network,
            assets,
            logs,
        })
    }
}
