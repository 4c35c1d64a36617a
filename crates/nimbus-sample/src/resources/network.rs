use crate::error::CloudError;
use crate::options::StackOption;
use crate::stack::{Stack, Urn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

/// Desired state of a private network and its subnets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkArgs {
    /// IPv4 block in CIDR notation, e.g. `10.0.0.0/16`.
    pub cidr: String,
    pub subnets: Vec<String>,
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Network {
    pub urn: Urn,
    pub name: String,
    pub cidr: String,
    pub subnets: Vec<String>,
}

impl Network {
    pub const TYPE: &'static str = "net:Network";

    pub fn new(
        stack: &Stack,
        name: &str,
        args: &NetworkArgs,
        options: Vec<StackOption>,
    ) -> Result<Self, CloudError> {
        let block = parse_cidr(&args.cidr).map_err(|reason| CloudError::InvalidInput {
            field: "cidr",
            reason,
        })?;
        for subnet in &args.subnets {
            let inner = parse_cidr(subnet).map_err(|reason| CloudError::InvalidInput {
                field: "subnets",
                reason,
            })?;
            if !block.contains(&inner) {
                return Err(CloudError::InvalidInput {
                    field: "subnets",
                    reason: format!("{subnet} is outside {}", args.cidr),
                });
            }
        }

        let urn = stack.record(Self::TYPE, name, args, options)?;
        Ok(Self {
            urn,
            name: name.to_string(),
            cidr: args.cidr.clone(),
            subnets: args.subnets.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Block {
    base: u32,
    prefix: u8,
}

impl Block {
    fn mask(&self) -> u32 {
        match self.prefix {
            0 => 0,
            p => u32::MAX << (32 - u32::from(p)),
        }
    }

    fn contains(&self, other: &Block) -> bool {
        other.prefix >= self.prefix && (other.base & self.mask()) == self.base
    }
}

fn parse_cidr(cidr: &str) -> Result<Block, String> {
    let (addr, prefix) = cidr
        .split_once('/')
        .ok_or_else(|| format!("{cidr:?} is missing a prefix length"))?;
    let addr: Ipv4Addr = addr
        .parse()
        .map_err(|_| format!("{addr:?} is not an IPv4 address"))?;
    let prefix: u8 = prefix
        .parse()
        .ok()
        .filter(|p| *p <= 32)
        .ok_or_else(|| format!("{prefix:?} is not a prefix length"))?;

    let block = Block {
        base: u32::from(addr),
        prefix,
    };
    if block.base & !block.mask() != 0 {
        return Err(format!("{cidr} has host bits set"));
    }
    Ok(block)
}
