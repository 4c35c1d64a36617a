//! # Stack
//!
//! An in-memory stand-in for a provisioning backend. Resource constructors record
//! themselves here; nothing is ever created in a real cloud.
//!
//! [`Stack`] implements [`nimbus::Context`], so any constructor taking `&Stack` as its
//! first argument can be wrapped in a [`ResourceBuilder`](nimbus::ResourceBuilder).

use crate::config::StackConfig;
use crate::error::CloudError;
use crate::options::{ResolvedOptions, StackOption};
use serde::Serialize;
use std::cell::RefCell;
use std::fmt::Display;
use tracing::debug;

const MAX_NAME_LEN: usize = 63;

/// Unique resource name: `urn:nimbus:{stack}::{project}::{type}::{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Urn(String);

impl Urn {
    pub fn new(stack: &str, project: &str, resource_type: &str, name: &str) -> Self {
        Self(format!(
            "urn:nimbus:{stack}::{project}::{resource_type}::{name}"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Urn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resource as recorded by the stack.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredResource {
    pub urn: Urn,
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub name: String,
    pub inputs: serde_json::Value,
    pub options: ResolvedOptions,
}

/// Serializable snapshot of a stack, in registration order.
#[derive(Debug, Clone, Serialize)]
pub struct StackExport {
    pub project: String,
    pub stack: String,
    pub resources: Vec<RegisteredResource>,
}

pub struct Stack {
    project: String,
    name: String,
    resources: RefCell<Vec<RegisteredResource>>,
}

impl nimbus::Context for Stack {
    type ResourceOption = StackOption;
    type Error = CloudError;
}

impl Stack {
    pub fn new(config: &StackConfig) -> Self {
        Self {
            project: config.project.clone(),
            name: config.stack.clone(),
            resources: RefCell::new(Vec::new()),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The URN a resource of this type and name would get in this stack.
    pub fn urn(&self, resource_type: &str, name: &str) -> Urn {
        Urn::new(&self.name, &self.project, resource_type, name)
    }

    pub fn contains(&self, urn: &Urn) -> bool {
        self.resources.borrow().iter().any(|r| &r.urn == urn)
    }

    pub fn len(&self) -> usize {
        self.resources.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.borrow().is_empty()
    }

    /// Looks up a recorded resource by URN.
    pub fn get(&self, urn: &Urn) -> Option<RegisteredResource> {
        self.resources.borrow().iter().find(|r| &r.urn == urn).cloned()
    }

    /// Records a resource after checking its name and every resource it refers to.
    ///
    /// This is the common tail of every sample constructor.
    pub fn record<T: Serialize>(
        &self,
        resource_type: &'static str,
        name: &str,
        inputs: &T,
        options: Vec<StackOption>,
    ) -> Result<Urn, CloudError> {
        check_name(name)?;

        let urn = self.urn(resource_type, name);
        if self.contains(&urn) {
            return Err(CloudError::DuplicateUrn(urn));
        }

        let options = ResolvedOptions::resolve(options);
        if let Some(missing) = options.references().find(|dep| !self.contains(dep)) {
            return Err(CloudError::UnknownDependency(missing.clone()));
        }

        let inputs = serde_json::to_value(inputs)?;
        let mut resources = self.resources.borrow_mut();
        resources.push(RegisteredResource {
            urn: urn.clone(),
            resource_type,
            name: name.to_string(),
            inputs,
            options,
        });
        debug!(%urn, size = resources.len(), "Recorded");
        Ok(urn)
    }

    pub fn export(&self) -> StackExport {
        StackExport {
            project: self.project.clone(),
            stack: self.name.clone(),
            resources: self.resources.borrow().clone(),
        }
    }
}

fn check_name(name: &str) -> Result<(), CloudError> {
    let invalid = |reason| CloudError::InvalidName {
        name: name.to_string(),
        reason,
    };
    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(invalid("name is longer than 63 characters"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(invalid("only lowercase letters, digits and '-' are allowed"));
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err(invalid("name must not start or end with '-'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> Stack {
        Stack::new(&StackConfig {
            project: "demo".into(),
            stack: "dev".into(),
        })
    }

    #[test]
    fn test_accessors_reflect_config() {
        let stack = stack();
        assert_eq!(stack.project(), "demo");
        assert_eq!(stack.name(), "dev");
    }

    #[test]
    fn test_urn_format() {
        let urn = stack().urn("storage:Bucket", "assets");
        assert_eq!(urn.as_str(), "urn:nimbus:dev::demo::storage:Bucket::assets");
    }

    #[test]
    fn test_record_and_export() {
        let stack = stack();
        let urn = stack
            .record("test:Thing", "one", &serde_json::json!({"size": 1}), vec![])
            .unwrap();
        assert!(stack.contains(&urn));
        assert_eq!(stack.len(), 1);

        let export = stack.export();
        assert_eq!(export.project, "demo");
        assert_eq!(export.resources[0].inputs["size"], 1);
    }

    #[test]
    fn test_record_rejects_duplicates() {
        let stack = stack();
        stack.record("test:Thing", "one", &(), vec![]).unwrap();
        let err = stack.record("test:Thing", "one", &(), vec![]).unwrap_err();
        assert!(matches!(err, CloudError::DuplicateUrn(_)));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_record_rejects_unknown_parent() {
        let stack = stack();
        let ghost = stack.urn("test:Thing", "ghost");
        let err = stack
            .record("test:Thing", "child", &(), vec![StackOption::Parent(ghost.clone())])
            .unwrap_err();
        assert!(matches!(err, CloudError::UnknownDependency(urn) if urn == ghost));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_check_name() {
        assert!(check_name("logs-2024").is_ok());
        for bad in ["", "Logs", "logs_archive", "-logs", "logs-", "a".repeat(64).as_str()] {
            assert!(
                matches!(check_name(bad), Err(CloudError::InvalidName { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}
