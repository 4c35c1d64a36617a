//! # Stack Options
//!
//! Per-resource modifiers understood by the sample [`Stack`](crate::stack::Stack). The
//! builder treats them as opaque and forwards them in the order they were staged;
//! [`ResolvedOptions::resolve`] is where that order starts to matter.

use crate::stack::Urn;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum StackOption {
    /// Refuse to delete the resource.
    Protect(bool),
    /// Create this resource only after the given one.
    DependsOn(Urn),
    /// Nest this resource under the given one.
    Parent(Urn),
    /// Input fields whose changes should not trigger an update.
    IgnoreChanges(Vec<String>),
    /// Leave the cloud resource behind when it is removed from the stack.
    RetainOnDelete(bool),
    DeleteBeforeReplace(bool),
}

/// The effective options after folding a staged list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedOptions {
    pub protect: bool,
    pub retain_on_delete: bool,
    pub delete_before_replace: bool,
    pub parent: Option<Urn>,
    pub depends_on: Vec<Urn>,
    pub ignore_changes: Vec<String>,
}

impl ResolvedOptions {
    /// Folds `options` in order. Flags and `Parent` take the last value given; dependency
    /// and ignore lists accumulate without duplicates.
    pub fn resolve(options: impl IntoIterator<Item = StackOption>) -> Self {
        let mut resolved = Self::default();
        for option in options {
            match option {
                StackOption::Protect(on) => resolved.protect = on,
                StackOption::RetainOnDelete(on) => resolved.retain_on_delete = on,
                StackOption::DeleteBeforeReplace(on) => resolved.delete_before_replace = on,
                StackOption::Parent(urn) => resolved.parent = Some(urn),
                StackOption::DependsOn(urn) => {
                    if !resolved.depends_on.contains(&urn) {
                        resolved.depends_on.push(urn);
                    }
                }
                StackOption::IgnoreChanges(fields) => {
                    for field in fields {
                        if !resolved.ignore_changes.contains(&field) {
                            resolved.ignore_changes.push(field);
                        }
                    }
                }
            }
        }
        resolved
    }

    /// Every resource this one refers to.
    pub fn references(&self) -> impl Iterator<Item = &Urn> {
        self.parent.iter().chain(self.depends_on.iter())
    }
}
