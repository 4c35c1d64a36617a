//! # Nimbus
//!
//! Fluent builders for declaring infrastructure-as-code resources.
//!
//! Provisioning SDKs expose one constructor per resource type, all with the same shape:
//! an execution context, a name, a typed input payload and a list of provider options.
//! Declaring a resource means assembling those four pieces, often from reusable
//! fragments ("every bucket is versioned", "every production resource is protected").
//! This crate does that assembly once, generically, and then gets out of the way.
//!
//! ## Architecture Overview
//!
//! 1. **Context** ([`Context`]) - names the option and error types an SDK's constructors use
//! 2. **Staging** ([`Params`], [`Setting`]) - name, input and options, mutated by settings
//! 3. **Registration** ([`ResourceBuilder`]) - applies settings, then calls the constructor once
//!
//! ## Core Abstractions
//!
//! ### Settings
//!
//! Three helpers cover the common cases:
//!
//! - [`with_name`] - set the resource name (last one wins)
//! - [`with_config`] - let a [`Config`] write into the input; configs run in order and
//!   see each other's writes
//! - [`with_resource_options`] - append provider options, keeping their order
//!
//! ### Registration
//!
//! ```rust
//! use nimbus::{with_config, with_name, with_resource_options, Config, Context, ResourceBuilder};
//!
//! // --- A minimal SDK surface ---
//! struct Stack;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("stack error")]
//! struct StackError;
//!
//! #[derive(Debug)]
//! enum StackOption { Protect }
//!
//! impl Context for Stack {
//!     type ResourceOption = StackOption;
//!     type Error = StackError;
//! }
//!
//! #[derive(Debug, Default)]
//! struct BucketArgs { versioning: bool, tags: Vec<(String, String)> }
//!
//! struct Bucket { name: String, args_tags: usize, protected: bool }
//!
//! fn new_bucket(_: &Stack, name: &str, args: &BucketArgs, opts: Vec<StackOption>) -> Result<Bucket, StackError> {
//!     Ok(Bucket { name: name.into(), args_tags: args.tags.len(), protected: !opts.is_empty() })
//! }
//!
//! // --- A reusable configurator ---
//! struct Owned(&'static str);
//!
//! impl Config<BucketArgs> for Owned {
//!     fn configure(&self, input: &mut BucketArgs) {
//!         input.tags.push(("owner".into(), self.0.into()));
//!     }
//! }
//!
//! let bucket = ResourceBuilder::build(new_bucket)
//!     .with([
//!         with_name("assets"),
//!         with_config(Owned("platform")),
//!         with_config(|args: &mut BucketArgs| args.versioning = true),
//!         with_resource_options([StackOption::Protect]),
//!     ])
//!     .register(&Stack)
//!     .unwrap();
//!
//! assert_eq!(bucket.name, "assets");
//! assert_eq!(bucket.args_tags, 1);
//! assert!(bucket.protected);
//! ```
//!
//! ## Error Handling
//!
//! There is no error type in this crate. The builder does not validate anything, and
//! [`ResourceBuilder::register`] returns the constructor's `Result` untouched.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockConstructor`](mock::MockConstructor) that records
//! what the builder forwards and answers with scripted results.

pub mod builder;
pub mod context;
pub mod mock;
pub mod params;
pub mod setting;
pub mod tracing;

// Re-export core types for convenience
pub use builder::ResourceBuilder;
pub use context::Context;
pub use params::Params;
pub use setting::{with_config, with_name, with_resource_options, Config, Setting};
