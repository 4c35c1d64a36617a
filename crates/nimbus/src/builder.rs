//! # Resource Builder
//!
//! This module defines the `ResourceBuilder`, the one moving part of the crate. It stages
//! a name, an input payload and a list of options, then hands them to a constructor
//! supplied by the provisioning SDK.

use crate::context::Context;
use crate::params::Params;
use crate::setting::Setting;
use std::fmt::{self, Debug};
use tracing::{debug, info, trace, warn};

/// The constructor signature every SDK resource function must match:
/// `(context, name, &input, options) -> Result<resource, error>`.
type Constructor<'a, C, I, R> = Box<
    dyn FnOnce(&C, &str, &I, Vec<<C as Context>::ResourceOption>) -> Result<R, <C as Context>::Error>
        + 'a,
>;

/// Stages the parameters for a single resource and then registers it.
///
/// ## Lifecycle
///
/// A builder moves through two states:
///
/// 1. **Configuring** – right after [`build`](Self::build). [`configure`](Self::configure)
///    and [`with`](Self::with) apply [`Setting`]s in the order given, any number of times.
/// 2. **Registered** – [`register`](Self::register) consumes the builder and calls the
///    constructor exactly once. There is nothing left to mutate or register again.
///
/// ## Borrowing
///
/// The constructor and every [`Setting`] only need to live for `'a`, so a stub
/// constructor can push into a local `Vec` and a configurator can read a local value.
///
/// ## No validation
///
/// The builder never inspects the name, the input or the options. An empty name is
/// forwarded as-is (and logged at `warn`). Whatever the constructor returns, success
/// or failure, is what the caller gets back.
///
/// # Example
///
/// ```rust
/// use nimbus::{with_config, with_name, with_resource_options, Context, ResourceBuilder};
///
/// struct Deployment;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("deployment rejected {0}")]
/// struct DeployError(String);
///
/// impl Context for Deployment {
///     type ResourceOption = &'static str;
///     type Error = DeployError;
/// }
///
/// #[derive(Debug, Default)]
/// struct QueueArgs { retention_hours: u32 }
///
/// #[derive(Debug)]
/// struct Queue { name: String, retention_hours: u32, options: Vec<&'static str> }
///
/// fn new_queue(
///     _ctx: &Deployment,
///     name: &str,
///     args: &QueueArgs,
///     options: Vec<&'static str>,
/// ) -> Result<Queue, DeployError> {
///     Ok(Queue { name: name.to_string(), retention_hours: args.retention_hours, options })
/// }
///
/// let queue = ResourceBuilder::build(new_queue)
///     .with([with_name("orders")])
///     .with([
///         with_config(|args: &mut QueueArgs| args.retention_hours = 72),
///         with_resource_options(["protect"]),
///     ])
///     .register(&Deployment)
///     .unwrap();
///
/// assert_eq!(queue.name, "orders");
/// assert_eq!(queue.retention_hours, 72);
/// assert_eq!(queue.options, vec!["protect"]);
/// ```
pub struct ResourceBuilder<'a, C: Context, I, R> {
    new: Constructor<'a, C, I, R>,
    params: Params<I, C::ResourceOption>,
}

impl<'a, C, I, R> ResourceBuilder<'a, C, I, R>
where
    C: Context,
    I: Default,
{
    /// Wraps `new` in a builder with empty parameters: no name, a default input and
    /// no options.
    pub fn build<F>(new: F) -> Self
    where
        F: FnOnce(&C, &str, &I, Vec<C::ResourceOption>) -> Result<R, C::Error> + 'a,
    {
        Self {
            new: Box::new(new),
            params: Params::default(),
        }
    }

    /// Applies `settings` in order and returns this same builder.
    pub fn configure(
        &mut self,
        settings: impl IntoIterator<Item = Setting<'a, I, C::ResourceOption>>,
    ) -> &mut Self {
        let mut applied = 0usize;
        for apply in settings {
            apply(&mut self.params);
            applied += 1;
        }
        trace!(resource_type = short_type_name::<R>(), applied, "Configured");
        self
    }

    /// Owned form of [`configure`](Self::configure), for one-expression chains that
    /// end in [`register`](Self::register).
    pub fn with(
        mut self,
        settings: impl IntoIterator<Item = Setting<'a, I, C::ResourceOption>>,
    ) -> Self {
        self.configure(settings);
        self
    }

    /// The parameters staged so far.
    pub fn params(&self) -> &Params<I, C::ResourceOption> {
        &self.params
    }

    /// Calls the constructor with the staged name, input and options.
    ///
    /// The constructor's error is returned unchanged. The builder is consumed, so a
    /// resource declaration can only ever be registered once:
    ///
    /// ```rust,compile_fail,E0382
    /// use nimbus::{with_name, Context, ResourceBuilder};
    ///
    /// struct Sandbox;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("sandbox error")]
    /// struct SandboxError;
    ///
    /// impl Context for Sandbox {
    ///     type ResourceOption = ();
    ///     type Error = SandboxError;
    /// }
    ///
    /// fn new_disk(_: &Sandbox, _: &str, _: &u32, _: Vec<()>) -> Result<(), SandboxError> {
    ///     Ok(())
    /// }
    ///
    /// let builder = ResourceBuilder::build(new_disk).with([with_name("disk")]);
    /// let _ = builder.register(&Sandbox);
    /// let _ = builder.register(&Sandbox);
    /// ```
    ///
    /// Nor can it be configured after registration:
    ///
    /// ```rust,compile_fail,E0382
    /// use nimbus::{with_name, Context, ResourceBuilder};
    ///
    /// struct Sandbox;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("sandbox error")]
    /// struct SandboxError;
    ///
    /// impl Context for Sandbox {
    ///     type ResourceOption = ();
    ///     type Error = SandboxError;
    /// }
    ///
    /// fn new_disk(_: &Sandbox, _: &str, _: &u32, _: Vec<()>) -> Result<(), SandboxError> {
    ///     Ok(())
    /// }
    ///
    /// let mut builder = ResourceBuilder::build(new_disk);
    /// let _ = builder.register(&Sandbox);
    /// builder.configure([with_name("late")]);
    /// ```
    pub fn register(self, ctx: &C) -> Result<R, C::Error> {
        let resource_type = short_type_name::<R>();
        let Self { new, params } = self;
        let Params {
            name,
            input,
            options,
        } = params;

        if name.is_empty() {
            warn!(resource_type, "Registering resource without a name");
        }
        debug!(resource_type, %name, options = options.len(), "Register");

        let result = new(ctx, &name, &input, options);
        match &result {
            Ok(_) => info!(resource_type, %name, "Registered"),
            Err(e) => warn!(resource_type, %name, error = %e, "Register failed"),
        }
        result
    }
}

impl<C, I, R> Debug for ResourceBuilder<'_, C, I, R>
where
    C: Context,
    C::ResourceOption: Debug,
    I: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceBuilder")
            .field("resource_type", &short_type_name::<R>())
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// `"my_sdk::storage::Bucket"` becomes `"Bucket"`.
fn short_type_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
