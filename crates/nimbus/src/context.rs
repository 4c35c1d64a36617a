//! # Context Trait
//!
//! The `Context` trait is the contract an execution context (a stack, a deployment, a
//! provider session) must satisfy so that [`ResourceBuilder`](crate::ResourceBuilder)
//! can hand it to a resource constructor. It carries no behavior of its own; it only
//! names the two types every constructor of a given provisioning SDK agrees on.
//!
//! # Architecture Note
//! Putting the associated types on the context, rather than on a separate "provider"
//! marker, lets the compiler infer everything from the constructor's first argument:
//!
//! ```rust,ignore
//! // `Stack: Context`, so `C = Stack` is inferred from `Bucket::new`'s signature.
//! let bucket = ResourceBuilder::build(Bucket::new)
//!     .with([with_name("assets")])
//!     .register(&stack)?;
//! ```

/// Execution context passed through to every resource constructor.
///
/// The builder never inspects the context value. It only needs to know which option
/// type and which failure type the constructors of this SDK use.
pub trait Context {
    /// Opaque provider-specific modifier (dependency ordering, protection flags, ...).
    ///
    /// Options are forwarded to the constructor in the order they were staged. Later
    /// options may override earlier ones; that is the provider's business. No bounds:
    /// registration logs only how many options were staged.
    type ResourceOption;

    /// The failure reported by a constructor.
    ///
    /// [`ResourceBuilder::register`](crate::ResourceBuilder::register) returns it
    /// exactly as the constructor produced it.
    type Error: std::error::Error + 'static;
}
