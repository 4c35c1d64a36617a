//! # Mock Constructor & Testing Guide
//!
//! `MockConstructor<C, I, R>` stands in for an SDK resource function. It records every
//! call it receives and answers with scripted results, so builder-based code can be
//! tested without a provisioning backend.
//!
//! ## When to use the mock vs a real constructor
//!
//! | Feature | MockConstructor | Real constructor |
//! |---------|-----------------|------------------|
//! | **Backend** | None | Whatever the SDK talks to |
//! | **Determinism** | Fully scripted | Depends on backend state |
//! | **Inspection** | Every call is recorded | Only the returned resource |
//! | **Error injection** | `return_err` | Needs a misbehaving backend |
//!
//! ## Example
//!
//! ```rust
//! use nimbus::mock::MockConstructor;
//! use nimbus::{with_name, with_resource_options, Context, ResourceBuilder};
//!
//! struct Deployment;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("quota exceeded")]
//! struct QuotaExceeded;
//!
//! impl Context for Deployment {
//!     type ResourceOption = &'static str;
//!     type Error = QuotaExceeded;
//! }
//!
//! #[derive(Debug, Default, Clone)]
//! struct TopicArgs { partitions: u32 }
//!
//! let mut mock = MockConstructor::<Deployment, TopicArgs, u64>::new();
//! mock.expect_register().return_ok(7);
//! mock.expect_register().return_err(QuotaExceeded);
//!
//! let first = ResourceBuilder::build(mock.constructor())
//!     .with([with_name("events"), with_resource_options(["protect"])])
//!     .register(&Deployment);
//! assert_eq!(first.unwrap(), 7);
//!
//! let second = ResourceBuilder::build(mock.constructor())
//!     .with([with_name("audit")])
//!     .register(&Deployment);
//! assert!(second.is_err());
//!
//! let calls = mock.calls();
//! assert_eq!(calls[0].name, "events");
//! assert_eq!(calls[0].options, vec!["protect"]);
//! assert_eq!(calls[1].name, "audit");
//! mock.verify();
//! ```

use crate::context::Context;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One call received by a [`MockConstructor`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall<I, O> {
    pub name: String,
    pub input: I,
    pub options: Vec<O>,
}

struct State<C: Context, I, R> {
    expectations: VecDeque<Result<R, C::Error>>,
    calls: Vec<RecordedCall<I, C::ResourceOption>>,
}

/// A scripted, recording resource constructor.
pub struct MockConstructor<C: Context, I, R> {
    state: Arc<Mutex<State<C, I, R>>>,
}

impl<C, I, R> Default for MockConstructor<C, I, R>
where
    C: Context + 'static,
    I: Clone + 'static,
    R: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, I, R> MockConstructor<C, I, R>
where
    C: Context + 'static,
    I: Clone + 'static,
    R: 'static,
{
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                expectations: VecDeque::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Queues the answer for the next call.
    pub fn expect_register(&mut self) -> RegisterExpectation<C, I, R> {
        RegisterExpectation {
            state: self.state.clone(),
        }
    }

    /// Returns a constructor to hand to [`ResourceBuilder::build`](crate::ResourceBuilder::build).
    ///
    /// Every constructor returned by the same mock shares its expectations and call log.
    ///
    /// # Panics
    /// The constructor panics when it is called with no expectation left.
    pub fn constructor(
        &self,
    ) -> impl Fn(&C, &str, &I, Vec<C::ResourceOption>) -> Result<R, C::Error> + 'static {
        let state = self.state.clone();
        move |_ctx: &C, name: &str, input: &I, options: Vec<C::ResourceOption>| {
            let mut state = lock(&state);
            state.calls.push(RecordedCall {
                name: name.to_string(),
                input: input.clone(),
                options,
            });
            let response = state.expectations.pop_front();
            drop(state);

            match response {
                Some(response) => response,
                None => panic!("Unexpected register call for resource {name:?}"),
            }
        }
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        lock(&self.state).calls.len()
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall<I, C::ResourceOption>>
    where
        C::ResourceOption: Clone,
    {
        lock(&self.state).calls.clone()
    }

    /// Verifies that every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.state).expectations.len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for a single register expectation.
pub struct RegisterExpectation<C: Context, I, R> {
    state: Arc<Mutex<State<C, I, R>>>,
}

impl<C: Context, I, R> RegisterExpectation<C, I, R> {
    /// The call succeeds with `resource`.
    pub fn return_ok(self, resource: R) {
        lock(&self.state).expectations.push_back(Ok(resource));
    }

    /// The call fails with `error`.
    pub fn return_err(self, error: C::Error) {
        lock(&self.state).expectations.push_back(Err(error));
    }
}

// A panic inside a test must not hide the calls recorded before it.
fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
