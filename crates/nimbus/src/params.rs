//! # Staged Parameters
//!
//! The values a [`ResourceBuilder`](crate::ResourceBuilder) collects before it calls
//! the constructor.

/// Name, input payload and options for a single resource declaration.
///
/// `input` always holds a usable value: it starts at `I::default()` and is only ever
/// mutated in place. `options` is append-only while the builder is configuring.
#[derive(Debug, Clone, PartialEq)]
pub struct Params<I, O> {
    pub name: String,
    pub input: I,
    pub options: Vec<O>,
}

impl<I: Default, O> Default for Params<I, O> {
    fn default() -> Self {
        Self {
            name: String::new(),
            input: I::default(),
            options: Vec::new(),
        }
    }
}
