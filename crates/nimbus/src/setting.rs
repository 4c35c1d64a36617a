//! # Settings
//!
//! A [`Setting`] is one deferred mutation of a builder's [`Params`]. Settings are
//! produced by the helpers in this module and consumed, in order, by
//! [`ResourceBuilder::configure`](crate::ResourceBuilder::configure).
//!
//! | Helper | Effect on `Params` |
//! |--------|--------------------|
//! | [`with_name`] | Overwrites `name` (last writer wins) |
//! | [`with_config`] | Lets a [`Config`] mutate `input` in place |
//! | [`with_resource_options`] | Appends to `options`, keeping order |
//!
//! Any `FnOnce(&mut Params<I, O>)` boxed into a [`Setting`] works too, so callers can
//! write their own helpers next to these.
//!
//! Settings may borrow from the caller for `'a`; they only have to live as long as the
//! builder they are applied to.

use crate::params::Params;

/// A single deferred mutation of the staged parameters.
pub type Setting<'a, I, O> = Box<dyn FnOnce(&mut Params<I, O>) + 'a>;

/// Something that knows how to write part of an input payload.
///
/// Configurators compose: each one sees what the previous ones wrote. Implementations
/// must not keep the reference past the call.
///
/// Plain closures are configurators:
///
/// ```rust
/// use nimbus::Config;
///
/// #[derive(Default)]
/// struct DiskArgs { size_gb: u32 }
///
/// let double = |args: &mut DiskArgs| args.size_gb *= 2;
/// let mut args = DiskArgs { size_gb: 8 };
/// double.configure(&mut args);
/// assert_eq!(args.size_gb, 16);
/// ```
pub trait Config<I> {
    fn configure(&self, input: &mut I);
}

impl<I, F> Config<I> for F
where
    F: Fn(&mut I),
{
    fn configure(&self, input: &mut I) {
        self(input)
    }
}

/// Sets the resource name.
pub fn with_name<'a, I, O>(name: impl Into<String>) -> Setting<'a, I, O> {
    let name = name.into();
    Box::new(move |params: &mut Params<I, O>| {
        params.name = name;
    })
}

/// Applies `config` to the staged input.
pub fn with_config<'a, I, O, C>(config: C) -> Setting<'a, I, O>
where
    C: Config<I> + 'a,
{
    Box::new(move |params: &mut Params<I, O>| {
        config.configure(&mut params.input);
    })
}

/// Appends provider options. Passing no options is allowed and changes nothing.
pub fn with_resource_options<'a, I, O>(options: impl IntoIterator<Item = O>) -> Setting<'a, I, O>
where
    O: 'a,
{
    let options: Vec<O> = options.into_iter().collect();
    Box::new(move |params: &mut Params<I, O>| {
        params.options.extend(options);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct QueueArgs {
        retention_hours: u32,
        fifo: bool,
    }

    struct Fifo;

    impl Config<QueueArgs> for Fifo {
        fn configure(&self, input: &mut QueueArgs) {
            input.fifo = true;
        }
    }

    fn apply(settings: Vec<Setting<'_, QueueArgs, u8>>) -> Params<QueueArgs, u8> {
        let mut params = Params::default();
        for setting in settings {
            setting(&mut params);
        }
        params
    }

    #[test]
    fn test_with_name_overwrites() {
        let params = apply(vec![with_name("orders"), with_name("orders-dlq")]);
        assert_eq!(params.name, "orders-dlq");
    }

    #[test]
    fn test_with_config_uses_trait_impl_and_closure() {
        let params = apply(vec![
            with_config(Fifo),
            with_config(|args: &mut QueueArgs| args.retention_hours = 48),
        ]);
        assert_eq!(
            params.input,
            QueueArgs {
                retention_hours: 48,
                fifo: true
            }
        );
    }

    #[test]
    fn test_with_resource_options_appends_in_order() {
        let params = apply(vec![
            with_resource_options([1, 2]),
            with_resource_options(Vec::new()),
            with_resource_options([3]),
        ]);
        assert_eq!(params.options, vec![1, 2, 3]);
    }

    #[test]
    fn test_with_config_borrows_local_data() {
        let retention = String::from("36");
        let params = apply(vec![with_config(|args: &mut QueueArgs| {
            args.retention_hours = retention.parse().unwrap_or_default();
        })]);
        assert_eq!(params.input.retention_hours, 36);
        assert_eq!(retention, "36");
    }
}
