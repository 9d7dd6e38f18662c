use super::args::Args;
use super::callable::{Callable, Decorator};
use super::error::WrapError;
use super::meta::FnMeta;
use std::cell::Cell;

/// Counts every call that reaches this layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountCalls;

pub struct Counted<C> {
    inner: C,
    calls: Cell<u64>,
}

impl<C> Counted<C> {
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }
}

impl<C: Callable> Callable for Counted<C> {
    type Arg = C::Arg;
    type Output = C::Output;

    fn meta(&self) -> &FnMeta {
        self.inner.meta()
    }

    fn call(&self, args: Args<C::Arg>) -> Result<C::Output, WrapError> {
        // Counted before delegating, so failed calls count too.
        let calls = self.calls.get() + 1;
        self.calls.set(calls);
        tracing::trace!(function = %self.name(), calls, "call counted");
        self.inner.call(args)
    }

    fn call_count(&self) -> Option<u64> {
        Some(self.calls.get())
    }
}

impl<C: Callable> Decorator<C> for CountCalls {
    type Wrapped = Counted<C>;

    fn wrap(&self, inner: C) -> Counted<C> {
        Counted {
            inner,
            calls: Cell::new(0),
        }
    }
}
