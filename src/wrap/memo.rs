use super::args::Args;
use super::callable::{Callable, Decorator};
use super::error::WrapError;
use super::meta::{FnId, FnMeta};
use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

/// Cache key: the wrapped function plus the exact arguments of the call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemoKey<T> {
    pub function: FnId,
    pub args: Args<T>,
}

/// Caches every successful result for the lifetime of the wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct Memoize;

pub struct Memoized<C: Callable> {
    inner: C,
    results: RefCell<HashMap<MemoKey<C::Arg>, C::Output>>,
}

impl<C> Memoized<C>
where
    C: Callable,
    C::Arg: Clone + Eq + Hash,
    C::Output: Clone,
{
    fn key(&self, args: Args<C::Arg>) -> MemoKey<C::Arg> {
        MemoKey {
            function: self.inner.meta().id,
            args,
        }
    }

    pub fn cached(&self, args: &Args<C::Arg>) -> Option<C::Output> {
        self.results.borrow().get(&self.key(args.clone())).cloned()
    }

    pub fn cache_len(&self) -> usize {
        self.results.borrow().len()
    }
}

impl<C> Callable for Memoized<C>
where
    C: Callable,
    C::Arg: Clone + Eq + Hash,
    C::Output: Clone,
{
    type Arg = C::Arg;
    type Output = C::Output;

    fn meta(&self) -> &FnMeta {
        self.inner.meta()
    }

    fn call(&self, args: Args<C::Arg>) -> Result<C::Output, WrapError> {
        let key = self.key(args);
        // The borrow must end before calling inward: recursive stacks re-enter here.
        let hit = self.results.borrow().get(&key).cloned();
        if let Some(result) = hit {
            tracing::trace!(function = %self.name(), "memo hit");
            return Ok(result);
        }

        tracing::trace!(function = %self.name(), "memo miss");
        let result = self.inner.call(key.args.clone())?;
        self.results.borrow_mut().insert(key, result.clone());
        Ok(result)
    }

    fn call_count(&self) -> Option<u64> {
        self.inner.call_count()
    }
}

impl<C> Decorator<C> for Memoize
where
    C: Callable,
    C::Arg: Clone + Eq + Hash,
    C::Output: Clone,
{
    type Wrapped = Memoized<C>;

    fn wrap(&self, inner: C) -> Memoized<C> {
        Memoized {
            inner,
            results: RefCell::new(HashMap::new()),
        }
    }
}
