use super::args::Args;
use super::callable::{Callable, Decorator};
use super::error::WrapError;
use super::meta::FnMeta;

/// Lifts a binary `f(x, y)` to any number of arguments:
/// `g(x) = x`, `g(x, y) = f(x, y)`, `g(x, y, z, ..) = f(x, g(y, z, ..))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NAry;

pub struct NAryFn<C> {
    inner: C,
}

impl<C, T> Callable for NAryFn<C>
where
    C: Callable<Arg = T, Output = T>,
{
    type Arg = T;
    type Output = T;

    fn meta(&self) -> &FnMeta {
        self.inner.meta()
    }

    fn call(&self, args: Args<T>) -> Result<T, WrapError> {
        if let Some((keyword, _)) = args.keywords.first() {
            return Err(WrapError::UnexpectedKeyword {
                function: self.name().to_string(),
                keyword: keyword.clone(),
            });
        }

        // Fold from the right; the partial folds never leave this layer.
        let mut values = args.positional.into_iter().rev();
        let mut acc = values.next().ok_or_else(|| WrapError::MissingArgument {
            function: self.name().to_string(),
        })?;
        for x in values {
            acc = self.inner.call(Args::positional(vec![x, acc]))?;
        }
        Ok(acc)
    }

    fn call_count(&self) -> Option<u64> {
        self.inner.call_count()
    }
}

impl<C, T> Decorator<C> for NAry
where
    C: Callable<Arg = T, Output = T>,
{
    type Wrapped = NAryFn<C>;

    fn wrap(&self, inner: C) -> NAryFn<C> {
        NAryFn { inner }
    }
}
