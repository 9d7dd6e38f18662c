use super::args::Args;
use super::error::WrapError;
use super::meta::FnMeta;
use std::rc::Rc;

/// Anything that can be invoked with [`Args`] and may be wrapped further.
///
/// Wrappers report the metadata of the callable they wrap, so every layer
/// of a stack answers `name()` and `doc()` like the innermost function.
/// `call_count()` is forwarded the same way: whichever counter sits highest
/// in the stack is the one callers see.
pub trait Callable {
    type Arg;
    type Output;

    fn meta(&self) -> &FnMeta;

    fn call(&self, args: Args<Self::Arg>) -> Result<Self::Output, WrapError>;

    fn name(&self) -> &str {
        &self.meta().name
    }

    fn doc(&self) -> Option<&str> {
        self.meta().doc.as_deref()
    }

    fn call_count(&self) -> Option<u64> {
        None
    }
}

impl<C: Callable + ?Sized> Callable for Rc<C> {
    type Arg = C::Arg;
    type Output = C::Output;

    fn meta(&self) -> &FnMeta {
        (**self).meta()
    }

    fn call(&self, args: Args<Self::Arg>) -> Result<Self::Output, WrapError> {
        (**self).call(args)
    }

    fn call_count(&self) -> Option<u64> {
        (**self).call_count()
    }
}

/// Turns one callable into another that adds behavior around it.
pub trait Decorator<C: Callable> {
    type Wrapped: Callable<Arg = C::Arg, Output = C::Output>;

    fn wrap(&self, inner: C) -> Self::Wrapped;
}

/// Stacks decorators inner-to-outer: `f.with(&a).with(&b)` is `b(a(f))`.
pub trait CallableExt: Callable + Sized {
    fn with<D: Decorator<Self>>(self, decorator: &D) -> D::Wrapped {
        decorator.wrap(self)
    }
}

impl<C: Callable> CallableExt for C {}

/// Decorator that hands back its input untouched. Swap it in for a real
/// decorator to switch that layer off without changing the stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disable;

impl<C: Callable> Decorator<C> for Disable {
    type Wrapped = C;

    fn wrap(&self, inner: C) -> C {
        inner
    }
}

type Body<A, O> = Box<dyn Fn(Args<A>) -> Result<O, WrapError>>;

/// A plain function: the innermost layer of every stack.
pub struct Func<A, O> {
    meta: FnMeta,
    body: Body<A, O>,
}

impl<A: 'static, O: 'static> Func<A, O> {
    pub fn new(meta: FnMeta, body: impl Fn(Args<A>) -> Result<O, WrapError> + 'static) -> Self {
        Self {
            meta,
            body: Box::new(body),
        }
    }

    /// One parameter, passed either positionally or by `param` name.
    pub fn unary(
        meta: FnMeta,
        param: &'static str,
        op: impl Fn(A) -> Result<O, WrapError> + 'static,
    ) -> Self {
        let name = meta.name.clone();
        Self::new(meta, move |args: Args<A>| {
            let got = args.len();
            let Args {
                mut positional,
                mut keywords,
            } = args;
            match (positional.pop(), keywords.pop()) {
                (Some(value), None) if got == 1 => op(value),
                (None, Some((keyword, value))) if got == 1 => {
                    if keyword == param {
                        op(value)
                    } else {
                        Err(WrapError::UnexpectedKeyword {
                            function: name.clone(),
                            keyword,
                        })
                    }
                }
                _ => Err(WrapError::Arity {
                    function: name.clone(),
                    expected: 1,
                    got,
                }),
            }
        })
    }

    /// Exactly two positional parameters. Keywords are rejected.
    pub fn binary(meta: FnMeta, op: impl Fn(A, A) -> Result<O, WrapError> + 'static) -> Self {
        let name = meta.name.clone();
        Self::new(meta, move |args: Args<A>| {
            if let Some((keyword, _)) = args.keywords.first() {
                return Err(WrapError::UnexpectedKeyword {
                    function: name.clone(),
                    keyword: keyword.clone(),
                });
            }
            let got = args.positional.len();
            let mut values = args.positional.into_iter();
            match (values.next(), values.next()) {
                (Some(x), Some(y)) if got == 2 => op(x, y),
                _ => Err(WrapError::Arity {
                    function: name.clone(),
                    expected: 2,
                    got,
                }),
            }
        })
    }
}

impl<A, O> Callable for Func<A, O> {
    type Arg = A;
    type Output = O;

    fn meta(&self) -> &FnMeta {
        &self.meta
    }

    fn call(&self, args: Args<A>) -> Result<O, WrapError> {
        (self.body)(args)
    }
}
