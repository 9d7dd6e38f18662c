use super::args::Args;
use super::callable::Callable;
use super::error::WrapError;
use std::cell::{Cell, OnceCell};
use std::rc::{Rc, Weak};

/// Nesting allowed through one handle. `fib` overflows `i64` at depth 91,
/// and a full wrapper stack per level must still fit a 2 MiB thread stack.
pub const DEFAULT_RECURSION_LIMIT: usize = 128;

type Target<A, O> = Weak<dyn Callable<Arg = A, Output = O>>;

/// Lets a function body call the finished stack that wraps it.
///
/// Create the handle first, move a clone into the body, build the stack,
/// then `bind` it. Recursive calls made through the handle pass through
/// every layer again, exactly like a call from outside. Only a weak
/// reference is kept, so the stack and its body do not keep each other alive.
///
/// Calls nested deeper than the limit fail with
/// [`WrapError::RecursionLimit`] instead of exhausting the thread stack.
pub struct Recursion<A, O> {
    function: Rc<str>,
    target: Rc<OnceCell<Target<A, O>>>,
    depth: Rc<Cell<usize>>,
    limit: usize,
}

impl<A, O> Clone for Recursion<A, O> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            target: self.target.clone(),
            depth: self.depth.clone(),
            limit: self.limit,
        }
    }
}

impl<A: 'static, O: 'static> Recursion<A, O> {
    pub fn new(function: &str) -> Self {
        Self::with_limit(function, DEFAULT_RECURSION_LIMIT)
    }

    pub fn with_limit(function: &str, limit: usize) -> Self {
        Self {
            function: Rc::from(function),
            target: Rc::new(OnceCell::new()),
            depth: Rc::new(Cell::new(0)),
            limit,
        }
    }

    pub fn bind(&self, stack: &Rc<dyn Callable<Arg = A, Output = O>>) -> Result<(), WrapError> {
        self.target
            .set(Rc::downgrade(stack))
            .map_err(|_| WrapError::AlreadyBound {
                function: self.function.to_string(),
            })
    }

    pub fn is_bound(&self) -> bool {
        self.target.get().is_some()
    }

    /// Recursive calls currently in progress through this handle.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    pub fn call(&self, args: Args<A>) -> Result<O, WrapError> {
        let stack = self
            .target
            .get()
            .and_then(|weak| weak.upgrade())
            .ok_or_else(|| WrapError::UnboundRecursion {
                function: self.function.to_string(),
            })?;

        let depth = self.depth.get();
        if depth >= self.limit {
            tracing::debug!(function = %self.function, limit = self.limit, "recursion limit reached");
            return Err(WrapError::RecursionLimit {
                function: self.function.to_string(),
                limit: self.limit,
            });
        }

        self.depth.set(depth + 1);
        let result = stack.call(args);
        self.depth.set(depth);
        result
    }
}
