//! Function wrappers and the seams they compose through.
//!
//! A stack is built inner-to-outer with [`CallableExt::with`]:
//!
//! ```
//! use deco::wrap::{Args, Callable, CallableExt, CountCalls, FnMeta, Func, Memoize, NAry};
//!
//! let add = Func::binary(FnMeta::new("add"), |a: i64, b: i64| Ok(a + b));
//! let foo = add.with(&NAry).with(&CountCalls).with(&Memoize);
//!
//! assert_eq!(foo.call(Args::from([4, 3, 2])), Ok(9));
//! assert_eq!(foo.call(Args::from([4, 3, 2])), Ok(9));
//! assert_eq!(foo.call_count(), Some(1));
//! assert_eq!(foo.name(), "add");
//! ```
//!
//! State lives in `Cell`/`RefCell`, so stacks are single-threaded.

pub mod args;
pub mod callable;
pub mod count;
pub mod error;
pub mod memo;
pub mod meta;
pub mod nary;
pub mod recursion;
pub mod trace;

pub use args::Args;
pub use callable::{Callable, CallableExt, Decorator, Disable, Func};
pub use count::{CountCalls, Counted};
pub use error::WrapError;
pub use memo::{MemoKey, Memoize, Memoized};
pub use meta::{FnId, FnMeta};
pub use nary::{NAry, NAryFn};
pub use recursion::{Recursion, DEFAULT_RECURSION_LIMIT};
pub use trace::{LineBuffer, LineSink, StdoutSink, Traced, Tracer};
