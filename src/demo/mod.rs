//! The three sample stacks and the script that exercises them.
//!
//! | function | stack (outer to inner)                      |
//! |----------|---------------------------------------------|
//! | `foo`    | memoize, count, n-ary, `add`                |
//! | `bar`    | count, memoize, n-ary, `mul`                |
//! | `fib`    | count, trace, memoize, `fib` (recursive)    |
//!
//! `foo` counts only cache misses, `bar` counts every call. The recursive
//! calls inside `fib` re-enter the whole stack, so they are counted,
//! traced and memoized like outside calls.

pub mod ops;

use crate::config::DemoConfig;
use crate::wrap::{
    Args, Callable, CallableExt, CountCalls, Disable, LineSink, Memoize, NAry, Recursion, Tracer,
    WrapError,
};
use std::io::BufRead;
use std::rc::Rc;
use thiserror::Error;

pub type IntFn = Rc<dyn Callable<Arg = i64, Output = i64>>;

fn memoized<C>(inner: C, enabled: bool) -> IntFn
where
    C: Callable<Arg = i64, Output = i64> + 'static,
{
    if enabled {
        Rc::new(inner.with(&Memoize))
    } else {
        Rc::new(inner.with(&Disable))
    }
}

pub fn foo(memoize: bool) -> IntFn {
    memoized(ops::add().with(&NAry).with(&CountCalls), memoize)
}

pub fn bar(memoize: bool) -> IntFn {
    Rc::new(memoized(ops::mul().with(&NAry), memoize).with(&CountCalls))
}

pub fn fib(tracer: &Tracer, memoize: bool) -> Result<IntFn, WrapError> {
    let this = Recursion::new("fib");
    let stack: IntFn = Rc::new(
        memoized(ops::fib(this.clone()), memoize)
            .with(tracer)
            .with(&CountCalls),
    );
    this.bind(&stack)?;
    Ok(stack)
}

/// The demo stacks built from one configuration.
pub struct Demo {
    pub foo: IntFn,
    pub bar: IntFn,
    pub fib: IntFn,
    pub tracer: Tracer,
}

impl Demo {
    pub fn new(config: &DemoConfig, sink: Rc<dyn LineSink>) -> Result<Self, WrapError> {
        let tracer = Tracer::new(&config.trace_indent, sink);
        Ok(Self {
            foo: foo(config.memoize),
            bar: bar(config.memoize),
            fib: fib(&tracer, config.memoize)?,
            tracer,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub foo_calls: u64,
    pub bar_calls: u64,
    pub fib_calls: u64,
    pub fib_n: i64,
    pub fib: i64,
}

/// Runs the demo script, writing results and the `fib` trace to `out`.
pub fn run(config: &DemoConfig, out: Rc<dyn LineSink>) -> Result<DemoReport, WrapError> {
    let demo = Demo::new(config, out.clone())?;
    let emit = |line: String| out.emit(&line);

    for args in [vec![4, 3], vec![4, 3, 2], vec![4, 3]] {
        emit(demo.foo.call(Args::positional(args))?.to_string());
    }
    let foo_calls = demo.foo.call_count().unwrap_or_default();
    emit(format!("foo was called {} times", foo_calls));

    for args in [vec![4, 3], vec![4, 3, 2], vec![4, 3, 2, 1]] {
        emit(demo.bar.call(Args::positional(args))?.to_string());
    }
    let bar_calls = demo.bar.call_count().unwrap_or_default();
    emit(format!("bar was called {} times", bar_calls));

    if let Some(doc) = demo.fib.doc() {
        doc.lines().for_each(|line| out.emit(line));
    }
    let fib_result = demo.fib.call(Args::from([config.fib_n]))?;
    let fib_calls = demo.fib.call_count().unwrap_or_default();
    emit(format!("{} calls made", fib_calls));

    let report = DemoReport {
        foo_calls,
        bar_calls,
        fib_calls,
        fib_n: config.fib_n,
        fib: fib_result,
    };
    tracing::info!(?report, "demo finished");
    Ok(report)
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read input")]
    Input(#[from] std::io::Error),

    #[error(transparent)]
    Wrap(#[from] WrapError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub evaluated: usize,
    pub rejected: usize,
    pub failed: usize,
    pub calls: u64,
}

/// Traces `fib(n)` for every integer line of `input` against one stack, so
/// the cache and the call count carry over from line to line.
pub fn trace_session(
    config: &DemoConfig,
    input: impl BufRead,
    out: Rc<dyn LineSink>,
) -> Result<SessionReport, SessionError> {
    let tracer = Tracer::new(&config.trace_indent, out.clone());
    let fib = fib(&tracer, config.memoize)?;
    let mut report = SessionReport::default();

    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let n: i64 = match text.parse() {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!("Ignoring '{}': {}", text, e);
                report.rejected += 1;
                continue;
            }
        };

        match fib.call(Args::from([n])) {
            Ok(value) => {
                report.evaluated += 1;
                out.emit(&format!(
                    "fib({}) == {}  [{} calls so far]",
                    n,
                    value,
                    fib.call_count().unwrap_or_default()
                ));
            }
            Err(e) => {
                tracing::warn!("fib({}) failed: {}", n, e);
                report.failed += 1;
            }
        }
    }

    report.calls = fib.call_count().unwrap_or_default();
    Ok(report)
}
