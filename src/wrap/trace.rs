use super::args::Args;
use super::callable::{Callable, Decorator};
use super::error::WrapError;
use super::meta::FnMeta;
use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::rc::Rc;

/// Destination for human-readable output lines.
pub trait LineSink {
    fn emit(&self, line: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: Rc<RefCell<Vec<String>>>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl LineSink for LineBuffer {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Prints enter/exit lines around each call, indented by nesting depth:
///
/// ```text
/// #### --> fib(2)
/// ######## --> fib(1)
/// ######## <-- fib(1) == 1
/// ...
/// #### <-- fib(2) == 2
/// ```
///
/// Every function wrapped by the same `Tracer` shares one depth counter.
#[derive(Clone)]
pub struct Tracer {
    indent: Rc<str>,
    depth: Rc<Cell<usize>>,
    sink: Rc<dyn LineSink>,
}

impl Tracer {
    pub fn new(indent: &str, sink: Rc<dyn LineSink>) -> Self {
        Self {
            indent: Rc::from(indent),
            depth: Rc::new(Cell::new(0)),
            sink,
        }
    }

    pub fn stdout(indent: &str) -> Self {
        Self::new(indent, Rc::new(StdoutSink))
    }

    /// Number of traced calls currently in progress.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }
}

pub struct Traced<C> {
    inner: C,
    tracer: Tracer,
}

impl<C> Callable for Traced<C>
where
    C: Callable,
    C::Arg: Display,
    C::Output: Display,
{
    type Arg = C::Arg;
    type Output = C::Output;

    fn meta(&self) -> &FnMeta {
        self.inner.meta()
    }

    fn call(&self, args: Args<C::Arg>) -> Result<C::Output, WrapError> {
        let rendered = args.to_string();
        let depth = self.tracer.depth.get() + 1;
        self.tracer.depth.set(depth);
        let pad = self.tracer.indent.repeat(depth);

        self.tracer
            .sink
            .emit(&format!("{} --> {}({})", pad, self.name(), rendered));
        let result = self.inner.call(args);
        match &result {
            Ok(value) => self.tracer.sink.emit(&format!(
                "{} <-- {}({}) == {}",
                pad,
                self.name(),
                rendered,
                value
            )),
            Err(e) => tracing::debug!(function = %self.name(), depth, error = %e, "traced call failed"),
        }

        self.tracer.depth.set(depth - 1);
        result
    }

    fn call_count(&self) -> Option<u64> {
        self.inner.call_count()
    }
}

impl<C> Decorator<C> for Tracer
where
    C: Callable,
    C::Arg: Display,
    C::Output: Display,
{
    type Wrapped = Traced<C>;

    fn wrap(&self, inner: C) -> Traced<C> {
        Traced {
            inner,
            tracer: self.clone(),
        }
    }
}
