pub mod config;
pub mod demo;
pub mod wrap;

pub use config::DemoConfig;
pub use wrap::{Args, Callable, CallableExt, Decorator, FnMeta, Func, WrapError};
