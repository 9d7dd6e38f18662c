use crate::wrap::{Args, FnMeta, Func, Recursion, WrapError};

pub const FIB_DOC: &str = "Returns n-th Fibonacci number\n:param n: int\n:return: n-th Fibonacci number";

pub fn add() -> Func<i64, i64> {
    Func::binary(FnMeta::new("add"), |a: i64, b: i64| {
        a.checked_add(b).ok_or_else(|| overflow("add"))
    })
}

pub fn mul() -> Func<i64, i64> {
    Func::binary(FnMeta::new("mul"), |a: i64, b: i64| {
        a.checked_mul(b).ok_or_else(|| overflow("mul"))
    })
}

/// `fib(n) = 1` for `n <= 1`, otherwise `fib(n - 1) + fib(n - 2)`, where
/// both recursive calls go through `this`.
pub fn fib(this: Recursion<i64, i64>) -> Func<i64, i64> {
    Func::unary(FnMeta::new("fib").with_doc(FIB_DOC), "n", move |n: i64| {
        if n <= 1 {
            return Ok(1);
        }
        let a = this.call(Args::from([n - 1]))?;
        let b = this.call(Args::from([n - 2]))?;
        a.checked_add(b).ok_or_else(|| overflow("fib"))
    })
}

fn overflow(function: &str) -> WrapError {
    WrapError::Overflow {
        function: function.to_string(),
    }
}
