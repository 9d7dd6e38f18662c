use deco::wrap::{
    Args, Callable, CallableExt, CountCalls, FnMeta, Func, Recursion, WrapError,
    DEFAULT_RECURSION_LIMIT,
};
use std::rc::Rc;

fn countdown(this: Recursion<i64, i64>) -> Func<i64, i64> {
    Func::unary(FnMeta::new("countdown"), "n", move |n: i64| {
        if n == 0 {
            Ok(0)
        } else {
            Ok(1 + this.call(Args::from([n - 1]))?)
        }
    })
}

fn bound(this: &Recursion<i64, i64>) -> Rc<dyn Callable<Arg = i64, Output = i64>> {
    let stack: Rc<dyn Callable<Arg = i64, Output = i64>> =
        Rc::new(countdown(this.clone()).with(&CountCalls));
    this.bind(&stack).unwrap();
    stack
}

#[test]
fn test_unbound_handle_fails() {
    let this = Recursion::<i64, i64>::new("countdown");
    let f = countdown(this.clone());
    assert!(!this.is_bound());
    assert_eq!(f.call(Args::from([0])), Ok(0));
    assert_eq!(
        f.call(Args::from([3])),
        Err(WrapError::UnboundRecursion {
            function: "countdown".into(),
        })
    );
}

#[test]
fn test_bound_handle_recurses_through_stack() {
    let this = Recursion::new("countdown");
    let stack = bound(&this);
    assert_eq!(stack.call(Args::from([4])), Ok(4));
    assert_eq!(stack.call_count(), Some(5), "every level passes the counter");
    assert!(matches!(this.bind(&stack), Err(WrapError::AlreadyBound { .. })));
}

#[test]
fn test_dropped_stack_unbinds() {
    let this = Recursion::new("countdown");
    let stack = bound(&this);
    drop(stack);
    assert!(matches!(
        this.call(Args::from([1])),
        Err(WrapError::UnboundRecursion { .. })
    ));
}

#[test]
fn test_limit_stops_deep_recursion() {
    let this = Recursion::with_limit("countdown", 10);
    let stack = bound(&this);

    assert_eq!(stack.call(Args::from([10])), Ok(10));
    assert_eq!(
        stack.call(Args::from([11])),
        Err(WrapError::RecursionLimit {
            function: "countdown".into(),
            limit: 10,
        })
    );
    assert_eq!(this.depth(), 0, "depth unwinds after a failed call");
    assert_eq!(stack.call(Args::from([3])), Ok(3));
}

#[test]
fn test_default_limit_fails_instead_of_overflowing_stack() {
    let this = Recursion::new("countdown");
    let stack = bound(&this);

    assert_eq!(
        stack.call(Args::from([1_000_000])),
        Err(WrapError::RecursionLimit {
            function: "countdown".into(),
            limit: DEFAULT_RECURSION_LIMIT,
        })
    );
    assert_eq!(this.depth(), 0);
}
