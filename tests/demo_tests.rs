use deco::config::DemoConfig;
use deco::demo::{self, ops::FIB_DOC, Demo};
use deco::wrap::{Args, Callable, LineBuffer, Tracer, WrapError, DEFAULT_RECURSION_LIMIT};
use std::io::Cursor;
use std::rc::Rc;

fn call(f: &demo::IntFn, args: &[i64]) -> i64 {
    f.call(Args::positional(args.to_vec())).unwrap()
}

#[test]
fn test_end_to_end_values() {
    let demo = Demo::new(&DemoConfig::default(), Rc::new(LineBuffer::new())).unwrap();
    assert_eq!(call(&demo.foo, &[4, 3]), 7);
    assert_eq!(call(&demo.foo, &[4, 3, 2]), 9);
    assert_eq!(call(&demo.bar, &[4, 3]), 12);
    assert_eq!(call(&demo.bar, &[4, 3, 2, 1]), 24);
    assert_eq!(call(&demo.fib, &[5]), 8);
}

#[test]
fn test_foo_counts_misses_bar_counts_calls() {
    let foo = demo::foo(true);
    let bar = demo::bar(true);

    for args in [vec![4, 3], vec![4, 3, 2], vec![4, 3]] {
        call(&foo, &args);
    }
    for args in [vec![4, 3], vec![4, 3, 2], vec![4, 3, 2, 1]] {
        call(&bar, &args);
    }
    assert_eq!(foo.call_count(), Some(2));
    assert_eq!(bar.call_count(), Some(3));

    call(&bar, &[4, 3]);
    assert_eq!(bar.call_count(), Some(4), "bar's counter sits above its cache");
}

#[test]
fn test_fib_trace_nests() {
    let out = LineBuffer::new();
    let tracer = Tracer::new("####", Rc::new(out.clone()));
    let fib = demo::fib(&tracer, true).unwrap();

    assert_eq!(call(&fib, &[3]), 3);
    assert_eq!(
        out.lines(),
        vec![
            "#### --> fib(3)",
            "######## --> fib(2)",
            "############ --> fib(1)",
            "############ <-- fib(1) == 1",
            "############ --> fib(0)",
            "############ <-- fib(0) == 1",
            "######## <-- fib(2) == 2",
            "######## --> fib(1)",
            "######## <-- fib(1) == 1",
            "#### <-- fib(3) == 3",
        ]
    );
    assert_eq!(fib.call_count(), Some(5));
    assert_eq!(tracer.depth(), 0);
}

#[test]
fn test_fib_enter_exit_pairs_balance() {
    let out = LineBuffer::new();
    let tracer = Tracer::new("-", Rc::new(out.clone()));
    let fib = demo::fib(&tracer, true).unwrap();
    call(&fib, &[8]);

    let mut open: Vec<String> = Vec::new();
    for line in out.lines() {
        if let Some((pad, rest)) = line.split_once(" --> ") {
            assert_eq!(pad.len(), open.len() + 1, "entry one level deeper: {line}");
            open.push(format!("{pad} <-- {rest}"));
        } else {
            let expected = open.pop().expect("exit without entry");
            assert!(line.starts_with(&expected), "{line} does not close {expected}");
        }
    }
    assert!(open.is_empty());
}

#[test]
fn test_fib_recursion_goes_through_every_layer() {
    let out = LineBuffer::new();
    let tracer = Tracer::new("####", Rc::new(out.clone()));

    let memo = demo::fib(&tracer, true).unwrap();
    assert_eq!(call(&memo, &[5]), 8);
    assert_eq!(memo.call_count(), Some(9));
    assert_eq!(out.len(), 18);

    out.clear();
    let plain = demo::fib(&tracer, false).unwrap();
    assert_eq!(call(&plain, &[5]), 8);
    assert_eq!(plain.call_count(), Some(15));
    assert_eq!(out.len(), 30);
}

#[test]
fn test_fib_memo_survives_between_calls() {
    let out = LineBuffer::new();
    let fib = demo::fib(&Tracer::new("#", Rc::new(out.clone())), true).unwrap();

    call(&fib, &[10]);
    let after_first = fib.call_count().unwrap();
    out.clear();

    assert_eq!(call(&fib, &[10]), 89);
    assert_eq!(fib.call_count(), Some(after_first + 1));
    assert_eq!(out.lines(), vec!["# --> fib(10)", "# <-- fib(10) == 89"]);
}

#[test]
fn test_fib_keeps_identity() {
    let fib = demo::fib(&Tracer::new("#", Rc::new(LineBuffer::new())), true).unwrap();
    assert_eq!(fib.name(), "fib");
    assert_eq!(fib.doc(), Some(FIB_DOC));
}

#[test]
fn test_overflow_is_reported() {
    let foo = demo::foo(true);
    assert!(matches!(
        foo.call(Args::from([i64::MAX, 1])),
        Err(WrapError::Overflow { .. })
    ));
}

#[test]
fn test_demo_transcript() {
    let out = LineBuffer::new();
    let report = demo::run(&DemoConfig::default(), Rc::new(out.clone())).unwrap();

    assert_eq!(report.foo_calls, 2);
    assert_eq!(report.bar_calls, 3);
    assert_eq!(report.fib_calls, 9);
    assert_eq!(report.fib, 8);

    let lines = out.lines();
    assert_eq!(
        &lines[..8],
        &["7", "9", "7", "foo was called 2 times", "12", "24", "24", "bar was called 3 times"]
    );
    assert_eq!(lines[8], "Returns n-th Fibonacci number");
    assert_eq!(lines[11], "#### --> fib(5)");
    assert_eq!(lines[lines.len() - 2], "#### <-- fib(5) == 8");
    assert_eq!(lines[lines.len() - 1], "9 calls made");
    assert_eq!(lines.len(), 8 + 3 + 18 + 1);
}

#[test]
fn test_demo_without_memoization() {
    let config = DemoConfig {
        memoize: false,
        fib_n: 4,
        ..DemoConfig::default()
    };
    let report = demo::run(&config, Rc::new(LineBuffer::new())).unwrap();
    assert_eq!(report.foo_calls, 3);
    assert_eq!(report.bar_calls, 3);
    assert_eq!(report.fib_calls, 9);
    assert_eq!(report.fib, 5);
}

#[test]
fn test_deep_fib_fails_with_limit_error() {
    let out = LineBuffer::new();
    let tracer = Tracer::new("#", Rc::new(out.clone()));
    let fib = demo::fib(&tracer, true).unwrap();

    assert_eq!(
        fib.call(Args::from([200_000])),
        Err(WrapError::RecursionLimit {
            function: "fib".into(),
            limit: DEFAULT_RECURSION_LIMIT,
        })
    );
    assert_eq!(tracer.depth(), 0);

    // The stack stays usable afterwards.
    assert_eq!(call(&fib, &[5]), 8);
}

#[test]
fn test_fib_overflow_within_limit() {
    let fib = demo::fib(&Tracer::new("#", Rc::new(LineBuffer::new())), true).unwrap();
    assert_eq!(
        fib.call(Args::from([120])),
        Err(WrapError::Overflow {
            function: "fib".into(),
        })
    );
}

#[test]
fn test_trace_session_shares_one_stack() {
    let out = LineBuffer::new();
    let input = Cursor::new("3\n\nabc\n3\n");
    let report = demo::trace_session(&DemoConfig::default(), input, Rc::new(out.clone())).unwrap();

    assert_eq!(report.evaluated, 2);
    assert_eq!(report.rejected, 1, "only the unparsable line is rejected");
    assert_eq!(report.failed, 0);
    assert_eq!(report.calls, 6, "count carries across lines");

    let lines = out.lines();
    assert_eq!(lines.len(), 10 + 1 + 2 + 1);
    assert_eq!(lines[0], "#### --> fib(3)");
    assert_eq!(lines[10], "fib(3) == 3  [5 calls so far]");
    // Second fib(3) is a cache hit: one entry, one exit.
    assert_eq!(
        &lines[11..],
        &["#### --> fib(3)", "#### <-- fib(3) == 3", "fib(3) == 3  [6 calls so far]"]
    );
}

#[test]
fn test_trace_session_continues_after_failure() {
    let out = LineBuffer::new();
    let input = Cursor::new("5000\n3\n");
    let config = DemoConfig {
        trace_indent: "-".to_string(),
        ..DemoConfig::default()
    };
    let report = demo::trace_session(&config, input, Rc::new(out.clone())).unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(report.evaluated, 1);
    // fib(5000) reached the counter once from outside plus once per
    // permitted recursion level; fib(3) then ran fresh.
    let deep_calls = 1 + DEFAULT_RECURSION_LIMIT as u64;
    assert_eq!(report.calls, deep_calls + 5);
    assert_eq!(
        out.lines().last().map(String::as_str),
        Some(format!("fib(3) == 3  [{} calls so far]", deep_calls + 5).as_str())
    );
}
