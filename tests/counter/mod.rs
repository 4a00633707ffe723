/// Library-level tests for the reference and native workloads
use counter_loop::counter::{run_default, CounterLoop};
use counter_loop::native::{NativeLoop, NativeVariant};
use counter_loop::types::{CounterError, LoopConfig, MAX_ITERATIONS};
use num_bigint::BigInt;
use num_traits::{One, Zero};

#[test]
fn test_reference_run_matches_closed_form() {
    assert_eq!(run_default(), crate::reference_total());
}

#[test]
fn test_reference_accumulators_at_completion() {
    let mut counter = CounterLoop::new(LoopConfig::default()).unwrap();
    counter.run();
    assert!(counter.is_done());
    assert_eq!(counter.completed(), 100_000);

    // sum(0..100000) = 4999950000
    assert_eq!(counter.add(), &BigInt::from(4_999_950_001u64));
    assert_eq!(counter.sub(), &BigInt::from(-4_999_949_999i64));
    assert_eq!(counter.mul(), &(BigInt::one() << 100_000usize));
    assert!(counter.div().is_zero());
    assert_eq!(counter.mul().bits(), 100_001);
}

#[test]
fn test_reference_total_digits() {
    let digits = run_default().to_string();
    // 2^100000 has 30103 decimal digits and ends in 6, so the total ends in 8
    assert_eq!(digits.len(), 30_103);
    assert!(digits.ends_with('8'));
}

#[test]
fn test_repeated_runs_are_identical() {
    assert_eq!(run_default(), run_default());
}

#[test]
fn test_snapshot_serializes_as_decimal_strings() {
    let mut counter = CounterLoop::new(LoopConfig::with_iterations(70).unwrap()).unwrap();
    counter.run();
    let value = serde_json::to_value(counter.snapshot()).unwrap();
    assert_eq!(value["completed"], 70);
    assert_eq!(value["mul"], "1180591620717411303424");
    assert_eq!(value["div"], "0");
}

#[test]
fn test_oversized_config_rejected() {
    let config = LoopConfig {
        iterations: MAX_ITERATIONS + 1,
    };
    match CounterLoop::new(config) {
        Err(CounterError::Config(msg)) => assert!(msg.contains("at most")),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("oversized config accepted"),
    }
}

#[test]
fn test_native_cpp_reference_run() {
    let go = NativeLoop::new(NativeVariant::Go, LoopConfig::default());
    assert_eq!(go.variant(), NativeVariant::Go);
    assert_eq!(go.completed(), 0);

    let mut cpp = NativeLoop::new(NativeVariant::Cpp, LoopConfig::default());
    cpp.run();
    assert_eq!(cpp.completed(), 100_000);
    // c = 3 * 5^n (mod 2^64)
    let expected_c = (0..100_000).fold(3u64, |c, _| c.wrapping_mul(5));
    assert_eq!(cpp.snapshot().mul, expected_c);
    assert_eq!(cpp.snapshot().div, 0);
}

#[test]
fn test_native_mixed_reference_run() {
    let mut mixed = NativeLoop::new(NativeVariant::Mixed, LoopConfig::default());
    mixed.run();
    assert_eq!(mixed.completed(), 100_000);
    assert_eq!(mixed.summary_line(), "dummy: 864197522086500000");
}
