#![allow(clippy::unwrap_used, reason = "allow in test files")]

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use super::*;

fn nz(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).unwrap()
}

#[test]
fn gcd_basic() {
    assert_eq!(gcd(nz(320), nz(240)), nz(80));
    assert_eq!(gcd(nz(7), nz(13)), nz(1));
    assert_eq!(gcd(nz(12), nz(12)), nz(12));
    assert_eq!(gcd(nz(1), nz(99)), nz(1));
}

#[test]
fn common_divisors_ascending() {
    let divisors: Vec<usize> = common_divisors(nz(12), nz(18)).map(NonZeroUsize::get).collect();

    assert_eq!(divisors, vec![1, 2, 3, 6]);
}

#[quickcheck]
fn common_divisors_divide_both(a: u16, b: u16) -> TestResult {
    let (Some(a), Some(b)) = (NonZeroUsize::new(a as usize), NonZeroUsize::new(b as usize)) else {
        return TestResult::discard();
    };

    TestResult::from_bool(
        common_divisors(a, b).all(|d| a.get() % d.get() == 0 && b.get() % d.get() == 0),
    )
}

#[cfg(target_arch = "x86_64")]
#[test]
fn has_avx2_is_stable() {
    // The detection result is cached, repeated calls must agree
    assert_eq!(has_avx2(), has_avx2());
}
