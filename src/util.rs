#[cfg(test)]
mod tests;

use std::num::NonZeroUsize;

#[cfg(target_arch = "x86_64")]
cpufeatures::new!(cpuid_avx2, "avx2");

#[cfg(target_arch = "x86_64")]
pub use cpuid_avx2::get as has_avx2;

/// Greatest common divisor of two non-zero values.
#[must_use]
pub fn gcd(a: NonZeroUsize, b: NonZeroUsize) -> NonZeroUsize {
    let (mut a, mut b) = (a.get(), b.get());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // SAFETY: the gcd of two non-zero values is non-zero
    unsafe { NonZeroUsize::new_unchecked(a) }
}

/// Every value that evenly divides both `a` and `b`, in ascending order.
///
/// For a `width x height` raster these are exactly the block sizes that
/// tile it without a remainder.
pub fn common_divisors(a: NonZeroUsize, b: NonZeroUsize) -> impl Iterator<Item = NonZeroUsize> {
    let g = gcd(a, b);
    (1..=g.get())
        .filter(move |d| g.get() % d == 0)
        .filter_map(NonZeroUsize::new)
}
