#![allow(clippy::undocumented_unsafe_blocks)]

use std::{arch::x86_64::*, num::NonZeroUsize};

use super::ChannelSums;

/// Samples one 32-bit lane may accumulate before an 8-bit channel can overflow it.
const LANE_CAPACITY: usize = (u32::MAX / u8::MAX as u32) as usize;

#[target_feature(enable = "avx2")]
pub(super) unsafe fn reduce_average(
    dest: &mut [u32],
    src: &[u32],
    src_pitch: NonZeroUsize,
    block_size: NonZeroUsize,
    dest_width: NonZeroUsize,
    dest_height: NonZeroUsize,
) {
    let src_pitch = src_pitch.get();
    let block_size = block_size.get();
    let dest_width = dest_width.get();
    let dest_height = dest_height.get();

    // Check the array bounds once at the start of the loop.
    assert!(src_pitch >= dest_width * block_size);
    assert!(src.len() >= src_pitch * block_size * dest_height);
    assert!(dest.len() >= dest_width * dest_height);

    let count = (block_size * block_size) as u64;
    // Each block row adds at most `block_size.div_ceil(8)` samples to a lane.
    let rows_per_flush = (LANE_CAPACITY / block_size.div_ceil(8)).max(1);

    let src = src.as_ptr();
    let dest = dest.as_mut_ptr();

    for by in 0..dest_height {
        for bx in 0..dest_width {
            let block = src.add(by * block_size * src_pitch + bx * block_size);
            let sums = block_sums(block, src_pitch, block_size, rows_per_flush);
            *dest.add(by * dest_width + bx) = sums.mean(count);
        }
    }
}

#[target_feature(enable = "avx2")]
unsafe fn block_sums(
    block: *const u32,
    src_pitch: usize,
    block_size: usize,
    rows_per_flush: usize,
) -> ChannelSums {
    let mask = _mm256_set1_epi32(0xFF);
    let mut sums = ChannelSums::default();

    let mut acc_a = _mm256_setzero_si256();
    let mut acc_r = _mm256_setzero_si256();
    let mut acc_g = _mm256_setzero_si256();
    let mut acc_b = _mm256_setzero_si256();
    let mut pending_rows = 0;

    for j in 0..block_size {
        let row = block.add(j * src_pitch);
        let mut i = 0;

        // 8 samples per iteration, one 32-bit lane per sample
        while i + 8 <= block_size {
            let data = _mm256_loadu_si256(row.add(i) as *const __m256i);
            acc_a = _mm256_add_epi32(acc_a, _mm256_srli_epi32::<24>(data));
            acc_r = _mm256_add_epi32(acc_r, _mm256_and_si256(_mm256_srli_epi32::<16>(data), mask));
            acc_g = _mm256_add_epi32(acc_g, _mm256_and_si256(_mm256_srli_epi32::<8>(data), mask));
            acc_b = _mm256_add_epi32(acc_b, _mm256_and_si256(data, mask));
            i += 8;
        }

        // Scalar tail
        while i < block_size {
            sums.add(*row.add(i));
            i += 1;
        }

        pending_rows += 1;
        if pending_rows == rows_per_flush {
            flush(&mut sums, acc_a, acc_r, acc_g, acc_b);
            acc_a = _mm256_setzero_si256();
            acc_r = _mm256_setzero_si256();
            acc_g = _mm256_setzero_si256();
            acc_b = _mm256_setzero_si256();
            pending_rows = 0;
        }
    }

    if pending_rows > 0 {
        flush(&mut sums, acc_a, acc_r, acc_g, acc_b);
    }

    sums
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn flush(sums: &mut ChannelSums, a: __m256i, r: __m256i, g: __m256i, b: __m256i) {
    sums.a += horizontal_sum(a);
    sums.r += horizontal_sum(r);
    sums.g += horizontal_sum(g);
    sums.b += horizontal_sum(b);
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn horizontal_sum(v: __m256i) -> u64 {
    let mut lanes = [0u32; 8];
    _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, v);
    lanes.iter().map(|&lane| u64::from(lane)).sum()
}
