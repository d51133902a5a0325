#[cfg(target_arch = "x86_64")]
mod avx2;
mod rust;

use std::num::NonZeroUsize;

use cfg_if::cfg_if;

use crate::color::{pack_argb, unpack_argb};

/// Replaces every block with the mean of its samples, channel by channel.
///
/// Alpha, red, green and blue are each summed over the `block_size²`
/// samples of the block and divided by the sample count, truncating toward
/// zero. The channels never influence each other: alpha is not used to
/// weight the color channels and no gamma conversion takes place.
///
/// # Parameters
/// - `dest`: Destination buffer, written densely with `dest_width` samples per row
/// - `src`: Source raster
/// - `src_pitch`: Number of samples per row in the source buffer
/// - `block_size`: Side length of one block in source samples
/// - `dest_width`: Number of blocks per row
/// - `dest_height`: Number of block rows
pub fn reduce_average(
    dest: &mut [u32],
    src: &[u32],
    src_pitch: NonZeroUsize,
    block_size: NonZeroUsize,
    dest_width: NonZeroUsize,
    dest_height: NonZeroUsize,
) {
    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", not(feature = "no_simd")))] {
            if crate::util::has_avx2() {
                // SAFETY: We check for AVX2 first
                unsafe {
                    avx2::reduce_average(dest, src, src_pitch, block_size, dest_width, dest_height);
                }
                return;
            }
        }
    }

    rust::reduce_average(dest, src, src_pitch, block_size, dest_width, dest_height);
}

/// Running per-channel totals for one block.
///
/// `u64` totals cannot overflow for any block that fits in memory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ChannelSums {
    a: u64,
    r: u64,
    g: u64,
    b: u64,
}

impl ChannelSums {
    #[inline(always)]
    fn add(&mut self, color: u32) {
        let [a, r, g, b] = unpack_argb(color);
        self.a += u64::from(a);
        self.r += u64::from(r);
        self.g += u64::from(g);
        self.b += u64::from(b);
    }

    #[inline(always)]
    fn add_row(&mut self, row: &[u32]) {
        for &color in row {
            self.add(color);
        }
    }

    /// Packs the truncated mean of each channel over `count` samples.
    #[inline(always)]
    fn mean(self, count: u64) -> u32 {
        debug_assert!(count > 0);
        // Every channel total is at most 255 * count, so each mean fits in a u8.
        pack_argb(
            (self.a / count) as u8,
            (self.r / count) as u8,
            (self.g / count) as u8,
            (self.b / count) as u8,
        )
    }
}
