mod average;
mod first;
mod most_frequent;


use std::num::NonZeroUsize;

use anyhow::{Result, bail};

pub use average::reduce_average;
pub use first::reduce_first;
pub use most_frequent::reduce_most_frequent;

use crate::{params::BlockColorStrategy, pixel_art::ReducedPixelArt};

/// Common signature of the block reduction kernels:
/// `(dest, src, src_pitch, block_size, dest_width, dest_height)`.
///
/// `dest` is written densely (`dest_width` samples per row). Each output
/// sample covers the `block_size x block_size` square of `src` starting at
/// row `y * block_size`, column `x * block_size`.
pub type ReduceFn = fn(&mut [u32], &[u32], NonZeroUsize, NonZeroUsize, NonZeroUsize, NonZeroUsize);

impl BlockColorStrategy {
    /// The kernel implementing this strategy.
    #[must_use]
    pub fn reduce_fn(self) -> ReduceFn {
        match self {
            Self::First => reduce_first,
            Self::Average => reduce_average,
            Self::MostFrequent => reduce_most_frequent,
        }
    }
}

/// Collapses an upscaled pixel-art raster back to its logical pixel grid.
///
/// `samples` holds `width * height` packed `0xAARRGGBB` colors in row-major
/// order, where every logical pixel was drawn as a `block_size x block_size`
/// square. One color is chosen per square according to `strategy`, and the
/// squares are visited top-to-bottom, left-to-right, so the result is again
/// row-major with dimensions `width / block_size` by `height / block_size`.
///
/// The input is never modified. The only allocation that outlives the call
/// is the returned sample buffer.
///
/// # Errors
/// - `block_size` is zero
/// - `width` or `height` is not divisible by `block_size`
/// - `width` or `height` is zero
/// - `samples.len()` is not `width * height`
///
/// # Example
/// ```
/// use pixelart_reduce::{BlockColorStrategy, reduce};
///
/// let src: Vec<u32> = vec![
///     1, 1, 2, 2,
///     1, 1, 2, 2,
/// ];
/// let art = reduce(&src, 4, 2, 2, BlockColorStrategy::First)?;
/// assert_eq!((art.width(), art.height()), (2, 1));
/// assert_eq!(art.samples(), &[1, 2]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn reduce(
    samples: &[u32],
    width: usize,
    height: usize,
    block_size: usize,
    strategy: BlockColorStrategy,
) -> Result<ReducedPixelArt> {
    let Some(block_size) = NonZeroUsize::new(block_size) else {
        bail!("reduce: block size must be > 0");
    };
    if width % block_size.get() != 0 || height % block_size.get() != 0 {
        bail!(
            "reduce: width ({width}) and height ({height}) must be divisible by block size ({block_size})"
        );
    }
    let (Some(src_width), Some(src_height)) = (NonZeroUsize::new(width), NonZeroUsize::new(height))
    else {
        bail!("reduce: width ({width}) and height ({height}) must be > 0");
    };
    let Some(expected_len) = width.checked_mul(height) else {
        bail!("reduce: {width}x{height} does not fit in memory");
    };
    if samples.len() != expected_len {
        bail!(
            "reduce: expected {expected_len} samples for {width}x{height}, got {}",
            samples.len()
        );
    }

    // SAFETY: both dimensions are non-zero multiples of the block size
    let (dest_width, dest_height) = unsafe {
        (
            NonZeroUsize::new_unchecked(src_width.get() / block_size.get()),
            NonZeroUsize::new_unchecked(src_height.get() / block_size.get()),
        )
    };

    let mut dest = vec![0u32; dest_width.get() * dest_height.get()];
    strategy.reduce_fn()(
        &mut dest,
        samples,
        src_width,
        block_size,
        dest_width,
        dest_height,
    );

    Ok(ReducedPixelArt::new(dest, dest_width, dest_height))
}
