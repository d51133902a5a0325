use std::num::NonZeroUsize;

/// The logical pixel grid recovered from an upscaled raster.
///
/// Equality and hashing compare dimensions and every sample, so two grids
/// holding the same colors are interchangeable regardless of where they
/// came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReducedPixelArt {
    /// One packed `0xAARRGGBB` color per logical pixel, row-major.
    samples: Vec<u32>,
    width: NonZeroUsize,
    height: NonZeroUsize,
}

impl ReducedPixelArt {
    pub(crate) fn new(samples: Vec<u32>, width: NonZeroUsize, height: NonZeroUsize) -> Self {
        debug_assert_eq!(samples.len(), width.get() * height.get());

        Self {
            samples,
            width,
            height,
        }
    }

    /// Logical width, the source width divided by the block size.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width.get()
    }

    /// Logical height, the source height divided by the block size.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height.get()
    }

    #[must_use]
    pub fn samples(&self) -> &[u32] {
        &self.samples
    }

    /// Color of the logical pixel at column `x`, row `y`.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.samples.get(y * self.width() + x).copied()
    }

    /// Iterates over the grid one row at a time, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> {
        self.samples.chunks_exact(self.width())
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<u32> {
        self.samples
    }

    pub(crate) fn into_parts(self) -> (Vec<u32>, NonZeroUsize, NonZeroUsize) {
        (self.samples, self.width, self.height)
    }
}
