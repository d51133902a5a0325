
use std::num::NonZeroUsize;

use anyhow::{Result, bail};

use crate::{
    params::BlockColorStrategy, pixel_art::ReducedPixelArt, reduce::reduce,
    util::common_divisors,
};

/// A decoded image frame: packed `0xAARRGGBB` samples in row-major order.
///
/// This is the shape an image decoder hands over after decompressing one
/// frame of a GIF or similar format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageFrame {
    argb: Vec<u32>,
    width: NonZeroUsize,
    height: NonZeroUsize,
}

impl ImageFrame {
    pub fn new(argb: Vec<u32>, width: usize, height: usize) -> Result<Self> {
        let (Some(width), Some(height)) = (NonZeroUsize::new(width), NonZeroUsize::new(height))
        else {
            bail!("ImageFrame: width ({width}) and height ({height}) must be > 0");
        };
        if width.get().checked_mul(height.get()) != Some(argb.len()) {
            bail!(
                "ImageFrame: {} samples do not match {width}x{height}",
                argb.len()
            );
        }

        Ok(Self {
            argb,
            width,
            height,
        })
    }

    #[must_use]
    pub fn argb(&self) -> &[u32] {
        &self.argb
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width.get()
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height.get()
    }

    /// Collapses this frame to its logical pixel grid, assuming every
    /// logical pixel was drawn as a `block_size x block_size` square.
    ///
    /// See [`reduce`] for the error conditions.
    pub fn extract_logical_pixels(
        &self,
        block_size: usize,
        strategy: BlockColorStrategy,
    ) -> Result<ReducedPixelArt> {
        reduce(
            &self.argb,
            self.width(),
            self.height(),
            block_size,
            strategy,
        )
    }

    /// Block sizes up to `max` that tile this frame exactly, smallest first.
    ///
    /// `1` is always included when `max >= 1`.
    #[must_use]
    pub fn valid_block_sizes(&self, max: usize) -> Vec<usize> {
        common_divisors(self.width, self.height)
            .map(NonZeroUsize::get)
            .take_while(|&size| size <= max)
            .collect()
    }
}

impl From<ReducedPixelArt> for ImageFrame {
    fn from(art: ReducedPixelArt) -> Self {
        let (argb, width, height) = art.into_parts();
        Self {
            argb,
            width,
            height,
        }
    }
}
