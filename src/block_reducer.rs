
use std::num::NonZeroUsize;

use anyhow::{Context, Result, bail};

use crate::{
    frame::ImageFrame, params::BlockColorStrategy, pixel_art::ReducedPixelArt, reduce::reduce,
};

/// A block size and strategy pair, validated once and applied to any number
/// of rasters.
///
/// Holds no state between calls and is freely shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockReducer {
    /// Side length of the square each logical pixel was drawn as.
    block_size: NonZeroUsize,
    /// How a color is picked for each block.
    ///
    /// - 0 `First`: top-left sample
    /// - 1 `Average`: per-channel truncated mean
    /// - 2 `MostFrequent`: modal color, earliest on ties
    strategy: BlockColorStrategy,
}

impl BlockReducer {
    /// Builds a reducer from loosely typed arguments.
    ///
    /// `strategy` defaults to [`BlockColorStrategy::First`].
    pub fn new(block_size: i64, strategy: Option<i64>) -> Result<Self> {
        let strategy = strategy
            .map(BlockColorStrategy::try_from)
            .unwrap_or(Ok(BlockColorStrategy::First))?;

        if block_size <= 0 {
            bail!("BlockReducer: block size must be > 0, got {block_size}");
        }
        let Some(block_size) = NonZeroUsize::new(usize::try_from(block_size)?) else {
            bail!("BlockReducer: block size must be > 0");
        };

        Ok(Self {
            block_size,
            strategy,
        })
    }

    #[must_use]
    pub const fn with_strategy(block_size: NonZeroUsize, strategy: BlockColorStrategy) -> Self {
        Self {
            block_size,
            strategy,
        }
    }

    #[must_use]
    pub const fn block_size(&self) -> NonZeroUsize {
        self.block_size
    }

    #[must_use]
    pub const fn strategy(&self) -> BlockColorStrategy {
        self.strategy
    }

    pub fn reduce(&self, samples: &[u32], width: usize, height: usize) -> Result<ReducedPixelArt> {
        reduce(samples, width, height, self.block_size.get(), self.strategy)
    }

    pub fn reduce_frame(&self, frame: &ImageFrame) -> Result<ReducedPixelArt> {
        frame.extract_logical_pixels(self.block_size.get(), self.strategy)
    }

    /// Reduces every frame of an animation with the same block size.
    ///
    /// Stops at the first frame that does not tile, reporting its index.
    pub fn reduce_frames(&self, frames: &[ImageFrame]) -> Result<Vec<ReducedPixelArt>> {
        frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                self.reduce_frame(frame)
                    .with_context(|| format!("BlockReducer: failed to reduce frame {i}"))
            })
            .collect()
    }
}
