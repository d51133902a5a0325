#![allow(dead_code)]

use pixelart_reduce::{ImageFrame, color::pack_argb};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;

/// Logical sprite plus the factor it was blown up by.
pub struct TestSprite {
    pub grid: Vec<u32>,
    pub width: usize,
    pub height: usize,
    pub factor: usize,
}

impl TestSprite {
    /// A sprite drawn from a small palette, the way real pixel art is.
    pub fn random(seed: u64, width: usize, height: usize, factor: usize, palette: usize) -> Self {
        let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
        let palette: Vec<u32> = (0..palette)
            .map(|_| pack_argb(255, rng.random(), rng.random(), rng.random()))
            .collect();
        let grid = (0..width * height)
            .map(|_| palette[rng.random_range(0..palette.len())])
            .collect();

        Self {
            grid,
            width,
            height,
            factor,
        }
    }

    pub fn upscaled(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.grid.len() * self.factor * self.factor);
        for row in self.grid.chunks_exact(self.width) {
            let scaled_row: Vec<u32> = row
                .iter()
                .flat_map(|&color| std::iter::repeat_n(color, self.factor))
                .collect();
            for _ in 0..self.factor {
                out.extend_from_slice(&scaled_row);
            }
        }
        out
    }

    pub fn frame(&self) -> ImageFrame {
        ImageFrame::new(
            self.upscaled(),
            self.width * self.factor,
            self.height * self.factor,
        )
        .expect("sprite dimensions are consistent")
    }
}
