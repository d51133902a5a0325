
use std::{
    collections::{HashMap, hash_map::Entry},
    num::NonZeroUsize,
};

use smallvec::SmallVec;

/// An 8x8 block of distinct colors fits without touching the heap.
const INLINE_COLORS: usize = 64;

/// Distinct colors looked up by linear scan before the tally builds an index.
const LINEAR_SCAN_LIMIT: usize = 32;

/// Replaces every block with its most common color.
///
/// When several colors share the highest count, the one that appears first
/// in the block (scanning rows top to bottom, each row left to right) wins.
///
/// One frequency table is reused for every block and dropped on return.
///
/// # Parameters
/// - `dest`: Destination buffer, written densely with `dest_width` samples per row
/// - `src`: Source raster
/// - `src_pitch`: Number of samples per row in the source buffer
/// - `block_size`: Side length of one block in source samples
/// - `dest_width`: Number of blocks per row
/// - `dest_height`: Number of block rows
pub fn reduce_most_frequent(
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

    assert!(src_pitch >= dest_width * block_size);
    assert!(src.len() >= src_pitch * block_size * dest_height);
    assert!(dest.len() >= dest_width * dest_height);

    let mut tally = ColorTally::default();

    for (by, dest_row) in dest
        .chunks_exact_mut(dest_width)
        .take(dest_height)
        .enumerate()
    {
        let band = &src[by * block_size * src_pitch..][..block_size * src_pitch];
        for (bx, out) in dest_row.iter_mut().enumerate() {
            tally.clear();
            for row in band.chunks_exact(src_pitch) {
                for &color in &row[bx * block_size..][..block_size] {
                    tally.record(color);
                }
            }
            // A block always holds at least one sample.
            *out = tally.mode().unwrap_or_default();
        }
    }
}

/// Occurrence counts of the colors seen in one block.
///
/// Entries are kept in order of first appearance, which is what makes the
/// tie break in [`ColorTally::mode`] pick the earliest color.
#[derive(Debug, Default)]
struct ColorTally {
    entries: SmallVec<[(u32, usize); INLINE_COLORS]>,
    /// Position of each color in `entries`.
    /// Empty until the block holds `LINEAR_SCAN_LIMIT` distinct colors.
    index: HashMap<u32, usize>,
}

impl ColorTally {
    fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    fn record(&mut self, color: u32) {
        if self.entries.len() < LINEAR_SCAN_LIMIT {
            if let Some((_, count)) = self.entries.iter_mut().find(|(c, _)| *c == color) {
                *count += 1;
                return;
            }

            self.entries.push((color, 1));
            if self.entries.len() == LINEAR_SCAN_LIMIT {
                self.index.extend(
                    self.entries
                        .iter()
                        .enumerate()
                        .map(|(pos, &(color, _))| (color, pos)),
                );
            }
            return;
        }

        match self.index.entry(color) {
            Entry::Occupied(pos) => self.entries[*pos.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push((color, 1));
            }
        }
    }

    /// The color with the highest count, earliest first appearance on ties.
    fn mode(&self) -> Option<u32> {
        let mut best: Option<(u32, usize)> = None;
        for &(color, count) in &self.entries {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((color, count));
            }
        }
        best.map(|(color, _)| color)
    }
}
