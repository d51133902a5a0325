use std::num::NonZeroUsize;

/// Picks the top-left sample of every block.
///
/// Only one sample per block is read, so this is the cheapest strategy and
/// the exact inverse of nearest-neighbour upscaling.
pub fn reduce_first(
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

    for (y, dest_row) in dest
        .chunks_exact_mut(dest_width)
        .take(dest_height)
        .enumerate()
    {
        let src_row = &src[y * block_size * src_pitch..][..src_pitch];
        for (out, &sample) in dest_row
            .iter_mut()
            .zip(src_row.iter().step_by(block_size))
        {
            *out = sample;
        }
    }
}
