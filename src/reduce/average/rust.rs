use std::num::NonZeroUsize;

use super::ChannelSums;

pub(super) fn reduce_average(
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

    let count = (block_size * block_size) as u64;

    for (by, dest_row) in dest
        .chunks_exact_mut(dest_width)
        .take(dest_height)
        .enumerate()
    {
        let band = &src[by * block_size * src_pitch..][..block_size * src_pitch];
        for (bx, out) in dest_row.iter_mut().enumerate() {
            let mut sums = ChannelSums::default();
            for row in band.chunks_exact(src_pitch) {
                sums.add_row(&row[bx * block_size..][..block_size]);
            }
            *out = sums.mean(count);
        }
    }
}
