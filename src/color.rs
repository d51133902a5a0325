//! Helpers for packed `0xAARRGGBB` colors.
//!
//! Every sample handled by this crate is a `u32` holding four 8-bit channels,
//! alpha in the most significant byte followed by red, green and blue.

#[cfg(test)]
mod tests;

/// Packs four 8-bit channels into a single `0xAARRGGBB` sample.
#[must_use]
#[inline(always)]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    u32::from_be_bytes([a, r, g, b])
}

/// Splits a packed sample into its `[a, r, g, b]` channels.
#[must_use]
#[inline(always)]
pub const fn unpack_argb(color: u32) -> [u8; 4] {
    color.to_be_bytes()
}

#[must_use]
#[inline(always)]
pub const fn alpha(color: u32) -> u8 {
    (color >> 24) as u8
}

#[must_use]
#[inline(always)]
pub const fn red(color: u32) -> u8 {
    (color >> 16) as u8
}

#[must_use]
#[inline(always)]
pub const fn green(color: u32) -> u8 {
    (color >> 8) as u8
}

#[must_use]
#[inline(always)]
pub const fn blue(color: u32) -> u8 {
    color as u8
}

/// Packs an opaque color.
#[must_use]
#[inline(always)]
pub const fn opaque(r: u8, g: u8, b: u8) -> u32 {
    pack_argb(u8::MAX, r, g, b)
}
