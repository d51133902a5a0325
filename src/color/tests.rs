use super::*;

#[test]
fn pack_places_alpha_in_high_byte() {
    assert_eq!(pack_argb(0x12, 0x34, 0x56, 0x78), 0x1234_5678);
    assert_eq!(opaque(1, 2, 3), 0xFF01_0203);
}

#[test]
fn channel_accessors_match_unpack() {
    let color = 0x80FF_1001;
    assert_eq!(unpack_argb(color), [0x80, 0xFF, 0x10, 0x01]);
    assert_eq!(alpha(color), 0x80);
    assert_eq!(red(color), 0xFF);
    assert_eq!(green(color), 0x10);
    assert_eq!(blue(color), 0x01);
}

#[test]
fn full_range_is_preserved() {
    for color in [0u32, u32::MAX, 0x8000_0000, 0x0000_0001, 0xDEAD_BEEF] {
        let [a, r, g, b] = unpack_argb(color);
        assert_eq!(pack_argb(a, r, g, b), color);
    }
}
