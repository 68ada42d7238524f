//! Quadrant glyph table indexed by a 4-bit membership mask
//!
//! Bit order: bit3 = top-left, bit2 = top-right, bit1 = bottom-left,
//! bit0 = bottom-right. A set bit marks a quadrant drawn in the foreground.

/// Full block `█`
pub const FULL_BLOCK: char = '\u{2588}';

/// Glyph for every mask value. Entries 0 and 15 are never looked up directly,
/// see [`glyph_for_mask`].
pub const QUADRANT_GLYPHS: [char; 16] = [
    ' ',        // 0000
    '\u{2597}', // 0001 ▗
    '\u{2596}', // 0010 ▖
    '\u{2584}', // 0011 ▄
    '\u{259D}', // 0100 ▝
    '\u{2590}', // 0101 ▐
    '\u{259E}', // 0110 ▞
    '\u{259F}', // 0111 ▟
    '\u{2598}', // 1000 ▘
    '\u{259A}', // 1001 ▚
    '\u{258C}', // 1010 ▌
    '\u{2599}', // 1011 ▙
    '\u{2580}', // 1100 ▀
    '\u{259C}', // 1101 ▜
    '\u{259B}', // 1110 ▛
    FULL_BLOCK, // 1111
];

pub const MASK_TL: u8 = 0b1000;
pub const MASK_TR: u8 = 0b0100;
pub const MASK_BL: u8 = 0b0010;
pub const MASK_BR: u8 = 0b0001;
pub const MASK_ALL: u8 = 0b1111;

/// True for the all-set and all-clear masks, which render as one solid color.
pub fn is_uniform_mask(mask: u8) -> bool {
    let mask = mask & MASK_ALL;
    mask == 0 || mask == MASK_ALL
}

/// Map a membership mask to its glyph. Only the low four bits are used.
pub fn glyph_for_mask(mask: u8) -> char {
    let mask = mask & MASK_ALL;
    if is_uniform_mask(mask) {
        return FULL_BLOCK;
    }
    QUADRANT_GLYPHS[mask as usize]
}
