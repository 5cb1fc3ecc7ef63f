//! Sextant glyph table.
//!
//! Each terminal cell is backed by a 2x3 block of subpixels. Bit
//! `dy * 2 + dx` of a mask is set when the subpixel at column `dx`, row
//! `dy` is lit, so masks run from 0 (empty) to 63 (full).

/// Glyph for every 6-bit subpixel mask.
///
/// Unicode has no sextant for the two half blocks and the full block, so
/// masks 21, 42 and 63 borrow the older block elements.
pub const SEXTANTS: [char; 64] = [
    ' ', '🬀', '🬁', '🬂', '🬃', '🬄', '🬅', '🬆',
    '🬇', '🬈', '🬉', '🬊', '🬋', '🬌', '🬍', '🬎',
    '🬏', '🬐', '🬑', '🬒', '🬓', '▌', '🬔', '🬕',
    '🬖', '🬗', '🬘', '🬙', '🬚', '🬛', '🬜', '🬝',
    '🬞', '🬟', '🬠', '🬡', '🬢', '🬣', '🬤', '🬥',
    '🬦', '🬧', '▐', '🬨', '🬩', '🬪', '🬫', '🬬',
    '🬭', '🬮', '🬯', '🬰', '🬱', '🬲', '🬳', '🬴',
    '🬵', '🬶', '🬷', '🬸', '🬹', '🬺', '🬻', '█',
];

/// Glyph for a lit-subpixel mask. Bits above the sixth are ignored.
pub fn glyph_for_mask(mask: u8) -> char {
    SEXTANTS[(mask & 0x3f) as usize]
}
