//! Bit-field decoding of identicon codes
//!
//! Layout, least significant bit first:
//!
//! | bits    | field                              |
//! |---------|------------------------------------|
//! | 0..2    | center selector (into center set)  |
//! | 2       | center invert                      |
//! | 3..7    | corner patch type                  |
//! | 7       | corner invert                      |
//! | 8..10   | corner base rotation               |
//! | 10..14  | side patch type                    |
//! | 14      | side invert                        |
//! | 15..17  | side base rotation                 |
//! | 16..21  | blue (5 bits)                      |
//! | 21..26  | green (5 bits)                     |
//! | 26..31  | red (5 bits)                       |
//!
//! Bit 16 is shared by the side rotation and the blue channel. Bits above 30
//! are ignored.

use bitvec::field::BitField;
use bitvec::prelude::*;
use image::Rgb;
use std::ops::Range;

use crate::geometry::patches::PatchSet;

const CENTER_SELECTOR: Range<usize> = 0..2;
const CENTER_INVERT: usize = 2;
const CORNER_TYPE: Range<usize> = 3..7;
const CORNER_INVERT: usize = 7;
const CORNER_ROTATION: Range<usize> = 8..10;
const SIDE_TYPE: Range<usize> = 10..14;
const SIDE_INVERT: usize = 14;
const SIDE_ROTATION: Range<usize> = 15..17;
const BLUE: Range<usize> = 16..21;
const GREEN: Range<usize> = 21..26;
const RED: Range<usize> = 26..31;

/// Left shift that widens a 5-bit channel to the 0..=255 range
const CHANNEL_SHIFT: u8 = 3;

/// Background color shared by every identicon
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Placement parameters for one family of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatchSpec {
    /// Index into the patch table
    pub patch: usize,
    /// Swap foreground and background colors
    pub invert: bool,
    /// Base rotation in quarter turns (0..=3)
    pub rotation: u8,
}

/// Every drawing decision derived from a code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedIcon {
    /// Center cell; rotation is always 0
    pub center: PatchSpec,
    /// Shared by the four corner cells
    pub corner: PatchSpec,
    /// Shared by the four side cells
    pub side: PatchSpec,
    /// Polygon color before inversion
    pub foreground: Rgb<u8>,
    /// Cell color before inversion
    pub background: Rgb<u8>,
}

/// Decode a code against a patch set's center subset
///
/// Pure and total: every `u64` yields an icon.
pub fn decode_with(code: u64, patch_set: &PatchSet) -> DecodedIcon {
    let bits = code.view_bits::<Lsb0>();

    let center = PatchSpec {
        patch: patch_set.center_patch(usize::from(field(bits, CENTER_SELECTOR))),
        invert: flag(bits, CENTER_INVERT),
        rotation: 0,
    };
    let corner = PatchSpec {
        patch: usize::from(field(bits, CORNER_TYPE)),
        invert: flag(bits, CORNER_INVERT),
        rotation: field(bits, CORNER_ROTATION),
    };
    let side = PatchSpec {
        patch: usize::from(field(bits, SIDE_TYPE)),
        invert: flag(bits, SIDE_INVERT),
        rotation: field(bits, SIDE_ROTATION),
    };

    let foreground = Rgb([
        field(bits, RED) << CHANNEL_SHIFT,
        field(bits, GREEN) << CHANNEL_SHIFT,
        field(bits, BLUE) << CHANNEL_SHIFT,
    ]);

    DecodedIcon {
        center,
        corner,
        side,
        foreground,
        background: BACKGROUND,
    }
}

fn field(bits: &BitSlice<u64, Lsb0>, range: Range<usize>) -> u8 {
    bits.get(range).map_or(0, BitField::load_le::<u8>)
}

fn flag(bits: &BitSlice<u64, Lsb0>, index: usize) -> bool {
    bits.get(index).as_deref() == Some(&true)
}
