use encoding_rs::UTF_8;

use crate::common::{
    bit_utils::BitStream,
    error::{SymbolError, SymbolResult},
    metadata::{ECLevel, Version},
};

// Encoder
//------------------------------------------------------------------------------

// Byte mode is the only supported mode.
pub const MODE_BYTE: u8 = 0b0010;
pub const MODE_BITS: usize = 4;
pub const LENGTH_FIELD_BITS: usize = 8;

// Pad byte 0xEC; padding draws one bit at a time from this pattern.
const PADDING_PATTERN: u8 = 0b1110_1100;

/// Builds the byte mode bitstream: mode indicator, 8-bit length field,
/// payload bytes, then padding bits until the stream reaches `capacity`.
/// The stream may exceed `capacity` when the data alone does; no error is
/// raised for oversized data here.
pub fn encode(data: &[u8], capacity: usize) -> SymbolResult<BitStream> {
    if UTF_8.decode_without_bom_handling_and_without_replacement(data).is_none() {
        return Err(SymbolError::InvalidUtf8Sequence);
    }

    debug_assert!(
        data.len() < 1 << LENGTH_FIELD_BITS,
        "Byte count exceeds the length field: {}",
        data.len()
    );

    let mut bs = BitStream::new(capacity);
    bs.push_bits(MODE_BYTE, MODE_BITS);
    bs.push_bits(data.len() as u8, LENGTH_FIELD_BITS);
    for &b in data {
        bs.push_bits(b, 8);
    }
    while bs.len() < capacity {
        bs.push(padding_bit(bs.len()));
    }
    Ok(bs)
}

/// Selects the padding bit appended to a stream of `len` bits: the bit of
/// the pad byte at offset `r - 1`, where `r` is the distance to the next
/// byte boundary, or zero on a byte boundary.
pub fn padding_bit(len: usize) -> bool {
    let r = (8 - (len & 7)) & 7;
    if r == 0 {
        return false;
    }
    (PADDING_PATTERN >> (8 - r)) & 1 == 1
}

// Version selection
//------------------------------------------------------------------------------

/// Finds the smallest version 1-40 whose projected capacity holds the mode
/// indicator, length field and payload bits.
pub fn fit_version(data: &[u8], ecl: ECLevel) -> SymbolResult<Version> {
    let required = MODE_BITS + LENGTH_FIELD_BITS + (data.len() << 3);
    for v in 1..=40 {
        let ver = Version::new(v);
        if required <= ver.projected_bit_capacity(ecl) {
            return Ok(ver);
        }
    }
    Err(SymbolError::UnsupportedVersion)
}
