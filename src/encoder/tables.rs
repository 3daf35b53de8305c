//! Fixed lookup tables for versions 1-5.
//!
//! Index: [version - 1]. Capacities assume a single medium error-correction
//! profile and are never recomputed.

/// Bit capacity ceiling per version.
pub const CAPACITY_BITS: [usize; 5] = [152, 272, 440, 640, 864];

/// Alignment pattern center (row = col) per version; version 1 has none.
pub const ALIGNMENT_CENTERS: [Option<usize>; 5] = [None, Some(18), Some(22), Some(26), Some(30)];

/// Byte mode indicator (4 bits).
pub const MODE_BYTE: u32 = 0b0100;

/// Width of the mode indicator field.
pub const MODE_BITS: usize = 4;

/// Width of the character count field.
pub const COUNT_BITS: usize = 8;

/// Width of the terminator.
pub const TERMINATOR_BITS: usize = 4;

/// Longest payload the count field can describe.
pub const MAX_PAYLOAD_LEN: usize = (1 << COUNT_BITS) - 1;

/// Pad codewords, alternated after the terminator.
pub const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Constant format information, MSB first.
///
/// Written as-is for every version; it is not BCH-derived from the mask in use.
pub const FORMAT_INFO: u16 = 0b101_0100_0001_0010;

/// Number of format information bits.
pub const FORMAT_INFO_LEN: usize = 15;

/// Format information bit `i`, counting from the most significant bit.
pub fn format_bit(i: usize) -> bool {
    debug_assert!(i < FORMAT_INFO_LEN);
    (FORMAT_INFO >> (FORMAT_INFO_LEN - 1 - i)) & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bits_order() {
        let bits: Vec<u8> = (0..FORMAT_INFO_LEN).map(|i| format_bit(i) as u8).collect();
        assert_eq!(bits, vec![1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_capacities_are_whole_bytes() {
        assert!(CAPACITY_BITS.iter().all(|c| c % 8 == 0));
        assert!(CAPACITY_BITS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(MAX_PAYLOAD_LEN, 255);
    }
}
