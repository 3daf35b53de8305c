/// Bit stream construction for byte-mode payloads
use tracing::trace;

use super::tables::{
    COUNT_BITS, MAX_PAYLOAD_LEN, MODE_BITS, MODE_BYTE, PAD_BYTES, TERMINATOR_BITS,
};
use super::version::{OverflowPolicy, VersionSelector};
use crate::error::{QrError, Result};
use crate::models::Version;

/// Encoded payload bits together with the version chosen for them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<bool>,
    data_bits: usize,
    version: Version,
}

impl BitStream {
    /// All bits in placement order (header, data, terminator, padding)
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Total number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the stream holds no bits (never the case for encoder output)
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits before any padding: header + data + terminator
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Version selected for the unpadded length
    pub fn version(&self) -> Version {
        self.version
    }

    /// Pack the stream into codewords, MSB first. A partial last byte is zero-filled.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Turns a text payload into a padded bit stream
pub struct BitStreamEncoder;

impl BitStreamEncoder {
    /// Encode with the rejecting overflow policy
    pub fn encode(payload: &str) -> Result<BitStream> {
        Self::encode_with_policy(payload, OverflowPolicy::Reject)
    }

    /// Encode `payload`, resolving capacity overflow with `policy`.
    ///
    /// Each UTF-16 code unit contributes its low 8 bits, so anything outside
    /// Latin-1 is truncated.
    pub fn encode_with_policy(payload: &str, policy: OverflowPolicy) -> Result<BitStream> {
        let units: Vec<u16> = payload.encode_utf16().collect();
        if units.len() > MAX_PAYLOAD_LEN {
            return Err(QrError::PayloadTooLong {
                length: units.len(),
            });
        }

        let mut bits = Vec::with_capacity(Version::MAX.capacity_bits());
        push_bits(&mut bits, MODE_BYTE, MODE_BITS);
        push_bits(&mut bits, units.len() as u32, COUNT_BITS);
        for unit in &units {
            push_bits(&mut bits, u32::from(*unit & 0xFF), 8);
        }
        push_bits(&mut bits, 0, TERMINATOR_BITS);

        let data_bits = bits.len();
        let version = VersionSelector::select_with_policy(data_bits, policy)?;

        while bits.len() % 8 != 0 {
            bits.push(false);
        }

        // Pad up to the version's bit capacity (152 for version 1), not a
        // codeword count; every placed grid depends on this length.
        let capacity = version.capacity_bits();
        let pad_count = capacity.saturating_sub(bits.len()) / 8;
        for &pad in PAD_BYTES.iter().cycle().take(pad_count) {
            push_bits(&mut bits, u32::from(pad), 8);
        }

        trace!(
            chars = units.len(),
            data_bits,
            total_bits = bits.len(),
            version = version.number(),
            "encoded bit stream"
        );

        Ok(BitStream {
            bits,
            data_bits,
            version,
        })
    }

    /// Read a byte-mode segment back out of `bits`.
    ///
    /// Returns `None` if the mode indicator is not byte mode or the stream is
    /// shorter than its count field claims.
    pub fn decode_bytes(bits: &[bool]) -> Option<Vec<u8>> {
        let mut reader = bits.iter().copied();
        let mut take = |count: usize| -> Option<u32> {
            let mut value = 0u32;
            for _ in 0..count {
                value = (value << 1) | reader.next()? as u32;
            }
            Some(value)
        };

        if take(MODE_BITS)? != MODE_BYTE {
            return None;
        }
        let count = take(COUNT_BITS)? as usize;
        (0..count).map(|_| take(8).map(|b| b as u8)).collect()
    }
}

fn push_bits(bits: &mut Vec<bool>, value: u32, count: usize) {
    for i in (0..count).rev() {
        bits.push(((value >> i) & 1) != 0);
    }
}
