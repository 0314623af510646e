//! Variable-length integer codec over the URL-safe 64-symbol alphabet.
//!
//! Each output character carries five payload bits plus a continuation flag (`0x20`). Chunks are
//! written least significant first, and the last chunk of a value has the flag cleared. Signed
//! values are zig-zag mapped first: bit 0 holds the sign and the remaining bits the magnitude.

use crate::error::{PolylineError, Result};

/// The output alphabet, indexed by six-bit symbol value.
pub const ENCODING_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Inverse of [`ENCODING_TABLE`] over all byte values; `-1` marks bytes outside the alphabet.
const DECODING_TABLE: [i8; 256] = {
    let mut table = [-1_i8; 256];
    let mut i = 0;
    while i < ENCODING_TABLE.len() {
        table[ENCODING_TABLE[i] as usize] = i as i8;
        i += 1;
    }
    table
};

const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1F;
const CONTINUATION: u64 = 0x20;

/// Appends the minimal-length varint encoding of `value` to `out`.
///
/// ```
/// let mut out = String::new();
/// flexpolyline::varint::encode_unsigned(1, &mut out);
/// flexpolyline::varint::encode_unsigned(37, &mut out);
/// assert_eq!(out, "BlB");
/// ```
pub fn encode_unsigned(mut value: u64, out: &mut String) {
    while value > CHUNK_MASK {
        let symbol = (value & CHUNK_MASK) | CONTINUATION;
        out.push(ENCODING_TABLE[symbol as usize] as char);
        value >>= CHUNK_BITS;
    }
    out.push(ENCODING_TABLE[value as usize] as char);
}

/// Appends the zig-zag varint encoding of `value` to `out`.
///
/// ```
/// let mut out = String::new();
/// flexpolyline::varint::encode_signed(-17998321, &mut out);
/// assert_eq!(out, "h_wqiB");
/// ```
pub fn encode_signed(value: i64, out: &mut String) {
    // make room on lowest bit
    let mut encoded = (value << 1) as u64;

    // invert bits if the value is negative
    if value < 0 {
        encoded = !encoded;
    }

    encode_unsigned(encoded, out);
}

/// A cursor reading varints from an encoded byte slice.
#[derive(Debug, Clone)]
pub struct VarintReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> VarintReader<'a> {
    /// Creates a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// The number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// The number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Reads one unsigned varint.
    ///
    /// Fails with [`PolylineError::InvalidEncoding`] on a byte outside the alphabet, when the input
    /// ends before a terminating character, or when the value would not fit in 64 bits.
    pub fn read_unsigned(&mut self) -> Result<u64> {
        let mut result: u64 = 0;
        let mut shift = 0;

        while let Some(&byte) = self.buf.get(self.pos) {
            let value = DECODING_TABLE[byte as usize];
            if value < 0 {
                return Err(PolylineError::invalid_encoding(format!(
                    "unexpected byte {byte:#04x} at offset {}",
                    self.pos
                )));
            }
            self.pos += 1;

            let value = value as u64;
            result |= (value & CHUNK_MASK) << shift;

            if (value & CONTINUATION) == 0 {
                return Ok(result);
            }

            shift += CHUNK_BITS;
            if shift >= u64::BITS {
                return Err(PolylineError::invalid_encoding("varint overflows 64 bits"));
            }
        }

        Err(PolylineError::invalid_encoding("unterminated varint"))
    }

    /// Reads one zig-zag encoded signed varint.
    pub fn read_signed(&mut self) -> Result<i64> {
        let mut value = self.read_unsigned()?;
        let negative = (value & 1) != 0;
        value >>= 1;
        if negative {
            value = !value;
        }
        Ok(value as i64)
    }
}
