//! Bit-level stream primitives
//!
//! `BitWriter` and `BitReader` pack fixed-width unsigned integers MSB-first into
//! a byte stream. Bit order is continuous across byte boundaries; the writer
//! zero-pads only the final partial byte.
//!
//! # Example
//! ```
//! use beecode::codec::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write(0b101, 3).unwrap();
//! writer.write(0b11, 2).unwrap();
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read(3).unwrap(), 0b101);
//! assert_eq!(reader.read(2).unwrap(), 0b11);
//! ```

use crate::codec::CodecError;

/// Widest field either side of the stream accepts
///
/// Every wire field in this crate is at most 12 bits; 32 leaves headroom while
/// keeping the 64-bit accumulator overflow-free.
pub const MAX_FIELD_BITS: u32 = 32;

fn check_bit_count(bits: u32) -> Result<(), CodecError> {
    if bits == 0 || bits > MAX_FIELD_BITS {
        return Err(CodecError::InvalidBitCount(bits));
    }
    Ok(())
}

/// Accumulates fixed-width values into a packed byte stream
///
/// # Invariants
/// - `pending` is always < 8 between calls (complete bytes flush eagerly)
/// - `buffer` holds the `pending` lowest bits, MSB of the stream first
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    buffer: u64,
    pending: u32,
}

impl BitWriter {
    /// Create a writer with empty output
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` using exactly `bits` bits, MSB-first
    ///
    /// # Errors
    /// Returns `CodecError::InvalidBitCount` if `bits` is 0 or above
    /// [`MAX_FIELD_BITS`], and `CodecError::ValueOutOfRange` if `value`
    /// needs more than `bits` bits. Nothing is written on error.
    pub fn write(&mut self, value: u64, bits: u32) -> Result<(), CodecError> {
        check_bit_count(bits)?;
        if bits < u64::BITS && value >> bits != 0 {
            return Err(CodecError::ValueOutOfRange { value, bits });
        }

        self.buffer = (self.buffer << bits) | value;
        self.pending += bits;
        while self.pending >= 8 {
            let shift = self.pending - 8;
            self.bytes.push((self.buffer >> shift) as u8);
            self.pending -= 8;
            self.buffer &= (1 << shift) - 1;
        }
        Ok(())
    }

    /// Flush any partial byte (left-aligned, zero-padded) and return the stream
    ///
    /// Consumes the writer, so nothing can be appended after the final byte.
    #[must_use]
    pub fn finish(mut self) -> Vec<u8> {
        if self.pending > 0 {
            self.bytes.push((self.buffer << (8 - self.pending)) as u8);
        }
        self.bytes
    }
}

/// Single-pass cursor reading fixed-width values back out of a byte stream
///
/// Uses the same continuous MSB-first bit order as [`BitWriter`]. No seeking
/// or rewinding; a reader is discarded once its stream is exhausted.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    position: usize,
    buffer: u64,
    pending: u32,
}

impl<'a> BitReader<'a> {
    /// Create a reader over a byte stream
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            buffer: 0,
            pending: 0,
        }
    }

    /// Consume and return the next `bits` bits as an unsigned value
    ///
    /// # Errors
    /// Returns `CodecError::InvalidBitCount` for a bad width and
    /// `CodecError::EndOfStream` if the underlying bytes run out before
    /// `bits` bits are available.
    pub fn read(&mut self, bits: u32) -> Result<u64, CodecError> {
        check_bit_count(bits)?;

        while self.pending < bits {
            let Some(&byte) = self.data.get(self.position) else {
                return Err(CodecError::EndOfStream);
            };
            self.buffer = (self.buffer << 8) | u64::from(byte);
            self.pending += 8;
            self.position += 1;
        }

        let shift = self.pending - bits;
        let value = (self.buffer >> shift) & ((1 << bits) - 1);
        self.pending -= bits;
        self.buffer &= if shift == 0 { 0 } else { (1 << shift) - 1 };
        Ok(value)
    }
}
