#![forbid(unsafe_code)]
//! Encoding, varint, and cursor utilities shared by the pack codec.

pub mod ord {
    //! Fixed-width big-endian integers.

    use core::convert::TryInto;

    /// Encoded width of a `u64`.
    pub const U64_LEN: usize = core::mem::size_of::<u64>();

    /// Appends `v` in big-endian byte order.
    pub fn push_u64_be(dst: &mut Vec<u8>, v: u64) {
        dst.extend_from_slice(&v.to_be_bytes());
    }

    /// Decodes a u64 from big-endian byte order.
    pub fn get_u64_be(src: &[u8]) -> u64 {
        let head = src
            .get(..U64_LEN)
            .unwrap_or_else(|| panic!("u64 source shorter than 8 bytes (have {})", src.len()));
        let bytes: [u8; U64_LEN] = head.try_into().unwrap();
        u64::from_be_bytes(bytes)
    }
}

pub mod var {
    //! Unsigned LEB128 varints.

    /// Longest encoding of a u64.
    pub const MAX_VARINT_LEN: usize = 10;

    /// Encodes a u64 as an unsigned varint.
    pub fn encode_u64(mut v: u64, out: &mut Vec<u8>) {
        loop {
            let byte = (v & 0x7f) as u8;
            v >>= 7;
            if v == 0 {
                out.push(byte);
                break;
            } else {
                out.push(byte | 0x80);
            }
        }
    }

    /// Decodes a u64 varint, returning `None` when the input is truncated or
    /// encodes more than 64 bits. `off` is only advanced on success.
    pub fn try_decode_u64(src: &[u8], off: &mut usize) -> Option<u64> {
        let mut result = 0u64;
        let mut shift = 0u32;
        let mut idx = *off;
        for i in 0..MAX_VARINT_LEN {
            let byte = *src.get(idx)?;
            idx += 1;
            let payload = (byte & 0x7f) as u64;
            if i == MAX_VARINT_LEN - 1 && payload > 1 {
                return None;
            }
            result |= payload << shift;
            if (byte & 0x80) == 0 {
                *off = idx;
                return Some(result);
            }
            shift += 7;
        }
        None
    }
}

pub mod buf {
    //! A slice-backed cursor for parsing untrusted bytes.

    use core::fmt;

    use super::{ord, var};
    use crate::types::{Result, UidError};

    /// A cursor for reading bytes from a slice with offset tracking.
    pub struct Cursor<'a> {
        /// The underlying byte slice.
        pub buf: &'a [u8],
        /// Current read offset.
        pub off: usize,
    }

    impl<'a> Cursor<'a> {
        /// Creates a new cursor starting at offset 0.
        pub fn new(buf: &'a [u8]) -> Self {
            Self { buf, off: 0 }
        }

        /// Takes the next `n` bytes, failing with `what` if the buffer is short.
        pub fn take(&mut self, n: usize, what: &'static str) -> Result<&'a [u8]> {
            let end = self.off.checked_add(n).ok_or(UidError::Corruption(what))?;
            if end > self.buf.len() {
                return Err(UidError::Corruption(what));
            }
            let slice = &self.buf[self.off..end];
            self.off = end;
            Ok(slice)
        }

        /// Reads a big-endian u64.
        pub fn u64_be(&mut self, what: &'static str) -> Result<u64> {
            let bytes = self.take(ord::U64_LEN, what)?;
            Ok(ord::get_u64_be(bytes))
        }

        /// Reads an unsigned varint.
        pub fn varint(&mut self, what: &'static str) -> Result<u64> {
            var::try_decode_u64(self.buf, &mut self.off).ok_or(UidError::Corruption(what))
        }

        /// Returns the number of bytes remaining in the buffer.
        pub fn remaining(&self) -> usize {
            self.buf.len().saturating_sub(self.off)
        }
    }

    impl<'a> fmt::Debug for Cursor<'a> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Cursor")
                .field("off", &self.off)
                .field("remaining", &self.remaining())
                .finish()
        }
    }
}
