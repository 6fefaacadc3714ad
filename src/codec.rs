//! Integer and byte codecs over an [`Alphabet`].
//!
//! Integers are written big-endian, six bits per symbol. Byte payloads are
//! grouped three bytes to four symbols; a trailing group of one or two bytes
//! becomes two or three symbols, and the standard alphabet pads the output with
//! `=` to a multiple of four. Neither format carries a version marker: the
//! alphabet variant alone decides how text decodes.

use crate::alphabet::Alphabet;
use crate::error::DecodeError;

impl Alphabet {
    /// Largest value that fits into `width` symbols.
    pub fn max_value(width: usize) -> u64 {
        if width >= 11 {
            return u64::MAX;
        }
        (1u64 << (6 * width)) - 1
    }

    /// Encodes `value` as exactly `width` symbols.
    ///
    /// Only the low `6 * width` bits are kept; use
    /// [`encode_long_saturating`](Self::encode_long_saturating) to clamp instead.
    pub fn encode_long(&self, value: u64, width: usize) -> String {
        let mut out = vec![0u8; width];
        self.encode_long_into(value, &mut out);
        // every byte written is an ASCII symbol
        out.into_iter().map(char::from).collect()
    }

    /// Like [`encode_long`](Self::encode_long), but values that do not fit become
    /// `width` copies of the highest symbol.
    pub fn encode_long_saturating(&self, value: u64, width: usize) -> String {
        if value >= Self::max_value(width) {
            return char::from(self.max_symbol()).to_string().repeat(width);
        }
        self.encode_long(value, width)
    }

    /// Writes `value` into `out`, one symbol per byte, least significant last.
    pub fn encode_long_into(&self, mut value: u64, out: &mut [u8]) {
        for slot in out.iter_mut().rev() {
            *slot = self.encode_symbol((value & 0x3f) as u8);
            value >>= 6;
        }
    }

    /// Decodes an integer, ignoring trailing padding.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidSymbol`] on the first byte outside the alphabet.
    pub fn try_decode_long(&self, text: &str) -> Result<u64, DecodeError> {
        let symbols = self.strip_padding(text.as_bytes());
        let mut value = 0u64;
        for (position, &byte) in symbols.iter().enumerate() {
            let rank = self
                .decode_symbol(byte)
                .ok_or_else(|| DecodeError::invalid_symbol(byte, position))?;
            value = (value << 6) | u64::from(rank);
        }
        Ok(value)
    }

    /// Decodes an integer, returning 0 if the text is corrupt.
    pub fn decode_long(&self, text: &str) -> u64 {
        self.try_decode_long(text).unwrap_or_else(|e| {
            tracing::debug!(input = text, error = %e, "failed to decode integer");
            0
        })
    }

    /// Encodes a byte payload.
    pub fn encode_bytes(&self, data: &[u8]) -> String {
        let mut out = Vec::with_capacity(data.len().div_ceil(3) * 4);
        let chunks = data.chunks_exact(3);
        let tail = chunks.remainder();

        for chunk in chunks {
            let group =
                (u64::from(chunk[0]) << 16) | (u64::from(chunk[1]) << 8) | u64::from(chunk[2]);
            self.push_group(group, 4, &mut out);
        }

        match *tail {
            [a, b] => self.push_group((u64::from(a) << 16) | (u64::from(b) << 8), 3, &mut out),
            [a] => self.push_group(u64::from(a) << 16, 2, &mut out),
            _ => {}
        }

        if let Some(pad) = self.padding() {
            while out.len() % 4 != 0 {
                out.push(pad);
            }
        }

        out.into_iter().map(char::from).collect()
    }

    /// The first `length` symbols of [`encode_bytes`](Self::encode_bytes).
    ///
    /// Shorter output is returned if the full encoding is shorter than `length`.
    pub fn encode_prefix(&self, data: &[u8], length: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(length);
        let mut chunks = data.chunks(3);
        while out.len() < length {
            let Some(chunk) = chunks.next() else {
                break;
            };
            let (group, symbols) = match *chunk {
                [a, b, c] => ((u64::from(a) << 16) | (u64::from(b) << 8) | u64::from(c), 4),
                [a, b] => ((u64::from(a) << 16) | (u64::from(b) << 8), 3),
                [a] => (u64::from(a) << 16, 2),
                _ => break,
            };
            self.push_group(group, symbols, &mut out);
        }
        if let Some(pad) = self.padding() {
            while out.len() % 4 != 0 && out.len() < length {
                out.push(pad);
            }
        }
        out.truncate(length);
        out
    }

    /// Decodes a byte payload, the exact inverse of [`encode_bytes`](Self::encode_bytes).
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InvalidSymbol`] for bytes outside the alphabet (including
    ///   padding in the middle of the text)
    /// - [`DecodeError::InvalidLength`] if a single symbol is left over at the end
    pub fn try_decode_bytes(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        let symbols = self.strip_padding(text.as_bytes());
        let mut out = Vec::with_capacity(symbols.len() / 4 * 3 + 2);
        for (index, group) in symbols.chunks(4).enumerate() {
            let mut value = 0u64;
            for (offset, &byte) in group.iter().enumerate() {
                let rank = self
                    .decode_symbol(byte)
                    .ok_or_else(|| DecodeError::invalid_symbol(byte, index * 4 + offset))?;
                value = (value << 6) | u64::from(rank);
            }
            if group.len() == 1 {
                return Err(DecodeError::InvalidLength(symbols.len()));
            }
            // left-align partial groups to 24 bits
            value <<= 6 * (4 - group.len());
            let bytes = [(value >> 16) as u8, (value >> 8) as u8, value as u8];
            out.extend_from_slice(&bytes[..group.len() - 1]);
        }
        Ok(out)
    }

    /// Decodes a byte payload, returning an empty vector if the text is corrupt.
    ///
    /// An empty result for non-empty input means the decode failed.
    pub fn decode_bytes(&self, text: &str) -> Vec<u8> {
        self.try_decode_bytes(text).unwrap_or_else(|e| {
            tracing::debug!(input = text, error = %e, "failed to decode bytes");
            Vec::new()
        })
    }

    /// Encodes the UTF-8 bytes of a string.
    pub fn encode_str(&self, text: &str) -> String {
        self.encode_bytes(text.as_bytes())
    }

    /// Decodes text produced by [`encode_str`](Self::encode_str).
    ///
    /// Returns `None` if the payload is corrupt or not valid UTF-8.
    pub fn decode_str(&self, text: &str) -> Option<String> {
        let bytes = self.try_decode_bytes(text).ok()?;
        String::from_utf8(bytes).ok()
    }

    fn push_group(&self, group: u64, symbols: usize, out: &mut Vec<u8>) {
        let mut encoded = [0u8; 4];
        self.encode_long_into(group, &mut encoded);
        out.extend_from_slice(&encoded[..symbols]);
    }

    fn strip_padding<'a>(&self, mut symbols: &'a [u8]) -> &'a [u8] {
        if let Some(pad) = self.padding() {
            while let [rest @ .., last] = symbols {
                if *last != pad {
                    break;
                }
                symbols = rest;
            }
        }
        symbols
    }
}
