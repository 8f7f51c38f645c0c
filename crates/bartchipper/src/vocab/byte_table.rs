//! # Byte/Char Mapping Table
//!
//! Byte-level BPE vocabularies are stored as text; so every byte value needs a
//! printable stand-in character. The printable ISO/IEC 8859-1 ranges
//! ``[0x21-0x7E]``, ``[0xA1-0xAC]``, ``[0xAE-0xFF]`` map to themselves; every
//! other byte is assigned the next code point from ``U+0100`` in byte order.

use core::fmt::Debug;

use once_cell::sync::OnceCell;

use crate::types::BCHashMap;

/// The byte substituted for characters with no byte mapping.
pub const UNDECODABLE_BYTE: u8 = b'?';

/// Is this byte printable, and so mapped to itself?
#[inline(always)]
fn is_printable_byte(b: u8) -> bool {
    matches!(b, 0x21..=0x7E | 0xA1..=0xAC | 0xAE..=0xFF)
}

/// ``0..=255`` Byte/Char Bijection Table.
///
/// This will always have 256 entries, one for each byte value.
#[derive(Clone, PartialEq)]
pub struct ByteCharTable {
    /// Table mapping from byte ordinal (position) to char.
    byte_chars: [char; 256],

    /// Hash map from char to byte ordinal value.
    char_bytes: BCHashMap<char, u8>,
}

impl Debug for ByteCharTable {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteCharTable")
            .field("len", &self.char_bytes.len())
            .finish()
    }
}

impl Default for ByteCharTable {
    fn default() -> Self {
        let mut byte_chars = ['\0'; 256];
        let mut n = 0u32;
        for b in 0..=255u8 {
            byte_chars[b as usize] = if is_printable_byte(b) {
                char::from(b)
            } else {
                let c = char::from_u32(256 + n).unwrap_or(char::REPLACEMENT_CHARACTER);
                n += 1;
                c
            };
        }
        debug_assert_eq!(n, 68);

        let char_bytes: BCHashMap<char, u8> = byte_chars
            .iter()
            .enumerate()
            .map(|(b, &c)| (c, b as u8))
            .collect();
        debug_assert_eq!(char_bytes.len(), 256);

        Self {
            byte_chars,
            char_bytes,
        }
    }
}

impl ByteCharTable {
    /// Get the process-wide shared table.
    ///
    /// The table is a pure function of the byte space; it is built once.
    pub fn shared() -> &'static ByteCharTable {
        static TABLE: OnceCell<ByteCharTable> = OnceCell::new();
        TABLE.get_or_init(ByteCharTable::default)
    }

    /// Get the byte-ord => char mapping table.
    pub fn byte_chars(&self) -> &[char; 256] {
        &self.byte_chars
    }

    /// Get the char corresponding to a given byte.
    ///
    /// ## Arguments
    /// * `byte` - The byte value to look up.
    ///
    /// ## Returns
    /// The char standing in for the byte.
    #[inline(always)]
    pub fn get_char(
        &self,
        byte: u8,
    ) -> char {
        self.byte_chars[byte as usize]
    }

    /// Get the byte corresponding to a given char, if any.
    ///
    /// ## Arguments
    /// * `c` - The char to look up.
    ///
    /// ## Returns
    /// An `Option` containing the byte value if it exists in the mapping.
    #[inline(always)]
    pub fn get_byte(
        &self,
        c: char,
    ) -> Option<u8> {
        self.char_bytes.get(&c).copied()
    }

    /// Append the stand-in chars for `bytes` to a target string.
    ///
    /// ## Arguments
    /// * `bytes` - The slice of bytes to translate and append.
    /// * `buf` - The target string buffer.
    pub fn append_chars(
        &self,
        bytes: &[u8],
        buf: &mut String,
    ) {
        buf.extend(bytes.iter().map(|&b| self.get_char(b)));
    }

    /// Translate bytes into their stand-in string.
    pub fn encode_bytes(
        &self,
        bytes: &[u8],
    ) -> String {
        let mut buf = String::with_capacity(bytes.len() * 2);
        self.append_chars(bytes, &mut buf);
        buf
    }

    /// Translate a stand-in string back to bytes.
    ///
    /// Chars without a byte mapping become [`UNDECODABLE_BYTE`].
    pub fn decode_str(
        &self,
        text: &str,
    ) -> Vec<u8> {
        text.chars()
            .map(|c| self.get_byte(c).unwrap_or(UNDECODABLE_BYTE))
            .collect()
    }
}
